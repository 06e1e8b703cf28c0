use serde::de::DeserializeOwned;

use crate::RelayError;

pub type Value = serde_json::Value;

pub trait TryFromValue: Sized {
    fn try_from_value(value: Value) -> Result<Self, RelayError>;
}

impl<T> TryFromValue for T
where
    T: DeserializeOwned,
{
    fn try_from_value(value: Value) -> Result<Self, RelayError> {
        Ok(serde_json::from_value(value)?)
    }
}
