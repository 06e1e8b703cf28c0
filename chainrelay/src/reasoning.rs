//! Detection of ReAct scratch-work in chain outputs.

/// Markers that only appear in an agent's intermediate reasoning.
pub const REASONING_PATTERNS: [&str; 6] = [
    "Thought:",
    "Action:",
    "Action Input:",
    "Justification:",
    "Observation:",
    "Do I need to use a tool?",
];

/// Returns true when `text` contains any of [`REASONING_PATTERNS`].
///
/// Matching is a case-sensitive substring test anywhere in the text.
pub fn is_agent_reasoning(text: &str) -> bool {
    REASONING_PATTERNS
        .iter()
        .any(|pattern| text.contains(pattern))
}

/// The default marker set, optionally extended with deployment specific
/// markers. The defaults are always checked first and cannot be removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReasoningFilter {
    extra: Vec<String>,
}

impl Default for ReasoningFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReasoningFilter {
    pub fn new() -> Self {
        Self { extra: Vec::new() }
    }

    pub fn with_patterns<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patterns: Vec<String> = Vec::new();
        for pattern in extra.into_iter().map(Into::into) {
            if pattern.trim().is_empty()
                || REASONING_PATTERNS.contains(&pattern.as_str())
                || patterns.contains(&pattern)
            {
                continue;
            }
            patterns.push(pattern);
        }
        Self { extra: patterns }
    }

    /// Every marker in match order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        REASONING_PATTERNS
            .iter()
            .copied()
            .chain(self.extra.iter().map(String::as_str))
    }

    /// First marker found in `text`, if any.
    pub fn matched_pattern(&self, text: &str) -> Option<&str> {
        self.patterns().find(|pattern| text.contains(pattern))
    }

    pub fn is_reasoning(&self, text: &str) -> bool {
        self.matched_pattern(text).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extra_patterns_are_dropped() {
        let filter = ReasoningFilter::with_patterns(["", "Plan:"]);
        assert_eq!(filter.patterns().count(), REASONING_PATTERNS.len() + 1);
        assert!(!filter.is_reasoning(""));
    }

    #[test]
    fn whitespace_only_patterns_are_dropped() {
        let filter = ReasoningFilter::with_patterns([" ", "\t\n"]);
        assert_eq!(filter, ReasoningFilter::new());
        assert!(!filter.is_reasoning("The weather today is sunny."));
    }

    #[test]
    fn duplicate_defaults_are_not_repeated() {
        let filter = ReasoningFilter::with_patterns(["Thought:"]);
        assert_eq!(filter.patterns().count(), REASONING_PATTERNS.len());
    }

    #[test]
    fn matched_pattern_reports_first_default_hit() {
        let filter = ReasoningFilter::new();
        assert_eq!(
            filter.matched_pattern("Action: search\nAction Input: rust"),
            Some("Action:")
        );
    }
}
