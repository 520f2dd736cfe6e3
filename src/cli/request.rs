//! Request detection
//!
//! Decides whether free-form text is asking for TODO information. This is a
//! case-insensitive substring test and never affects parsing.

/// Built-in phrases that mark a TODO request
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "todo",
    "todos",
    "to-do",
    "to-dos",
    "task",
    "tasks",
    "current tasks",
    "what do i need to do",
    "what needs to be done",
    "show me my",
    "give me the",
    "list my",
    "project status",
    "pending work",
    "what's left",
    "remaining work",
];

/// Keyword matcher for TODO requests
#[derive(Debug, Clone)]
pub struct RequestMatcher {
    keywords: Vec<String>,
}

impl Default for RequestMatcher {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl RequestMatcher {
    /// Creates a matcher with the built-in keywords plus `extra`
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = DEFAULT_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(extra.into_iter().map(|k| k.as_ref().trim().to_lowercase()))
            .collect();

        Self { keywords }
    }

    /// Returns true if `input` looks like a request for TODO information
    pub fn is_todo_request(&self, input: &str) -> bool {
        let lower = input.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

/// Checks `input` against the built-in keywords only
pub fn is_todo_request(input: &str) -> bool {
    RequestMatcher::default().is_todo_request(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_requests() {
        assert!(is_todo_request("give me the TODOs"));
        assert!(is_todo_request("Show me my todos"));
        assert!(is_todo_request("what are my current tasks"));
        assert!(is_todo_request("list my pending work"));
        assert!(is_todo_request("show PROJECT STATUS"));
        assert!(is_todo_request("What's left?"));
    }

    #[test]
    fn ignores_unrelated_text() {
        assert!(!is_todo_request("what's the weather like"));
        assert!(!is_todo_request(""));
        assert!(!is_todo_request("compile the project"));
    }

    #[test]
    fn extra_keywords_extend_the_set() {
        let matcher = RequestMatcher::new(["Backlog"]);
        assert!(matcher.is_todo_request("open the BACKLOG"));
        assert!(matcher.is_todo_request("my tasks"));
        assert!(!RequestMatcher::default().is_todo_request("open the backlog"));
    }
}
