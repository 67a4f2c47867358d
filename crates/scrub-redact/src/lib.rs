//! Redaction rules applied to tracked file content

use lazy_static::lazy_static;
use regex::Regex;
use scrub_core::Redaction;

lazy_static! {
    /// `C:\Users\<name>\` with any non-backslash user segment.
    static ref WINDOWS_USER_HOME: Regex = Regex::new(r"C:\\Users\\[^\\]+\\").unwrap();
}

/// Written in place of matched Windows user-home prefixes.
pub const USER_HOME_PLACEHOLDER: &str = "/USER_HOME/";

enum Matcher {
    Literal(String),
    Pattern(Regex),
}

/// A single rule: what to find and what to write in its place.
pub struct RedactionRule {
    name: String,
    matcher: Matcher,
    replace_with: String,
}

impl RedactionRule {
    pub fn literal(name: &str, needle: &str, replace_with: &str) -> Self {
        Self {
            name: name.to_string(),
            matcher: Matcher::Literal(needle.to_string()),
            replace_with: replace_with.to_string(),
        }
    }

    pub fn pattern(name: &str, pattern: Regex, replace_with: &str) -> Self {
        Self {
            name: name.to_string(),
            matcher: Matcher::Pattern(pattern),
            replace_with: replace_with.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the rule, returning the rewritten content and the number of
    /// occurrences replaced. An empty literal needle is inert.
    fn apply(&self, content: &str) -> (String, usize) {
        match &self.matcher {
            Matcher::Literal(needle) => {
                if needle.is_empty() {
                    return (content.to_string(), 0);
                }
                let count = content.matches(needle.as_str()).count();
                if count == 0 {
                    return (content.to_string(), 0);
                }
                (content.replace(needle.as_str(), &self.replace_with), count)
            }
            Matcher::Pattern(pattern) => {
                let count = pattern.find_iter(content).count();
                if count == 0 {
                    return (content.to_string(), 0);
                }
                (
                    pattern
                        .replace_all(content, self.replace_with.as_str())
                        .to_string(),
                    count,
                )
            }
        }
    }
}

/// Applies an ordered list of redaction rules to file content.
pub struct Redactor {
    rules: Vec<RedactionRule>,
}

impl Redactor {
    pub fn with_rules(rules: Vec<RedactionRule>) -> Self {
        Self { rules }
    }

    /// The standard rule set: the username token first, then Windows
    /// user-home paths (order matters).
    pub fn for_username(token: &str, replacement: &str) -> Self {
        Self::with_rules(vec![
            RedactionRule::literal("username", token, replacement),
            RedactionRule::pattern(
                "windows_user_home",
                WINDOWS_USER_HOME.clone(),
                USER_HOME_PLACEHOLDER,
            ),
        ])
    }

    /// Redact content, returning the rewritten string and one record per
    /// rule that matched.
    pub fn redact(&self, path: &str, content: &str) -> (String, Vec<Redaction>) {
        let mut result = content.to_string();
        let mut redactions = Vec::new();

        for rule in &self.rules {
            let (rewritten, count) = rule.apply(&result);
            if count > 0 {
                result = rewritten;
                redactions.push(Redaction {
                    path: path.to_string(),
                    rule: rule.name().to_string(),
                    count,
                });
            }
        }

        (result, redactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_home_redaction() {
        let redactor = Redactor::for_username("USER", "USER");
        let content = "Config at C:\\Users\\alice\\settings.ini";

        let (redacted, info) = redactor.redact("settings.md", content);

        assert_eq!(redacted, "Config at /USER_HOME/settings.ini");
        assert_eq!(info.len(), 1);
        assert_eq!(info[0].rule, "windows_user_home");
        assert_eq!(info[0].count, 1);
    }

    #[test]
    fn test_trailing_home_path() {
        let redactor = Redactor::for_username("USER", "USER");

        let (redacted, _) = redactor.redact("t", "C:\\Users\\bob\\");

        assert_eq!(redacted, "/USER_HOME/");
    }

    #[test]
    fn test_username_replacement() {
        let redactor = Redactor::for_username("alice", "USER");

        let (redacted, info) = redactor.redact("t", "alice committed this; ask alice");

        assert_eq!(redacted, "USER committed this; ask USER");
        assert_eq!(info[0].rule, "username");
        assert_eq!(info[0].count, 2);
    }

    #[test]
    fn test_username_applies_inside_paths() {
        let redactor = Redactor::for_username("alice", "USER");

        let (redacted, _) = redactor.redact("t", "alice at C:\\Users\\alice\\proj");

        assert_eq!(redacted, "USER at /USER_HOME/proj");
    }

    #[test]
    fn test_no_matches() {
        let redactor = Redactor::for_username("USER", "USER");
        let content = "Just some normal code here";

        let (redacted, info) = redactor.redact("t", content);

        assert_eq!(redacted, content);
        assert!(info.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let redactor = Redactor::for_username("alice", "USER");
        let content = "alice keeps notes in C:\\Users\\alice\\notes\\todo.txt";

        let (once, _) = redactor.redact("t", content);
        let (twice, _) = redactor.redact("t", &once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_self_mapping_token_counts_but_changes_nothing() {
        let redactor = Redactor::for_username("USER", "USER");

        let (redacted, info) = redactor.redact("t", "USER did this");

        assert_eq!(redacted, "USER did this");
        assert_eq!(info[0].count, 1);
    }

    #[test]
    fn test_empty_token_is_inert() {
        let redactor = Redactor::for_username("", "USER");

        let (redacted, info) = redactor.redact("t", "nothing to do");

        assert_eq!(redacted, "nothing to do");
        assert!(info.is_empty());
    }

    #[test]
    fn test_multiple_home_paths() {
        let redactor = Redactor::for_username("USER", "USER");
        let content = "C:\\Users\\a\\x and C:\\Users\\b\\y";

        let (redacted, info) = redactor.redact("t", content);

        assert_eq!(redacted, "/USER_HOME/x and /USER_HOME/y");
        assert_eq!(info[0].count, 2);
    }
}
