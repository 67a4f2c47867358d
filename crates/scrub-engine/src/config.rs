use serde::{Deserialize, Serialize};

/// Sanitization settings. Populated from defaults and CLI flags; never read
/// from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizeConfig {
    /// Literal token replaced in file contents.
    #[serde(default = "default_username_token")]
    pub username_token: String,

    /// Value written in place of the username token.
    #[serde(default = "default_username_token")]
    pub username_replacement: String,

    /// Path fragments that disqualify a file from processing.
    #[serde(default = "default_exclusions")]
    pub exclusions: Vec<String>,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            username_token: default_username_token(),
            username_replacement: default_username_token(),
            exclusions: default_exclusions(),
        }
    }
}

fn default_username_token() -> String {
    "USER".to_string()
}

fn default_exclusions() -> Vec<String> {
    vec![
        "vendor/".to_string(),
        "node_modules/".to_string(),
        ".git/".to_string(),
        ".history/".to_string(),
        "dist/".to_string(),
    ]
}
