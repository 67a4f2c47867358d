/// Path exclusion checker using substring fragments
pub struct Exclusions {
    fragments: Vec<String>,
}

impl Exclusions {
    /// Create a new exclusion set from path fragments
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    /// Check if a path contains any excluded fragment
    pub fn is_excluded(&self, path: &str) -> bool {
        self.fragments.iter().any(|f| path.contains(f.as_str()))
    }

    /// Get first matching fragment (for diagnostics)
    pub fn matching_fragment(&self, path: &str) -> Option<&str> {
        self.fragments
            .iter()
            .find(|f| path.contains(f.as_str()))
            .map(|f| f.as_str())
    }
}
