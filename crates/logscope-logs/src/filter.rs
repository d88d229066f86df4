/// Exact-match filter on the level token of a log line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelFilter {
    /// Level to keep (None = all)
    level: Option<String>,
}

impl LevelFilter {
    /// Create a filter from a request argument; an empty string matches everything
    pub fn new(level: &str) -> Self {
        Self {
            level: (!level.is_empty()).then(|| level.to_string()),
        }
    }

    /// Filter that keeps every entry
    pub fn all() -> Self {
        Self::default()
    }

    /// Check if a level passes this filter (case-sensitive)
    pub fn matches(&self, level: &str) -> bool {
        match &self.level {
            Some(wanted) => wanted == level,
            None => true,
        }
    }

    /// The selected level, empty when unfiltered
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.level.is_none()
    }
}
