//! Reader options configuration.

/// Options controlling how worksheets are reconstructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Drop trailing rows that hold no non-null value
    pub remove_trailing_rows: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            remove_trailing_rows: true,
        }
    }
}

impl ReaderOptions {
    /// Create new reader options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable trimming of trailing all-empty rows.
    pub fn with_remove_trailing_rows(mut self, remove: bool) -> Self {
        self.remove_trailing_rows = remove;
        self
    }
}
