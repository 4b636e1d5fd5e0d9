//! Parse-run configuration.

/// Knobs for a parse run, shared by the whole parser tree.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Collect comment declarations into the output.
    pub include_comments: bool,
    /// Treat a missing external DTD as a skip-with-warning instead of a
    /// fatal error.
    pub ignore_external: bool,
}

impl Default for ParserOptions {
    fn default() -> ParserOptions {
        ParserOptions {
            include_comments: true,
            ignore_external: false,
        }
    }
}
