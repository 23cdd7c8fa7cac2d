/// Counters and diagnostics from one placement run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementReport {
    /// Source images that existed and were placed.
    pub copied: usize,
    /// Records or files whose source image did not exist.
    pub missing_sources: usize,
    /// Extra copies made into the alias subtree.
    pub alias_copies: usize,
    /// Records skipped because an earlier record had the same name.
    pub duplicates: usize,
    /// Records removed by the curation filter.
    pub excluded: usize,
    /// Codenames that no name table knows; their name-tree copy was skipped.
    pub unresolved: Vec<String>,
}

impl PlacementReport {
    pub fn log_summary(&self, what: &str) {
        tracing::info!(
            "{what}: {} placed, {} missing sources, {} alias copies, {} duplicates, {} excluded, {} unresolved names",
            self.copied,
            self.missing_sources,
            self.alias_copies,
            self.duplicates,
            self.excluded,
            self.unresolved.len()
        );
    }
}
