//! Metadata passes over the upstream emoji dataset.
//!
//! Passes:
//! 1. Clean (derive `name`, strip unused fields) → `noto-emoji-cleaned.json`
//! 2. Side tables (CLDR names, shortcode aliases) keyed by codename
//! 3. Info snapshot (first record per name wins, `hexcode` dropped)
//! 4. HTML preview of the info snapshot

pub mod clean;
pub mod dedup;
pub mod report;
pub mod side_tables;
pub mod snapshot;

pub use clean::{clean_file, clean_record, clean_records};
pub use dedup::{dedup_by_name, write_info, DedupOutcome, UsedNames};
pub use report::{render_html, write_html};
pub use side_tables::{build_aliases, build_cldr, rekey_aliases, rekey_cldr};
pub use snapshot::{read_records, write_records};

#[cfg(test)]
mod tests;
