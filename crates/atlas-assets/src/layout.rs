//! Output tree layout.
//!
//! ```text
//! <root>/emoji/<emoji>.png
//! <root>/name/<display name>.png
//! <root>/ignored/alias/<alias>.png
//! <root>/code/<country code>.png     (flags only)
//! ```

use std::path::{Path, PathBuf};

const EXT: &str = "png";

/// One destination tree, e.g. `renamed-color` or `flags-tiny`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTree {
    root: PathBuf,
}

impl OutputTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn emoji_path(&self, emoji: &str) -> PathBuf {
        self.file("emoji", emoji)
    }

    pub fn name_path(&self, name: &str) -> PathBuf {
        self.file("name", name)
    }

    /// Alias copies stay out of the primary lookup trees.
    pub fn alias_path(&self, alias: &str) -> PathBuf {
        self.root.join("ignored").join("alias").join(format!("{alias}.{EXT}"))
    }

    pub fn code_path(&self, code: &str) -> PathBuf {
        self.file("code", code)
    }

    fn file(&self, subtree: &str, stem: &str) -> PathBuf {
        self.root.join(subtree).join(format!("{stem}.{EXT}"))
    }
}
