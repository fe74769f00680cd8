//! DSSAT installation layout.

use std::path::{Path, PathBuf};

use crate::error::{HarrowError, Result};

/// Standard subdirectories of a DSSAT installation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// Cultivar and ecotype coefficient files.
    Genotype,
    /// Weather station files (with generated data under `Weather/Gen`).
    Weather,
}

impl FileCategory {
    /// Directory name under the installation root.
    pub fn dir_name(self) -> &'static str {
        match self {
            FileCategory::Genotype => "Genotype",
            FileCategory::Weather => "Weather",
        }
    }
}

/// Root of a DSSAT installation (e.g. `/opt/DSSAT48`).
#[derive(Debug, Clone)]
pub struct Installation {
    root: PathBuf,
}

impl Installation {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a standard subdirectory.
    pub fn subdir(&self, category: FileCategory) -> PathBuf {
        self.root.join(category.dir_name())
    }
}

/// Immediate entries of `dir`, sorted lexicographically by filename.
///
/// Directory enumeration order is platform-dependent; sorting makes the
/// resolvers' "first match wins" rule deterministic when several files
/// satisfy a predicate.
pub(crate) fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| HarrowError::io(dir, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| HarrowError::io(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdir_paths() {
        let install = Installation::new("/opt/DSSAT48");
        assert_eq!(
            install.subdir(FileCategory::Genotype),
            PathBuf::from("/opt/DSSAT48/Genotype")
        );
        assert_eq!(
            install.subdir(FileCategory::Weather),
            PathBuf::from("/opt/DSSAT48/Weather")
        );
    }
}
