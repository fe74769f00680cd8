//! Cultivar (`.CUL`) genotype files.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use super::{InputFile, ParamTable};

static CUL_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.CUL$").unwrap());

/// A cultivar-coefficient file.
///
/// One row per cultivar, keyed by `VAR#`, carrying the model-specific
/// genetic parameters plus the `ECO#` foreign key into the matching
/// ecotype file.
#[derive(Debug, Clone)]
pub struct CulFile {
    path: PathBuf,
    table: ParamTable,
}

impl InputFile for CulFile {
    fn matches_file(name: &str) -> bool {
        CUL_FILE.is_match(name)
    }

    fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let table = ParamTable::read(&path)?;
        Ok(Self { path, table })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn table(&self) -> &ParamTable {
        &self.table
    }

    fn table_mut(&mut self) -> &mut ParamTable {
        &mut self.table
    }
}
