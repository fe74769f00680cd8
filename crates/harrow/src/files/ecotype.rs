//! Ecotype (`.ECO`) genotype files.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use super::{InputFile, ParamTable};

static ECO_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.ECO$").unwrap());

/// An ecotype-coefficient file: one row per ecotype, keyed by `ECO#`.
#[derive(Debug, Clone)]
pub struct EcoFile {
    path: PathBuf,
    table: ParamTable,
}

impl InputFile for EcoFile {
    fn matches_file(name: &str) -> bool {
        ECO_FILE.is_match(name)
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
