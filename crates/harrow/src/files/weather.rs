//! Weather station (`.WTH` / `.WTG`) files.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use super::{InputFile, ParamTable};

// .WTH is measured data, .WTG the generated variant written to Weather/Gen.
static WTH_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.WT[HG]$").unwrap());

/// A weather file: one station-constants section (`INSI`, `LAT`, ...) and
/// one daily time-series section (`DATE`, `SRAD`, `TMAX`, ...). Whole-file,
/// single-series — there is no per-row selection to resolve.
#[derive(Debug, Clone)]
pub struct WthFile {
    path: PathBuf,
    table: ParamTable,
}

impl InputFile for WthFile {
    fn matches_file(name: &str) -> bool {
        WTH_FILE.is_match(name)
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
