//! Weather-record resolution: one station file per treatment.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::error::{HarrowError, Result};
use crate::files::{InputFile, Value, WthFile};
use crate::layout::{sorted_entries, FileCategory, Installation};

/// Subdirectory of `Weather` holding generated (as opposed to measured)
/// station data.
const GENERATED_SUBDIR: &str = "Gen";

/// The resolved weather record for one station code.
///
/// Construction searches the `Weather` directory, then `Weather/Gen`, in
/// that fixed order, and adopts the first weather file whose stem starts
/// with the station code; the first directory that yields a match ends the
/// search. Entries are visited in lexicographic filename order. A search
/// directory that does not exist is skipped.
///
/// Weather files are whole-file, single-series records, so get/set delegate
/// straight to the file with no row selection.
#[derive(Debug)]
pub struct WeatherResolver {
    code: String,
    file: WthFile,
}

impl WeatherResolver {
    /// Resolve the weather file for station `code`.
    pub fn new(install: &Installation, code: &str) -> Result<Self> {
        let primary = install.subdir(FileCategory::Weather);
        let generated = primary.join(GENERATED_SUBDIR);

        for dir in [&primary, &generated] {
            if !dir.is_dir() {
                continue;
            }
            for path in sorted_entries(dir)? {
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !WthFile::matches_file(name) {
                    continue;
                }
                let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
                if stem.starts_with(code) {
                    return Ok(Self {
                        code: code.to_string(),
                        file: WthFile::open(&path)?,
                    });
                }
            }
        }
        Err(HarrowError::MissingWeatherFile {
            code: code.to_string(),
        })
    }

    /// The whole series of `var`.
    pub fn get_val(&self, var: &str) -> Result<Vec<Value>> {
        self.file.get_val(var)
    }

    /// Replace the whole series of `var`.
    pub fn set_val(&mut self, var: &str, values: Vec<Value>) -> Result<()> {
        self.file.set_val(var, values)
    }

    /// Variable names the resolved file carries.
    pub fn variables(&self) -> BTreeSet<String> {
        self.file.variables()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Path of the adopted weather file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// One [`WeatherResolver`] per treatment, built from parallel input
/// sequences and queried by treatment identifier.
#[derive(Debug)]
pub struct WeatherRegistry {
    files: HashMap<String, WeatherResolver>,
}

impl WeatherRegistry {
    /// Build resolvers for parallel `codes` / `treatments` sequences.
    ///
    /// The sequences must be the same length ([`HarrowError::LengthMismatch`]
    /// otherwise). Duplicate treatment identifiers are allowed; the last
    /// occurrence wins.
    pub fn new(install: &Installation, codes: &[&str], treatments: &[&str]) -> Result<Self> {
        if codes.len() != treatments.len() {
            return Err(HarrowError::LengthMismatch {
                what: "code/treatment",
                left: codes.len(),
                right: treatments.len(),
            });
        }
        let mut files = HashMap::with_capacity(treatments.len());
        for (code, treatment) in codes.iter().zip(treatments) {
            files.insert(treatment.to_string(), WeatherResolver::new(install, code)?);
        }
        Ok(Self { files })
    }

    /// Values of `var` for the given treatment.
    pub fn get_val(&self, var: &str, treatment: &str) -> Result<Vec<Value>> {
        self.resolver(treatment)?.get_val(var)
    }

    /// Replace the series of `var` for the given treatment.
    pub fn set_val(&mut self, var: &str, values: Vec<Value>, treatment: &str) -> Result<()> {
        self.resolver_mut(treatment)?.set_val(var, values)
    }

    /// Union of variable names across all treatments' resolvers.
    pub fn variables(&self) -> BTreeSet<String> {
        self.files.values().flat_map(WeatherResolver::variables).collect()
    }

    /// Treatment identifiers held by the registry, in no particular order.
    pub fn treatments(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// The resolver serving `treatment`.
    pub fn resolver(&self, treatment: &str) -> Result<&WeatherResolver> {
        self.files
            .get(treatment)
            .ok_or_else(|| HarrowError::UnknownTreatment {
                treatment: treatment.to_string(),
            })
    }

    fn resolver_mut(&mut self, treatment: &str) -> Result<&mut WeatherResolver> {
        self.files
            .get_mut(treatment)
            .ok_or_else(|| HarrowError::UnknownTreatment {
                treatment: treatment.to_string(),
            })
    }
}
