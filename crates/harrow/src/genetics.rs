//! Genetic-parameter resolution: cultivar + ecotype records per treatment.

use std::collections::{BTreeSet, HashMap};

use crate::error::{HarrowError, Result};
use crate::files::{CulFile, EcoFile, InputFile, Value};
use crate::layout::{sorted_entries, FileCategory, Installation};
use crate::model::resolve_model;

/// Cultivar-table key column.
const VAR_KEY: &str = "VAR#";
/// Shared cultivar-to-ecotype code column.
const ECO_KEY: &str = "ECO#";

/// The resolved genetic record for one (model, cultivar) pair.
///
/// Construction scans the installation's `Genotype` directory once, adopts
/// the cultivar and (if present) ecotype file whose names start with the
/// model code, and caches the row positions the cultivar identifier selects
/// in each. Directory entries are visited in lexicographic filename order,
/// so ties between qualifying files break deterministically.
///
/// After construction, [`get_val`](Self::get_val) and
/// [`set_val`](Self::set_val) are plain indexed lookups over one merged
/// variable namespace in which cultivar columns shadow ecotype columns of
/// the same name.
#[derive(Debug)]
pub struct GeneticResolver {
    model: String,
    cultivar: String,
    cul: CulFile,
    eco: Option<EcoFile>,
    cul_rows: Vec<usize>,
    eco_rows: Vec<usize>,
}

impl GeneticResolver {
    /// Resolve the genetic record for `cultivar` under `model`.
    ///
    /// Fails with [`HarrowError::MissingCultivarFile`] when no `.CUL` file
    /// in the genotype directory carries the model prefix; a missing `.ECO`
    /// file is not an error. A `cultivar` matching no `VAR#` row is not
    /// rejected here — it yields empty row selections, and `get_val` then
    /// returns empty vectors.
    pub fn new(install: &Installation, model: &str, cultivar: &str) -> Result<Self> {
        let dir = install.subdir(FileCategory::Genotype);

        let mut cul: Option<CulFile> = None;
        let mut eco: Option<EcoFile> = None;
        for path in sorted_entries(&dir)? {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if cul.is_none() && CulFile::matches_file(name) && name.starts_with(model) {
                cul = Some(CulFile::open(&path)?);
            } else if eco.is_none() && EcoFile::matches_file(name) && name.starts_with(model) {
                eco = Some(EcoFile::open(&path)?);
            }
            if cul.is_some() && eco.is_some() {
                break;
            }
        }

        let cul = cul.ok_or_else(|| HarrowError::MissingCultivarFile {
            model: model.to_string(),
            dir,
        })?;

        let cul_rows = cul.table().find_rows(VAR_KEY, cultivar)?;
        let mut eco_rows = Vec::new();
        if let Some(eco_file) = &eco {
            // The ecotype rows are the ones whose ECO# matches the ECO#
            // found at the selected cultivar rows.
            let wanted: BTreeSet<String> = cul
                .table()
                .values_at(ECO_KEY, &cul_rows)?
                .iter()
                .map(Value::to_string)
                .collect();
            eco_rows = eco_file
                .get_val(ECO_KEY)?
                .iter()
                .enumerate()
                .filter(|(_, code)| wanted.contains(&code.to_string()))
                .map(|(i, _)| i)
                .collect();
        }

        Ok(Self {
            model: model.to_string(),
            cultivar: cultivar.to_string(),
            cul,
            eco,
            cul_rows,
            eco_rows,
        })
    }

    /// Values of `var` at the resolved rows.
    ///
    /// Routed to the cultivar table first, then the ecotype table; a
    /// variable in neither fails with [`HarrowError::UnknownVariable`].
    pub fn get_val(&self, var: &str) -> Result<Vec<Value>> {
        if self.cul.has_variable(var) {
            return self.cul.table().values_at(var, &self.cul_rows);
        }
        if let Some(eco) = &self.eco {
            if eco.has_variable(var) {
                return eco.table().values_at(var, &self.eco_rows);
            }
        }
        Err(HarrowError::unknown_variable(var))
    }

    /// Write `value` at every resolved row of `var`, with the same routing
    /// rule as [`get_val`](Self::get_val).
    pub fn set_val(&mut self, var: &str, value: Value) -> Result<()> {
        if self.cul.has_variable(var) {
            return self.cul.table_mut().set_at(var, &self.cul_rows, value);
        }
        if let Some(eco) = &mut self.eco {
            if eco.has_variable(var) {
                return eco.table_mut().set_at(var, &self.eco_rows, value);
            }
        }
        Err(HarrowError::unknown_variable(var))
    }

    /// Union of cultivar and ecotype variable names. The set carries no
    /// shadowing information; get/set precedence still applies.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut vars = self.cul.variables();
        if let Some(eco) = &self.eco {
            vars.extend(eco.variables());
        }
        vars
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn cultivar(&self) -> &str {
        &self.cultivar
    }

    /// Path of the adopted cultivar file.
    pub fn cultivar_path(&self) -> &std::path::Path {
        self.cul.path()
    }

    /// Path of the adopted ecotype file, when one was found.
    pub fn ecotype_path(&self) -> Option<&std::path::Path> {
        self.eco.as_ref().map(InputFile::path)
    }
}

/// One [`GeneticResolver`] per treatment, built from parallel input
/// sequences and queried by treatment identifier.
#[derive(Debug)]
pub struct GeneticRegistry {
    files: HashMap<String, GeneticResolver>,
}

impl GeneticRegistry {
    /// Build resolvers for parallel `crops` / `cultivars` / `treatments`
    /// sequences, with an optional model override applied to every crop
    /// (unrecognized overrides degrade per [`resolve_model`]).
    ///
    /// The sequences must be the same length ([`HarrowError::LengthMismatch`]
    /// otherwise). Duplicate treatment identifiers are allowed; the last
    /// occurrence wins.
    pub fn new(
        install: &Installation,
        crops: &[&str],
        cultivars: &[&str],
        treatments: &[&str],
        model: Option<&str>,
    ) -> Result<Self> {
        if crops.len() != cultivars.len() {
            return Err(HarrowError::LengthMismatch {
                what: "crop/cultivar",
                left: crops.len(),
                right: cultivars.len(),
            });
        }
        if crops.len() != treatments.len() {
            return Err(HarrowError::LengthMismatch {
                what: "crop/treatment",
                left: crops.len(),
                right: treatments.len(),
            });
        }

        let mut files = HashMap::with_capacity(treatments.len());
        for ((crop, cultivar), treatment) in crops.iter().zip(cultivars).zip(treatments) {
            let model_code = resolve_model(crop, model)?;
            files.insert(
                treatment.to_string(),
                GeneticResolver::new(install, model_code, cultivar)?,
            );
        }
        Ok(Self { files })
    }

    /// Values of `var` for the given treatment.
    pub fn get_val(&self, var: &str, treatment: &str) -> Result<Vec<Value>> {
        self.resolver(treatment)?.get_val(var)
    }

    /// Write `value` into `var` for the given treatment.
    pub fn set_val(&mut self, var: &str, value: Value, treatment: &str) -> Result<()> {
        self.resolver_mut(treatment)?.set_val(var, value)
    }

    /// Union of variable names across all treatments' resolvers.
    pub fn variables(&self) -> BTreeSet<String> {
        self.files.values().flat_map(GeneticResolver::variables).collect()
    }

    /// Treatment identifiers held by the registry, in no particular order.
    pub fn treatments(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// The resolver serving `treatment`.
    pub fn resolver(&self, treatment: &str) -> Result<&GeneticResolver> {
        self.files
            .get(treatment)
            .ok_or_else(|| HarrowError::UnknownTreatment {
                treatment: treatment.to_string(),
            })
    }

    fn resolver_mut(&mut self, treatment: &str) -> Result<&mut GeneticResolver> {
        self.files
            .get_mut(treatment)
            .ok_or_else(|| HarrowError::UnknownTreatment {
                treatment: treatment.to_string(),
            })
    }
}
