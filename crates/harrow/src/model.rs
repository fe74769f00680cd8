//! Crop-to-model selection.
//!
//! Each two-letter crop code maps to an ordered, non-empty list of the
//! simulation models DSSAT ships for that crop; the first entry is the
//! default. The table is fixed at build time and never mutated.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::error::{HarrowError, Result};

static CROP_MODELS: Lazy<IndexMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    IndexMap::from([
        ("AL", &["ALFRM"][..]),
        ("BA", &["BACER", "BACRP"][..]),
        ("BH", &["BHGRO"][..]),
        ("BM", &["BMFRM", "BMGRO"][..]),
        ("BN", &["BNGRO"][..]),
        ("BR", &["BRFRM", "BRGRO"][..]),
        ("BS", &["BSCER"][..]),
        ("CB", &["CBGRO"][..]),
        ("CH", &["CHGRO"][..]),
        ("CN", &["CNGRO"][..]),
        ("CO", &["COGRO"][..]),
        ("CP", &["CPGRO"][..]),
        ("CS", &["CSCAS", "CSYCA"][..]),
        ("FB", &["FBGRO"][..]),
        ("G0", &["G0GRO"][..]),
        ("GB", &["GBGRO"][..]),
        ("ML", &["MLCER"][..]),
        ("MZ", &["MZCER", "MZIXM"][..]),
        ("PI", &["PIALO"][..]),
        ("PN", &["PNGRO"][..]),
        ("PP", &["PPGRO"][..]),
        ("PR", &["PRGRO"][..]),
        ("PT", &["PTSUB"][..]),
        ("RI", &["RICER", "RIORZ"][..]),
        ("SB", &["SBGRO"][..]),
        ("SC", &["SCCAN", "SCCSP"][..]),
        ("SF", &["SFGRO"][..]),
        ("SG", &["SGCER"][..]),
        ("SU", &["SUGRO"][..]),
        ("SW", &["SWCER"][..]),
        ("TM", &["TMGRO"][..]),
        ("TN", &["TNARO"][..]),
        ("VB", &["VBGRO"][..]),
        ("WH", &["WHAPS", "WHCER", "WHCRP"][..]),
    ])
});

/// Pick the model a crop runs under.
///
/// An explicit `requested` override is honored when it names one of the
/// crop's own models; any other override silently falls back to the crop's
/// default. The fallback keeps resolution total — an unrecognized override
/// never fails, only an unknown crop does. Callers needing strict override
/// validation can check [`models_for`] membership themselves.
pub fn resolve_model(crop: &str, requested: Option<&str>) -> Result<&'static str> {
    let candidates = CROP_MODELS
        .get(crop)
        .ok_or_else(|| HarrowError::UnknownCrop { crop: crop.to_string() })?;
    if let Some(wanted) = requested {
        if let Some(model) = candidates.iter().find(|&&m| m == wanted) {
            return Ok(model);
        }
    }
    Ok(candidates[0])
}

/// Models available for a crop, default first. `None` for unknown crops.
pub fn models_for(crop: &str) -> Option<&'static [&'static str]> {
    CROP_MODELS.get(crop).copied()
}

/// All known crop codes, in table order.
pub fn crops() -> impl Iterator<Item = &'static str> {
    CROP_MODELS.keys().copied()
}
