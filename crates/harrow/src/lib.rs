//! Harrow: input-record resolution for DSSAT crop-model runs.
//!
//! Given the treatments of a simulation experiment, harrow locates the
//! concrete files their genetic and weather parameters live in, resolves the
//! rows that apply to each treatment, and exposes one get/set/enumerate
//! surface over the result regardless of which file supplied the value.
//!
//! Resolution happens once, eagerly:
//!
//! - a crop code picks a simulation model ([`resolve_model`]),
//! - the model prefix picks the cultivar (`.CUL`) and ecotype (`.ECO`) files
//!   out of the installation's `Genotype` directory,
//! - the cultivar row is cross-referenced to its ecotype row through the
//!   shared `ECO#` code and both row positions are cached,
//! - a station code picks the weather file out of `Weather` (then
//!   `Weather/Gen`).
//!
//! After construction every lookup is a map/array access.
//!
//! # Example
//!
//! ```no_run
//! use harrow::{GeneticRegistry, Installation};
//!
//! let install = Installation::new("/opt/DSSAT48");
//! let registry = GeneticRegistry::new(
//!     &install,
//!     &["MZ"],
//!     &["IB0001"],
//!     &["T1"],
//!     None,
//! ).unwrap();
//!
//! let p1 = registry.get_val("P1", "T1").unwrap();
//! println!("P1 = {:?}", p1);
//! ```

pub mod error;
pub mod files;
pub mod genetics;
pub mod layout;
pub mod model;
pub mod weather;

pub use error::{HarrowError, Result};
pub use files::{CulFile, EcoFile, InputFile, ParamTable, Value, WthFile};
pub use genetics::{GeneticRegistry, GeneticResolver};
pub use layout::{FileCategory, Installation};
pub use model::{crops, models_for, resolve_model};
pub use weather::{WeatherRegistry, WeatherResolver};
