//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Harrow: inspect DSSAT input-record resolution
#[derive(Parser)]
#[command(name = "harrow")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// DSSAT installation root
    #[arg(long, global = true, value_name = "DIR", default_value = "/opt/DSSAT48")]
    pub dssat: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List crop codes and the simulation models they select
    Models {
        /// Show a single crop code
        #[arg(value_name = "CROP")]
        crop: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the genetic record for a crop/cultivar pair
    Genetics {
        /// Two-letter crop code (e.g. MZ)
        #[arg(value_name = "CROP")]
        crop: String,

        /// Cultivar identifier (VAR# value, e.g. IB0001)
        #[arg(value_name = "CULTIVAR")]
        cultivar: String,

        /// Model override (ignored unless it belongs to the crop)
        #[arg(short, long)]
        model: Option<String>,

        /// Print one variable's resolved values instead of the variable list
        #[arg(long, value_name = "NAME")]
        var: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the weather record for a station code
    Weather {
        /// Station code (filename prefix, e.g. UFGA)
        #[arg(value_name = "CODE")]
        code: String,

        /// Print one variable's series instead of the variable list
        #[arg(long, value_name = "NAME")]
        var: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
