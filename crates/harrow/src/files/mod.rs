//! DSSAT input-file collaborators.
//!
//! Each supported file kind (`.CUL`, `.ECO`, `.WTH`) wraps a parsed
//! [`ParamTable`] and answers the same four questions: does a filename belong
//! to this kind, what variables does the file carry, and what are / set the
//! values of one variable. The resolvers in [`crate::genetics`] and
//! [`crate::weather`] never look past this surface.

mod cultivar;
mod ecotype;
mod table;
mod value;
mod weather;

use std::collections::BTreeSet;
use std::path::Path;

pub use cultivar::CulFile;
pub use ecotype::EcoFile;
pub use table::ParamTable;
pub use value::Value;
pub use weather::WthFile;

use crate::error::Result;

/// Common surface of every DSSAT input file kind.
pub trait InputFile: Sized {
    /// Whether `name` (a bare filename, no directory) belongs to this kind.
    fn matches_file(name: &str) -> bool;

    /// Read and parse the file at `path`.
    fn open(path: impl AsRef<Path>) -> Result<Self>;

    /// Path the file was read from.
    fn path(&self) -> &Path;

    /// The parsed table.
    fn table(&self) -> &ParamTable;

    /// The parsed table, for in-place mutation.
    fn table_mut(&mut self) -> &mut ParamTable;

    /// All values of `var`, in file order.
    fn get_val(&self, var: &str) -> Result<Vec<Value>> {
        self.table().get_val(var)
    }

    /// Replace the whole value series of `var`.
    fn set_val(&mut self, var: &str, values: Vec<Value>) -> Result<()> {
        self.table_mut().set_val(var, values)
    }

    /// Names of all variables the file carries.
    fn variables(&self) -> BTreeSet<String> {
        self.table().variables()
    }

    /// Whether the file carries a variable named `var`.
    fn has_variable(&self, var: &str) -> bool {
        self.table().has_variable(var)
    }
}
