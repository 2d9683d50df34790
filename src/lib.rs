//! Deserialization of the [AT-HYG](https://github.com/astronexus/ATHYG-Database)
//! star catalog.
//!
//! Catalog files are comma-separated text with one header line. Each data
//! line becomes a [`V1`], [`V2`] or [`V3`] record depending on the dataset
//! version the caller asks for. Every field is an `Option`: numeric columns
//! that cannot be read are `None`, text columns are always `Some`.
//!
//! ```no_run
//! use athyg::{Loader, V3};
//!
//! # fn main() -> Result<(), athyg::LoadError> {
//! let stars: Vec<V3> = Loader::new().load(&["athyg_v31-1.csv", "athyg_v31-2.csv"])?;
//! println!("{} stars", stars.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod process;
pub mod schema;

pub use error::{ArityError, LoadError};
pub use process::{load, Loader};
pub use schema::{Record, Version, V1, V2, V3};
