pub mod arrow;
mod catalog;
mod record;
pub mod types;

pub use self::arrow::{build_arrow_schema, map_to_arrow_type};
pub use catalog::{V1, V2, V3};
pub use record::{Record, Value};
pub use types::{Column, ColumnKind, Version};
