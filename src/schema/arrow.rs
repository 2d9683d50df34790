// src/schema/arrow.rs

use arrow::datatypes::{DataType, Field as ArrowField, Schema as ArrowSchema};
use std::sync::Arc;

use super::types::{Column, ColumnKind};

/// Map a column kind into an Arrow DataType.
///
/// - Unsigned          → UInt64
/// - Signed            → Int64
/// - Decimal           → Float64
/// - Boolean           → Boolean
/// - Character, Text   → Utf8
pub fn map_to_arrow_type(kind: ColumnKind) -> DataType {
    match kind {
        ColumnKind::Unsigned => DataType::UInt64,
        ColumnKind::Signed => DataType::Int64,
        ColumnKind::Decimal => DataType::Float64,
        ColumnKind::Boolean => DataType::Boolean,
        ColumnKind::Character | ColumnKind::Text => DataType::Utf8,
    }
}

/// Build an ArrowSchema (inside an Arc) from a column table.
pub fn build_arrow_schema(cols: &[Column]) -> Arc<ArrowSchema> {
    let fields: Vec<ArrowField> = cols
        .iter()
        .map(|col| ArrowField::new(col.name, map_to_arrow_type(col.kind), /* nullable = */ true))
        .collect();

    Arc::new(ArrowSchema::new(fields))
}
