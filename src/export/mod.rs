// src/export/mod.rs
pub mod parquet;

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fmt, io::Write};

use crate::schema::{ColumnKind, Record, Version};

pub use self::parquet::{to_record_batch, write_parquet};

/// Write one JSON object per record, newline separated.
pub fn write_json_lines<R, W>(records: &[R], mut out: W) -> Result<()>
where
    R: Record + Serialize,
    W: Write,
{
    for (idx, record) in records.iter().enumerate() {
        serde_json::to_writer(&mut out, record)
            .with_context(|| format!("serializing record {}", idx))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub name: &'static str,
    pub kind: ColumnKind,
    /// Records in which this column is present.
    pub present: usize,
}

/// Per-column presence counts over a set of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub version: Version,
    pub records: usize,
    pub columns: Vec<ColumnSummary>,
}

pub fn summarize<R: Record>(records: &[R]) -> Summary {
    let mut present = vec![0usize; R::ELEMENT_COUNT];
    for record in records {
        for (count, value) in present.iter_mut().zip(record.values()) {
            if value.is_present() {
                *count += 1;
            }
        }
    }

    Summary {
        version: R::VERSION,
        records: records.len(),
        columns: R::COLUMNS
            .iter()
            .zip(present)
            .map(|(col, present)| ColumnSummary {
                name: col.name,
                kind: col.kind,
                present,
            })
            .collect(),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ATHYG {}: {} records", self.version, self.records)?;
        for col in &self.columns {
            writeln!(
                f,
                "  {:<10} {:<9} {:>10} present",
                col.name, col.kind, col.present
            )?;
        }
        Ok(())
    }
}
