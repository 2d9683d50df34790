// src/export/parquet.rs

use anyhow::{bail, Context, Result};
use arrow::{
    array::{
        ArrayRef, BooleanBuilder, Float64Builder, Int64Builder, StringBuilder, UInt64Builder,
    },
    record_batch::RecordBatch,
};
use parquet::{
    arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties,
};
use std::{io::Write, sync::Arc};
use tracing::debug;

use crate::schema::{build_arrow_schema, ColumnKind, Record, Value};

/// Rows per Arrow record batch / Parquet row group write.
const BATCH_ROWS: usize = 8_192;

/// Typed Arrow builder for one column.
enum ColumnBuilder {
    Unsigned(UInt64Builder),
    Signed(Int64Builder),
    Decimal(Float64Builder),
    Boolean(BooleanBuilder),
    Utf8(StringBuilder),
}

impl ColumnBuilder {
    fn new(kind: ColumnKind, rows: usize) -> Self {
        match kind {
            ColumnKind::Unsigned => ColumnBuilder::Unsigned(UInt64Builder::with_capacity(rows)),
            ColumnKind::Signed => ColumnBuilder::Signed(Int64Builder::with_capacity(rows)),
            ColumnKind::Decimal => ColumnBuilder::Decimal(Float64Builder::with_capacity(rows)),
            ColumnKind::Boolean => ColumnBuilder::Boolean(BooleanBuilder::with_capacity(rows)),
            ColumnKind::Character | ColumnKind::Text => {
                ColumnBuilder::Utf8(StringBuilder::with_capacity(rows, rows * 8))
            }
        }
    }

    fn append(&mut self, value: Value<'_>) -> Result<()> {
        match (self, value) {
            (ColumnBuilder::Unsigned(b), Value::Unsigned(v)) => b.append_option(v),
            (ColumnBuilder::Signed(b), Value::Signed(v)) => b.append_option(v),
            (ColumnBuilder::Decimal(b), Value::Decimal(v)) => b.append_option(v),
            (ColumnBuilder::Boolean(b), Value::Boolean(v)) => b.append_option(v),
            (ColumnBuilder::Utf8(b), Value::Text(v)) => b.append_option(v),
            (ColumnBuilder::Utf8(b), Value::Character(v)) => match v {
                Some(c) => b.append_value(c.encode_utf8(&mut [0u8; 4])),
                None => b.append_null(),
            },
            (_, value) => bail!("{} value does not match its column builder", value.kind()),
        }
        Ok(())
    }

    fn finish(self) -> ArrayRef {
        match self {
            ColumnBuilder::Unsigned(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Signed(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Decimal(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Boolean(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Utf8(mut b) => Arc::new(b.finish()),
        }
    }
}

/// Convert records into one Arrow batch whose schema follows `R::COLUMNS`.
pub fn to_record_batch<R: Record>(records: &[R]) -> Result<RecordBatch> {
    let schema = build_arrow_schema(R::COLUMNS);
    let mut builders: Vec<ColumnBuilder> = R::COLUMNS
        .iter()
        .map(|col| ColumnBuilder::new(col.kind, records.len()))
        .collect();

    for record in records {
        for ((builder, value), col) in builders.iter_mut().zip(record.values()).zip(R::COLUMNS) {
            builder
                .append(value)
                .with_context(|| format!("column `{}`", col.name))?;
        }
    }

    let arrays: Vec<ArrayRef> = builders.into_iter().map(ColumnBuilder::finish).collect();
    RecordBatch::try_new(schema, arrays).context("building record batch")
}

/// Write records as SNAPPY-compressed Parquet.
pub fn write_parquet<R, W>(records: &[R], out: W) -> Result<()>
where
    R: Record,
    W: Write + Send,
{
    let schema = build_arrow_schema(R::COLUMNS);
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer =
        ArrowWriter::try_new(out, schema, Some(props)).context("creating Arrow writer")?;

    for (idx, chunk) in records.chunks(BATCH_ROWS).enumerate() {
        let batch = to_record_batch(chunk)?;
        writer
            .write(&batch)
            .with_context(|| format!("writing batch {}", idx))?;
        debug!(batch = idx, rows = chunk.len(), "wrote parquet batch");
    }
    writer.close().context("closing parquet writer")?;
    Ok(())
}
