//! JSON rendering of projected tables
//!
//! Every cell is mapped onto a closed set of JSON kinds: null, boolean,
//! number, string, and arrays of those scalars. List and fixed-size array
//! columns (embeddings, keyword lists) become plain JSON arrays. Anything
//! else is resolved through [`ValuePolicy`].

use crate::conversion::config::ValuePolicy;
use crate::error::{ExportErrorKind, ExportResult};
use crate::parser::projection::Projection;
use crate::parser::TableKind;
use polars::prelude::{AnyValue, Series};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// One output row, keyed in allow-list order
pub type Record = Map<String, Value>;

/// Shape of `communities.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunitiesDocument {
    pub communities: Vec<Record>,
}

/// Shape of `graph.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphDocument {
    pub nodes: Vec<Record>,
    pub edges: Vec<Record>,
}

/// Location of a cell, used for error reporting
#[derive(Debug, Clone, Copy)]
pub struct CellRef<'a> {
    pub table: TableKind,
    pub column: &'a str,
    pub row: usize,
}

/// JSON form of a scalar, or `None` if the kind has no JSON form.
fn scalar_to_json(value: &AnyValue) -> Option<Value> {
    let json = match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(*b),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int8(v) => Value::from(*v),
        AnyValue::Int16(v) => Value::from(*v),
        AnyValue::Int32(v) => Value::from(*v),
        AnyValue::Int64(v) => Value::from(*v),
        AnyValue::UInt8(v) => Value::from(*v),
        AnyValue::UInt16(v) => Value::from(*v),
        AnyValue::UInt32(v) => Value::from(*v),
        AnyValue::UInt64(v) => Value::from(*v),
        AnyValue::Float32(v) => float_to_json(*v as f64),
        AnyValue::Float64(v) => float_to_json(*v),
        _ => return None,
    };
    Some(json)
}

/// NaN and infinities have no JSON literal and are written as null.
fn float_to_json(v: f64) -> Value {
    Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
}

fn sequence_to_json(series: &Series) -> Option<Value> {
    let mut items = Vec::with_capacity(series.len());
    for idx in 0..series.len() {
        let item = series.get(idx).ok()?;
        items.push(scalar_to_json(&item)?);
    }
    Some(Value::Array(items))
}

/// Convert one cell to its JSON form.
pub fn normalize_value(
    value: &AnyValue,
    policy: ValuePolicy,
    cell: CellRef<'_>,
) -> ExportResult<Value> {
    let json = match value {
        AnyValue::List(series) => sequence_to_json(series),
        AnyValue::Array(series, _) => sequence_to_json(series),
        scalar => scalar_to_json(scalar),
    };

    match (json, policy) {
        (Some(json), _) => Ok(json),
        (None, ValuePolicy::Null) => Ok(Value::Null),
        (None, ValuePolicy::Stringify) => Ok(Value::String(value.to_string())),
        (None, ValuePolicy::Reject) => Err(ExportErrorKind::UnsupportedValue {
            table: cell.table,
            column: cell.column.to_string(),
            row: cell.row,
            dtype: value.dtype().to_string(),
        }
        .into()),
    }
}

/// Turn a projected table into one record per source row, in source order.
pub fn to_records(
    projection: &Projection,
    table: TableKind,
    policy: ValuePolicy,
) -> ExportResult<Vec<Record>> {
    let columns = projection.frame.get_columns();
    let mut records = Vec::with_capacity(projection.rows);

    for row in 0..projection.rows {
        let mut record = Record::new();
        for series in columns {
            let value = series.get(row)?;
            let cell = CellRef {
                table,
                column: series.name(),
                row,
            };
            record.insert(
                series.name().to_string(),
                normalize_value(&value, policy, cell)?,
            );
        }
        records.push(record);
    }

    Ok(records)
}

/// Pretty-print a document with two-space indentation
pub fn render_pretty<T: Serialize>(document: &T) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
