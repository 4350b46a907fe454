use polars::prelude::{DataFrame, PolarsResult};

/// Columns of a table that survive the allow-list, in allow-list order.
pub fn effective_columns<S: AsRef<str>>(allow_list: &[S], actual: &[&str]) -> Vec<String> {
    allow_list
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| actual.contains(name))
        .map(str::to_string)
        .collect()
}

/// A table narrowed to its allow-listed columns
#[derive(Debug, Clone)]
pub struct Projection {
    pub frame: DataFrame,
    /// Row count of the source table. Kept separately because a frame with
    /// no selected columns reports a height of zero.
    pub rows: usize,
    pub kept: Vec<String>,
    pub dropped: Vec<String>,
}

/// Project `frame` onto the allow-listed columns it actually has.
pub fn project<S: AsRef<str>>(frame: &DataFrame, allow_list: &[S]) -> PolarsResult<Projection> {
    let actual = frame.get_column_names();
    let kept = effective_columns(allow_list, &actual);
    let dropped = actual
        .iter()
        .filter(|name| !kept.iter().any(|k| k.as_str() == **name))
        .map(|name| name.to_string())
        .collect();

    Ok(Projection {
        frame: frame.select(&kept)?,
        rows: frame.height(),
        kept,
        dropped,
    })
}
