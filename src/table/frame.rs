//! Record batches to data frames.

use crate::error::{CorpusError, Result};
use polars::functions::concat_df_diagonal;
use polars::prelude::*;
use std::collections::{HashMap, HashSet};

/// One JSON object of a record batch, keys in insertion order.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Concatenates record batches into one frame.
///
/// Columns appear in first-seen order. A column whose type differs between
/// batches is kept as text. Missing and null cells become empty text.
pub fn concat_batches(batches: &[Vec<Record>]) -> Result<DataFrame> {
    let mut frames = batches
        .iter()
        .filter(|batch| !batch.is_empty())
        .map(|batch| batch_frame(batch))
        .collect::<Result<Vec<_>>>()?;

    if frames.is_empty() {
        return Ok(DataFrame::empty());
    }

    unify_dtypes(&mut frames)?;
    let frame = concat_df_diagonal(&frames)?;
    fill_missing(frame)
}

/// Builds one frame from a batch, inferring each column's type from its values.
fn batch_frame(records: &[Record]) -> Result<DataFrame> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names: Vec<&str> = Vec::new();
    for key in records.iter().flat_map(|r| r.keys()) {
        if seen.insert(key.as_str()) {
            names.push(key.as_str());
        }
    }

    let columns = names
        .iter()
        .map(|&name| {
            let values: Vec<AnyValue> = records
                .iter()
                .map(|r| r.get(name).map_or(AnyValue::Null, any_value))
                .collect();
            Series::from_any_values(name, &values, false)
        })
        .collect::<PolarsResult<Vec<_>>>()?;

    Ok(DataFrame::new(columns)?)
}

fn any_value(value: &serde_json::Value) -> AnyValue<'_> {
    match value {
        serde_json::Value::Null => AnyValue::Null,
        serde_json::Value::Bool(b) => AnyValue::Boolean(*b),
        serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => AnyValue::Int64(i),
            (None, Some(x)) => AnyValue::Float64(x),
            (None, None) => AnyValue::Null,
        },
        serde_json::Value::String(s) => AnyValue::String(s),
        other => AnyValue::StringOwned(other.to_string().into()),
    }
}

/// Casts every column whose type is not the same in all frames to text.
fn unify_dtypes(frames: &mut [DataFrame]) -> Result<()> {
    let mut seen: HashMap<String, DataType> = HashMap::new();
    let mut conflicting: Vec<String> = Vec::new();
    for frame in frames.iter() {
        for column in frame.get_columns() {
            match seen.get(column.name()) {
                Some(dtype) if dtype != column.dtype() => {
                    if !conflicting.iter().any(|c| c == column.name()) {
                        conflicting.push(column.name().to_string());
                    }
                }
                Some(_) => {}
                None => {
                    seen.insert(column.name().to_string(), column.dtype().clone());
                }
            }
        }
    }

    for frame in frames.iter_mut() {
        for name in &conflicting {
            let text = match frame.column(name) {
                Ok(column) => column.cast(&DataType::String)?,
                Err(_) => continue,
            };
            frame.with_column(text)?;
        }
    }
    Ok(())
}

/// Replaces nulls with empty text; affected columns become text columns.
fn fill_missing(mut frame: DataFrame) -> Result<DataFrame> {
    let filled = frame
        .get_columns()
        .iter()
        .filter(|column| column.null_count() > 0)
        .map(|column| Ok(Series::new(column.name(), string_values(column)?)))
        .collect::<Result<Vec<_>>>()?;

    for column in filled {
        frame.with_column(column)?;
    }
    Ok(frame)
}

/// String form of every cell of a column; nulls become empty strings.
pub fn string_values(column: &Series) -> Result<Vec<String>> {
    let text = column.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|cell| cell.unwrap_or_default().to_string())
        .collect())
}

/// Looks up a column, reporting a missing one as a validation error.
pub(crate) fn require_column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Series> {
    frame
        .column(name)
        .map_err(|_| CorpusError::Validation(format!("no column named `{}`", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(json: &str) -> Vec<Record> {
        serde_json::from_str(json).unwrap()
    }

    fn text_column(frame: &DataFrame, name: &str) -> Vec<String> {
        string_values(frame.column(name).unwrap()).unwrap()
    }

    #[test]
    fn test_concat_fills_missing_cells() {
        let frame = concat_batches(&[
            batch(r#"[{"a": 1, "b": 2, "c": "x"}]"#),
            batch(r#"[{"a": 3, "b": 4, "c": "y", "d": "z"}]"#),
        ])
        .unwrap();

        assert_eq!(frame.get_column_names(), &["a", "b", "c", "d"]);
        assert_eq!(frame.height(), 2);
        assert_eq!(text_column(&frame, "d"), vec!["", "z"]);
        assert_eq!(frame.column("a").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_explicit_null_becomes_empty_text() {
        let frame = concat_batches(&[batch(r#"[{"a": 1, "c": null}, {"a": 2, "c": "y"}]"#)]).unwrap();
        let c = frame.column("c").unwrap();
        assert_eq!(c.null_count(), 0);
        assert_eq!(c.str().unwrap().get(0), Some(""));
    }

    #[test]
    fn test_conflicting_types_become_text() {
        let frame = concat_batches(&[
            batch(r#"[{"id": 1}]"#),
            batch(r#"[{"id": "s-2"}]"#),
        ])
        .unwrap();
        assert_eq!(frame.column("id").unwrap().dtype(), &DataType::String);
        assert_eq!(text_column(&frame, "id"), vec!["1", "s-2"]);
    }

    #[test]
    fn test_no_batches() {
        let frame = concat_batches(&[Vec::new()]).unwrap();
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(), 0);
    }

    #[test]
    fn test_require_column() {
        let frame = concat_batches(&[batch(r#"[{"a": 1}]"#)]).unwrap();
        assert!(require_column(&frame, "a").is_ok());
        assert!(matches!(
            require_column(&frame, "b"),
            Err(CorpusError::Validation(_))
        ));
    }
}
