//! Record import, derived text columns and per-group word frequency.

use super::frame::{concat_batches, require_column, string_values, Record};
use crate::config::ColumnRoles;
use crate::corpus::word_frequency;
use crate::error::{CorpusError, Result};
use crate::nlp::LinguisticPipeline;
use crate::text::{Normalizer, Tokenizer};
use polars::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column holding the newline-joined text of a row.
pub const COMBINED: &str = "combined";
/// Column holding the normalized combined text.
pub const NORMALIZED: &str = "normalized";
/// Column holding the lemma tokens of the normalized text.
pub const TOKENS: &str = "tokens";

/// One ranked word of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupFrequencyRow {
    /// Group identifier, in its string form.
    pub group: String,
    /// The token.
    pub token: String,
    /// Occurrences within the group.
    pub count: usize,
}

/// Concatenates record batches and derives the text columns.
///
/// Returns `(tidy, raw)`: the frame with `combined`, `normalized` and
/// `tokens` appended, and the plain concatenation.
pub fn import_records(
    batches: &[Vec<Record>],
    pipeline: &dyn LinguisticPipeline,
    roles: &ColumnRoles,
) -> Result<(DataFrame, DataFrame)> {
    let raw = concat_batches(batches)?;
    log::info!(
        "Imported {} rows with {} columns from {} batches",
        raw.height(),
        raw.width(),
        batches.len()
    );
    let tidy = preprocess(raw.clone(), pipeline, roles)?;
    Ok((tidy, raw))
}

/// Appends `combined`, `normalized` and `tokens` to every row.
///
/// `combined` joins the string form of every non-metadata column with
/// newlines; `tokens` is a list column. Rows are processed in parallel;
/// order is preserved.
pub fn preprocess(
    mut frame: DataFrame,
    pipeline: &dyn LinguisticPipeline,
    roles: &ColumnRoles,
) -> Result<DataFrame> {
    for derived in [COMBINED, NORMALIZED, TOKENS] {
        if frame.column(derived).is_ok() {
            return Err(CorpusError::Validation(format!(
                "table already has a `{}` column",
                derived
            )));
        }
    }

    let texts = text_columns(&frame, roles)?
        .into_iter()
        .map(string_values)
        .collect::<Result<Vec<_>>>()?;
    let normalizer = Normalizer::default_config();
    let tokenizer = Tokenizer::new(pipeline);

    let derived = (0..frame.height())
        .into_par_iter()
        .map(|row| {
            let combined = texts
                .iter()
                .map(|column| column[row].as_str())
                .collect::<Vec<_>>()
                .join("\n");
            let normalized = normalizer.normalize(&combined);
            let tokens = tokenizer.tokenize(&normalized)?;
            Ok((combined, normalized, tokens))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut combined = Vec::with_capacity(derived.len());
    let mut normalized = Vec::with_capacity(derived.len());
    let mut tokens = Vec::with_capacity(derived.len());
    for (c, n, t) in derived {
        combined.push(c);
        normalized.push(n);
        tokens.push(Series::new("", t));
    }

    frame.with_column(Series::new(COMBINED, combined))?;
    frame.with_column(Series::new(NORMALIZED, normalized))?;
    frame.with_column(Series::new(TOKENS, tokens))?;
    log::debug!("Derived text columns for {} rows", frame.height());
    Ok(frame)
}

/// The columns whose text goes into `combined`.
fn text_columns<'a>(frame: &'a DataFrame, roles: &ColumnRoles) -> Result<Vec<&'a Series>> {
    let columns = frame.get_columns();
    match roles {
        ColumnRoles::Leading(n) => {
            if columns.len() < *n {
                return Err(CorpusError::Validation(format!(
                    "expected at least {} metadata columns, table has {}",
                    n,
                    columns.len()
                )));
            }
            Ok(columns[*n..].iter().collect())
        }
        ColumnRoles::Named(names) => {
            for name in names {
                require_column(frame, name)?;
            }
            Ok(columns
                .iter()
                .filter(|column| !names.iter().any(|n| n == column.name()))
                .collect())
        }
    }
}

/// Joined text of each group, groups in first-seen order, built in one pass.
fn group_texts(
    frame: &DataFrame,
    group_column: &str,
    text_column: &str,
) -> Result<Vec<(String, String)>> {
    let keys = string_values(require_column(frame, group_column)?)?;
    let texts = string_values(require_column(frame, text_column)?)?;

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for (key, text) in keys.into_iter().zip(texts) {
        match index.get(&key) {
            Some(&i) => groups[i].1.push(text),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![text]));
            }
        }
    }

    Ok(groups
        .into_iter()
        .map(|(key, texts)| (key, texts.join(" ")))
        .collect())
}

fn rank_group(
    group: &str,
    text: &str,
    amount: usize,
    pipeline: &dyn LinguisticPipeline,
) -> Result<Vec<GroupFrequencyRow>> {
    let frequency = word_frequency(pipeline, text, amount)?;
    log::debug!("Group {}: {} ranked words", group, frequency.len());
    Ok(frequency
        .into_iter()
        .map(|entry| GroupFrequencyRow {
            group: group.to_string(),
            token: entry.token,
            count: entry.count,
        })
        .collect())
}

/// Word frequency of each distinct group, groups in first-seen order.
///
/// A group's text is the space-joined `text_column` of its rows.
pub fn frequency_by_group(
    frame: &DataFrame,
    group_column: &str,
    text_column: &str,
    amount: usize,
    pipeline: &dyn LinguisticPipeline,
) -> Result<Vec<GroupFrequencyRow>> {
    let mut result = Vec::new();
    for (group, text) in group_texts(frame, group_column, text_column)? {
        result.extend(rank_group(&group, &text, amount, pipeline)?);
    }
    Ok(result)
}

/// Word frequency of each listed group, in list order.
///
/// Groups without rows contribute nothing.
pub fn frequency_for_groups<S: AsRef<str>>(
    frame: &DataFrame,
    group_column: &str,
    groups: &[S],
    text_column: &str,
    amount: usize,
    pipeline: &dyn LinguisticPipeline,
) -> Result<Vec<GroupFrequencyRow>> {
    let texts: HashMap<String, String> = group_texts(frame, group_column, text_column)?
        .into_iter()
        .collect();

    let mut result = Vec::new();
    for group in groups {
        if let Some(text) = texts.get(group.as_ref()) {
            result.extend(rank_group(group.as_ref(), text, amount, pipeline)?);
        }
    }
    Ok(result)
}

/// Reshapes group frequencies into a frame with `group`, `word`, `freq` columns.
pub fn group_frequency_table(rows: &[GroupFrequencyRow]) -> Result<DataFrame> {
    let groups: Vec<&str> = rows.iter().map(|r| r.group.as_str()).collect();
    let words: Vec<&str> = rows.iter().map(|r| r.token.as_str()).collect();
    let counts: Vec<u64> = rows.iter().map(|r| r.count as u64).collect();
    Ok(df!("group" => groups, "word" => words, "freq" => counts)?)
}
