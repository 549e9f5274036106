//! Tabular aggregation over `polars` data frames: record batches, derived
//! text columns and per-group frequencies.

mod aggregate;
mod frame;

pub use aggregate::{
    frequency_by_group, frequency_for_groups, group_frequency_table, import_records, preprocess,
    GroupFrequencyRow, COMBINED, NORMALIZED, TOKENS,
};
pub use frame::{concat_batches, string_values, Record};
