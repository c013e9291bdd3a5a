//! Table assembly for TDS statements.
//!
//! Builds the final polars [`DataFrame`](polars::prelude::DataFrame) from
//! the records produced by `tds-ingest`, and exposes [`convert`] which runs
//! the whole pipeline.

pub mod assemble;
pub mod convert;
pub mod numeric;
pub mod polars_utils;

pub use assemble::{AssembleOptions, assemble, unique_column_names};
pub use convert::{Conversion, convert, convert_file};
pub use numeric::{format_amount, format_numeric, parse_amount};
pub use polars_utils::{any_to_f64, any_to_string, column_total};
