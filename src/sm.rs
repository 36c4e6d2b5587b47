//! The parser module of StepMania chart text (.sm).
//!
//! The text is read line by line, with no separate lexing phase. Directives (`#TITLE:...;`)
//! give the metadata, `dance-single:` / `Hard:` header lines open a level, and the fixed-width
//! note rows up to the closing `;` become its raw measures.
//!
//! `parse` module provides the line parser which produces [`model::Chart`] and its warnings.
//!
//! `model` module provides the parsed chart, which keeps measures as raw row strings. Decoding
//! them into note styles is done by [`crate::chart_process`].
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - Do not support editing chart source text.
//! - Interpret only `#TITLE`, `#ARTIST`, `#BPMS` and `#OFFSET`. Other directives are reported as warnings.
//! - Stop at the first malformed line, with its line index.

pub mod fin_f64;
pub(crate) mod header;
pub mod math;
pub mod mixin;
pub mod model;
pub mod note;
pub mod parse;
pub mod prelude;

pub use self::parse::{ChartOutput, parse_chart};

/// Parses the chart text, treating a missing text like an empty one.
///
/// # Errors
///
/// See [`parse_chart`].
pub fn parse_song(source: Option<&str>) -> Result<ChartOutput, parse::ParseErrorWithLine> {
    parse_chart(source.unwrap_or_default())
}
