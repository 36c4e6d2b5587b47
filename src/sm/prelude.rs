//! Prelude module for the sm module.
//!
//! You can use `use sm_rs::sm::prelude::*;` to import all chart types at once.

pub use super::{
    ChartOutput,
    fin_f64::FinF64,
    mixin::{SourceLineMixin, SourceLineMixinExt},
    model::{Bpm, Chart, Difficulty, Level},
    note::{LevelType, NoteStyle, NoteSymbol},
    parse::{
        ParseError, ParseErrorKind, ParseErrorWithLine, ParseWarning, ParseWarningWithLine,
        parse_chart,
    },
    parse_song,
};
