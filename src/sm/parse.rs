//! Parsing [`Chart`] from the chart text, line by line.
//!
//! The parser walks the lines in one of two states. In the metadata state it reads
//! directives, mode and difficulty headers, and waits for the first note row of a level.
//! In the notes state it collects measures until the `;` which closes the level.

use std::mem;

use thiserror::Error;

#[cfg(feature = "diagnostics")]
use crate::diagnostics::{SimpleSource, ToAriadne, build_report};
#[cfg(feature = "diagnostics")]
use ariadne::{Color, Report, ReportKind};

use super::{
    header::{Directive, SectionHeader, looks_like_mode, parse_leading_int},
    mixin::{SourceLineMixin, SourceLineMixinExt},
    model::{Chart, Level},
    note::LevelType,
};

/// An error occurred when parsing the chart text. Parsing stops at the first one.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// A line starting with `#` had no `:`.
    #[error("expected a line starting with # to contain :")]
    MissingDirectiveSeparator,
    /// A `#BPMS` pair was not two finite numbers joined by `=`.
    #[error("wrong bpms format `{value}`")]
    MalformedBpms {
        /// The whole `#BPMS` value.
        value: String,
    },
    /// `#OFFSET` was not a finite number.
    #[error("wrong offset format `{value}`")]
    InvalidOffset {
        /// The `#OFFSET` value.
        value: String,
    },
    /// A header line ending with `:` had more than one `:`.
    #[error("splitting by ':' returned {segments} segments instead of two")]
    MalformedSectionHeader {
        /// The number of segments.
        segments: usize,
    },
    /// A note row appeared before any difficulty header.
    #[error("no difficulty was set")]
    NoDifficulty,
}

/// The class of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A directive or header line is malformed.
    Format,
    /// The lines are well-formed but appear in an impossible order.
    Structural,
}

impl ParseError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::NoDifficulty => ParseErrorKind::Structural,
            Self::MissingDirectiveSeparator
            | Self::MalformedBpms { .. }
            | Self::InvalidOffset { .. }
            | Self::MalformedSectionHeader { .. } => ParseErrorKind::Format,
        }
    }
}

/// Type alias of `core::result::Result<T, ParseError>`
pub(crate) type Result<T> = core::result::Result<T, ParseError>;

/// A parse error with the line it occurred on.
pub type ParseErrorWithLine = SourceLineMixin<ParseError>;

/// Something suspicious which did not stop parsing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// A directive key which is not interpreted.
    #[error("unknown directive #{key}")]
    UnknownDirective {
        /// The key between `#` and `:`.
        key: String,
    },
    /// A mode header which is not supported. The previous mode stays in effect.
    #[error("unsupported mode {name}")]
    UnsupportedMode {
        /// The mode name.
        name: String,
    },
    /// The input ended inside a note block. The level was dropped.
    #[error("level {difficulty} was not terminated by ; and was dropped")]
    UnterminatedLevel {
        /// The difficulty label of the dropped level.
        difficulty: String,
    },
}

/// A parse warning with the line it points at.
pub type ParseWarningWithLine = SourceLineMixin<ParseWarning>;

/// Chart parse output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct ChartOutput {
    /// The chart, or `None` when no non-empty `#TITLE` was found.
    pub chart: Option<Chart>,
    /// Warnings that occurred during parsing.
    pub warnings: Vec<ParseWarningWithLine>,
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    start: usize,
}

impl Line<'_> {
    fn span(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.text.len()
    }
}

#[derive(Debug)]
enum State {
    Metadata,
    Notes {
        level: Level,
        /// The line index where the level's first row was.
        opened_at: usize,
    },
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    chart: Chart,
    warnings: Vec<ParseWarningWithLine>,
    state: State,
    mode: Option<LevelType>,
    difficulty: Option<String>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        let mut start = 0;
        let lines = source
            .split('\n')
            .map(|text| {
                let line = Line { text, start };
                start += text.len() + 1;
                line
            })
            .collect();
        Self {
            lines,
            chart: Chart::default(),
            warnings: Vec::new(),
            state: State::Metadata,
            mode: None,
            difficulty: None,
        }
    }

    fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).map(|line| line.text)
    }

    fn error(&self, error: ParseError, index: usize) -> ParseErrorWithLine {
        error.into_wrapper_line(index, self.lines[index].span())
    }

    fn warn(&mut self, warning: ParseWarning, index: usize) {
        let span = self.lines[index].span();
        self.warnings.push(warning.into_wrapper_line(index, span));
    }

    fn parse(mut self) -> core::result::Result<ChartOutput, ParseErrorWithLine> {
        let mut index = 0;
        while index < self.lines.len() {
            index += self.step(index).map_err(|e| self.error(e, index))?;
        }
        if let State::Notes { level, opened_at } = mem::replace(&mut self.state, State::Metadata) {
            self.warn(
                ParseWarning::UnterminatedLevel {
                    difficulty: level.difficulty,
                },
                opened_at,
            );
        }
        let chart = (!self.chart.title.is_empty()).then_some(self.chart);
        Ok(ChartOutput {
            chart,
            warnings: self.warnings,
        })
    }

    /// Processes the line at `index` and returns how many lines were consumed, at least 1.
    fn step(&mut self, index: usize) -> Result<usize> {
        let text: &'a str = self.lines[index].text;
        let line = text.trim();
        if let State::Metadata = self.state {
            if line.starts_with('#') {
                self.directive(line, index)?;
                return Ok(1);
            }
            if line.ends_with(':') {
                return self.section_header(line, index);
            }
            let Some(mode) = self.mode.filter(|mode| mode.is_note_row(line)) else {
                return Ok(1);
            };
            let difficulty = self.difficulty.clone().ok_or(ParseError::NoDifficulty)?;
            self.state = State::Notes {
                level: Level::new(mode, difficulty),
                opened_at: index,
            };
        }
        Ok(self.notes(line, index))
    }

    fn directive(&mut self, line: &str, index: usize) -> Result<()> {
        match Directive::parse(line)? {
            Directive::Title(title) => self.chart.title = title.to_owned(),
            Directive::Artist(artist) => self.chart.artist = artist.to_owned(),
            Directive::Bpms(bpms) => self.chart.bpms.extend(bpms),
            Directive::Offset(offset) => self.chart.offset = offset,
            Directive::Notes => {}
            Directive::Unknown(key) => {
                let key = key.to_owned();
                self.warn(ParseWarning::UnknownDirective { key }, index);
            }
        }
        Ok(())
    }

    fn section_header(&mut self, line: &str, index: usize) -> Result<usize> {
        match SectionHeader::parse(line)? {
            SectionHeader::Mode(mode) => self.mode = Some(mode),
            SectionHeader::Difficulty(difficulty) => {
                // A rating line may follow the label, such as `Hard:` then `  9:`.
                if let Some(rating) = self.line(index + 1).and_then(parse_leading_int) {
                    self.difficulty = Some(format!("{difficulty} - {rating}"));
                    return Ok(2);
                }
                self.difficulty = Some(difficulty.to_string());
            }
            SectionHeader::Other(value) => {
                if looks_like_mode(value) {
                    let name = value.to_owned();
                    self.warn(ParseWarning::UnsupportedMode { name }, index);
                }
            }
        }
        Ok(1)
    }

    fn notes(&mut self, line: &str, index: usize) -> usize {
        let State::Notes { level, .. } = &mut self.state else {
            return 1;
        };
        if line == ";" {
            if let State::Notes { level, .. } = mem::replace(&mut self.state, State::Metadata) {
                self.chart.levels.push(level);
            }
            return 1;
        }
        let mode = level.level_type;
        let rows = self.lines[index..]
            .iter()
            .take_while(|row| mode.is_note_row(row.text))
            .map(|row| row.text.trim());
        let measure: String = rows.collect();
        if measure.is_empty() {
            return 1;
        }
        let consumed = measure.len() / mode.lanes();
        level.notes.push(measure);
        consumed
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for ParseErrorWithLine {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        build_report(
            src,
            ReportKind::Error,
            self.range(),
            "parse error",
            self.content(),
            Color::Red,
        )
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for ParseWarningWithLine {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        build_report(
            src,
            ReportKind::Warning,
            self.range(),
            "parse warning",
            self.content(),
            Color::Blue,
        )
    }
}

/// Parses the chart text.
///
/// Returns `Ok` with `chart: None` when the text has no non-empty `#TITLE`.
///
/// # Errors
///
/// Fails on the first malformed directive, malformed `#BPMS` pair, malformed header line,
/// or note row met before any difficulty was set. The error carries the line index.
pub fn parse_chart(source: &str) -> core::result::Result<ChartOutput, ParseErrorWithLine> {
    Parser::new(source).parse()
}
