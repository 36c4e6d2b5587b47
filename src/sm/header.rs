//! Metadata lines: `#KEY:value;` directives and `value:` section headers.

use super::{
    fin_f64::FinF64,
    model::{Bpm, Difficulty},
    note::LevelType,
    parse::{ParseError, Result},
};

/// A `#KEY:value;` line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Directive<'a> {
    Title(&'a str),
    Artist(&'a str),
    Bpms(Vec<Bpm>),
    Offset(FinF64),
    /// `#NOTES:` opens the header lines of a level, which are read on their own.
    Notes,
    Unknown(&'a str),
}

impl<'a> Directive<'a> {
    /// Parses a trimmed line starting with `#`.
    ///
    /// The key runs up to the first `:`, and the value from there up to the first `;` or the line end.
    pub(crate) fn parse(line: &'a str) -> Result<Self> {
        let key_end = line
            .find(':')
            .ok_or(ParseError::MissingDirectiveSeparator)?;
        let key = &line[1..key_end];
        let value_end = line.find(';').unwrap_or(line.len());
        let value = line.get(key_end + 1..value_end).unwrap_or("");
        Ok(match key {
            "TITLE" => Self::Title(value),
            "ARTIST" => Self::Artist(value),
            "BPMS" => Self::Bpms(parse_bpms(value)?),
            "OFFSET" => Self::Offset(value.parse().map_err(|()| ParseError::InvalidOffset {
                value: value.to_owned(),
            })?),
            "NOTES" => Self::Notes,
            _ => Self::Unknown(key),
        })
    }
}

/// Parses comma separated `beat=bpm` pairs. Every pair must split into exactly two finite numbers.
pub(crate) fn parse_bpms(value: &str) -> Result<Vec<Bpm>> {
    let malformed = || ParseError::MalformedBpms {
        value: value.to_owned(),
    };
    value
        .split(',')
        .map(|pair| {
            let mut parts = pair.split('=');
            let (Some(beat), Some(bpm), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(malformed());
            };
            let beat: FinF64 = beat.parse().map_err(|()| malformed())?;
            let bpm: FinF64 = bpm.parse().map_err(|()| malformed())?;
            Ok(Bpm { beat, bpm })
        })
        .collect()
}

/// A `value:` line inside the metadata state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionHeader<'a> {
    Mode(LevelType),
    Difficulty(Difficulty),
    /// Descriptions, meters, radar values and unsupported modes.
    Other(&'a str),
}

impl<'a> SectionHeader<'a> {
    /// Parses a trimmed line ending with `:`, which must contain exactly one `:`.
    pub(crate) fn parse(line: &'a str) -> Result<Self> {
        let segments = line.split(':').count();
        if segments != 2 {
            return Err(ParseError::MalformedSectionHeader { segments });
        }
        let value = &line[..line.len() - 1];
        if let Some(mode) = LevelType::from_mode_name(value) {
            return Ok(Self::Mode(mode));
        }
        if let Some(difficulty) = Difficulty::from_label(value) {
            return Ok(Self::Difficulty(difficulty));
        }
        Ok(Self::Other(value))
    }
}

/// Whether a header value names a play mode, such as `pump-single` or `dance-solo`.
pub(crate) fn looks_like_mode(value: &str) -> bool {
    value.contains('-') && value.chars().all(|c| c.is_ascii_lowercase() || c == '-')
}

/// Reads a leading integer: optional whitespace, an optional sign, then at least one digit.
/// Anything after the digits is ignored, so the meter line `  5:` reads as `5`.
pub(crate) fn parse_leading_int(line: &str) -> Option<i64> {
    let line = line.trim_start();
    let sign_len = usize::from(line.starts_with(['+', '-']));
    let digits_len = line[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len() - sign_len);
    if digits_len == 0 {
        return None;
    }
    line[..sign_len + digits_len].parse().ok()
}
