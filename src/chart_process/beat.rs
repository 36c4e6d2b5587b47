//! Decoding raw measures into per-lane note styles.

use crate::sm::prelude::*;

use super::{ChartError, DecodeError, config::LANES};

/// One measure of a single-mode level: for each of the 4 lanes, a style per subdivision row.
pub type Beat = [Vec<NoteStyle>; LANES];

/// All measures of a level in order.
pub type Beats = Vec<Beat>;

/// Where a note is in the level.
#[derive(Debug, Clone, Copy)]
struct NotePos {
    measure: usize,
    row: usize,
    lane: usize,
}

/// Per-lane hold tracking, carried across measures.
#[derive(Debug, Clone, Copy, Default)]
struct HoldTracker {
    open: [bool; LANES],
}

impl HoldTracker {
    fn apply(&mut self, pos: NotePos, symbol: NoteSymbol) -> Result<NoteStyle, DecodeError> {
        let NotePos { measure, row, lane } = pos;
        let open = &mut self.open[lane];
        let style = match symbol.style() {
            NoteStyle::Empty if *open => NoteStyle::Holding,
            style => style,
        };
        match style {
            NoteStyle::HoldStart if *open => {
                return Err(DecodeError::HoldAlreadyStarted { measure, row, lane });
            }
            NoteStyle::HoldStart => *open = true,
            NoteStyle::HoldEnd if !*open => {
                return Err(DecodeError::HoldNeverStarted { measure, row, lane });
            }
            NoteStyle::HoldEnd => *open = false,
            _ => {}
        }
        Ok(style)
    }
}

/// Decodes the raw measures of a single-mode level.
///
/// Lane `d`'s row `r` of a measure is the character at `d + 4 * r`.
///
/// # Errors
///
/// - [`DecodeError::RaggedMeasure`] if a measure length is not a multiple of 4, or it holds a non-note symbol.
/// - [`DecodeError::HoldAlreadyStarted`] / [`DecodeError::HoldNeverStarted`] on broken holds.
pub fn decode_measures<S: AsRef<str>>(measures: &[S]) -> Result<Beats, DecodeError> {
    let mut holds = HoldTracker::default();
    measures
        .iter()
        .enumerate()
        .map(|(measure, raw)| {
            let raw = raw.as_ref().as_bytes();
            if raw.len() % LANES != 0 {
                return Err(DecodeError::RaggedMeasure {
                    measure,
                    len: raw.len(),
                });
            }
            let mut beat: Beat = Default::default();
            for (lane, column) in beat.iter_mut().enumerate() {
                for (row, &byte) in raw.iter().skip(lane).step_by(LANES).enumerate() {
                    let symbol = NoteSymbol::from_byte(byte).ok_or(DecodeError::RaggedMeasure {
                        measure,
                        len: raw.len(),
                    })?;
                    column.push(holds.apply(NotePos { measure, row, lane }, symbol)?);
                }
            }
            Ok(beat)
        })
        .collect()
}

/// Decodes the level at `level_index` of the chart.
///
/// Double levels are not laid out and decode to no beats.
///
/// # Errors
///
/// - [`ChartError::LevelOutOfRange`] if there is no such level.
/// - [`ChartError::Decode`] from [`decode_measures`].
pub fn decode_beats(chart: &Chart, level_index: usize) -> Result<Beats, ChartError> {
    let level = chart
        .level(level_index)
        .ok_or(ChartError::LevelOutOfRange {
            index: level_index,
            len: chart.levels.len(),
        })?;
    match level.level_type {
        LevelType::Double => Ok(Vec::new()),
        LevelType::Single => Ok(decode_measures(&level.notes)?),
    }
}
