//! Chart processing: from a parsed [`Chart`](crate::sm::model::Chart) to things to draw.
//!
//! - [`beat`] decodes raw measures into per-lane note styles, tracking holds across measures.
//! - [`arrow`] lays the decoded notes out as positioned, colored arrows, with [`snap`] choosing
//!   the colors.
//! - [`scroll`] converts playback time into a vertical scroll offset.
//! - [`resource`] owns the renderer resources created for one plan.
//!
//! Geometry constants live in [`config::PlayfieldConfig`].

pub mod arrow;
pub mod beat;
pub mod config;
pub mod graphics;
pub mod prelude;
pub mod resource;
pub mod scroll;
pub mod snap;

use thiserror::Error;

use crate::sm::{
    fin_f64::FinF64,
    parse::{ParseErrorKind, ParseErrorWithLine},
};

/// The decoded notes of a level are inconsistent.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeError {
    /// A measure length is not a multiple of the lane count, or it contains a non-note symbol.
    #[error("measure {measure} has a malformed length {len}")]
    RaggedMeasure {
        /// The measure index in the level.
        measure: usize,
        /// The length of the raw measure.
        len: usize,
    },
    /// A hold started on a lane whose hold is still open.
    #[error("hold note started twice on lane {lane} at row {row} of measure {measure}")]
    HoldAlreadyStarted {
        /// The measure index in the level.
        measure: usize,
        /// The row index in the measure.
        row: usize,
        /// The lane index.
        lane: usize,
    },
    /// A hold ended on a lane with no open hold.
    #[error("hold note ended without start on lane {lane} at row {row} of measure {measure}")]
    HoldNeverStarted {
        /// The measure index in the level.
        measure: usize,
        /// The row index in the measure.
        row: usize,
        /// The lane index.
        lane: usize,
    },
}

/// A note position can not be laid out.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryError {
    /// `height * index / count` is not an integer.
    #[error("offset of row {index} of {count} in height {height} is not an integer")]
    InexactOffset {
        /// The measure height.
        height: u64,
        /// The row index.
        index: u64,
        /// The rows in the measure.
        count: u64,
    },
    /// No snap denominator was reached from the fraction.
    #[error("no snap found for {index}/{count}")]
    UnresolvedSnap {
        /// The row index.
        index: u64,
        /// The rows in the measure.
        count: u64,
    },
    /// The fraction has a zero denominator or an index past the end.
    #[error("invalid fraction {index}/{count}")]
    InvalidFraction {
        /// The row index.
        index: u64,
        /// The rows in the measure.
        count: u64,
    },
}

/// The chart uses something the player does not play.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnsupportedError {
    /// More than one `#BPMS` segment.
    #[error("{count} bpm segments found, variable bpm is not supported")]
    VariableBpm {
        /// The number of segments.
        count: usize,
    },
    /// No `#BPMS` segment.
    #[error("no bpm found")]
    MissingBpm,
    /// The tempo is zero or negative, so the chart never scrolls forward.
    #[error("bpm {bpm} is not positive")]
    NonPositiveBpm {
        /// The tempo.
        bpm: FinF64,
    },
}

/// An error from processing a chart.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ChartError {
    /// The chart text failed to parse.
    #[error("parse error: {0}")]
    Parse(#[from] ParseErrorWithLine),
    /// The notes of a level are inconsistent.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    /// A note can not be laid out.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
    /// The chart is not playable.
    #[error("unsupported: {0}")]
    Unsupported(#[from] UnsupportedError),
    /// The chart has no level at the index.
    #[error("level {index} is out of range, the chart has {len} levels")]
    LevelOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of levels.
        len: usize,
    },
}

/// The class of a failure in the player core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A directive or header line is malformed.
    Format,
    /// The chart lines appear in an impossible order.
    Structural,
    /// The notes or level selection are inconsistent.
    ChartIntegrity,
    /// A note position can not be laid out exactly.
    Geometry,
    /// The chart needs a feature which is not supported.
    UnsupportedMode,
}

impl ChartError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(error) => match error.content().kind() {
                ParseErrorKind::Format => ErrorKind::Format,
                ParseErrorKind::Structural => ErrorKind::Structural,
            },
            Self::Decode(_) | Self::LevelOutOfRange { .. } => ErrorKind::ChartIntegrity,
            Self::Geometry(_) => ErrorKind::Geometry,
            Self::Unsupported(_) => ErrorKind::UnsupportedMode,
        }
    }
}
