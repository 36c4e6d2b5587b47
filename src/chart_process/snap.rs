//! Snap classification of a note by where it falls within its measure.

use crate::sm::{math::gcd, note::NoteStyle};

use super::{
    GeometryError,
    graphics::{HOLD_COLOR, MINE_COLOR, Rgb},
};

/// How many times a divisor is doubled while looking for a snap.
pub const MAX_DOUBLINGS: u32 = 10;

/// The rhythmic snap of a note, named by the note length it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Snap {
    /// 4th
    Q4th,
    /// 8th
    Q8th,
    /// 12th
    Q12th,
    /// 16th
    Q16th,
    /// 24th
    Q24th,
    /// 32nd
    Q32nd,
    /// 48th
    Q48th,
    /// 64th
    Q64th,
    /// 96th
    Q96th,
    /// 192nd
    Q192nd,
}

impl Snap {
    /// Looks up the snap whose denominator is exactly `divisor`.
    #[must_use]
    pub const fn from_divisor(divisor: u64) -> Option<Self> {
        Some(match divisor {
            4 => Self::Q4th,
            8 => Self::Q8th,
            12 => Self::Q12th,
            16 => Self::Q16th,
            24 => Self::Q24th,
            32 => Self::Q32nd,
            48 => Self::Q48th,
            64 => Self::Q64th,
            96 => Self::Q96th,
            192 => Self::Q192nd,
            _ => return None,
        })
    }

    /// The denominator of this snap.
    #[must_use]
    pub const fn divisor(self) -> u64 {
        match self {
            Self::Q4th => 4,
            Self::Q8th => 8,
            Self::Q12th => 12,
            Self::Q16th => 16,
            Self::Q24th => 24,
            Self::Q32nd => 32,
            Self::Q48th => 48,
            Self::Q64th => 64,
            Self::Q96th => 96,
            Self::Q192nd => 192,
        }
    }

    /// The arrow color of this snap. 96th and 192nd share the 64th color.
    #[must_use]
    pub const fn color(self) -> Rgb {
        Rgb::from_hex(match self {
            Self::Q4th => 0xe92400,
            Self::Q8th => 0x006de9,
            Self::Q12th => 0x7100e9,
            Self::Q16th => 0xebc800,
            Self::Q24th => 0xee00e9,
            Self::Q32nd => 0xe96400,
            Self::Q48th => 0x00b8ea,
            Self::Q64th | Self::Q96th | Self::Q192nd => 0x6d915b,
        })
    }
}

/// Classifies the subdivision `index` of `count` in a measure.
///
/// The fraction is reduced to lowest terms (an index of 0 reads as a whole measure), then its
/// denominator is doubled until it names a [`Snap`].
///
/// # Errors
///
/// - [`GeometryError::InvalidFraction`] if `count` is 0 or `index >= count`.
/// - [`GeometryError::UnresolvedSnap`] if no snap is reached within [`MAX_DOUBLINGS`] doublings.
pub fn calculate_snap(index: u64, count: u64) -> Result<Snap, GeometryError> {
    if count == 0 || index >= count {
        return Err(GeometryError::InvalidFraction { index, count });
    }
    let divisor = count / gcd(index, count);
    (0..=MAX_DOUBLINGS)
        .find_map(|doublings| Snap::from_divisor(divisor << doublings))
        .ok_or(GeometryError::UnresolvedSnap { index, count })
}

/// The arrow color of a note.
///
/// Holds and mines have fixed colors; others are colored by [`calculate_snap`].
///
/// # Errors
///
/// Fails as [`calculate_snap`] for taps.
pub fn calculate_color(style: NoteStyle, index: u64, count: u64) -> Result<Rgb, GeometryError> {
    if style.is_hold() {
        return Ok(HOLD_COLOR);
    }
    if style == NoteStyle::Mine {
        return Ok(MINE_COLOR);
    }
    calculate_snap(index, count).map(Snap::color)
}
