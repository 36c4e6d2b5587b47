//! Defines for drawing: colors and arrow shapes.

use crate::sm::note::NoteStyle;

/// A 24-bit color, displayed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    /// Formats as `#rrggbb`.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        self.to_string()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color of any part of a hold.
pub const HOLD_COLOR: Rgb = Rgb::from_hex(0x87d95f);
/// Color of mines.
pub const MINE_COLOR: Rgb = Rgb::from_hex(0xff2b00);
/// Color of the fixed receptor arrows.
pub const RECEPTOR_COLOR: Rgb = Rgb::from_hex(0xffff00);
/// Color of waveform segments.
pub const WAVE_COLOR: Rgb = Rgb::from_hex(0xe96480);

/// The mesh a renderer builds for an arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrowShape {
    /// A triangle pointing along the lane angle.
    Triangle,
    /// A unit square, drawn for hold parts.
    Square,
    /// A circle, drawn for mines.
    Circle,
}

impl ArrowShape {
    /// The shape for a style. Empty has nothing to draw.
    #[must_use]
    pub const fn of(style: NoteStyle) -> Option<Self> {
        match style {
            NoteStyle::Empty => None,
            NoteStyle::Tap => Some(Self::Triangle),
            NoteStyle::HoldStart | NoteStyle::Holding | NoteStyle::HoldEnd => Some(Self::Square),
            NoteStyle::Mine => Some(Self::Circle),
        }
    }
}
