//! Note symbols of the note block and the styles they decode into.

/// The play mode of a level, declared by a `dance-single:` or `dance-double:` header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LevelType {
    /// One pad with 4 lanes.
    Single,
    /// Two pads with 8 lanes.
    Double,
}

impl LevelType {
    /// Parses the mode name used by section headers.
    #[must_use]
    pub fn from_mode_name(name: &str) -> Option<Self> {
        match name {
            "dance-single" => Some(Self::Single),
            "dance-double" => Some(Self::Double),
            _ => None,
        }
    }

    /// The number of lanes, which is also the width of a note row.
    #[must_use]
    pub const fn lanes(self) -> usize {
        match self {
            Self::Single => 4,
            Self::Double => 8,
        }
    }

    /// Whether `line` is a note row of this mode after trimming.
    ///
    /// A note row has exactly [`Self::lanes`] characters, all of them [`NoteSymbol`]s.
    #[must_use]
    pub fn is_note_row(self, line: &str) -> bool {
        let line = line.trim();
        line.len() == self.lanes() && line.bytes().all(|b| NoteSymbol::from_byte(b).is_some())
    }
}

impl std::fmt::Display for LevelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// A character which may appear in a note row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteSymbol {
    /// `0`
    Empty,
    /// `1`
    Tap,
    /// `2`
    HoldStart,
    /// `3`
    HoldEnd,
    /// `4`, a roll. It is treated as a hold.
    RollStart,
    /// `M`
    Mine,
}

impl NoteSymbol {
    /// Converts a byte of a note row.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            b'0' => Self::Empty,
            b'1' => Self::Tap,
            b'2' => Self::HoldStart,
            b'3' => Self::HoldEnd,
            b'4' => Self::RollStart,
            b'M' => Self::Mine,
            _ => return None,
        })
    }

    /// The style this symbol stands for before hold tracking is applied.
    #[must_use]
    pub const fn style(self) -> NoteStyle {
        match self {
            Self::Empty => NoteStyle::Empty,
            Self::Tap => NoteStyle::Tap,
            Self::HoldStart | Self::RollStart => NoteStyle::HoldStart,
            Self::HoldEnd => NoteStyle::HoldEnd,
            Self::Mine => NoteStyle::Mine,
        }
    }
}

/// A decoded note at one subdivision of one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NoteStyle {
    /// Nothing here.
    Empty,
    /// A single step.
    Tap,
    /// The head of a hold.
    HoldStart,
    /// Inside a hold. Never read from the source, it fills the span between start and end.
    Holding,
    /// The tail of a hold.
    HoldEnd,
    /// A mine, which must not be stepped on.
    Mine,
}

impl NoteStyle {
    /// Whether this is a part of a hold.
    #[must_use]
    pub const fn is_hold(self) -> bool {
        matches!(self, Self::HoldStart | Self::Holding | Self::HoldEnd)
    }
}

impl std::fmt::Display for NoteStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Tap => "tap",
            Self::HoldStart => "holdstart",
            Self::Holding => "holding",
            Self::HoldEnd => "holdend",
            Self::Mine => "mine",
        };
        f.write_str(name)
    }
}
