//! The parsed chart model.

use itertools::Itertools;

use super::{fin_f64::FinF64, note::LevelType};

/// A tempo segment of `#BPMS`, effective from `beat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bpm {
    /// The beat number where the tempo starts.
    pub beat: FinF64,
    /// Beats per minute.
    pub bpm: FinF64,
}

impl From<(FinF64, FinF64)> for Bpm {
    fn from((beat, bpm): (FinF64, FinF64)) -> Self {
        Self { beat, bpm }
    }
}

impl std::fmt::Display for Bpm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.beat, self.bpm)
    }
}

/// The difficulty labels recognized as section headers, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// `Beginner`
    Beginner,
    /// `Easy`
    Easy,
    /// `Medium`
    Medium,
    /// `Hard`
    Hard,
    /// `Challenge`
    Challenge,
}

impl Difficulty {
    /// All labels in order.
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Challenge,
    ];

    /// The label as written in the chart.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Challenge => "Challenge",
        }
    }

    /// Finds the difficulty for an exact label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A playable level of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    /// The play mode.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub level_type: LevelType,
    /// The difficulty label, suffixed with ` - <rating>` when a rating line followed it.
    pub difficulty: String,
    /// Raw measures. Each is the concatenation of its note rows, so its length is a multiple of the lane count.
    pub notes: Vec<String>,
}

impl Level {
    /// Creates an empty level.
    #[must_use]
    pub const fn new(level_type: LevelType, difficulty: String) -> Self {
        Self {
            level_type,
            difficulty,
            notes: Vec::new(),
        }
    }

    /// The number of rows in each measure.
    pub fn rows_per_measure(&self) -> impl Iterator<Item = usize> + '_ {
        let lanes = self.level_type.lanes();
        self.notes.iter().map(move |measure| measure.len() / lanes)
    }
}

/// A parsed chart: metadata and all levels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// `#TITLE`
    pub title: String,
    /// `#ARTIST`
    pub artist: String,
    /// `#OFFSET` in seconds, may be negative.
    pub offset: FinF64,
    /// `#BPMS` in the written order.
    pub bpms: Vec<Bpm>,
    /// Levels in the order their note blocks were closed.
    pub levels: Vec<Level>,
}

impl Chart {
    /// Gets the level at `index`.
    #[must_use]
    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Formats the tempo list like `0=120,64=180`.
    #[must_use]
    pub fn bpms_display(&self) -> String {
        self.bpms.iter().join(",")
    }
}
