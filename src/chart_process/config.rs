//! Playfield geometry configuration.

use std::f64::consts::PI;

/// The number of lanes laid out by the planners. Only single mode is played.
pub const LANES: usize = 4;

/// Arrow rotations by lane: left, down, up, right.
pub const LANE_ANGLES: [f64; LANES] = [PI / 2.0, PI, 0.0, -PI / 2.0];

/// Geometry constants shared by the arrow planner, the scroll clock and the wave planner.
///
/// All lengths are in the draw surface units. The defaults lay out a 500x1000 canvas.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayfieldConfig {
    /// Width (and height) of an arrow.
    pub arrow_width: f64,
    /// Gap between neighboring lanes.
    pub arrow_gap: f64,
    /// Height of one measure. Must be divisible by every supported subdivision.
    pub height_per_chart_beat: u64,
    /// Beats in one measure.
    pub beats_per_chart_beat: u64,
    /// How much a waveform magnitude is scaled into a segment width.
    pub waveform_scale: f64,
    /// Waveform segments narrower than this are not planned.
    pub waveform_cutoff: f64,
    /// How many raw samples are bucketed into one waveform sample.
    pub waveform_chunk_size: usize,
    /// Smallest magnitude used for a waveform segment.
    pub geometry_epsilon: f64,
    /// Width of the draw surface.
    pub canvas_width: f64,
    /// Height of the draw surface.
    pub canvas_height: f64,
    /// Extra height above and below the canvas kept in the waveform window.
    pub window_margin: f64,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            arrow_width: 50.0,
            arrow_gap: 20.0,
            // Divisible by 3 and 4 so that triplets and 192nds land on integers.
            height_per_chart_beat: 12 * 80,
            beats_per_chart_beat: 4,
            waveform_scale: 80.0,
            waveform_cutoff: 70.0,
            waveform_chunk_size: 200,
            geometry_epsilon: 0.001,
            canvas_width: 500.0,
            canvas_height: 1000.0,
            window_margin: 100.0,
        }
    }
}

impl PlayfieldConfig {
    /// Height of one beat, a quarter of a measure by default.
    #[must_use]
    pub fn height_per_beat(&self) -> f64 {
        self.height_per_chart_beat as f64 / self.beats_per_chart_beat as f64
    }

    /// Horizontal centers of the lanes, centered around 0.
    #[must_use]
    pub fn lane_positions(&self) -> [f64; LANES] {
        let total_width = self.arrow_width * LANES as f64 + self.arrow_gap * (LANES - 1) as f64;
        let left = -total_width / 2.0 + self.arrow_width / 2.0;
        std::array::from_fn(|lane| left + lane as f64 * (self.arrow_width + self.arrow_gap))
    }
}
