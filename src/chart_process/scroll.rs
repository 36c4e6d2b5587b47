//! Converting playback time into the vertical scroll offset.
//!
//! Offsets share units with [`ArrowPlan::y`](super::arrow::ArrowPlan::y): scrolling by the
//! offset at time `t` brings the arrows due at `t` onto the receptors at `y = 0`.

use crate::{sm::model::Chart, waveform::WaveWindow};

use super::{UnsupportedError, config::PlayfieldConfig};

/// Height of one beat with the default [`PlayfieldConfig`].
pub const DEFAULT_HEIGHT_PER_BEAT: f64 = 240.0;

/// The scroll offset `elapsed` seconds into a song at a constant `bpm`, with the default beat height.
///
/// Linear in both arguments, and 0 at 0 seconds. Negative or out of order times are fine.
#[must_use]
pub fn offset_at_time(bpm: f64, elapsed: f64) -> f64 {
    elapsed * bpm * DEFAULT_HEIGHT_PER_BEAT / 60.0
}

/// The only tempo of the chart.
///
/// # Errors
///
/// - [`UnsupportedError::VariableBpm`] or [`UnsupportedError::MissingBpm`] unless there is exactly one `#BPMS` segment.
/// - [`UnsupportedError::NonPositiveBpm`] if that tempo is not above zero.
pub fn get_bpm(chart: &Chart) -> Result<f64, UnsupportedError> {
    match chart.bpms.as_slice() {
        [bpm] if bpm.bpm.as_f64() <= 0.0 => {
            Err(UnsupportedError::NonPositiveBpm { bpm: bpm.bpm })
        }
        [bpm] => Ok(bpm.bpm.as_f64()),
        [] => Err(UnsupportedError::MissingBpm),
        bpms => Err(UnsupportedError::VariableBpm { count: bpms.len() }),
    }
}

/// Scroll state of a constant tempo chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollClock {
    bpm: f64,
    height_per_beat: f64,
    canvas_height: f64,
    margin: f64,
}

impl ScrollClock {
    /// Creates a clock at `bpm`.
    #[must_use]
    pub fn new(bpm: f64, config: &PlayfieldConfig) -> Self {
        Self {
            bpm,
            height_per_beat: config.height_per_beat(),
            canvas_height: config.canvas_height,
            margin: config.window_margin,
        }
    }

    /// Creates a clock at the tempo of the chart.
    ///
    /// # Errors
    ///
    /// See [`get_bpm`].
    pub fn for_chart(chart: &Chart, config: &PlayfieldConfig) -> Result<Self, UnsupportedError> {
        Ok(Self::new(get_bpm(chart)?, config))
    }

    /// The tempo.
    #[must_use]
    pub const fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Height scrolled per second.
    #[must_use]
    pub fn height_per_second(&self) -> f64 {
        self.bpm * self.height_per_beat / 60.0
    }

    /// The scroll offset at `elapsed` seconds of audio.
    #[must_use]
    pub fn offset_at(&self, elapsed: f64) -> f64 {
        elapsed * self.height_per_second()
    }

    /// The arrow scroll offset at `elapsed` seconds of audio, shifted by the chart's `#OFFSET`.
    #[must_use]
    pub fn arrow_offset(&self, chart: &Chart, elapsed: f64) -> f64 {
        self.offset_at(elapsed + chart.offset.as_f64())
    }

    /// The waveform `y` range to draw when scrolled by `top`, a canvas below plus margins.
    #[must_use]
    pub fn wave_window(&self, top: f64) -> WaveWindow {
        WaveWindow {
            min: -top - self.canvas_height - self.margin,
            max: -top + self.margin,
        }
    }
}
