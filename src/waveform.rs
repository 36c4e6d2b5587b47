//! Waveform overlay planning.
//!
//! Decoded audio is bucketed by [`downsample`] into a [`WaveBuffer`] of peak-to-peak magnitudes.
//! [`WavePlanCache`] turns a buffer into a [`WavePlan`] of horizontal segments once, and
//! [`visible_segments`] picks the segments inside the scroll window each frame.

use std::{
    collections::HashMap,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    chart_process::{UnsupportedError, config::PlayfieldConfig, scroll::get_bpm},
    sm::model::Chart,
};

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a [`WaveBuffer`], unique for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(u64);

impl BufferId {
    /// Allocates a fresh id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the contained id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Downsampled waveform magnitudes of a song.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveBuffer {
    #[cfg_attr(feature = "serde", serde(skip, default = "BufferId::next"))]
    id: BufferId,
    /// Magnitudes per second.
    pub sample_rate: u32,
    /// Duration of the song in seconds.
    pub duration: f64,
    /// Magnitudes in time order.
    pub data: Vec<f32>,
}

impl WaveBuffer {
    /// Creates a buffer with a fresh identity.
    #[must_use]
    pub fn new(sample_rate: u32, duration: f64, data: Vec<f32>) -> Self {
        Self {
            id: BufferId::next(),
            sample_rate,
            duration,
            data,
        }
    }

    /// The identity used to cache plans of this buffer.
    #[must_use]
    pub const fn id(&self) -> BufferId {
        self.id
    }
}

/// Buckets raw samples into chunks of `chunk_size`, keeping the peak-to-peak range of each.
///
/// The last chunk may be shorter. The output rate is `sample_rate / chunk_size` rounded down.
#[must_use]
pub fn downsample(samples: &[f32], sample_rate: u32, duration: f64, chunk_size: usize) -> WaveBuffer {
    let chunk_size = chunk_size.max(1);
    let data = samples
        .chunks(chunk_size)
        .map(|chunk| {
            let (min, max) = chunk
                .iter()
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &sample| {
                    (min.min(sample), max.max(sample))
                });
            max - min
        })
        .collect();
    let rate = u32::try_from(chunk_size).map_or(0, |chunk| sample_rate / chunk);
    WaveBuffer::new(rate, duration, data)
}

/// One horizontal segment of the waveform, centered on `x = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveSegPlan {
    /// Full width.
    pub width: f64,
    /// Height, the scroll distance of one sample.
    pub height: f64,
    /// Vertical position, in the units of [`ArrowPlan::y`](crate::chart_process::arrow::ArrowPlan::y).
    pub y: f64,
}

/// Segments in strictly decreasing `y`.
pub type WavePlan = Vec<WaveSegPlan>;

/// Plans the segments of a buffer scrolled at `bpm`.
///
/// Samples whose segment would be narrower than `waveform_cutoff` are skipped. The plan is empty
/// when a sample scrolls no positive finite height, as with a zero `sample_rate` or a `bpm` not
/// above zero.
#[must_use]
pub fn build_wave_plan(buffer: &WaveBuffer, bpm: f64, config: &PlayfieldConfig) -> WavePlan {
    let height_per_second = bpm * config.height_per_beat() / 60.0;
    let height = height_per_second / f64::from(buffer.sample_rate);
    if !(height.is_finite() && height > 0.0) {
        log::warn!(
            "buffer {} at {} samples/s can not be scrolled at bpm {bpm}",
            buffer.id().value(),
            buffer.sample_rate
        );
        return WavePlan::new();
    }
    buffer
        .data
        .iter()
        .enumerate()
        .filter_map(|(index, &magnitude)| {
            let width = f64::from(magnitude).abs().max(config.geometry_epsilon) * config.waveform_scale;
            (width >= config.waveform_cutoff).then(|| WaveSegPlan {
                width,
                height,
                y: -(index as f64) * height,
            })
        })
        .collect()
}

/// Plans computed per buffer.
///
/// A plan depends on the chart tempo too, so call [`WavePlanCache::clear`] when the chart changes.
#[derive(Debug, Default)]
pub struct WavePlanCache {
    config: PlayfieldConfig,
    plans: HashMap<BufferId, Rc<WavePlan>>,
}

impl WavePlanCache {
    /// Creates an empty cache planning with `config`.
    #[must_use]
    pub fn new(config: PlayfieldConfig) -> Self {
        Self {
            config,
            plans: HashMap::new(),
        }
    }

    /// Gets the plan of `buffer`, planning it at the chart tempo if absent.
    ///
    /// # Errors
    ///
    /// Fails if the chart has no constant tempo. Nothing is cached then.
    pub fn get_or_create(
        &mut self,
        chart: &Chart,
        buffer: &WaveBuffer,
    ) -> Result<Rc<WavePlan>, UnsupportedError> {
        if let Some(plan) = self.plans.get(&buffer.id()) {
            return Ok(Rc::clone(plan));
        }
        let plan = Rc::new(build_wave_plan(buffer, get_bpm(chart)?, &self.config));
        log::debug!(
            "planned {} of {} wave segments for buffer {}",
            plan.len(),
            buffer.data.len(),
            buffer.id().value()
        );
        self.plans.insert(buffer.id(), Rc::clone(&plan));
        Ok(plan)
    }

    /// Whether a plan of the buffer is cached.
    #[must_use]
    pub fn contains(&self, id: BufferId) -> bool {
        self.plans.contains_key(&id)
    }

    /// Forgets the plan of a buffer.
    pub fn invalidate(&mut self, id: BufferId) {
        self.plans.remove(&id);
    }

    /// Forgets all plans.
    pub fn clear(&mut self) {
        self.plans.clear();
    }
}

/// The `y` range of the waveform to draw, excluding `min` and including `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveWindow {
    /// Exclusive lower end.
    pub min: f64,
    /// Inclusive upper end.
    pub max: f64,
}

impl WaveWindow {
    /// Whether `y` lies in `(min, max]`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        self.min < y && y <= self.max
    }
}

/// Finds the first segment with `y <= max_y`.
///
/// Scanning forward from there until `y <= min_y` gives the segments in `(min_y, max_y]`.
/// Returns `plan.len()` when every segment is above `max_y`.
#[must_use]
pub fn window_query(plan: &[WaveSegPlan], max_y: f64) -> usize {
    plan.partition_point(|seg| seg.y > max_y)
}

/// The segments inside `window`.
#[must_use]
pub fn visible_segments(plan: &[WaveSegPlan], window: WaveWindow) -> &[WaveSegPlan] {
    let start = window_query(plan, window.max);
    let len = plan[start..]
        .iter()
        .take_while(|seg| seg.y > window.min)
        .count();
    &plan[start..start + len]
}
