//! Playback glue around the chart core.
//!
//! [`PlaybackSession`] holds the chart and waveform of the selected song, the level and the
//! playback position, and hands out a [`Frame`] of things to draw. Fetching and decoding are
//! left to the caller: a song switch issues a [`LoadTicket`], and completions carrying an older
//! ticket are discarded.

use gametime::{TimeSpan, TimeStamp};
use log::{debug, error, info, warn};
use thiserror::Error;

use crate::{
    chart_process::{
        ChartError,
        arrow::{ArrowPlan, ArrowsPlan, plan_arrows, receptor_plan},
        config::{LANES, PlayfieldConfig},
        resource::{Release, ResourceScope},
        scroll::ScrollClock,
    },
    sm::{model::Chart, parse_chart},
    waveform::{WaveBuffer, WavePlanCache, WaveSegPlan, visible_segments},
};

/// The audio element playing the song.
pub trait AudioTransport {
    /// Whether the audio can be played without stalling.
    fn is_ready(&self) -> bool;
    /// The playback position in seconds.
    fn current_time(&self) -> f64;
    /// Moves the playback position.
    fn set_current_time(&mut self, secs: f64);
    /// Starts playing.
    fn play(&mut self);
    /// Pauses.
    fn pause(&mut self);
}

/// Identifies the song switch a load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// What happened to a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOutcome {
    /// The result was taken into the session.
    Applied,
    /// The load belonged to an older song and was discarded.
    Stale,
    /// The load failed. The failure was logged.
    Failed,
}

/// An operation the session can not do in its state.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum SessionError {
    /// No chart is loaded.
    #[error("no chart loaded")]
    NoChart,
    /// The audio is not ready to play.
    #[error("audio not ready")]
    AudioNotReady,
    /// The chart can not be played.
    #[error(transparent)]
    Chart(#[from] ChartError),
}

#[derive(Debug, Clone, Copy)]
struct PlayAnchor {
    started_at: TimeStamp,
    base: f64,
}

/// Things to draw for the current position.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    /// Vertical translation of the arrows, including the chart `#OFFSET`.
    pub arrow_offset: f64,
    /// Vertical translation of the waveform.
    pub wave_offset: f64,
    /// Arrows of the selected level.
    pub arrows: &'a [ArrowPlan],
    /// The fixed receptors.
    pub receptors: [ArrowPlan; LANES],
    /// Visible waveform segments, empty when the waveform is hidden or not loaded.
    pub wave: Vec<WaveSegPlan>,
}

/// The state of the player for one song at a time.
///
/// `R` is the renderer resource type, owned in one scope for the arrows and one for the waveform.
#[derive(Debug)]
pub struct PlaybackSession<T: AudioTransport, R: Release = ()> {
    config: PlayfieldConfig,
    transport: T,
    generation: u64,
    chart: Option<Chart>,
    clock: Option<ScrollClock>,
    level: usize,
    arrows: ArrowsPlan,
    wave: Option<WaveBuffer>,
    wave_cache: WavePlanCache,
    show_waveform: bool,
    playing: Option<PlayAnchor>,
    elapsed: f64,
    arrow_resources: ResourceScope<R>,
    wave_resources: ResourceScope<R>,
}

impl<T: AudioTransport, R: Release> PlaybackSession<T, R> {
    /// Creates a session with nothing loaded.
    pub fn new(transport: T, config: PlayfieldConfig) -> Self {
        Self {
            wave_cache: WavePlanCache::new(config.clone()),
            config,
            transport,
            generation: 0,
            chart: None,
            clock: None,
            level: 0,
            arrows: ArrowsPlan::new(),
            wave: None,
            show_waveform: false,
            playing: None,
            elapsed: 0.0,
            arrow_resources: ResourceScope::new(),
            wave_resources: ResourceScope::new(),
        }
    }

    /// Starts switching to another song. Pauses and drops the current chart and waveform.
    ///
    /// Pass the returned ticket to [`Self::complete_chart_load`] and [`Self::complete_audio_load`].
    pub fn switch_song(&mut self) -> LoadTicket {
        self.pause();
        self.generation += 1;
        self.set_chart(None);
        self.wave = None;
        self.wave_cache.clear();
        self.wave_resources.release_all();
        self.elapsed = 0.0;
        debug!("switching song, load generation {}", self.generation);
        LoadTicket(self.generation)
    }

    fn is_current(&self, ticket: LoadTicket, what: &str) -> bool {
        let current = ticket.0 == self.generation;
        if !current {
            debug!(
                "discarding {what} of load generation {}, now {}",
                ticket.0, self.generation
            );
        }
        current
    }

    /// Takes the fetched chart text of the song of `ticket`.
    ///
    /// A failed fetch, a parse error or a text without title leaves the session with no chart.
    pub fn complete_chart_load<E: std::fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        text: Result<&str, E>,
    ) -> LoadOutcome {
        if !self.is_current(ticket, "chart") {
            return LoadOutcome::Stale;
        }
        let output = match text {
            Ok(text) => parse_chart(text),
            Err(e) => {
                error!("failed to fetch chart: {e}");
                return LoadOutcome::Failed;
            }
        };
        let output = match output {
            Ok(output) => output,
            Err(e) => {
                error!("failed to parse chart: {e}");
                return LoadOutcome::Failed;
            }
        };
        for warning in &output.warnings {
            warn!("{warning}");
        }
        let Some(chart) = output.chart else {
            error!("parsed no song");
            return LoadOutcome::Failed;
        };
        info!("loaded {} with {} levels", chart.title, chart.levels.len());
        self.set_chart(Some(chart));
        LoadOutcome::Applied
    }

    /// Takes the decoded waveform of the song of `ticket`.
    pub fn complete_audio_load<E: std::fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        wave: Result<WaveBuffer, E>,
    ) -> LoadOutcome {
        if !self.is_current(ticket, "audio") {
            return LoadOutcome::Stale;
        }
        match wave {
            Ok(wave) => {
                if let Some(old) = self.wave.replace(wave) {
                    self.wave_cache.invalidate(old.id());
                }
                LoadOutcome::Applied
            }
            Err(e) => {
                error!("failed to load audio: {e}");
                LoadOutcome::Failed
            }
        }
    }

    fn set_chart(&mut self, chart: Option<Chart>) {
        self.clock = chart.as_ref().and_then(|chart| {
            ScrollClock::for_chart(chart, &self.config)
                .inspect_err(|e| warn!("chart can not be scrolled: {e}"))
                .ok()
        });
        self.pause();
        self.chart = chart;
        self.level = 0;
        self.elapsed = 0.0;
        self.wave_cache.clear();
        self.replan_arrows();
    }

    fn replan_arrows(&mut self) {
        self.arrow_resources.release_all();
        self.arrows = match &self.chart {
            Some(chart) if !chart.levels.is_empty() => plan_arrows(chart, self.level, &self.config)
                .unwrap_or_else(|e| {
                    error!("failed to plan level {}: {e}", self.level);
                    ArrowsPlan::new()
                }),
            _ => ArrowsPlan::new(),
        };
    }

    /// Selects the level to play.
    ///
    /// # Errors
    ///
    /// Fails with no chart, with a level index out of range, or when the level can not be laid out.
    /// The selection is unchanged then.
    pub fn select_level(&mut self, level: usize) -> Result<(), SessionError> {
        let chart = self.chart.as_ref().ok_or(SessionError::NoChart)?;
        let arrows = plan_arrows(chart, level, &self.config)?;
        self.arrow_resources.release_all();
        self.level = level;
        self.arrows = arrows;
        Ok(())
    }

    /// Plays or pauses. Returns whether it is playing now.
    ///
    /// # Errors
    ///
    /// Playing needs a chart and a ready transport.
    pub fn toggle_play(&mut self, now: TimeStamp) -> Result<bool, SessionError> {
        if self.playing.is_some() {
            self.pause();
            return Ok(false);
        }
        if self.chart.is_none() {
            return Err(SessionError::NoChart);
        }
        if !self.transport.is_ready() {
            return Err(SessionError::AudioNotReady);
        }
        self.transport.play();
        self.playing = Some(PlayAnchor {
            started_at: now,
            base: self.elapsed,
        });
        Ok(true)
    }

    fn pause(&mut self) {
        if self.playing.take().is_some() {
            self.transport.pause();
        }
    }

    /// Moves the position by `delta` seconds, backwards when negative.
    pub fn seek(&mut self, delta: f64) {
        let time = self.transport.current_time();
        self.transport.set_current_time(time + delta);
        self.elapsed += delta;
        if let Some(anchor) = &mut self.playing {
            anchor.base += delta;
        }
    }

    /// Samples the playback position while playing.
    ///
    /// The transport clock is used when it is ready, else the time since play started.
    pub fn tick(&mut self, now: TimeStamp) -> f64 {
        if let Some(anchor) = self.playing {
            self.elapsed = if self.transport.is_ready() {
                self.transport.current_time()
            } else {
                let span: TimeSpan = now - anchor.started_at;
                anchor.base + span.as_nanos().max(0) as f64 / 1_000_000_000.0
            };
        }
        self.elapsed
    }

    /// Shows or hides the waveform overlay.
    pub fn set_show_waveform(&mut self, show: bool) {
        self.show_waveform = show;
    }

    /// Whether it is playing.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    /// The last sampled position in seconds.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// The loaded chart.
    #[must_use]
    pub const fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// The selected level index.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// The loaded waveform.
    #[must_use]
    pub const fn wave(&self) -> Option<&WaveBuffer> {
        self.wave.as_ref()
    }

    /// The transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// The transport, mutably.
    pub const fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Resources created for the current arrows. Released whenever the arrows are planned again.
    pub const fn arrow_resources(&mut self) -> &mut ResourceScope<R> {
        &mut self.arrow_resources
    }

    /// Resources created for the last frame's waveform. Released by every [`Self::frame`].
    pub const fn wave_resources(&mut self) -> &mut ResourceScope<R> {
        &mut self.wave_resources
    }

    /// Builds the frame at the last sampled position.
    ///
    /// # Errors
    ///
    /// Fails with no chart, or when the chart has no constant tempo.
    pub fn frame(&mut self) -> Result<Frame<'_>, SessionError> {
        let chart = self.chart.as_ref().ok_or(SessionError::NoChart)?;
        let clock = match self.clock {
            Some(clock) => clock,
            None => ScrollClock::for_chart(chart, &self.config).map_err(ChartError::from)?,
        };
        self.wave_resources.release_all();
        let wave_offset = clock.offset_at(self.elapsed);
        let wave = match (&self.wave, self.show_waveform) {
            (Some(buffer), true) => {
                let plan = self
                    .wave_cache
                    .get_or_create(chart, buffer)
                    .map_err(ChartError::from)?;
                visible_segments(&plan, clock.wave_window(wave_offset)).to_vec()
            }
            _ => Vec::new(),
        };
        Ok(Frame {
            arrow_offset: clock.arrow_offset(chart, self.elapsed),
            wave_offset,
            arrows: &self.arrows,
            receptors: receptor_plan(&self.config),
            wave,
        })
    }
}
