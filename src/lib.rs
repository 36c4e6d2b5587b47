//! The StepMania chart (.sm) player core.
//!
//! - [`sm`] parses chart text into a [`sm::model::Chart`] with its raw measures.
//! - [`chart_process`] decodes the measures of a level, lays them out as arrows, and converts
//!   playback time into a scroll offset.
//! - [`waveform`] plans the audio waveform overlay drawn along the arrows.
//! - [`session`] glues the above to song loading and an audio transport.
//!
//! # Example
//!
//! ```rust
//! use sm_rs::{
//!     chart_process::prelude::*,
//!     sm::parse_chart,
//! };
//!
//! let source = "#TITLE:Demo;\n#BPMS:0.000=120.000;\n\
//!     //--- dance-single - ---\n#NOTES:\n     dance-single:\n     :\n     Easy:\n     1:\n     0,0,0,0,0:\n\
//!     1000\n0100\n0010\n0001\n;\n";
//! let chart = parse_chart(source).expect("valid chart").chart.expect("titled chart");
//!
//! let config = PlayfieldConfig::default();
//! let arrows = plan_arrows(&chart, 0, &config).expect("plannable level");
//! assert_eq!(arrows.len(), 4);
//!
//! let clock = ScrollClock::for_chart(&chart, &config).expect("constant bpm");
//! assert_eq!(clock.offset_at(1.0), 480.0);
//! ```
//!
//! # Features
//!
//! - `diagnostics` (default): renders parse errors and warnings with `ariadne`.
//! - `serde`: `Serialize`/`Deserialize` for the chart model, plans and [`chart_process::config::PlayfieldConfig`].

pub mod chart_process;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod session;
pub mod sm;
pub mod waveform;
