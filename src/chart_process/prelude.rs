//! Chart Process module prelude
//!
//! This module provides re-exports of commonly used types and functions from the `chart_process` module,
//! allowing users to import all needed items in one go.

pub use super::{
    ChartError, DecodeError, ErrorKind, GeometryError, UnsupportedError,
    arrow::{ArrowPlan, ArrowsPlan, calculate_offset, plan_arrows, plan_beats, receptor_plan},
    beat::{Beat, Beats, decode_beats, decode_measures},
    config::{LANE_ANGLES, LANES, PlayfieldConfig},
    graphics::{ArrowShape, HOLD_COLOR, MINE_COLOR, RECEPTOR_COLOR, Rgb, WAVE_COLOR},
    resource::{Release, ResourceId, ResourceScope, ScopeGeneration},
    scroll::{ScrollClock, get_bpm, offset_at_time},
    snap::{Snap, calculate_color, calculate_snap},
};
