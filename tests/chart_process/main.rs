//! Tests for `sm_rs::chart_process`.

mod arrows;
mod beats;
mod scroll;

use sm_rs::sm::prelude::*;

/// Parses a fixture which must have a chart.
pub fn load(source: &str) -> Chart {
    parse_chart(source)
        .expect("fixture must be parsed")
        .chart
        .expect("fixture must have a title")
}
