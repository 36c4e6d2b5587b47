//! Tests for `sm_rs::sm`.

mod diagnostics_test;
mod errors;
mod files;
mod headers;

use sm_rs::sm::prelude::*;

/// Parses the source, asserting it has a chart and no warnings.
pub fn parse_clean(src: &str) -> Chart {
    let ChartOutput { chart, warnings } = parse_chart(src).expect("source must be parsed");
    assert_eq!(warnings, vec![]);
    chart.expect("source must have a title")
}

/// Wraps note rows into a titled single chart with one `Easy - 1` level.
pub fn single_easy(rows: &str) -> String {
    format!("#TITLE:t;\n#BPMS:0=120;\ndance-single:\nEasy:\n     1:\n{rows}\n;\n")
}
