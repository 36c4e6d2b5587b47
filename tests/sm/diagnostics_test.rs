//! Test diagnostics module functionality

use ariadne::Source;
use sm_rs::{
    diagnostics::{SimpleSource, ToAriadne, collect_chart_reports, emit_chart_warnings},
    sm::parse_chart,
};

#[test]
fn test_simple_source_creation() {
    let source_text = "#TITLE:Test Song;\n#ARTIST:Test Composer;\n";
    let source = SimpleSource::new("test.sm", source_text);

    assert_eq!(source.text(), source_text);
    assert_eq!(source.name(), "test.sm");
}

#[test]
fn test_collect_reports_for_warnings() {
    let source = include_str!("../files/sample.sm");
    let output = parse_chart(source).expect("sample must be parsed");

    let reports = collect_chart_reports("sample.sm", source, &output.warnings);
    assert_eq!(reports.len(), output.warnings.len());

    emit_chart_warnings("sample.sm", source, &output.warnings);
}

#[test]
fn test_error_report_renders_line() {
    let source_text = "#TITLE:x;\ndance-single:\n1000\n;\n";
    let error = parse_chart(source_text).expect_err("no difficulty");

    let report = error.to_report(&SimpleSource::new("test.sm", source_text));
    let mut rendered = Vec::new();
    report
        .write(
            ("test.sm".to_string(), Source::from(source_text)),
            &mut rendered,
        )
        .expect("report must be written");
    let rendered = String::from_utf8(rendered).expect("utf-8 report");
    assert!(rendered.contains("no difficulty was set"));
    assert!(rendered.contains("test.sm"));
}

#[test]
fn test_warning_report_renders_line() {
    let source = include_str!("../files/sample.sm");
    let output = parse_chart(source).expect("sample must be parsed");
    let warning = output.warnings.first().expect("sample has a warning");

    let report = warning.to_report(&SimpleSource::new("sample.sm", source));
    let mut rendered = Vec::new();
    report
        .write(("sample.sm".to_string(), Source::from(source)), &mut rendered)
        .expect("report must be written");
    let rendered = String::from_utf8(rendered).expect("utf-8 report");
    assert!(rendered.contains("parse warning"));
    assert!(rendered.contains("unknown directive #SUBTITLE"));
}

#[test]
fn test_empty_warnings() {
    let reports = collect_chart_reports("test.sm", "", []);
    assert!(reports.is_empty());
}
