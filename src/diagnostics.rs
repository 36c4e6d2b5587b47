//! Fancy diagnostics support using `ariadne`.
//!
//! This module provides convenient methods to convert errors carrying `SourceLineMixin`
//! (such as `ParseErrorWithLine` and `ParseWarningWithLine`) to `ariadne::Report`
//! without modifying existing error type definitions.
//!
//! Since `SourceLineMixin` contains the byte span of the offending line, this module
//! lets ariadne automatically handle row/column calculations for display purposes.
//!
//! # Usage Example
//!
//! ```rust
//! use sm_rs::{diagnostics::emit_chart_warnings, sm::parse_chart};
//!
//! // Parse a chart
//! let source = "#TITLE:Test;\n#SUBTITLE:none;\n";
//! let output = parse_chart(source).expect("no fatal error");
//!
//! // Output all warnings
//! emit_chart_warnings("test.sm", source, &output.warnings);
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::sm::parse::ParseWarningWithLine;

/// Simple source container that holds the filename and source text.
/// Ariadne will automatically handle row/column calculations from byte offsets.
///
/// # Usage Example
///
/// ```rust
/// use sm_rs::diagnostics::SimpleSource;
///
/// let source_text = "#TITLE:test;\n#ARTIST:composer;\n";
/// let source = SimpleSource::new("test.sm", source_text);
///
/// assert_eq!(source.text(), source_text);
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
///
/// # Usage Example
///
/// ```rust
/// use ariadne::Source;
/// use sm_rs::{diagnostics::{SimpleSource, ToAriadne}, sm::parse_chart};
///
/// let source_text = "#TITLE:x;\ndance-single:\n1000\n;\n";
/// let error = parse_chart(source_text).expect_err("no difficulty");
///
/// let source = SimpleSource::new("test.sm", source_text);
/// let report = error.to_report(&source);
/// let _ = report.eprint(("test.sm".to_string(), Source::from(source_text)));
/// ```
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// `src` gives the filename, ariadne calculates rows and columns from the span.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: std::ops::Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, std::ops::Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

/// Convenience method: render every warning of a chart to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete chart source text
/// * `warnings` - List of warnings to display
pub fn emit_chart_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarningWithLine>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for w in warnings {
        let report = w.to_report(&simple);
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Collect `ariadne::Report` instances for a list of warnings without printing.
///
/// This is useful in tests to verify diagnostics can be generated while keeping test output clean.
#[must_use]
pub fn collect_chart_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarningWithLine>,
) -> Vec<Report<'a, (String, std::ops::Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    warnings.into_iter().map(|w| w.to_report(&simple)).collect()
}
