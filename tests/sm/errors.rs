use pretty_assertions::assert_eq;

use sm_rs::sm::prelude::*;

fn fatal(src: &str) -> ParseErrorWithLine {
    parse_chart(src).expect_err("source must fail")
}

#[test]
fn directive_without_separator() {
    let err = fatal("#TITLE:ok;\n#ARTIST\n");
    assert_eq!(err.content(), &ParseError::MissingDirectiveSeparator);
    assert_eq!(err.line(), 1);
    assert_eq!(err.range(), 11..18);
    assert_eq!(err.content().kind(), ParseErrorKind::Format);
}

#[test]
fn malformed_bpms() {
    for bpms in ["0=120=140", "120", "0=abc", "0=120,", "x=1"] {
        let err = fatal(&format!("#TITLE:t;\n#BPMS:{bpms};\n"));
        assert_eq!(
            err.content(),
            &ParseError::MalformedBpms {
                value: bpms.to_owned()
            },
            "{bpms}"
        );
        assert_eq!(err.line(), 1);
    }
}

#[test]
fn non_finite_bpm_is_malformed() {
    let err = fatal("#TITLE:t;\n#BPMS:0=inf;\n");
    assert!(matches!(err.content(), ParseError::MalformedBpms { .. }));
}

#[test]
fn malformed_offset() {
    let err = fatal("#OFFSET:later;\n");
    assert_eq!(
        err.content(),
        &ParseError::InvalidOffset {
            value: "later".to_owned()
        }
    );
    assert_eq!(err.line(), 0);
}

#[test]
fn header_with_extra_colon() {
    let err = fatal("#TITLE:t;\n     Edit: by me:\n");
    assert_eq!(
        err.content(),
        &ParseError::MalformedSectionHeader { segments: 3 }
    );
    assert_eq!(err.line(), 1);
    assert_eq!(err.to_string(), "splitting by ':' returned 3 segments instead of two at line 1");
}

#[test]
fn note_row_before_difficulty() {
    let err = fatal("#TITLE:t;\n#NOTES:\n     dance-single:\n     :\n0000\n;\n");
    assert_eq!(err.content(), &ParseError::NoDifficulty);
    assert_eq!(err.line(), 4);
    assert_eq!(err.content().kind(), ParseErrorKind::Structural);
}

#[test]
fn rows_are_ignored_before_any_mode() {
    let output = parse_chart("#TITLE:t;\n1000\n").expect("no mode means no note rows");
    assert_eq!(output.chart.map(|chart| chart.levels), Some(vec![]));
}

#[test]
fn untitled_source_has_no_chart() {
    let output = parse_chart(&super::single_easy("1000").replace("#TITLE:t;", "#TITLE:;"))
        .expect("must be parsed");
    assert_eq!(output.chart, None);
}
