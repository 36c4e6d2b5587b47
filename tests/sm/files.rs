use pretty_assertions::assert_eq;

use sm_rs::sm::prelude::*;

fn fin(v: f64) -> FinF64 {
    FinF64::new(v).expect("finite")
}

#[test]
fn sample() {
    let source = include_str!("../files/sample.sm");
    let ChartOutput { chart, warnings } = parse_chart(source).expect("sample must be parsed");
    let chart = chart.expect("sample has a title");

    assert_eq!(chart.title, "Sample Song");
    assert_eq!(chart.artist, "Sample Artist");
    assert_eq!(chart.offset, fin(-0.05));
    assert_eq!(chart.bpms, vec![Bpm::from((fin(0.0), fin(150.0)))]);
    assert_eq!(chart.bpms_display(), "0=150");

    assert_eq!(
        warnings,
        vec![
            ParseWarning::UnknownDirective {
                key: "SUBTITLE".into()
            }
            .into_wrapper_line(1, 20..31)
        ]
    );

    let summary: Vec<_> = chart
        .levels
        .iter()
        .map(|level| (level.level_type, level.difficulty.as_str(), level.notes.len()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (LevelType::Single, "Beginner - 1", 2),
            (LevelType::Single, "Hard - 9", 3),
            (LevelType::Double, "Medium - 5", 1),
        ]
    );

    let beginner = chart.level(0).expect("beginner level");
    assert_eq!(
        beginner.notes,
        vec!["1000000001000000".to_owned(), "0010000100000000".to_owned()]
    );

    let hard = chart.level(1).expect("hard level");
    assert_eq!(hard.rows_per_measure().collect::<Vec<_>>(), vec![8, 4, 12]);
    assert_eq!(hard.notes[1], "000030000M000000");

    let medium = chart.level(2).expect("medium level");
    assert_eq!(medium.notes, vec!["1000000000000001".to_owned()]);
    assert!(chart.level(3).is_none());
}

#[test]
fn unterminated_trailing_level_is_dropped() {
    let source = include_str!("../files/unterminated.sm");
    let ChartOutput { chart, warnings } = parse_chart(source).expect("must be parsed");
    let chart = chart.expect("has a title");
    assert_eq!(chart.levels.len(), 1);
    assert_eq!(chart.levels[0].difficulty, "Easy - 2");
    assert_eq!(
        warnings,
        vec![
            ParseWarning::UnterminatedLevel {
                difficulty: "Hard - 8".into()
            }
            .into_wrapper_line(21, 199..203)
        ]
    );
}

#[test]
fn variable_bpm_is_parsed() {
    let chart = super::parse_clean(include_str!("../files/variable_bpm.sm"));
    assert_eq!(chart.bpms_display(), "0=120,32=140");
    assert_eq!(chart.levels[0].notes, vec!["1000010000100001".to_owned()]);
}

#[test]
fn crlf_lines_are_trimmed() {
    let source = super::single_easy("1000\n0100").replace('\n', "\r\n");
    let chart = super::parse_clean(&source);
    assert_eq!(chart.title, "t");
    assert_eq!(chart.levels[0].notes, vec!["10000100".to_owned()]);
}

#[test]
fn missing_song_is_empty() {
    let output = parse_song(None).expect("empty text is fine");
    assert_eq!(output.chart, None);
    assert_eq!(output.warnings, vec![]);
}
