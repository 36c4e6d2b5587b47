use pretty_assertions::assert_eq;

use sm_rs::sm::prelude::*;

use super::parse_clean;

#[test]
fn difficulty_without_rating() {
    let chart = parse_clean("#TITLE:t;\ndance-single:\nHard:\n\n1000\n;\n");
    assert_eq!(chart.levels[0].difficulty, "Hard");
}

#[test]
fn rating_line_is_consumed() {
    let chart = parse_clean("#TITLE:t;\ndance-single:\nChallenge:\n  11:\n1000\n;\n");
    assert_eq!(chart.levels[0].difficulty, "Challenge - 11");
}

#[test]
fn mode_and_difficulty_carry_over() {
    let chart = parse_clean(
        "#TITLE:t;\ndance-single:\nEasy:\n1:\n1000\n;\n0100\n;\ndance-double:\n00000001\n;\n",
    );
    let summary: Vec<_> = chart
        .levels
        .iter()
        .map(|level| (level.level_type, level.difficulty.as_str(), level.notes.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (LevelType::Single, "Easy - 1", vec!["1000".to_owned()]),
            (LevelType::Single, "Easy - 1", vec!["0100".to_owned()]),
            (LevelType::Double, "Easy - 1", vec!["00000001".to_owned()]),
        ]
    );
}

#[test]
fn unsupported_mode_keeps_previous_mode() {
    let src = "#TITLE:t;\ndance-single:\npump-single:\nEasy:\n1:\n1000\n;\n";
    let ChartOutput { chart, warnings } = parse_chart(src).expect("must be parsed");
    assert_eq!(
        warnings,
        vec![
            ParseWarning::UnsupportedMode {
                name: "pump-single".into()
            }
            .into_wrapper_line(2, 24..36)
        ]
    );
    let chart = chart.expect("titled");
    assert_eq!(chart.levels[0].level_type, LevelType::Single);
}

#[test]
fn commas_split_measures_of_any_length() {
    let chart = parse_clean(&super::single_easy(
        "1000\n0000\n0000\n0000\n0000\n0000\n0000\n0001\n,\n2000\n3000",
    ));
    assert_eq!(
        chart.levels[0].rows_per_measure().collect::<Vec<_>>(),
        vec![8, 2]
    );
}

#[test]
fn directives_after_notes_still_apply() {
    let chart = parse_clean("dance-single:\nEasy:\n1:\n1000\n;\n#TITLE:late;\n#ARTIST:a;\n");
    assert_eq!(chart.title, "late");
    assert_eq!(chart.levels.len(), 1);
}

#[test]
fn row_right_after_label_reads_as_rating() {
    let chart = parse_clean("#TITLE:t;\ndance-single:\nEasy:\n1000\n0100\n;\n");
    assert_eq!(chart.levels[0].difficulty, "Easy - 1000");
    assert_eq!(chart.levels[0].notes, vec!["0100".to_owned()]);
}
