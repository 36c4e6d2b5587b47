use pretty_assertions::assert_eq;

use sm_rs::{chart_process::prelude::*, sm::prelude::NoteStyle::*};

use super::load;

#[test]
fn hold_runs_across_measures() {
    let chart = load(include_str!("../files/sample.sm"));
    let beats = decode_beats(&chart, 1).expect("hard level decodes");
    assert_eq!(beats.len(), 3);
    assert_eq!(
        beats[0][0],
        vec![Tap, Empty, Empty, Empty, HoldStart, Holding, Holding, Holding]
    );
    assert_eq!(beats[1][0], vec![Holding, HoldEnd, Empty, Empty]);
    assert_eq!(beats[1][1], vec![Empty, Empty, Mine, Empty]);
    assert!(beats[2].iter().all(|lane| lane.len() == 12));
}

#[test]
fn double_level_decodes_to_nothing() {
    let chart = load(include_str!("../files/sample.sm"));
    assert_eq!(decode_beats(&chart, 2), Ok(vec![]));
}

#[test]
fn missing_level() {
    let chart = load(include_str!("../files/sample.sm"));
    let err = decode_beats(&chart, 3).expect_err("only 3 levels");
    assert_eq!(err, ChartError::LevelOutOfRange { index: 3, len: 3 });
    assert_eq!(err.kind(), ErrorKind::ChartIntegrity);
}

#[test]
fn hold_started_twice() {
    let chart = load(include_str!("../files/broken_hold.sm"));
    let err = decode_beats(&chart, 0).expect_err("hold starts twice");
    assert_eq!(
        err,
        ChartError::Decode(DecodeError::HoldAlreadyStarted {
            measure: 1,
            row: 0,
            lane: 0
        })
    );
    assert_eq!(err.kind(), ErrorKind::ChartIntegrity);
}

#[test]
fn unclosed_hold_at_end_is_accepted() {
    let beats = decode_measures(&["0020", "0000"]).expect("open hold at the end is fine");
    assert_eq!(beats[1][2], vec![Holding]);
}

#[test]
fn empty_level() {
    assert_eq!(decode_measures::<&str>(&[]), Ok(vec![]));
}
