use pretty_assertions::assert_eq;

use sm_rs::{chart_process::prelude::*, sm::prelude::NoteStyle};

use super::load;

fn summary(plan: &ArrowsPlan) -> Vec<(NoteStyle, String, f64, f64)> {
    plan.iter()
        .map(|arrow| (arrow.style, arrow.color.to_string(), arrow.x, arrow.y))
        .collect()
}

#[test]
fn hard_level_plan() {
    let chart = load(include_str!("../files/sample.sm"));
    let plan = plan_arrows(&chart, 1, &PlayfieldConfig::default()).expect("hard level plans");
    let hold = HOLD_COLOR.to_string();
    let q4 = Snap::Q4th.color().to_string();
    let q8 = Snap::Q8th.color().to_string();
    let q12 = Snap::Q12th.color().to_string();
    use NoteStyle::*;
    assert_eq!(
        summary(&plan),
        vec![
            (Tap, q4.clone(), -105.0, 0.0),
            (HoldStart, hold.clone(), -105.0, -480.0),
            (Holding, hold.clone(), -105.0, -600.0),
            (Holding, hold.clone(), -105.0, -720.0),
            (Holding, hold.clone(), -105.0, -840.0),
            (Tap, q4.clone(), -35.0, -240.0),
            (Tap, q4.clone(), 35.0, -720.0),
            (Tap, q8, 105.0, -120.0),
            (Holding, hold.clone(), -105.0, -960.0),
            (HoldEnd, hold, -105.0, -1200.0),
            (Mine, MINE_COLOR.to_string(), -35.0, -1440.0),
            (Tap, q4.clone(), -105.0, -1920.0),
            (Tap, q12, -35.0, -2000.0),
            (Tap, q4.clone(), 35.0, -2160.0),
            (Tap, q4, 105.0, -2640.0),
        ]
    );
    assert_eq!(plan[0].rotation, LANE_ANGLES[0]);
    assert_eq!(plan[7].rotation, LANE_ANGLES[3]);
    assert_eq!(plan[10].shape(), ArrowShape::Circle);
}

#[test]
fn planning_twice_gives_the_same_plan() {
    let chart = load(include_str!("../files/sample.sm"));
    let config = PlayfieldConfig::default();
    let beats = decode_beats(&chart, 1).expect("hard level decodes");
    let first = plan_beats(&beats, &config).expect("hard level plans");
    let second = plan_beats(&beats, &config).expect("hard level plans");
    assert_eq!(first, second);
    assert_eq!(first.len(), 15);

    for level in 0..chart.levels.len() {
        assert_eq!(
            plan_arrows(&chart, level, &config),
            plan_arrows(&chart, level, &config)
        );
    }
}

#[test]
fn plan_is_ordered_by_measure_then_lane() {
    let chart = load(include_str!("../files/sample.sm"));
    let plan = plan_arrows(&chart, 0, &PlayfieldConfig::default()).expect("beginner plans");
    let ys: Vec<_> = plan.iter().map(|arrow| arrow.y).collect();
    assert_eq!(ys, vec![0.0, -480.0, -960.0, -1200.0]);
}

#[test]
fn colors_of_every_snap() {
    let expected = [
        (Snap::Q4th, "#e92400"),
        (Snap::Q8th, "#006de9"),
        (Snap::Q12th, "#7100e9"),
        (Snap::Q16th, "#ebc800"),
        (Snap::Q24th, "#ee00e9"),
        (Snap::Q32nd, "#e96400"),
        (Snap::Q48th, "#00b8ea"),
        (Snap::Q64th, "#6d915b"),
        (Snap::Q96th, "#6d915b"),
        (Snap::Q192nd, "#6d915b"),
    ];
    for (snap, color) in expected {
        assert_eq!(calculate_snap(1, snap.divisor()), Ok(snap));
        assert_eq!(snap.color().to_string(), color);
    }
}

#[test]
fn quintuplets_are_rejected() {
    let beats = decode_measures(&["1000".repeat(5)]).expect("decodes");
    let err = plan_beats(&beats, &PlayfieldConfig::default()).expect_err("5ths have no snap");
    assert_eq!(err, GeometryError::UnresolvedSnap { index: 1, count: 5 });
    assert_eq!(ChartError::from(err).kind(), ErrorKind::Geometry);
}

#[test]
fn inexact_offsets_are_rejected() {
    let beats = decode_measures(&["0100".repeat(7)]).expect("decodes");
    assert_eq!(
        plan_beats(&beats, &PlayfieldConfig::default()),
        Err(GeometryError::InexactOffset {
            height: 960,
            index: 1,
            count: 7,
        })
    );
}

#[test]
fn receptors() {
    let receptors = receptor_plan(&PlayfieldConfig::default());
    let xs: Vec<_> = receptors.iter().map(|arrow| arrow.x).collect();
    assert_eq!(xs, vec![-105.0, -35.0, 35.0, 105.0]);
    assert!(receptors.iter().all(|arrow| arrow.color == RECEPTOR_COLOR));
}
