use pretty_assertions::assert_eq;

use sm_rs::chart_process::prelude::*;

use super::load;

#[test]
fn constant_bpm_chart() {
    let chart = load(include_str!("../files/sample.sm"));
    assert_eq!(get_bpm(&chart), Ok(150.0));

    let clock = ScrollClock::for_chart(&chart, &PlayfieldConfig::default()).expect("constant");
    assert_eq!(clock.height_per_second(), 600.0);
    assert_eq!(clock.offset_at(0.0), 0.0);
    assert_eq!(clock.offset_at(2.0), offset_at_time(150.0, 2.0));
    // `#OFFSET:-0.050` delays the arrows by 30 units at 150 bpm.
    assert!((clock.arrow_offset(&chart, 1.0) - 570.0).abs() < 1e-9);
}

#[test]
fn seeking_backwards_is_fine() {
    let clock = ScrollClock::new(120.0, &PlayfieldConfig::default());
    let forward = clock.offset_at(10.0);
    let back = clock.offset_at(3.0);
    assert!(back < forward);
    assert_eq!(clock.offset_at(-1.0), -480.0);
}

#[test]
fn variable_bpm_chart_is_unsupported() {
    let chart = load(include_str!("../files/variable_bpm.sm"));
    assert_eq!(
        get_bpm(&chart),
        Err(UnsupportedError::VariableBpm { count: 2 })
    );
    let err = ChartError::from(
        ScrollClock::for_chart(&chart, &PlayfieldConfig::default()).expect_err("variable"),
    );
    assert_eq!(err.kind(), ErrorKind::UnsupportedMode);
    // The notes are still laid out.
    assert_eq!(
        plan_arrows(&chart, 0, &PlayfieldConfig::default()).map(|plan| plan.len()),
        Ok(4)
    );
}

#[test]
fn bigger_beats_scroll_faster() {
    let config = PlayfieldConfig {
        height_per_chart_beat: 1920,
        ..PlayfieldConfig::default()
    };
    let clock = ScrollClock::new(120.0, &config);
    assert_eq!(clock.offset_at(1.0), 960.0);
}
