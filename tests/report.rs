// tests/report.rs
use std::io::ErrorKind;

use crit_boost::report::Layout;
use crit_boost::systems::sweep::Axis;
use crit_boost::{CellResult, SweepRow};

fn cell(rate: f64, cap: f64, net: f64, rest: f64, vpt: Option<f64>) -> CellResult {
    CellResult {
        trigger_rate: rate,
        boost_cap: cap,
        avg_multiplier: 24.6 + net,
        net_gain: net,
        rest_rate: rest,
        value_per_trigger: vpt,
    }
}

/* ──────────────────────────────────────────────────────────────────────────
1) Column formats
────────────────────────────────────────────────────────────────────────── */

#[test]
fn trigger_layout_formats() {
    let l = Layout::Trigger;
    assert_eq!(l.header(), "Trigger/Day, Net_Gain(Week), Value_Per_Trigger(Coeff)");
    let row = SweepRow { trigger_rate: 2.5, cells: vec![cell(2.5, 0.7, 1.23456, 0.0, Some(0.0705))] };
    assert_eq!(l.row(&row), "2.5, 1.2346, 0.07050");
    let zero = SweepRow { trigger_rate: 0.0, cells: vec![cell(0.0, 0.7, 0.0, 0.0, None)] };
    assert_eq!(l.row(&zero), "0.0, 0.0000, undefined");
}

#[test]
fn capped_layout_has_no_trailing_comma() {
    let l = Layout::capped(&Axis::tenths("boost_cap", 3, 7));
    assert_eq!(
        l.header(),
        "Trigger/Day, Net_Gain_30%(Week), Rest_Rate_30%, Net_Gain_40%(Week), Rest_Rate_40%, \
         Net_Gain_50%(Week), Rest_Rate_50%, Net_Gain_60%(Week), Rest_Rate_60%, \
         Net_Gain_70%(Week), Rest_Rate_70%"
    );
    let two = Layout::capped(&Axis::tenths("boost_cap", 3, 4));
    let row = SweepRow {
        trigger_rate: 2.0,
        cells: vec![cell(2.0, 0.3, 0.5, 0.25, None), cell(2.0, 0.4, 0.75, 0.125, None)],
    };
    let line = two.row(&row);
    assert_eq!(line, "2.0, 0.5000, 0.2500, 0.7500, 0.1250");
    assert!(!line.ends_with(','));
}

/* ──────────────────────────────────────────────────────────────────────────
2) Writers
────────────────────────────────────────────────────────────────────────── */

#[test]
fn write_row_appends_newline() {
    let mut buf = Vec::new();
    let l = Layout::Trigger;
    l.write_header(&mut buf).unwrap();
    l.write_row(&mut buf, &SweepRow { trigger_rate: 1.0, cells: vec![cell(1.0, 0.7, 0.7, 0.0, Some(0.1))] })
        .unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.ends_with("0.10000\n"));
}

#[test]
fn rows_that_do_not_fit_the_layout_are_refused() {
    let multi_cap = SweepRow {
        trigger_rate: 3.0,
        cells: vec![cell(3.0, 0.3, 0.5, 0.25, Some(0.02)), cell(3.0, 0.4, 0.75, 0.125, Some(0.04))],
    };
    let empty = SweepRow { trigger_rate: 3.0, cells: Vec::new() };

    let trigger = Layout::Trigger;
    assert_eq!(trigger.cells_per_row(), 1);
    let mut buf = Vec::new();
    for row in [&multi_cap, &empty] {
        let err = trigger.write_row(&mut buf, row).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    let capped = Layout::capped(&Axis::tenths("boost_cap", 3, 7));
    assert_eq!(capped.cells_per_row(), 5);
    assert_eq!(capped.write_row(&mut buf, &multi_cap).unwrap_err().kind(), ErrorKind::InvalidInput);

    assert!(buf.is_empty(), "refused rows must not be written");
}
