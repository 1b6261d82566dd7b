// File: crates/graticule-core/tests/tickers.rs
// Purpose: Built-in tick generators: nice intervals, minor subdivision, degenerate spans.

use graticule_core::{BasicTicker, FixedTicker, Range1d, SingleIntervalTicker, TickSet, Ticker, TickerKind};

fn close(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
}

#[test]
fn basic_ticker_picks_nice_interval() {
    let t = BasicTicker::default();
    assert_eq!(t.interval(0.0, 10.0), Some(2.0));
    assert!((t.interval(0.0, 1.0).unwrap() - 0.2).abs() < 1e-12);
    assert_eq!(t.interval(0.0, 100.0), Some(20.0));
    assert_eq!(t.interval(3.0, 3.0), None);
}

#[test]
fn basic_ticker_majors_and_minors() {
    let range = Range1d::new(0.0, 10.0);
    let ticks = BasicTicker::default().get_ticks(0.0, 10.0, &range, 0.0);
    assert!(close(&ticks.major, &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]));
    // four minors inside each of the five major intervals
    assert_eq!(ticks.minor.len(), 20);
    assert!(ticks.minor.iter().all(|&m| m > 0.0 && m < 10.0));
    assert!(ticks.minor.iter().all(|m| !ticks.major.iter().any(|t| (t - m).abs() < 1e-9)));
    assert!(ticks.minor.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn basic_ticker_keeps_majors_inside_request() {
    let range = Range1d::new(0.0, 10.0);
    let ticks = BasicTicker::default().get_ticks(1.0, 9.5, &range, 0.0);
    assert!(ticks.major.iter().all(|&t| (1.0..=9.5).contains(&t)));
    assert!(close(&ticks.major, &[2.0, 4.0, 6.0, 8.0]));
}

#[test]
fn basic_ticker_without_minors() {
    let t = BasicTicker { desired_num_ticks: 6, num_minor_ticks: 0 };
    let ticks = t.get_ticks(0.0, 10.0, &Range1d::new(0.0, 10.0), 0.0);
    assert!(ticks.minor.is_empty());
    assert_eq!(ticks.major.len(), 6);
}

#[test]
fn degenerate_spans_produce_no_ticks() {
    let range = Range1d::new(0.0, 0.0);
    let basic = BasicTicker::default();
    assert!(basic.get_ticks(0.0, 0.0, &range, 0.0).major.is_empty());
    assert!(basic.get_ticks(f64::NAN, 1.0, &range, 0.0).major.is_empty());
    assert!(basic.get_ticks(0.0, f64::INFINITY, &range, 0.0).major.is_empty());
}

#[test]
fn single_interval_ticker() {
    let range = Range1d::new(0.0, 10.0);
    let ticks = SingleIntervalTicker::new(2.5).get_ticks(0.0, 10.0, &range, 0.0);
    assert!(close(&ticks.major, &[0.0, 2.5, 5.0, 7.5, 10.0]));
    assert_eq!(ticks.minor.len(), 16);

    assert!(SingleIntervalTicker::new(0.0).get_ticks(0.0, 10.0, &range, 0.0).major.is_empty());
    assert!(SingleIntervalTicker::new(-1.0).get_ticks(0.0, 10.0, &range, 0.0).major.is_empty());
    // far too fine for the span
    assert!(SingleIntervalTicker::new(1e-9).get_ticks(0.0, 10.0, &range, 0.0).major.is_empty());
}

#[test]
fn huge_span_over_tiny_interval_yields_nothing() {
    // lo / interval overflows to -inf for these finite inputs
    let range = Range1d::new(-2e300, -1e300);
    let ticks = SingleIntervalTicker::new(1e-10).get_ticks(-2e300, -1e300, &range, 0.0);
    assert!(ticks.major.is_empty());
    assert!(ticks.minor.is_empty());

    let range = Range1d::new(1e300, 2e300);
    let ticks = SingleIntervalTicker::new(1e-10).get_ticks(1e300, 2e300, &range, 0.0);
    assert_eq!(ticks, TickSet::empty());
}

#[test]
fn fixed_ticker_is_verbatim() {
    let range = Range1d::new(0.0, 10.0);
    let t = FixedTicker::new(vec![-5.0, 3.0, 50.0]).with_minor(vec![1.0]);
    let ticks = t.get_ticks(0.0, 10.0, &range, 0.0);
    assert_eq!(ticks.major, vec![-5.0, 3.0, 50.0]);
    assert_eq!(ticks.minor, vec![1.0]);
}

#[test]
fn ticker_kind_from_json() {
    let t: TickerKind = serde_json::from_str(r#"{"type":"basic","desired_num_ticks":4}"#).unwrap();
    assert_eq!(t, TickerKind::Basic(BasicTicker { desired_num_ticks: 4, num_minor_ticks: 5 }));

    let t: TickerKind = serde_json::from_str(r#"{"type":"single_interval","interval":0.5}"#).unwrap();
    assert_eq!(t, TickerKind::SingleInterval(SingleIntervalTicker::new(0.5)));

    let t: TickerKind = serde_json::from_str(r#"{"type":"fixed","ticks":[1,2]}"#).unwrap();
    assert_eq!(t, TickerKind::Fixed(FixedTicker::new(vec![1.0, 2.0])));
}
