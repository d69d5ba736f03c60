//! End-to-end breakpoint behavior over a simulated resize sequence.

use std::sync::{Arc, Mutex};

use ambiance::{BreakpointQuery, Viewport};

#[test]
fn layout_branches_follow_one_viewport() {
    let viewport = Viewport::fixed(140);
    let two_columns = viewport.observe("min-width: 100".parse().unwrap());
    let compact = viewport.observe("max-width: 59".parse().unwrap());

    assert!(two_columns.matches());
    assert!(!compact.matches());

    // Shrink through both breakpoints.
    viewport.set_width(50);
    assert!(!two_columns.matches());
    assert!(compact.matches());
    assert_eq!(two_columns.transitions(), 1);
    assert_eq!(compact.transitions(), 1);
}

#[test]
fn jittery_resizes_notify_only_on_crossings() {
    let viewport = Viewport::fixed(120);
    let wide = viewport.observe(BreakpointQuery::MinWidth(80));
    let flips = Arc::new(Mutex::new(Vec::new()));
    let sink = flips.clone();
    wide.on_change(move |matched| sink.lock().unwrap().push(matched));

    // A drag-resize: plenty of movement, two actual crossings.
    for width in [118, 110, 95, 82, 79, 70, 75, 81, 90] {
        viewport.set_width(width);
    }

    assert_eq!(*flips.lock().unwrap(), vec![false, true]);
    assert_eq!(wide.transitions(), 2);
    assert!(wide.matches());
}

#[test]
fn released_watch_stops_observing() {
    let viewport = Viewport::fixed(120);
    let flips = Arc::new(Mutex::new(Vec::new()));

    {
        let wide = viewport.observe(BreakpointQuery::MinWidth(80));
        let sink = flips.clone();
        wide.on_change(move |matched| sink.lock().unwrap().push(matched));
        viewport.set_width(50);
    }

    // The watch is gone; further changes reach nobody.
    viewport.set_width(120);
    viewport.set_width(40);
    assert_eq!(*flips.lock().unwrap(), vec![false]);
}

#[test]
fn range_breakpoints_partition_the_width_axis() {
    let viewport = Viewport::fixed(90);
    let narrow = viewport.observe(BreakpointQuery::MaxWidth(79));
    let medium = viewport.observe(BreakpointQuery::Between(80, 120));
    let wide = viewport.observe(BreakpointQuery::MinWidth(120));

    let active = |a: &ambiance::BreakpointWatch| a.matches();
    assert_eq!(
        [active(&narrow), active(&medium), active(&wide)],
        [false, true, false]
    );

    viewport.set_width(120);
    assert_eq!(
        [active(&narrow), active(&medium), active(&wide)],
        [false, false, true]
    );

    viewport.set_width(20);
    assert_eq!(
        [active(&narrow), active(&medium), active(&wide)],
        [true, false, false]
    );
}
