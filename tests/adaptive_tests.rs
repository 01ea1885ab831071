// Host-side tests for adaptive state tracking.
// The main crate is wasm-only, so these drive `ambient-core` with a mock element.

mod common;

use ambient_core::density::{classify_element, density_score};
use ambient_core::keys::ElementKeyGen;
use ambient_core::{AdaptiveConfig, AdaptiveTracker, ContentDensity, UserExpertise, Visualization};
use common::MockElement;

fn tracker() -> AdaptiveTracker<MockElement> {
    AdaptiveTracker::with_key_gen(AdaptiveConfig::default(), ElementKeyGen::with_prefix("test"))
}

#[test]
fn density_examples_classify_as_documented() {
    let cfg = AdaptiveConfig::default();

    // Score is children * 1000 / area.
    assert_eq!(density_score(5, 100.0, 100.0), Some(0.5));
    assert_eq!(classify_element(5, 100.0, 100.0, &cfg), ContentDensity::Normal);

    assert_eq!(density_score(50, 100.0, 100.0), Some(5.0));
    assert_eq!(classify_element(50, 100.0, 100.0, &cfg), ContentDensity::Dense);

    assert_eq!(density_score(0, 1000.0, 1000.0), Some(0.0));
    assert_eq!(classify_element(0, 1000.0, 1000.0, &cfg), ContentDensity::Sparse);

    assert_eq!(density_score(1, 500.0, 400.0), Some(0.005));
    assert_eq!(classify_element(1, 500.0, 400.0, &cfg), ContentDensity::Sparse);

    // 1 child in 2000 px² -> 0.5 children per 1000 px²
    assert_eq!(density_score(1, 50.0, 40.0), Some(0.5));
    assert_eq!(classify_element(1, 50.0, 40.0, &cfg), ContentDensity::Normal);
}

#[test]
fn degenerate_geometry_is_normal_and_does_not_panic() {
    let mut t = tracker();
    let el = MockElement::new("empty", 4, 0.0, 0.0);
    t.observe(&el);
    let out = t.record_resize(&el, 0.0, 0.0, 1.0);
    assert_eq!(out.density, ContentDensity::Normal);
    assert!(el.has_class("content-normal"));
}

#[test]
fn resize_updates_global_density_and_marker_exclusively() {
    let mut t = tracker();
    let el = MockElement::new("grid", 50, 100.0, 100.0);
    t.observe(&el);

    let out = t.record_resize(&el, 100.0, 100.0, 10.0);
    assert_eq!(out.density, ContentDensity::Dense);
    assert!(out.changed);
    assert_eq!(t.state().content_density, ContentDensity::Dense);
    assert_eq!(el.classes(), vec!["content-dense".to_string()]);

    el.set_children(0);
    let out = t.record_resize(&el, 100.0, 100.0, 20.0);
    assert_eq!(out.density, ContentDensity::Sparse);
    assert_eq!(el.classes(), vec!["content-sparse".to_string()]);
}

#[test]
fn last_writer_wins_across_elements() {
    let mut t = tracker();
    let crowded = MockElement::new("a", 50, 100.0, 100.0);
    let roomy = MockElement::new("b", 0, 800.0, 600.0);
    t.observe(&crowded);
    t.observe(&roomy);

    t.record_resize(&crowded, 100.0, 100.0, 1.0);
    assert_eq!(t.state().content_density, ContentDensity::Dense);
    t.record_resize(&roomy, 800.0, 600.0, 2.0);
    assert_eq!(t.state().content_density, ContentDensity::Sparse);
    // Each element keeps its own marker.
    assert!(crowded.has_class("content-dense"));
    assert!(roomy.has_class("content-sparse"));
}

#[test]
fn history_is_bounded_and_keeps_most_recent_in_order() {
    let mut t = tracker();
    let el = MockElement::new("panel", 1, 200.0, 200.0);
    t.observe(&el);

    for i in 0..25 {
        t.record_resize(&el, 100.0 + i as f64, 50.0, i as f64);
        let h = t.history("panel").expect("history");
        assert!(h.len() <= 10);
    }
    let h = t.history("panel").unwrap();
    assert_eq!(h.len(), 10);
    let widths: Vec<f64> = h.iter().map(|s| s.width).collect();
    let expected: Vec<f64> = (15..25).map(|i| 100.0 + i as f64).collect();
    assert_eq!(widths, expected);
    assert_eq!(h.latest().unwrap().observed_at_ms, 24.0);
}

#[test]
fn density_ignores_history() {
    let mut t = tracker();
    let el = MockElement::new("p", 50, 100.0, 100.0);
    t.observe(&el);
    for i in 0..5 {
        t.record_resize(&el, 10_000.0, 10_000.0, i as f64);
    }
    // Content rect samples are huge, but the current client area is small.
    assert_eq!(t.state().content_density, ContentDensity::Dense);
}

#[test]
fn anonymous_elements_get_stable_fallback_keys() {
    let mut t = tracker();
    let a = MockElement::anonymous(1, 100.0, 100.0);
    let b = MockElement::anonymous(1, 100.0, 100.0);
    t.observe(&a);
    t.observe(&b);

    let ka1 = t.record_resize(&a, 1.0, 1.0, 1.0).key;
    let ka2 = t.record_resize(&a, 2.0, 2.0, 2.0).key;
    let kb = t.record_resize(&b, 3.0, 3.0, 3.0).key;
    assert_eq!(ka1, ka2);
    assert_ne!(ka1, kb);
    assert!(ka1.starts_with("test-"));
    assert_eq!(t.history_for(&a).unwrap().len(), 2);
    assert_eq!(t.history_for(&b).unwrap().len(), 1);
}

#[test]
fn dom_id_is_preferred_as_key() {
    let mut t = tracker();
    let el = MockElement::new("sidebar", 1, 100.0, 100.0);
    t.observe(&el);
    assert_eq!(t.record_resize(&el, 1.0, 1.0, 1.0).key, "sidebar");
}

#[test]
fn observe_is_idempotent() {
    let mut t = tracker();
    let el = MockElement::new("x", 0, 10.0, 10.0);
    assert!(t.observe(&el));
    assert!(!t.observe(&el));
    assert_eq!(t.observed_count(), 1);
    assert!(t.is_observed(&el));
}

#[test]
fn unobserve_never_observed_is_noop() {
    let mut t = tracker();
    let el = MockElement::new("ghost", 0, 10.0, 10.0);
    assert!(!t.unobserve(&el));
    assert_eq!(t.observed_count(), 0);
}

#[test]
fn unobserve_keeps_history() {
    let mut t = tracker();
    let el = MockElement::new("kept", 1, 100.0, 100.0);
    t.observe(&el);
    t.record_resize(&el, 5.0, 5.0, 1.0);
    assert!(t.unobserve(&el));
    assert!(!t.unobserve(&el));
    assert_eq!(t.history("kept").map(|h| h.len()), Some(1));
}

#[test]
fn visibility_marker_follows_intersection_ratio() {
    let t = tracker();
    let el = MockElement::new("v", 0, 10.0, 10.0);
    assert!(t.record_visibility(&el, 0.5));
    assert!(el.has_class("in-viewport"));
    assert!(t.record_visibility(&el, 0.1));
    assert!(el.has_class("in-viewport"));
    assert!(!t.record_visibility(&el, 0.05));
    assert!(!el.has_class("in-viewport"));
}

#[test]
fn ratio_reported_just_under_threshold_still_marks_visible() {
    let t = tracker();
    let el = MockElement::new("edge", 0, 10.0, 10.0);
    assert!(t.record_visibility(&el, 0.0999));
    assert!(el.has_class("in-viewport"));
    assert!(!t.record_visibility(&el, 0.098));
    assert!(!el.has_class("in-viewport"));
}

#[test]
fn expertise_thresholds_are_one_directional() {
    let mut t = tracker();
    for _ in 0..50 {
        t.record_click();
    }
    assert_eq!(t.state().user_expertise, UserExpertise::Beginner);
    assert!(t.record_click()); // 51
    assert_eq!(t.state().user_expertise, UserExpertise::Intermediate);
    for _ in 51..150 {
        t.record_click();
    }
    assert_eq!(t.click_count(), 150);
    assert_eq!(t.state().user_expertise, UserExpertise::Intermediate);
    assert!(t.record_click()); // 151
    assert_eq!(t.state().user_expertise, UserExpertise::Expert);

    for _ in 0..1000 {
        assert!(!t.record_click());
        assert_eq!(t.state().user_expertise, UserExpertise::Expert);
    }
}

#[test]
fn viewport_width_threshold_is_inclusive() {
    let mut t = tracker();
    assert!(!t.apply_viewport_width(1439.0));
    assert!(!t.state().is_large_display);
    assert!(t.apply_viewport_width(1440.0));
    assert!(t.state().is_large_display);
    assert!(t.apply_viewport_width(800.0));
    assert!(!t.state().is_large_display);
}

#[test]
fn external_fields_are_left_to_the_page() {
    let mut t = tracker();
    let el = MockElement::new("e", 5, 10.0, 10.0);
    t.observe(&el);
    assert!(t.set_preferred_visualization("heatmap".parse::<Visualization>().unwrap()));
    assert!(t.set_color_blind_mode(true));
    t.record_resize(&el, 10.0, 10.0, 1.0);
    for _ in 0..200 {
        t.record_click();
    }
    assert_eq!(t.state().preferred_visualization, Visualization::Heatmap);
    assert!(t.state().color_blind_mode);
    assert!("4d".parse::<Visualization>().is_err());
}
