use std::rc::Rc;

use scrollfx_core::{Rect, ScrollAnimation, Size, VisibilityConfig};
use scrollfx_platform::*;
use scrollfx_ui::PageSection;
use web_time::Duration;

fn runner() -> HeadlessRunner {
    HeadlessRunner::new(HeadlessConfig::default()).unwrap()
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn first_frame_shows_only_the_hero() {
    let r = runner();
    let f = r.frame();

    assert_eq!(f.scroll_y, 0.0);
    let hero = f.section("hero").unwrap();
    assert!(hero.is_visible);
    assert_eq!(hero.scroll_progress, 1.0);

    let dark = f.section("dark").unwrap();
    assert!(!dark.is_visible);
    assert_eq!(dark.top, 800.0);
    assert_eq!(dark.scroll_progress, 0.0);

    assert!(!f.section("transition").unwrap().is_visible);
    assert_eq!(f.parallax, ParallaxSnapshot { near: 0.0, far: 0.0 });
    assert_eq!(f.transition_progress, 0.0);
    assert_eq!(f.transition_background, "#ffffff");
}

#[test]
fn hero_reveal_plays_out_over_time() {
    let r = runner();
    let f = r.frame();
    let hero = f.section("hero").unwrap();
    assert_eq!(hero.reveal_opacity, 0.0);
    assert_eq!(hero.reveal_offset, 40.0);
    assert!(f.animating);
    // sections that never showed stay at rest
    assert_eq!(f.section("dark").unwrap().reveal_opacity, 0.0);

    let f = r.advance(Duration::from_millis(1000));
    let hero = f.section("hero").unwrap();
    assert_eq!(hero.reveal_opacity, 1.0);
    assert_eq!(hero.reveal_offset, 0.0);
    assert!(!f.animating);
}

#[test]
fn scrolling_hands_the_reveal_to_the_next_section() {
    let r = runner();
    r.advance(Duration::from_millis(1000));
    r.scroll_to(800.0);

    // ease-out is past the linear midpoint half way through
    let f = r.advance(Duration::from_millis(500));
    let dark = f.section("dark").unwrap().reveal_opacity;
    let hero = f.section("hero").unwrap().reveal_opacity;
    assert!(dark > 0.6 && dark < 0.75, "{dark}");
    assert!((dark + hero - 1.0).abs() < 1e-3, "{dark} {hero}");
    assert!(f.animating);

    let f = r.advance(Duration::from_millis(600));
    assert_eq!(f.section("dark").unwrap().reveal_opacity, 1.0);
    assert_eq!(f.section("hero").unwrap().reveal_offset, 40.0);
    assert!(!f.animating);
}

#[test]
fn runners_on_one_thread_keep_their_own_time() {
    let first = runner();
    let second = runner();
    second.advance(Duration::from_millis(200));

    let f = first.advance(Duration::from_millis(1000));
    assert_eq!(f.section("hero").unwrap().reveal_opacity, 1.0);
    let f = second.frame();
    assert!(f.section("hero").unwrap().reveal_opacity < 1.0);
}

#[test]
fn scrolling_moves_every_observer() {
    let r = runner();
    let f = r.scroll_to(1200.0);

    assert!(!f.section("hero").unwrap().is_visible);
    assert!(f.section("dark").unwrap().is_visible);
    assert!(f.section("transition").unwrap().is_visible);
    assert_eq!(f.section("transition").unwrap().scroll_progress, 0.5);
    assert!(close(f.transition_progress, 0.5));
    assert!(close(f.parallax.near, 360.0));
    assert!(close(f.parallax.far, -240.0));
}

#[test]
fn visibility_follows_the_viewport_both_ways() {
    let r = runner();
    let seen: Vec<bool> = [0.0, 800.0, 1600.0, 800.0, 0.0]
        .into_iter()
        .map(|y| r.scroll_to(y).section("hero").unwrap().is_visible)
        .collect();
    assert_eq!(seen, vec![true, false, false, false, true]);
}

#[test]
fn registrations_are_released_with_the_runner() {
    let r = runner();
    let host = r.host().clone();
    // three visibility observers plus two parallax layers
    assert_eq!(host.scroll_listener_count(), 5);
    assert_eq!(host.watcher_count(), 3);

    r.page().unmount();
    assert_eq!(host.scroll_listener_count(), 0);
    assert_eq!(host.watcher_count(), 0);

    let r = runner();
    let host = r.host().clone();
    drop(r);
    assert_eq!(host.scroll_listener_count(), 0);
    assert_eq!(host.watcher_count(), 0);
}

#[test]
fn disposing_the_page_releases_everything() {
    let r = runner();
    let _ = r.render_html();
    r.page().dispose();
    assert_eq!(r.host().scroll_listener_count(), 0);
    assert_eq!(r.host().watcher_count(), 0);

    // state freezes at its last value
    let f = r.scroll_to(1000.0);
    assert!(f.section("hero").unwrap().is_visible);
    assert!(!r.page().is_dirty());
}

#[test]
fn reconfiguring_replaces_the_watcher() {
    let r = runner();
    let hero = r.page().hero().observer();
    hero.set_config(VisibilityConfig::new(0.95, "0px").unwrap());

    assert_eq!(r.host().watcher_count(), 3);
    assert_eq!(r.host().scroll_listener_count(), 5);

    // only 50% of the hero is on screen here
    let f = r.scroll_to(400.0);
    assert!(!f.section("hero").unwrap().is_visible);
}

#[test]
fn narrow_viewport_stretches_the_dark_section() {
    let r = runner();
    let f = r.resize(600.0, 800.0).unwrap();

    let dark = f.section("dark").unwrap();
    assert_eq!(dark.height, 1400.0);
    assert_eq!(f.section("transition").unwrap().top, 2200.0);
    assert_eq!(r.document_height(), 3000.0);
    assert_eq!(r.max_scroll(), 2200.0);
}

#[test]
fn sweep_visits_the_whole_page() {
    let r = runner();
    let frames = r.sweep(400.0).unwrap();

    let stops: Vec<f32> = frames.iter().map(|f| f.scroll_y).collect();
    assert_eq!(stops, vec![0.0, 400.0, 800.0, 1200.0, 1600.0]);

    let last = frames.last().unwrap();
    assert_eq!(last.transition_progress, 1.0);
    assert_eq!(last.transition_background, "#020817");
    assert!(close(last.parallax.far, -320.0));
}

#[test]
fn bad_input_is_rejected() {
    let err = HeadlessRunner::new(HeadlessConfig {
        viewport: Size::new(0.0, 800.0),
        ..HeadlessConfig::default()
    });
    assert!(matches!(err, Err(PlatformError::InvalidViewport { .. })));

    let r = runner();
    assert!(matches!(r.sweep(0.0), Err(PlatformError::InvalidStep(_))));
    assert!(matches!(r.resize(f32::NAN, 10.0), Err(PlatformError::InvalidViewport { .. })));
}

#[test]
fn oversized_sweeps_are_rejected() {
    let r = runner();
    // 1600px of scroll in 0.1px steps
    assert!(matches!(
        r.sweep(0.1),
        Err(PlatformError::SweepTooLong { max: MAX_SWEEP_STOPS, .. })
    ));
    // small enough that repeated addition would stop advancing
    assert!(matches!(r.sweep(1e-5), Err(PlatformError::SweepTooLong { .. })));
    assert!(matches!(r.sweep(f32::MIN_POSITIVE), Err(PlatformError::SweepTooLong { .. })));

    let frames = r.sweep(5000.0).unwrap();
    let stops: Vec<f32> = frames.iter().map(|f| f.scroll_y).collect();
    assert_eq!(stops, vec![0.0, 1600.0]);
}

#[test]
fn unmount_from_the_first_entry_leaves_nothing_installed() {
    let host = HeadlessHost::new(Size::new(1280.0, 800.0));
    let anim = Rc::new(ScrollAnimation::new(Rc::new(host.clone()), VisibilityConfig::default()));
    {
        // reveal once, then stop observing
        let weak = Rc::downgrade(&anim);
        anim.is_visible().subscribe(move |visible| {
            if !*visible {
                return;
            }
            if let Some(anim) = weak.upgrade() {
                anim.unmount();
            }
        });
    }
    anim.bind(host.create_element(Rect::new(0.0, 0.0, 1280.0, 800.0)));

    assert!(anim.is_visible().get());
    assert!(!anim.is_active());
    assert_eq!(host.scroll_listener_count(), 0);
    assert_eq!(host.watcher_count(), 0);

    // progress was never computed and no longer follows the scroll
    host.scroll_to(300.0);
    assert_eq!(anim.scroll_progress().get(), 0.0);
}

#[test]
fn frames_serialize_to_json() {
    let r = runner();
    let value = serde_json::to_value(r.scroll_to(800.0)).unwrap();

    assert_eq!(value["scroll_y"], 800.0);
    assert_eq!(value["sections"][1]["name"], "dark");
    assert_eq!(value["sections"][1]["is_visible"], true);
    assert_eq!(value["parallax"]["near"].as_f64().map(|v| v.round()), Some(240.0));
}

#[test]
fn html_contains_every_section() {
    let r = runner();
    let html = r.render_html();

    assert_eq!(html.matches("<section").count(), 3);
    assert!(html.contains("Immersive"));
    assert!(html.contains("Seamless Transition"));
    assert!(!r.page().is_dirty());
}
