use std::cell::RefCell;
use std::rc::Rc;

use web_time::{Duration, Instant};

use crate::animation::*;
use crate::*;

#[test]
fn test_signal_basic() {
    let sig = signal(42);
    assert_eq!(sig.get(), 42);

    sig.set(100);
    assert_eq!(sig.get(), 100);

    sig.update(|v| *v += 1);
    assert_eq!(sig.get(), 101);
}

#[test]
fn test_signal_subscription() {
    let sig = signal(0);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let id = {
        let seen = seen.clone();
        sig.subscribe(move |v| seen.borrow_mut().push(*v))
    };

    sig.set(42);
    assert!(sig.unsubscribe(id));
    assert!(!sig.unsubscribe(id));
    sig.set(7);
    assert_eq!(*seen.borrow(), vec![42]);
    assert_eq!(sig.subscriber_count(), 0);
}

#[test]
fn test_signal_subscriber_can_read() {
    let sig = signal(1);
    let mirror = Rc::new(RefCell::new(0));
    {
        let sig2 = sig.clone();
        let mirror = mirror.clone();
        sig.subscribe(move |_| *mirror.borrow_mut() = sig2.get() * 10);
    }
    sig.set(3);
    assert_eq!(*mirror.borrow(), 30);
}

#[test]
fn test_set_if_changed() {
    let sig = signal(false);
    let count = Rc::new(RefCell::new(0));
    {
        let count = count.clone();
        sig.subscribe(move |_| *count.borrow_mut() += 1);
    }
    assert!(!sig.set_if_changed(false));
    assert!(sig.set_if_changed(true));
    assert!(!sig.set_if_changed(true));
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_scope_explicit_dispose() {
    let cleaned_up = Rc::new(RefCell::new(0));

    let scope = Scope::named("page");
    let c = cleaned_up.clone();
    scope.on_dispose(move || *c.borrow_mut() += 1);
    assert_eq!(scope.pending(), 1);

    scope.dispose();
    scope.dispose();
    assert_eq!(*cleaned_up.borrow(), 1);
    assert!(scope.is_disposed());

    // late registrations run immediately
    let c = cleaned_up.clone();
    scope.on_dispose(move || *c.borrow_mut() += 1);
    assert_eq!(*cleaned_up.borrow(), 2);
}

#[test]
fn test_child_scopes_dispose_first() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let parent = Scope::named("parent");
    let child = parent.child("child");
    for (scope, tag) in [(&parent, "parent-a"), (&child, "child"), (&parent, "parent-b")] {
        let order = order.clone();
        scope.on_dispose(move || order.borrow_mut().push(tag));
    }
    parent.dispose();
    assert_eq!(*order.borrow(), vec!["child", "parent-b", "parent-a"]);
    assert!(child.is_disposed());
}

#[test]
fn test_current_scope_is_restored() {
    assert!(current_scope().is_none());
    let outer = Scope::named("outer");
    let inner = Scope::named("inner");
    outer.run(|| {
        assert_eq!(current_scope().unwrap().name(), "outer");
        inner.run(|| assert_eq!(current_scope().unwrap().name(), "inner"));
        assert_eq!(current_scope().unwrap().name(), "outer");
    });
    assert!(current_scope().is_none());
}

#[test]
fn test_dropping_last_handle_releases() {
    let ran = Rc::new(RefCell::new(false));
    {
        let scope = Scope::new();
        let ran = ran.clone();
        scope.on_dispose(move || *ran.borrow_mut() = true);
    }
    assert!(*ran.borrow());
}

#[test]
fn test_subscription_releases_once() {
    let released = Rc::new(RefCell::new(0));
    {
        let released = released.clone();
        let sub = Subscription::new(move || *released.borrow_mut() += 1);
        assert!(!sub.is_released());
    }
    assert_eq!(*released.borrow(), 1);

    let released2 = released.clone();
    Subscription::new(move || *released2.borrow_mut() += 1).cancel();
    assert_eq!(*released.borrow(), 2);
}

#[test]
fn test_color_hex() {
    assert_eq!(Color::from_hex("#FF5733"), Color(255, 87, 51, 255));
    assert_eq!(Color::from_hex("#FF5733AA"), Color(255, 87, 51, 170));
    assert_eq!(Color::from_hex("#F57"), Color::BLACK);
    assert_eq!(Color::from_hex("#zz5733"), Color::BLACK);
    assert_eq!(Color(255, 87, 51, 255).to_hex(), "#ff5733");
    assert_eq!(Color(255, 87, 51, 170).to_hex(), "#ff5733aa");
}

#[test]
fn test_hsl_conversion_and_format() {
    assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_color(), Color(255, 255, 255, 255));
    assert_eq!(Hsl::new(222.2, 84.0, 4.9).to_color().to_hex(), "#020817");
    assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_color(), Color(255, 0, 0, 255));
    assert_eq!(Hsl::new(222.2, 84.0, 4.9).to_string(), "hsl(222.2, 84%, 4.9%)");

    let mid = Hsl::new(0.0, 0.0, 100.0).lerp(&Hsl::new(222.2, 84.0, 4.9), 0.5);
    assert_eq!(mid.to_string(), "hsl(111.1, 42%, 52.45%)");
}

#[test]
fn test_css_number() {
    assert_eq!(css_number(0.0), "0");
    assert_eq!(css_number(-0.0001), "0");
    assert_eq!(css_number(1.5), "1.5");
    assert_eq!(css_number(-20.0), "-20");
    assert_eq!(css_number(0.30000001), "0.3");
}

#[test]
fn test_rect_intersection() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(
        a.intersection(&Rect::new(50.0, 50.0, 100.0, 100.0)),
        Some(Rect::new(50.0, 50.0, 50.0, 50.0))
    );
    assert_eq!(a.intersection(&Rect::new(100.0, 0.0, 10.0, 10.0)).map(|r| r.area()), Some(0.0));
    assert_eq!(a.intersection(&Rect::new(101.0, 0.0, 10.0, 10.0)), None);
}

#[test]
fn test_animation_deterministic() {
    let clock = ManualClock::new(Instant::now());
    set_clock(Rc::new(clock.clone()));

    let mut a = AnimatedValue::new(
        0.0f32,
        AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
    );
    a.set_target(10.0);
    clock.advance(Duration::from_millis(250));
    assert!(a.update());
    assert!((*a.get() - 2.5).abs() < 0.01);

    clock.advance(Duration::from_millis(750));
    assert!(!a.update());
    assert!((*a.get() - 10.0).abs() < 0.001);
    assert!(!a.is_animating());
}

#[test]
fn test_animation_delay() {
    let clock = ManualClock::new(Instant::now());
    set_clock(Rc::new(clock.clone()));

    let mut a = AnimatedValue::new(
        0.0f32,
        AnimationSpec::tween(Duration::from_millis(100), Easing::Linear)
            .with_delay(Duration::from_millis(500)),
    );
    a.set_target(1.0);
    clock.advance(Duration::from_millis(400));
    assert!(a.update());
    assert_eq!(*a.get(), 0.0);
    clock.advance(Duration::from_millis(150));
    a.update();
    assert!((*a.get() - 0.5).abs() < 0.01);
}
