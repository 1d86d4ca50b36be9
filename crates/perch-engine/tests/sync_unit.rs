#![forbid(unsafe_code)]

//! Unit tests for [`LifecycleSynchronizer`], run as an integration test so
//! the harness and these tests link the same copy of `perch_engine`.

use perch_engine::{LifecycleSynchronizer, OverlayCaps, TriggerAction};
use perch_harness::ScriptedWidget;
use std::cell::Cell;
use std::rc::Rc;

fn counting_hooks() -> (Rc<Cell<usize>>, Rc<Cell<usize>>, impl FnMut(), impl FnMut()) {
    let opens = Rc::new(Cell::new(0));
    let closes = Rc::new(Cell::new(0));
    let (o, c) = (opens.clone(), closes.clone());
    (
        opens,
        closes,
        move || o.set(o.get() + 1),
        move || c.set(c.get() + 1),
    )
}

#[test]
fn uncontrolled_native_change_updates_store_and_notifies() {
    let (opens, closes, on_open, on_close) = counting_hooks();
    let mut sync = LifecycleSynchronizer::uncontrolled(false)
        .with_on_open(on_open)
        .with_on_close(on_close);

    sync.native_state_changed(true);
    assert!(sync.is_open());
    assert_eq!(opens.get(), 1);

    sync.native_state_changed(false);
    assert!(!sync.is_open());
    assert_eq!(closes.get(), 1);
}

#[test]
fn controlled_echo_does_not_notify() {
    // The no-feedback-loop property: a native notification that matches
    // the controlled value must not re-announce.
    let (opens, closes, on_open, on_close) = counting_hooks();
    let mut sync = LifecycleSynchronizer::controlled(true)
        .with_on_open(on_open)
        .with_on_close(on_close);

    sync.native_state_changed(true);
    assert_eq!(opens.get(), 0);
    assert_eq!(closes.get(), 0);

    sync.native_state_changed(false);
    assert_eq!(closes.get(), 1);
}

#[test]
fn repeated_echo_is_absorbed_every_time() {
    let (opens, _closes, on_open, on_close) = counting_hooks();
    let mut sync = LifecycleSynchronizer::controlled(true)
        .with_on_open(on_open)
        .with_on_close(on_close);

    for _ in 0..5 {
        sync.native_state_changed(true);
    }
    assert_eq!(opens.get(), 0);
    assert_eq!(sync.last_native_state(), Some(true));
}

#[test]
fn repeated_native_delta_notifies_once() {
    // Controlled mode: the caller still believes "open" until it reacts,
    // so a widget re-emitting `false` is a repeat of the same
    // transition, not a second one.
    let (_opens, closes, on_open, on_close) = counting_hooks();
    let mut sync = LifecycleSynchronizer::controlled(true)
        .with_on_open(on_open)
        .with_on_close(on_close);

    sync.native_state_changed(false);
    assert_eq!(closes.get(), 1);

    sync.native_state_changed(false);
    sync.native_state_changed(false);
    assert_eq!(closes.get(), 1);
    assert_eq!(sync.last_native_state(), Some(false));
}

#[test]
fn reconcile_is_controlled_mode_only() {
    // Uncontrolled mode owns its own store; there is no caller boolean
    // to reconcile against, even when the widget state disagrees.
    let mut widget = ScriptedWidget::new(OverlayCaps::FULL);
    widget.set_open(true);
    let mut sync = LifecycleSynchronizer::uncontrolled(false);

    sync.reconcile(&mut widget);
    assert_eq!(widget.show_calls, 0);
    assert_eq!(widget.hide_calls, 0);
    assert!(widget.open());
}

#[test]
fn reconcile_issues_show_only_on_mismatch() {
    let mut widget = ScriptedWidget::new(OverlayCaps::FULL);
    let mut sync = LifecycleSynchronizer::controlled(true);

    sync.reconcile(&mut widget);
    assert_eq!(widget.show_calls, 1);

    // Widget now matches; a second render reconcile is a no-op.
    sync.reconcile(&mut widget);
    assert_eq!(widget.show_calls, 1);
    assert_eq!(widget.hide_calls, 0);
}

#[test]
fn reconcile_hides_when_controlled_value_drops() {
    let mut widget = ScriptedWidget::new(OverlayCaps::FULL);
    widget.set_open(true);
    let mut sync = LifecycleSynchronizer::controlled(true);

    sync.reconcile(&mut widget);
    assert_eq!(widget.hide_calls, 0);

    sync.set_controlled_open(false);
    sync.reconcile(&mut widget);
    assert_eq!(widget.hide_calls, 1);
}

#[test]
fn reconcile_skipped_without_query_capability() {
    let mut widget = ScriptedWidget::new(OverlayCaps::SHOW | OverlayCaps::HIDE);
    let mut sync = LifecycleSynchronizer::controlled(true);
    sync.reconcile(&mut widget);
    assert_eq!(widget.show_calls, 0);
}

#[test]
fn reconcile_skipped_when_query_fails() {
    let mut widget = ScriptedWidget::new(OverlayCaps::FULL);
    widget.fail_queries(true);
    let mut sync = LifecycleSynchronizer::controlled(true);
    sync.reconcile(&mut widget);
    assert_eq!(widget.show_calls, 0);
}

#[test]
fn imperative_calls_are_capability_guarded() {
    let mut widget = ScriptedWidget::new(OverlayCaps::empty());
    let sync = LifecycleSynchronizer::uncontrolled(false);

    sync.show(&mut widget);
    sync.hide(&mut widget);
    sync.toggle(&mut widget);
    assert_eq!(widget.show_calls, 0);
    assert_eq!(widget.hide_calls, 0);
    assert_eq!(widget.toggle_calls, 0);
}

#[test]
fn uncontrolled_ignores_set_controlled_open() {
    let mut sync = LifecycleSynchronizer::uncontrolled(false);
    sync.set_controlled_open(true);
    assert!(!sync.is_open());
    assert!(!sync.is_controlled());
}

#[test]
fn trigger_props_target_the_widget() {
    let sync = LifecycleSynchronizer::uncontrolled(false);
    let props = sync.trigger_props("popover-3");
    assert_eq!(props.target, "popover-3");
    assert_eq!(props.target_action, TriggerAction::Toggle);
}
