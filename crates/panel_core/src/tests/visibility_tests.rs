use super::*;
use crate::{boundary::TargetRegion, interaction::InteractionEvent};

const PANEL: TargetId = TargetId(10);
const PANEL_CONTROL: TargetId = TargetId(11);
const TOGGLE: TargetId = TargetId(1);
const ARTICLE: TargetId = TargetId(100);

fn controller(policy: ToggleAffordancePolicy) -> (InteractionBus, PanelVisibilityController) {
    let bus = InteractionBus::new();
    let controller = PanelVisibilityController::with_options(
        bus.clone(),
        TargetRegion::new([PANEL, PANEL_CONTROL]),
        VisibilityOptions {
            toggle_target: Some(TOGGLE),
            policy,
        },
    );
    (bus, controller)
}

#[test]
fn starts_closed_without_listener() {
    let (bus, controller) = controller(ToggleAffordancePolicy::Excluded);
    assert_eq!(controller.state(), VisibilityState::Closed);
    assert!(!controller.has_outside_listener());
    assert_eq!(bus.listener_count(), 0);
    assert_eq!(controller.last_close_reason(), None);
}

#[test]
fn toggle_opens_and_registers_one_listener() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    controller.toggle();

    assert!(controller.is_open());
    assert!(controller.has_outside_listener());
    assert_eq!(bus.listener_count(), 1);
}

#[test]
fn toggle_twice_restores_closed_and_releases_listener() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    controller.toggle();
    controller.toggle();

    assert_eq!(controller.state(), VisibilityState::Closed);
    assert_eq!(controller.last_close_reason(), Some(CloseReason::Toggle));
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn outside_pointer_down_closes_and_releases_listener() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    controller.toggle();

    bus.dispatch(InteractionEvent::pointer_down(ARTICLE));

    assert!(!controller.is_open());
    assert_eq!(
        controller.last_close_reason(),
        Some(CloseReason::OutsideInteraction)
    );
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn inside_pointer_down_keeps_panel_open() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    controller.toggle();

    bus.dispatch(InteractionEvent::pointer_down(PANEL_CONTROL));

    assert!(controller.is_open());
    assert!(controller.has_outside_listener());
}

#[test]
fn only_pointer_down_counts_as_outside_interaction() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    controller.toggle();

    bus.dispatch(InteractionEvent::click(ARTICLE));
    bus.dispatch(InteractionEvent::pointer_up(ARTICLE));

    assert!(controller.is_open());
}

#[test]
fn closed_panel_does_not_observe_interactions() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    controller.toggle();
    controller.toggle();

    assert_eq!(bus.dispatch(InteractionEvent::pointer_down(ARTICLE)), 0);
    assert_eq!(controller.last_close_reason(), Some(CloseReason::Toggle));
}

#[test]
fn repeated_cycles_never_accumulate_listeners() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    for _ in 0..5 {
        controller.toggle();
        assert_eq!(bus.listener_count(), 1);
        bus.dispatch(InteractionEvent::pointer_down(ARTICLE));
        assert_eq!(bus.listener_count(), 0);
    }

    controller.toggle();
    assert_eq!(bus.dispatch(InteractionEvent::pointer_down(ARTICLE)), 1);
    assert!(!controller.is_open());
}

#[test]
fn dropping_open_controller_releases_listener() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    controller.toggle();
    assert_eq!(bus.listener_count(), 1);

    drop(controller);

    assert_eq!(bus.listener_count(), 0);
    assert_eq!(bus.dispatch(InteractionEvent::pointer_down(ARTICLE)), 0);
}

#[test]
fn explicit_close_releases_listener_and_is_idempotent() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    controller.open();
    controller.open();
    assert_eq!(bus.listener_count(), 1);

    controller.close();
    controller.close();

    assert_eq!(controller.last_close_reason(), Some(CloseReason::Explicit));
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn excluded_toggle_affordance_is_not_outside() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::Excluded);
    controller.toggle();

    // Pointer-down on the affordance, then its click handler runs.
    bus.dispatch(InteractionEvent::pointer_down(TOGGLE));
    assert!(controller.is_open());
    controller.toggle();

    assert!(!controller.is_open());
    assert_eq!(controller.last_close_reason(), Some(CloseReason::Toggle));
}

#[test]
fn opening_click_is_not_undone_by_its_own_interaction() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::CountsAsOutside);

    bus.dispatch(InteractionEvent::pointer_down(TOGGLE));
    controller.toggle();
    bus.dispatch(InteractionEvent::pointer_up(TOGGLE));
    bus.dispatch(InteractionEvent::click(TOGGLE));

    assert!(controller.is_open());
}

#[test]
fn toggle_counting_as_outside_closes_then_reopens() {
    let (bus, mut controller) = controller(ToggleAffordancePolicy::CountsAsOutside);
    controller.toggle();

    bus.dispatch(InteractionEvent::pointer_down(TOGGLE));
    assert!(!controller.is_open());
    assert_eq!(
        controller.last_close_reason(),
        Some(CloseReason::OutsideInteraction)
    );

    controller.toggle();
    assert!(controller.is_open());
    assert_eq!(bus.listener_count(), 1);
}

#[test]
fn closure_boundary_region_is_accepted() {
    let bus = InteractionBus::new();
    let mut controller = PanelVisibilityController::new(bus.clone(), |target: TargetId| {
        (10..20).contains(&target.0)
    });
    controller.toggle();

    bus.dispatch(InteractionEvent::pointer_down(TargetId(15)));
    assert!(controller.is_open());

    bus.dispatch(InteractionEvent::pointer_down(TargetId(25)));
    assert!(!controller.is_open());
}
