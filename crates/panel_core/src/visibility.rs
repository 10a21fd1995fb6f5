//! Open/closed state of the panel and the outside-interaction close rule.
//!
//! The pointer-down listener exists exactly while the panel is open. Every
//! transition to closed releases it, and so does dropping the controller.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use serde::{Deserialize, Serialize};
use shared::domain::TargetId;
use tracing::debug;

use crate::{
    boundary::{BoundaryRegion, OutsideRule, ToggleAffordancePolicy},
    interaction::{InteractionBus, InteractionKind, Subscription},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    Toggle,
    Explicit,
    OutsideInteraction,
    Teardown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityOptions {
    /// Target of the affordance that calls [`PanelVisibilityController::toggle`].
    pub toggle_target: Option<TargetId>,
    pub policy: ToggleAffordancePolicy,
}

#[derive(Default)]
struct VisibilityCell {
    open: Cell<bool>,
    outside_listener: RefCell<Option<Subscription>>,
    last_close: Cell<Option<CloseReason>>,
}

impl VisibilityCell {
    fn close(&self, reason: CloseReason) -> bool {
        if !self.open.replace(false) {
            return false;
        }
        // Take first, drop after the RefCell borrow is released.
        let released = self.outside_listener.borrow_mut().take();
        drop(released);
        self.last_close.set(Some(reason));
        debug!(?reason, "panel closed");
        true
    }
}

pub struct PanelVisibilityController {
    bus: InteractionBus,
    rule: Rc<OutsideRule>,
    cell: Rc<VisibilityCell>,
}

impl PanelVisibilityController {
    pub fn new(bus: InteractionBus, boundary: impl BoundaryRegion + 'static) -> Self {
        Self::with_options(bus, boundary, VisibilityOptions::default())
    }

    pub fn with_options(
        bus: InteractionBus,
        boundary: impl BoundaryRegion + 'static,
        options: VisibilityOptions,
    ) -> Self {
        Self {
            bus,
            rule: Rc::new(OutsideRule {
                boundary: Box::new(boundary),
                toggle_target: options.toggle_target,
                policy: options.policy,
            }),
            cell: Rc::new(VisibilityCell::default()),
        }
    }

    pub fn toggle(&mut self) {
        if self.cell.open.get() {
            self.cell.close(CloseReason::Toggle);
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        if self.cell.open.replace(true) {
            return;
        }

        let cell = Rc::downgrade(&self.cell);
        let rule = Rc::clone(&self.rule);
        let subscription = self.bus.subscribe(move |event| {
            if event.kind != InteractionKind::PointerDown {
                return;
            }
            let Some(cell) = cell.upgrade() else {
                return;
            };
            if cell.open.get() && rule.is_outside(event.target) {
                debug!(target_id = event.target.0, "pointer-down outside panel");
                cell.close(CloseReason::OutsideInteraction);
            }
        });

        let stale = self.cell.outside_listener.borrow_mut().replace(subscription);
        debug_assert!(stale.is_none(), "closed panel still held an outside listener");
        drop(stale);
        debug!("panel opened");
    }

    pub fn close(&mut self) {
        self.cell.close(CloseReason::Explicit);
    }

    pub fn is_open(&self) -> bool {
        self.cell.open.get()
    }

    pub fn state(&self) -> VisibilityState {
        if self.is_open() {
            VisibilityState::Open
        } else {
            VisibilityState::Closed
        }
    }

    /// Why the panel last left the open state, if it ever did.
    pub fn last_close_reason(&self) -> Option<CloseReason> {
        self.cell.last_close.get()
    }

    pub fn has_outside_listener(&self) -> bool {
        self.cell
            .outside_listener
            .borrow()
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    pub fn bus(&self) -> &InteractionBus {
        &self.bus
    }
}

impl Drop for PanelVisibilityController {
    fn drop(&mut self) {
        self.cell.close(CloseReason::Teardown);
    }
}

#[cfg(test)]
#[path = "tests/visibility_tests.rs"]
mod tests;
