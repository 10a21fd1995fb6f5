//! Boundary-region predicates used by the outside-interaction rule.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::domain::TargetId;

/// Answers whether an interaction target lies inside the panel's rendered extent.
pub trait BoundaryRegion {
    fn contains(&self, target: TargetId) -> bool;
}

impl<F> BoundaryRegion for F
where
    F: Fn(TargetId) -> bool,
{
    fn contains(&self, target: TargetId) -> bool {
        self(target)
    }
}

/// A region described by the set of targets rendered inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRegion {
    targets: HashSet<TargetId>,
}

impl TargetRegion {
    pub fn new(targets: impl IntoIterator<Item = TargetId>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, target: TargetId) -> bool {
        self.targets.insert(target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl BoundaryRegion for TargetRegion {
    fn contains(&self, target: TargetId) -> bool {
        self.targets.contains(&target)
    }
}

/// How a pointer-down on the toggle affordance is classified while the panel is
/// open. The affordance is rendered outside the boundary region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAffordancePolicy {
    /// The affordance is never "outside"; its own click closes the panel.
    #[default]
    Excluded,
    /// The affordance is treated like any other outside target.
    CountsAsOutside,
}

pub(crate) struct OutsideRule {
    pub(crate) boundary: Box<dyn BoundaryRegion>,
    pub(crate) toggle_target: Option<TargetId>,
    pub(crate) policy: ToggleAffordancePolicy,
}

impl OutsideRule {
    pub(crate) fn is_outside(&self, target: TargetId) -> bool {
        if self.boundary.contains(target) {
            return false;
        }
        match (self.policy, self.toggle_target) {
            (ToggleAffordancePolicy::Excluded, Some(toggle)) => target != toggle,
            _ => true,
        }
    }
}
