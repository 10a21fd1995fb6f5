//! Scripted replay of user interactions against the panel.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use panel_core::{
    ArticleParamsPanel, DraftConfigController, InteractionBus, InteractionEvent, PanelCommand,
    PanelSnapshot, PanelVisibilityController, TargetRegion, VisibilityOptions, VisibilityState,
};
use serde::{Deserialize, Serialize};
use shared::{
    catalog::Catalog,
    domain::{Configuration, Slot, TargetId},
    error::{ErrorCode, PanelError},
};
use tracing::{debug, warn};

use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Toggle,
    Submit,
    Reset,
    Select { slot: Slot, id: String },
    /// A bare pointer-down, e.g. pressing on the article body.
    PointerDown(TargetId),
    /// A full press/release/click; the toggle affordance reacts on click.
    Click(TargetId),
}

#[derive(Debug, Clone, Serialize)]
pub struct StepError {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&PanelError> for StepError {
    fn from(err: &PanelError) -> Self {
        Self {
            code: ErrorCode::of(err),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub step: ScriptStep,
    pub state: VisibilityState,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applied: Vec<Configuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StepError>,
}

pub type AppliedLog = Rc<RefCell<Vec<Configuration>>>;

pub struct ScriptRunner {
    bus: InteractionBus,
    toggle_target: TargetId,
    applied: AppliedLog,
    panel: ArticleParamsPanel<Box<dyn FnMut(Configuration)>>,
}

impl ScriptRunner {
    pub fn new(catalog: Catalog, settings: &Settings) -> Result<Self, PanelError> {
        let bus = InteractionBus::new();
        let applied: AppliedLog = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&applied);
        let sink: Box<dyn FnMut(Configuration)> =
            Box::new(move |config: Configuration| log.borrow_mut().push(config));

        let visibility = PanelVisibilityController::with_options(
            bus.clone(),
            TargetRegion::new(settings.panel_targets.iter().copied()),
            VisibilityOptions {
                toggle_target: Some(settings.toggle_target),
                policy: settings.toggle_policy,
            },
        );
        let draft = DraftConfigController::new(Arc::new(catalog), sink)?;

        Ok(Self {
            bus,
            toggle_target: settings.toggle_target,
            applied,
            panel: ArticleParamsPanel::new(visibility, draft),
        })
    }

    /// Runs every step; rejected mutations are reported and the replay goes on.
    pub fn run(&mut self, steps: Vec<ScriptStep>) -> Vec<StepReport> {
        steps
            .into_iter()
            .enumerate()
            .map(|(index, step)| self.run_step(index, step))
            .collect()
    }

    pub fn run_step(&mut self, index: usize, step: ScriptStep) -> StepReport {
        debug!(index, ?step, "script step");
        let result = match &step {
            ScriptStep::Toggle => self.panel.handle(PanelCommand::Toggle),
            ScriptStep::Submit => self.panel.handle(PanelCommand::Submit),
            ScriptStep::Reset => self.panel.handle(PanelCommand::Reset),
            ScriptStep::Select { slot, id } => self.panel.handle(PanelCommand::Select {
                slot: *slot,
                id: id.clone(),
            }),
            ScriptStep::PointerDown(target) => {
                self.bus.dispatch(InteractionEvent::pointer_down(*target));
                Ok(())
            }
            ScriptStep::Click(target) => self.click(*target),
        };

        let error = result.as_ref().err().map(|err| {
            warn!(index, error = %err, "script step rejected");
            StepError::from(err)
        });
        let applied = self.applied.borrow_mut().drain(..).collect();

        StepReport {
            index,
            step,
            state: self.panel.visibility().state(),
            applied,
            error,
        }
    }

    fn click(&mut self, target: TargetId) -> Result<(), PanelError> {
        self.bus.dispatch(InteractionEvent::pointer_down(target));
        self.bus.dispatch(InteractionEvent::pointer_up(target));
        if target == self.toggle_target {
            self.panel.handle(PanelCommand::Toggle)?;
        }
        self.bus.dispatch(InteractionEvent::click(target));
        Ok(())
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        self.panel.snapshot()
    }
}

pub fn parse_script(raw: &str) -> serde_json::Result<Vec<ScriptStep>> {
    serde_json::from_str(raw)
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
