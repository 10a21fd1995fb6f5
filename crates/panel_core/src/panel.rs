//! The article-parameters panel: one visibility controller, one draft controller.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{Configuration, Slot},
    error::PanelError,
};
use tracing::debug;

use crate::{
    draft::DraftConfigController,
    sink::ConfigurationSink,
    visibility::{PanelVisibilityController, VisibilityState},
};

/// User actions the panel reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelCommand {
    /// Click on the toggle affordance.
    Toggle,
    /// A control picked the option `id` for `slot`.
    Select { slot: Slot, id: String },
    /// The apply button.
    Submit,
    /// The clear button.
    Reset,
}

/// What a renderer needs to draw the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub state: VisibilityState,
    pub draft: Configuration,
}

impl PanelSnapshot {
    pub fn is_open(&self) -> bool {
        self.state == VisibilityState::Open
    }
}

pub struct ArticleParamsPanel<S> {
    visibility: PanelVisibilityController,
    draft: DraftConfigController<S>,
}

impl<S: ConfigurationSink> ArticleParamsPanel<S> {
    pub fn new(visibility: PanelVisibilityController, draft: DraftConfigController<S>) -> Self {
        Self { visibility, draft }
    }

    /// Submit and reset leave visibility alone; only toggle and outside
    /// interactions move it.
    pub fn handle(&mut self, command: PanelCommand) -> Result<(), PanelError> {
        debug!(?command, "panel command");
        match command {
            PanelCommand::Toggle => self.visibility.toggle(),
            PanelCommand::Select { slot, id } => self.draft.select(slot, &id)?,
            PanelCommand::Submit => self.draft.commit(),
            PanelCommand::Reset => self.draft.reset(),
        }
        Ok(())
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            state: self.visibility.state(),
            draft: self.draft.draft().clone(),
        }
    }

    pub fn visibility(&self) -> &PanelVisibilityController {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut PanelVisibilityController {
        &mut self.visibility
    }

    pub fn draft(&self) -> &DraftConfigController<S> {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftConfigController<S> {
        &mut self.draft
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
