//! Working copy of the presentation configuration and its commit/reset path.

use std::sync::Arc;

use shared::{
    catalog::Catalog,
    domain::{Configuration, OptionValue, Slot},
    error::PanelError,
};
use tracing::{debug, warn};

use crate::sink::ConfigurationSink;

pub struct DraftConfigController<S> {
    catalog: Arc<Catalog>,
    draft: Configuration,
    sink: S,
}

impl<S: ConfigurationSink> DraftConfigController<S> {
    /// Starts with the catalog default as the draft. The catalog must validate.
    pub fn new(catalog: Arc<Catalog>, sink: S) -> Result<Self, PanelError> {
        catalog.validate()?;
        let draft = catalog.default.clone();
        Ok(Self {
            catalog,
            draft,
            sink,
        })
    }

    pub fn update_field(&mut self, slot: Slot, value: OptionValue) -> Result<(), PanelError> {
        if !self.catalog.contains(slot, &value) {
            warn!(%slot, option = %value.id, "rejected option outside the catalog");
            return Err(PanelError::InvalidOption { slot, id: value.id });
        }
        debug!(%slot, option = %value.id, "draft field updated");
        self.draft.set(slot, value);
        Ok(())
    }

    /// Untyped entry point for callers that carry slot names as strings.
    pub fn update_field_by_name(
        &mut self,
        slot: &str,
        value: OptionValue,
    ) -> Result<(), PanelError> {
        let slot = slot.parse::<Slot>().inspect_err(|err| {
            warn!(error = %err, "rejected draft update");
        })?;
        self.update_field(slot, value)
    }

    pub fn select(&mut self, slot: Slot, id: &str) -> Result<(), PanelError> {
        let value = self.catalog.find(slot, id)?.clone();
        self.update_field(slot, value)
    }

    pub fn commit(&mut self) {
        debug!("applying draft configuration");
        self.sink.apply_configuration(self.draft.clone());
    }

    /// Restores the default locally, then applies it.
    pub fn reset(&mut self) {
        self.draft = self.catalog.default.clone();
        debug!("draft reset to default, applying");
        self.sink.apply_configuration(self.catalog.default.clone());
    }

    pub fn draft(&self) -> &Configuration {
        &self.draft
    }

    pub fn default_configuration(&self) -> &Configuration {
        &self.catalog.default
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.catalog.default
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
