use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidSlot,
    InvalidOption,
    UnknownOption,
    InvalidCatalog,
}

impl ErrorCode {
    pub fn of(err: &PanelError) -> Self {
        match err {
            PanelError::InvalidSlot { .. } => ErrorCode::InvalidSlot,
            PanelError::InvalidOption { .. } => ErrorCode::InvalidOption,
            PanelError::UnknownOption { .. } => ErrorCode::UnknownOption,
            PanelError::Catalog(_) => ErrorCode::InvalidCatalog,
        }
    }
}

/// Rejected draft mutations. None of these leave the draft modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("unrecognized slot '{name}'")]
    InvalidSlot { name: String },
    #[error("option '{id}' is not offered for slot {slot}")]
    InvalidOption { slot: Slot, id: String },
    #[error("no option with id '{id}' for slot {slot}")]
    UnknownOption { slot: Slot, id: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog offers no options for slot {slot}")]
    EmptySlot { slot: Slot },
    #[error("catalog lists option '{id}' twice for slot {slot}")]
    DuplicateOption { slot: Slot, id: String },
    #[error("default option '{id}' for slot {slot} is not in the catalog")]
    DefaultNotInCatalog { slot: Slot, id: String },
}
