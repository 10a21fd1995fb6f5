//! Domain vocabulary shared by the panel controllers and their consumers.

pub mod catalog;
pub mod domain;
pub mod error;

pub use catalog::Catalog;
pub use domain::{Configuration, OptionValue, Slot, TargetId};
pub use error::{CatalogError, ErrorCode, PanelError};

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod domain_tests;
