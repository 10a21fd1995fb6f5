//! Panel state controllers for the article presentation settings.
//!
//! [`DraftConfigController`] stages option changes and pushes them to a
//! [`ConfigurationSink`] on commit or reset. [`PanelVisibilityController`]
//! owns the open flag and closes the panel on pointer-down outside its
//! [`BoundaryRegion`], listening on the [`InteractionBus`] only while open.

pub mod boundary;
pub mod draft;
pub mod interaction;
pub mod panel;
pub mod sink;
pub mod visibility;

pub use boundary::{BoundaryRegion, TargetRegion, ToggleAffordancePolicy};
pub use draft::DraftConfigController;
pub use interaction::{InteractionBus, InteractionEvent, InteractionKind, Subscription};
pub use panel::{ArticleParamsPanel, PanelCommand, PanelSnapshot};
pub use sink::ConfigurationSink;
pub use visibility::{CloseReason, PanelVisibilityController, VisibilityOptions, VisibilityState};
