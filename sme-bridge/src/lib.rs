//! Dashboard bridge: typed operator actions against a dashboard session.
//!
//! Operator input (a CLI flag, a replayed JSON file) is parsed into exactly
//! one of the `DashboardAction` variants, validated, applied to the page
//! state it belongs to, and recorded in the session's audit log.
//!
//! - Every action is an enum variant with typed parameters
//! - Every response is a structured `ActionResult`, never free-form text
//! - Out-of-range values are rejected before any state changes

pub mod error;
pub mod ops;
pub mod protocol;
pub mod state;

pub use error::{BridgeError, BridgeResult};
pub use ops::{DashboardAction, Page};
pub use protocol::{ActionResult, AuditEntry, DashboardRequest, DashboardResponse, Session};
pub use state::{
    ExportState, ProfileState, RecommendationsState, SimulatorState, UploadState,
    VisualizationState,
};
