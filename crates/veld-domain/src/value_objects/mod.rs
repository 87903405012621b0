//! Domain Value Objects
//!
//! Immutable values flowing into and out of the engine.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ResolutionOptions`] | Profiles, properties and flags for one build |
//! | [`Diagnostic`] | One machine-readable finding with a [`DiagnosticCode`] |
//! | [`CyclePath`] | A dependency cycle in discovery order |
//! | [`ResolutionPlan`] | The ordered, fully bound output for code generation |

/// Diagnostics and the code taxonomy
pub mod diagnostic;
/// Resolution options
pub mod options;
/// Resolution plan
pub mod plan;

pub use diagnostic::{CyclePath, Diagnostic, DiagnosticCode, Diagnostics, Severity};
pub use options::ResolutionOptions;
pub use plan::{LifecycleOrder, PlannedComponent, ResolutionPlan, ResolvedBinding};
