//! Infrastructure Adapters
//!
//! Implementations of the application ports for the two collaborator
//! boundaries.
//!
//! | Adapter | Port | Format |
//! |---------|------|--------|
//! | [`JsonDescriptorSource`] | `DescriptorSource` | JSON array or `{ "components": [...] }` |
//! | [`JsonPlanWriter`] | `PlanSink` | Pretty-printed JSON, stable key order |

pub mod json_plan_writer;
pub mod json_source;

pub use json_plan_writer::JsonPlanWriter;
pub use json_source::JsonDescriptorSource;
