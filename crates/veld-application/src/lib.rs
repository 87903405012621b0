//! Application Layer - Veld Resolver
//!
//! The resolution engine. Every stage is a pure, synchronous computation over
//! the descriptor model; nothing here touches the filesystem or global state.
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Condition evaluation | [`conditions`] | Active descriptor subset |
//! | Graph construction | [`graph`] | Arena of components plus resolved edges |
//! | Binding selection | [`binding`] | One binding per requirement |
//! | Value injection | [`values`] | Resolved configuration values |
//! | Cycle detection | [`cycles`] | Cycle paths on the eager subgraph |
//! | Initialization planning | [`planner`] | Ranked [`ResolutionPlan`](veld_domain::ResolutionPlan) |
//!
//! [`engine::ResolutionEngine`] runs the stages in order and accumulates
//! diagnostics; any ERROR fails the run and no partial plan is returned.
//!
//! ## Ports
//!
//! [`ports`] declares the two collaborator boundaries (descriptor input and
//! plan output). Implementations live in the infrastructure layer.

pub mod binding;
pub mod conditions;
pub mod cycles;
pub mod engine;
pub mod graph;
pub mod planner;
pub mod ports;
pub mod values;

pub use binding::{BindingResolver, Selection};
pub use conditions::{ConditionEvaluator, ConditionOutcome};
pub use cycles::CycleDetector;
pub use engine::ResolutionEngine;
pub use graph::{ComponentGraph, Edge, GraphBuilder};
pub use planner::InitializationPlanner;
pub use ports::{DescriptorSource, PlanSink};
pub use values::ValueResolver;
