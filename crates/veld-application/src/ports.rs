//! Ports
//!
//! Boundaries to the two external collaborators: the front-end producing
//! descriptors and the backend consuming the plan. Implementations live in
//! `veld-infrastructure`.

use veld_domain::entities::ComponentDescriptor;
use veld_domain::error::Result;
use veld_domain::value_objects::ResolutionPlan;

/// Supplies the descriptor set for one build
pub trait DescriptorSource: Send + Sync {
    /// Load every component descriptor
    ///
    /// # Errors
    ///
    /// Returns an error when the descriptors cannot be read or decoded.
    fn load_descriptors(&self) -> Result<Vec<ComponentDescriptor>>;
}

/// Receives a successful resolution plan
pub trait PlanSink: Send + Sync {
    /// Persist or forward the plan
    ///
    /// # Errors
    ///
    /// Returns an error when the plan cannot be written.
    fn write_plan(&self, plan: &ResolutionPlan) -> Result<()>;
}
