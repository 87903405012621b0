//! JSON plan writer

use std::path::{Path, PathBuf};

use tracing::info;
use veld_application::ports::PlanSink;
use veld_domain::error::Result;
use veld_domain::value_objects::ResolutionPlan;

use crate::constants::DEFAULT_PLAN_FILENAME;
use crate::utils::FileUtils;

const CONTEXT: &str = "resolution plan";

/// [`PlanSink`] writing the plan as pretty-printed JSON
///
/// Output is byte-identical for identical plans: every map in the plan is
/// ordered and the file always ends with a newline.
#[derive(Debug, Clone)]
pub struct JsonPlanWriter {
    path: PathBuf,
}

impl JsonPlanWriter {
    /// Writer targeting `path`; parent directories are created on write
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Writer targeting the default plan file name inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_PLAN_FILENAME))
    }

    /// Target file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render a plan the way it is written to disk
    pub fn render(plan: &ResolutionPlan) -> Result<String> {
        FileUtils::to_json_string(plan, CONTEXT)
    }
}

impl PlanSink for JsonPlanWriter {
    fn write_plan(&self, plan: &ResolutionPlan) -> Result<()> {
        FileUtils::ensure_dir_write_json(&self.path, plan, CONTEXT)?;
        info!(
            path = %self.path.display(),
            components = plan.len(),
            "Resolution plan written"
        );
        Ok(())
    }
}
