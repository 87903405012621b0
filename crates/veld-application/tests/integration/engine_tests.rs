//! Engine tests through the collaborator ports

use std::sync::Mutex;

use veld_application::{DescriptorSource, PlanSink, ResolutionEngine};
use veld_domain::entities::{ComponentDescriptor, DependencyRequirement};
use veld_domain::error::{Error, Result};
use veld_domain::value_objects::{DiagnosticCode, ResolutionOptions, ResolutionPlan};

use crate::test_utils::{component, implementing};

struct InMemorySource {
    descriptors: Vec<ComponentDescriptor>,
}

impl DescriptorSource for InMemorySource {
    fn load_descriptors(&self) -> Result<Vec<ComponentDescriptor>> {
        Ok(self.descriptors.clone())
    }
}

struct BrokenSource;

impl DescriptorSource for BrokenSource {
    fn load_descriptors(&self) -> Result<Vec<ComponentDescriptor>> {
        Err(Error::invalid_descriptor("unreadable"))
    }
}

#[derive(Default)]
struct RecordingSink {
    written: Mutex<Vec<ResolutionPlan>>,
}

impl PlanSink for RecordingSink {
    fn write_plan(&self, plan: &ResolutionPlan) -> Result<()> {
        self.written
            .lock()
            .map_err(|_| Error::Infrastructure {
                message: "sink lock poisoned".to_string(),
                source: None,
            })?
            .push(plan.clone());
        Ok(())
    }
}

#[test]
fn test_run_writes_successful_plan() {
    let source = InMemorySource {
        descriptors: vec![
            component("app.Service").with_dependency(DependencyRequirement::single("app.Repo")),
            implementing("app.JdbcRepo", "app.Repo"),
        ],
    };
    let sink = RecordingSink::default();

    let plan = ResolutionEngine::new()
        .run(&source, &sink, &ResolutionOptions::default())
        .unwrap();

    let written = sink.written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0], plan);
    assert_eq!(plan.ids(), vec!["app.JdbcRepo", "app.Service"]);
}

#[test]
fn test_run_wraps_failed_resolution() {
    let source = InMemorySource {
        descriptors: vec![
            component("app.Service").with_dependency(DependencyRequirement::single("app.Repo")),
        ],
    };
    let sink = RecordingSink::default();

    let error = ResolutionEngine::new()
        .run(&source, &sink, &ResolutionOptions::default())
        .unwrap_err();

    assert!(matches!(error, Error::ResolutionFailed { .. }));
    assert_eq!(error.diagnostics()[0].code, DiagnosticCode::MissingDependencyError);
    assert!(sink.written.lock().unwrap().is_empty());
}

#[test]
fn test_run_propagates_source_errors() {
    let sink = RecordingSink::default();

    let error = ResolutionEngine::new()
        .run(&BrokenSource, &sink, &ResolutionOptions::default())
        .unwrap_err();

    assert!(matches!(error, Error::InvalidDescriptor { .. }));
}

#[test]
fn test_empty_input_gives_empty_plan() {
    let plan = ResolutionEngine::new()
        .resolve(&[], &ResolutionOptions::default())
        .unwrap();

    assert!(plan.is_empty());
    assert!(plan.diagnostics.is_empty());
}

#[test]
fn test_engine_instances_are_independent() {
    let descriptors = vec![component("a"), component("b").depends_on("a")];
    let options = ResolutionOptions::default();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let descriptors = descriptors.clone();
            let options = options.clone();
            std::thread::spawn(move || ResolutionEngine::new().resolve(&descriptors, &options))
        })
        .collect();

    for handle in handles {
        let plan = handle.join().unwrap().unwrap();
        assert_eq!(plan.ids(), vec!["a", "b"]);
    }
}
