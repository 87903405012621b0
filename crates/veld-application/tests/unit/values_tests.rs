//! Unit tests for configuration value injection

use veld_application::ValueResolver;
use veld_domain::entities::ValueRequirement;
use veld_domain::value_objects::{DiagnosticCode, ResolutionOptions};

use crate::test_utils::{build_graph, component};

#[test]
fn test_property_wins_over_default() {
    let options = ResolutionOptions::new().with_property("db.pool", "16");
    let resolver = ValueResolver::new(&options);

    assert_eq!(
        resolver.resolve(&ValueRequirement::with_default("db.pool", "8")),
        Some("16".to_string())
    );
    assert_eq!(
        resolver.resolve(&ValueRequirement::with_default("db.timeout", "30")),
        Some("30".to_string())
    );
    assert_eq!(resolver.resolve(&ValueRequirement::new("db.url")), None);
}

#[test]
fn test_resolve_all_reports_missing_properties() {
    let (graph, mut diagnostics) = build_graph(vec![
        component("db")
            .with_value(ValueRequirement::new("db.url"))
            .with_value(ValueRequirement::with_default("db.pool", "8")),
        component("cache").with_value(ValueRequirement::new("cache.ttl")),
    ]);
    let options = ResolutionOptions::new().with_property("db.url", "jdbc:h2:mem");

    let values = ValueResolver::new(&options).resolve_all(&graph, &mut diagnostics);

    let db = graph.index_of("db").unwrap();
    let cache = graph.index_of("cache").unwrap();
    assert_eq!(values[&db][&0], "jdbc:h2:mem");
    assert_eq!(values[&db][&1], "8");
    assert!(!values.contains_key(&cache));

    let missing: Vec<_> = diagnostics.into_sorted();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].code, DiagnosticCode::MissingPropertyError);
    assert_eq!(missing[0].component_id.as_deref(), Some("cache"));
    assert!(missing[0].message.contains("cache.ttl"));
}
