//! Domain layer constants
//!
//! Contains constants that are part of the resolution rules and are used by
//! the application layer. Adapter-specific constants remain in
//! `veld_infrastructure::constants`.

// ============================================================================
// DESCRIPTOR DEFAULTS
// ============================================================================

/// Order value assigned to components that declare none
pub const DEFAULT_COMPONENT_ORDER: i32 = 0;

// ============================================================================
// CONDITION CONSTANTS
// ============================================================================

/// Prefix marking a negated entry inside a profile list (e.g. `!prod`)
pub const PROFILE_NEGATION_PREFIX: char = '!';

// ============================================================================
// DIAGNOSTIC CONSTANTS
// ============================================================================

/// Separator used when rendering cycle paths (`A -> B -> A`)
pub const CYCLE_PATH_SEPARATOR: &str = " -> ";

/// Separator used when listing component ids inside a diagnostic message
pub const ID_LIST_SEPARATOR: &str = ", ";
