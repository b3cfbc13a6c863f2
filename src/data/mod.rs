pub mod loader;
pub mod roster;
pub mod validate;

pub use loader::{load_roster, load_roster_or_builtin, parse_roster_json, parse_roster_yaml};
pub use roster::{Attributes, FighterTemplate, Record, Roster, DEFAULT_ATTRIBUTE_SCALE};
pub use validate::{validate_roster, ValidationDiagnostic, ValidationReport, ValidationSeverity};
