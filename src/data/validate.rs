use std::collections::HashSet;
use std::fmt;

use crate::combat::Style;
use crate::data::roster::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

/// Check a roster before it is handed to the engine.
///
/// Ratings must sit in `1..=scale`; names must be present. Duplicate names only
/// warn, since lookups by index still work.
pub fn validate_roster(roster: &Roster) -> ValidationReport {
    let mut report = ValidationReport::default();

    if roster.scale == 0 {
        report.push(
            ValidationSeverity::Error,
            "scale",
            "attribute scale must be positive",
        );
    }
    if roster.is_empty() {
        report.push(ValidationSeverity::Error, "fighters", "roster has no fighters");
    }

    let mut seen_names = HashSet::new();
    for (index, fighter) in roster.iter().enumerate() {
        let base_context = format!("fighters[{index}]");
        let name = fighter.name.trim();
        if name.is_empty() {
            report.push(
                ValidationSeverity::Error,
                format!("{base_context}.name"),
                "missing non-empty 'name'",
            );
        } else if !seen_names.insert(name.to_lowercase()) {
            report.push(
                ValidationSeverity::Warning,
                format!("{base_context}.name"),
                format!("duplicate name '{name}'"),
            );
        }

        for (stat, value) in fighter.attributes.named() {
            if value == 0 || value > roster.scale {
                report.push(
                    ValidationSeverity::Error,
                    format!("{base_context}.stats.{stat}"),
                    format!("rating {value} outside 1..={}", roster.scale),
                );
            }
        }

        if fighter.style == Style::Other {
            report.push(
                ValidationSeverity::Info,
                format!("{base_context}.style"),
                "unrecognized style, using neutral strategy",
            );
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roster_is_clean() {
        let report = validate_roster(&Roster::builtin());
        assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
    }

    #[test]
    fn out_of_scale_ratings_and_blank_names_are_errors() {
        let mut roster = Roster::builtin();
        roster.fighters[0].attributes.chin = 11;
        roster.fighters[1].attributes.speed = 0;
        roster.fighters[2].name = "  ".to_string();
        let report = validate_roster(&roster);
        assert!(report.has_errors());
        assert_eq!(report.count(ValidationSeverity::Error), 3);
        assert!(report
            .diagnostics
            .iter()
            .any(|d| d.context == "fighters[0].stats.chin"));
    }

    #[test]
    fn larger_scale_accepts_higher_ratings() {
        let mut roster = Roster::builtin();
        roster.scale = 20;
        roster.fighters[0].attributes.power = 18;
        assert!(!validate_roster(&roster).has_errors());
    }

    #[test]
    fn duplicates_warn_and_unknown_styles_inform() {
        let mut roster = Roster::builtin();
        roster.fighters[3].name = roster.fighters[0].name.to_uppercase();
        roster.fighters[3].style = Style::Other;
        let report = validate_roster(&roster);
        assert!(!report.has_errors());
        assert_eq!(report.count(ValidationSeverity::Warning), 1);
        assert_eq!(report.count(ValidationSeverity::Info), 1);
    }

    #[test]
    fn empty_roster_and_zero_scale_are_errors() {
        let report = validate_roster(&Roster::new(0, Vec::new()));
        assert_eq!(report.count(ValidationSeverity::Error), 2);
    }
}
