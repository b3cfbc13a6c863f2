//! Load a roster from a JSON or YAML file. YAML is picked by `.yaml`/`.yml` extension.
//!
//! Accepted shapes: `{ scale?: u32, fighters: [...] }`, or a bare list of fighters
//! (scale defaults to 10).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::data::roster::{FighterTemplate, Roster, DEFAULT_ATTRIBUTE_SCALE};
use crate::error::RosterError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RosterFile {
    Full(Roster),
    List(Vec<FighterTemplate>),
}

impl From<RosterFile> for Roster {
    fn from(file: RosterFile) -> Self {
        match file {
            RosterFile::Full(roster) => roster,
            RosterFile::List(fighters) => Roster::new(DEFAULT_ATTRIBUTE_SCALE, fighters),
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

pub fn parse_roster_json(raw: &str) -> Result<Roster, RosterError> {
    let file: RosterFile = serde_json::from_str(raw)?;
    Ok(file.into())
}

pub fn parse_roster_yaml(raw: &str) -> Result<Roster, RosterError> {
    let file: RosterFile = serde_yaml::from_str(raw)?;
    Ok(file.into())
}

pub fn load_roster(path: impl AsRef<Path>) -> Result<Roster, RosterError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = if is_yaml(path) {
        parse_roster_yaml(&raw)?
    } else {
        parse_roster_json(&raw)?
    };
    info!(
        target: "ringside::roster",
        path = %path.display(),
        fighters = roster.len(),
        scale = roster.scale,
        "roster loaded"
    );
    Ok(roster)
}

/// Roster from `path` when given, otherwise the built-in card.
pub fn load_roster_or_builtin(path: Option<&Path>) -> Result<Roster, RosterError> {
    match path {
        Some(path) => load_roster(path),
        None => Ok(Roster::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Style;

    const JSON_ROSTER: &str = r#"{
        "scale": 20,
        "fighters": [
            {
                "name": "Ana \"Anvil\" Silva",
                "style": "pressure",
                "record": {"wins": 3},
                "stats": {"power": 18, "speed": 11, "defense": 9, "chin": 15, "stamina": 14, "heart": 17}
            }
        ]
    }"#;

    #[test]
    fn parses_full_json_roster() {
        let roster = parse_roster_json(JSON_ROSTER).unwrap();
        assert_eq!(roster.scale, 20);
        let ana = roster.get(0).unwrap();
        assert_eq!(ana.style, Style::Pressure);
        assert_eq!(ana.record.wins, 3);
        assert_eq!(ana.record.losses, 0);
        assert_eq!(ana.attributes.power, 18);
        assert!(ana.bio.is_empty());
    }

    #[test]
    fn parses_bare_yaml_list_with_default_scale() {
        let raw = "\
- name: Kit Osei
  style: slugger
  stats: {power: 5, speed: 5, defense: 5, chin: 5, stamina: 5, heart: 5}
";
        let roster = parse_roster_yaml(raw).unwrap();
        assert_eq!(roster.scale, DEFAULT_ATTRIBUTE_SCALE);
        assert_eq!(roster.fighters[0].style, Style::Other);
    }

    #[test]
    fn missing_stats_is_an_error() {
        let err = parse_roster_json(r#"[{"name": "No Stats"}]"#).unwrap_err();
        assert!(matches!(err, RosterError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_roster("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
