//! Fighter templates and the roster that hands them out.
//!
//! Templates are immutable inputs to a fight. [Roster::get] always returns a
//! clone so callers can never alias the roster's own storage.

use serde::{Deserialize, Serialize};

use crate::combat::Style;
use crate::error::RosterError;

/// Upper bound of the rating scale used by the built-in roster.
pub const DEFAULT_ATTRIBUTE_SCALE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub power: u32,
    pub speed: u32,
    pub defense: u32,
    pub chin: u32,
    pub stamina: u32,
    pub heart: u32,
}

impl Attributes {
    /// Named ratings in declaration order, for validation and display.
    pub fn named(&self) -> [(&'static str, u32); 6] {
        [
            ("power", self.power),
            ("speed", self.speed),
            ("defense", self.defense),
            ("chin", self.chin),
            ("stamina", self.stamina),
            ("heart", self.heart),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub kos: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterTemplate {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub stance: String,
    #[serde(default)]
    pub record: Record,
    #[serde(rename = "stats")]
    pub attributes: Attributes,
}

impl FighterTemplate {
    /// Quoted ring name, e.g. `Steamroller` for `Tariq "Steamroller" Khan`.
    pub fn nickname(&self) -> Option<&str> {
        let start = self.name.find('"')?;
        let rest = &self.name[start + 1..];
        let end = rest.find('"')?;
        Some(&rest[..end]).filter(|nick| !nick.is_empty())
    }
}

fn default_scale() -> u32 {
    DEFAULT_ATTRIBUTE_SCALE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Highest rating any attribute may take. Ratings start at 1.
    #[serde(default = "default_scale")]
    pub scale: u32,
    pub fighters: Vec<FighterTemplate>,
}

impl Roster {
    pub fn new(scale: u32, fighters: Vec<FighterTemplate>) -> Self {
        Self { scale, fighters }
    }

    /// The reference card of four fighters on a 1-10 scale.
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_ATTRIBUTE_SCALE,
            vec![
                template(
                    "Elena \"Lightning\" Ruiz",
                    "Olympic-style southpaw with snapping counters.",
                    Style::CounterPuncher,
                    "southpaw",
                    (17, 1, 0, 7),
                    [7, 9, 9, 7, 8, 8],
                ),
                template(
                    "Tariq \"Steamroller\" Khan",
                    "Pressure fighter who hunts the body until opponents wilt.",
                    Style::Pressure,
                    "orthodox",
                    (24, 2, 1, 19),
                    [9, 7, 6, 8, 9, 9],
                ),
                template(
                    "Marcos \"Professor\" Duarte",
                    "Jab-heavy tactician who stacks up points from range.",
                    Style::OutBoxer,
                    "orthodox",
                    (30, 5, 0, 12),
                    [6, 8, 8, 7, 9, 7],
                ),
                template(
                    "Riley \"Switchblade\" Moore",
                    "Switch-hitter who blends angles with sneaky uppercuts.",
                    Style::BoxerPuncher,
                    "switch",
                    (14, 0, 0, 11),
                    [8, 8, 7, 8, 7, 8],
                ),
            ],
        )
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FighterTemplate> {
        self.fighters.iter()
    }

    /// Independent copy of the fighter at `index`.
    pub fn get(&self, index: usize) -> Result<FighterTemplate, RosterError> {
        self.fighters
            .get(index)
            .cloned()
            .ok_or(RosterError::OutOfRange {
                index,
                len: self.fighters.len(),
            })
    }

    /// Find a fighter by index, full name, or nickname. Returns the index and a copy.
    pub fn resolve(&self, query: &str) -> Result<(usize, FighterTemplate), RosterError> {
        if let Ok(index) = query.trim().parse::<usize>() {
            return self.get(index).map(|fighter| (index, fighter));
        }
        let wanted = normalize_lookup(query);
        self.fighters
            .iter()
            .position(|fighter| {
                normalize_lookup(&fighter.name) == wanted
                    || fighter
                        .nickname()
                        .is_some_and(|nick| normalize_lookup(nick) == wanted)
            })
            .map(|index| (index, self.fighters[index].clone()))
            .ok_or_else(|| RosterError::NotFound(query.to_string()))
    }

    /// One roster line: `[i] name (W-L-D K KOs) - style - bio`.
    pub fn display_line(&self, index: usize) -> Option<String> {
        let fighter = self.fighters.get(index)?;
        let rec = fighter.record;
        Some(format!(
            "[{index}] {} ({}-{}-{} {} KOs) - {} - {}",
            fighter.name, rec.wins, rec.losses, rec.draws, rec.kos, fighter.style, fighter.bio
        ))
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Normalize a string for lookup: lowercase, drop quotes, collapse spaces/underscores.
fn normalize_lookup(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| *c != '"')
        .map(|c| if c.is_whitespace() || c == '_' { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn template(
    name: &str,
    bio: &str,
    style: Style,
    stance: &str,
    (wins, losses, draws, kos): (u32, u32, u32, u32),
    [power, speed, defense, chin, stamina, heart]: [u32; 6],
) -> FighterTemplate {
    FighterTemplate {
        name: name.to_string(),
        bio: bio.to_string(),
        style,
        stance: stance.to_string(),
        record: Record {
            wins,
            losses,
            draws,
            kos,
        },
        attributes: Attributes {
            power,
            speed,
            defense,
            chin,
            stamina,
            heart,
        },
    }
}
