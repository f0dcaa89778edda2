//! Score board domain models.

use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::BoardError;

/// Teams seeded on first access: (id, name, color, emoji).
pub const DEFAULT_TEAMS: &[(i64, &str, &str, &str)] = &[
    (1, "Volleyball", "#FF69B4", "🏐"),
    (2, "Baking", "#9370DB", "🧁"),
    (3, "Basketball", "#FF8C00", "🏀"),
    (4, "Science", "#32CD32", "🔬"),
];

/// A single team's entry on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub id: i64,
    pub name: String,
    /// Display color as a hex string, e.g. `#FF69B4`.
    pub color: String,
    pub score: i64,
    /// Display glyph.
    pub emoji: String,
}

impl TeamScore {
    /// Create a team with a zero score.
    pub fn new(id: i64, name: &str, color: &str, emoji: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            color: color.to_string(),
            score: 0,
            emoji: emoji.to_string(),
        }
    }

    /// Same team with a different score.
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }
}

/// Ordered list of teams; order is display order.
///
/// Always non-empty with unique ids. Deserialization enforces both, so a
/// board read from the wire or the store is valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<TeamScore>")]
pub struct ScoreBoard(Vec<TeamScore>);

impl ScoreBoard {
    pub fn new(teams: Vec<TeamScore>) -> Result<Self, BoardError> {
        if teams.is_empty() {
            return Err(BoardError::Empty);
        }
        let mut seen = HashSet::with_capacity(teams.len());
        for team in &teams {
            if !seen.insert(team.id) {
                return Err(BoardError::DuplicateId(team.id));
            }
        }
        Ok(Self(teams))
    }

    /// Parse a UTF-8 JSON array of teams.
    pub fn from_json(text: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn teams(&self) -> &[TeamScore] {
        &self.0
    }

    pub fn team(&self, id: i64) -> Option<&TeamScore> {
        self.0.iter().find(|t| t.id == id)
    }

    pub fn into_teams(self) -> Vec<TeamScore> {
        self.0
    }
}

impl TryFrom<Vec<TeamScore>> for ScoreBoard {
    type Error = BoardError;

    fn try_from(teams: Vec<TeamScore>) -> Result<Self, Self::Error> {
        Self::new(teams)
    }
}

impl Serialize for ScoreBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        default_board()
    }
}

/// The four-team board used before anything has been persisted.
pub fn default_board() -> ScoreBoard {
    ScoreBoard(
        DEFAULT_TEAMS
            .iter()
            .map(|(id, name, color, emoji)| TeamScore::new(*id, name, color, emoji))
            .collect(),
    )
}
