use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};

// One player's cumulative statistics for a team/season, as exchanged with the web app.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: Option<String>, // Assigned by the store, None before persistence.
    pub player_name: String,
    pub nation: Option<String>,
    pub position: Option<String>, // Role label (i.g., "FW", "MF,DF").
    pub age: Option<u32>,
    pub matches_played: Option<u32>,
    pub starts: Option<u32>,
    pub minutes_played: Option<f64>,
    pub goals: Option<f64>,
    pub assists: Option<f64>,
    pub penalty_goals: Option<f64>,
    pub yellow_cards: Option<f64>,
    pub red_cards: Option<f64>,
    pub expected_goals: Option<f64>,
    pub expected_assists: Option<f64>,
    pub team_name: Option<String>,
}

impl PlayerRecord {
    pub fn validate(&self) -> Result<()> {
        if self.player_name.trim().is_empty() {
            return Err(AppError::ValidationError {
                msg: "the player name cannot be empty".to_string(),
            });
        }

        for (field, value) in self.statistics() {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(AppError::ValidationError {
                        msg: format!("'{}' must be a non-negative number, got {}", field, value),
                    });
                }
            }
        }

        Ok(())
    }

    // Replace every field except the id with the values of `updated`.
    pub fn overwrite_from(&mut self, updated: PlayerRecord) {
        let id = self.id.take();

        *self = PlayerRecord { id, ..updated };
    }

    fn statistics(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("minutesPlayed", self.minutes_played),
            ("goals", self.goals),
            ("assists", self.assists),
            ("penaltyGoals", self.penalty_goals),
            ("yellowCards", self.yellow_cards),
            ("redCards", self.red_cards),
            ("expectedGoals", self.expected_goals),
            ("expectedAssists", self.expected_assists),
        ]
    }
}

// Query string of the player search endpoint, every member is optional.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PlayerSearchQuery {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub nation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerFilter {
    All,
    Team(String),
    NameContains(String),
    PositionContains(String),
    NationContains(String),
    TeamAndPosition { team: String, position: String },
}

impl PlayerFilter {
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        match self {
            PlayerFilter::All => true,
            PlayerFilter::Team(team) => equals(player.team_name.as_deref(), team),
            PlayerFilter::NameContains(search_text) => {
                contains_ignore_case(Some(&player.player_name), search_text)
            }
            PlayerFilter::PositionContains(search_text) => {
                contains_ignore_case(player.position.as_deref(), search_text)
            }
            PlayerFilter::NationContains(search_text) => {
                contains_ignore_case(player.nation.as_deref(), search_text)
            }
            PlayerFilter::TeamAndPosition { team, position } => {
                equals(player.team_name.as_deref(), team)
                    && equals(player.position.as_deref(), position)
            }
        }
    }

    pub fn apply(&self, players: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
        players
            .into_iter()
            .filter(|player| self.matches(player))
            .collect()
    }
}

impl From<PlayerSearchQuery> for PlayerFilter {
    // Team and position together win, then each criterion alone in this order:
    // team, name, position, nation.
    fn from(query: PlayerSearchQuery) -> Self {
        match query {
            PlayerSearchQuery {
                team: Some(team),
                position: Some(position),
                ..
            } => PlayerFilter::TeamAndPosition { team, position },
            PlayerSearchQuery {
                team: Some(team), ..
            } => PlayerFilter::Team(team),
            PlayerSearchQuery {
                name: Some(name), ..
            } => PlayerFilter::NameContains(name),
            PlayerSearchQuery {
                position: Some(position),
                ..
            } => PlayerFilter::PositionContains(position),
            PlayerSearchQuery {
                nation: Some(nation),
                ..
            } => PlayerFilter::NationContains(nation),
            _ => PlayerFilter::All,
        }
    }
}

// An absent field never matches.
fn equals(field: Option<&str>, expected: &str) -> bool {
    field == Some(expected)
}

fn contains_ignore_case(field: Option<&str>, search_text: &str) -> bool {
    field.map_or(false, |value| {
        value
            .to_lowercase()
            .contains(&search_text.to_lowercase())
    })
}
