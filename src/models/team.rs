//! Registrations (institutions), teams, and players.

use serde::{Deserialize, Serialize};

/// Identifier of a team within one tournament. Allocated by the
/// tournament's ID sequence, never reused.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

/// Identifier of a player within one tournament.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

/// A player on a team's roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Year or grade, as free text ("12", "Fr.", "Grad").
    pub year_string: String,
    pub is_ug: bool,
    pub is_d2: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            year_string: String::new(),
            is_ug: false,
            is_d2: false,
        }
    }
}

/// A team entered in the tournament. Belongs to exactly one registration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Full display name, e.g. "Springfield A".
    pub name: String,
    /// Letter suffix distinguishing multiple teams from one school ("A", "B").
    pub letter: String,
    pub is_jv: bool,
    pub is_ug: bool,
    pub is_d2: bool,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            letter: String::new(),
            is_jv: false,
            is_ug: false,
            is_d2: false,
            players: Vec::new(),
        }
    }

    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}

/// A school or other institution that registered one or more teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub is_small_school: bool,
    pub teams: Vec<Team>,
}

impl Registration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_small_school: false,
            teams: Vec::new(),
        }
    }

    pub fn find_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn delete_team(&mut self, id: TeamId) {
        self.teams.retain(|t| t.id != id);
    }
}
