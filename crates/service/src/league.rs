use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// A single league entry. Serialized as `{"Name": .., "Wins": ..}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    pub name: String,
    pub wins: u64,
}

impl Player {
    pub fn new(name: impl Into<String>, wins: u64) -> Self {
        Self { name: name.into(), wins }
    }
}

/// All tracked players, kept in storage order.
///
/// Names are unique: `record_win` either bumps the existing entry or appends a
/// new one. Ranking is a read-time view produced by [`League::sorted`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct League(Vec<Player>);

impl League {
    pub fn new(players: Vec<Player>) -> Self {
        Self(players)
    }

    /// Fail on the first name that appears twice.
    pub fn ensure_unique(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::with_capacity(self.0.len());
        for player in &self.0 {
            if !seen.insert(player.name.as_str()) {
                return Err(StoreError::DuplicatePlayer(player.name.clone()));
            }
        }
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Player> {
        self.0.iter().find(|p| p.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.0.iter_mut().find(|p| p.name == name)
    }

    /// Add one win for `name`, creating the player on first win.
    /// Returns the player's new total.
    pub fn record_win(&mut self, name: &str) -> u64 {
        if let Some(player) = self.find_mut(name) {
            player.wins += 1;
            return player.wins;
        }
        self.0.push(Player::new(name, 1));
        1
    }

    /// Copy of the league ordered by wins, highest first. Equal win counts
    /// keep their storage order.
    pub fn sorted(&self) -> League {
        let mut players = self.0.clone();
        players.sort_by(|a, b| b.wins.cmp(&a.wins));
        League(players)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
}
