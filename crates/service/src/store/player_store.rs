use async_trait::async_trait;

use crate::errors::StoreError;
use crate::league::{League, Player};

/// Trait abstraction for win-count storage.
/// Implementations can be in-memory, file-backed, or remote.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Look a player up by name. `None` means the player has never won,
    /// which is how callers tell an unknown player from one with zero wins.
    async fn find_player(&self, name: &str) -> Option<Player>;

    /// Current win count; unknown players score 0.
    async fn get_player_score(&self, name: &str) -> u64 {
        self.find_player(name).await.map_or(0, |p| p.wins)
    }

    /// Add one win for `name`, creating the player if needed. The change is
    /// durable once this returns `Ok`.
    async fn record_win(&self, name: &str) -> Result<(), StoreError>;

    /// Every player, highest wins first.
    async fn get_league(&self) -> League;
}

pub(crate) fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::Validation("player name must not be empty".into()));
    }
    Ok(())
}
