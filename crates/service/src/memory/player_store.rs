use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::league::{League, Player};
use crate::store::player_store::{validate_name, PlayerStore};

/// Non-persistent store. Same semantics as the file-backed one minus disk.
#[derive(Default)]
pub struct InMemoryPlayerStore {
    league: RwLock<League>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Start from an existing set of players, kept in the given order.
    /// Names must be unique.
    pub fn with_players(players: Vec<Player>) -> Result<Arc<Self>, StoreError> {
        let league = League::new(players);
        league.ensure_unique()?;
        Ok(Arc::new(Self { league: RwLock::new(league) }))
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn find_player(&self, name: &str) -> Option<Player> {
        self.league.read().await.find(name).cloned()
    }

    async fn record_win(&self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        self.league.write().await.record_win(name);
        Ok(())
    }

    async fn get_league(&self) -> League {
        self.league.read().await.sorted()
    }
}
