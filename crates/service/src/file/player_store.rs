use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::errors::StoreError;
use crate::league::{League, Player};
use crate::storage::json_document::JsonDocument;
use crate::store::player_store::{validate_name, PlayerStore};

/// League persisted as a JSON array of `{Name, Wins}` in a single file.
///
/// The decoded league lives in memory for the lifetime of the store and
/// reads never touch disk. Each win rewrites the whole document while holding
/// the lock, so a mutation and its flush form one critical section.
///
/// Only one store may own a given file: two stores (or two processes) on the
/// same path will overwrite each other's updates.
pub struct FileSystemPlayerStore {
    inner: Mutex<Inner>,
}

struct Inner {
    league: League,
    document: JsonDocument,
}

impl FileSystemPlayerStore {
    /// Load the league from a file opened for reading and writing.
    /// An empty file starts an empty league; a malformed one, or one naming
    /// a player twice, is an error.
    pub async fn new(file: File) -> Result<Arc<Self>, StoreError> {
        let mut document = JsonDocument::new(file);
        let league: League = document.read().await?;
        league.ensure_unique()?;
        info!(players = league.len(), "league loaded");
        Ok(Arc::new(Self { inner: Mutex::new(Inner { league, document }) }))
    }

    /// Open (creating if missing) the document at `path` and load it.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Arc<Self>, StoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening league document");
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .await?;
        Self::new(file).await
    }
}

#[async_trait]
impl PlayerStore for FileSystemPlayerStore {
    async fn find_player(&self, name: &str) -> Option<Player> {
        let inner = self.inner.lock().await;
        inner.league.find(name).cloned()
    }

    async fn record_win(&self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        let mut inner = self.inner.lock().await;
        let Inner { league, document } = &mut *inner;
        let wins = league.record_win(name);
        document.rewrite(&*league).await?;
        debug!(player = name, wins, "win recorded");
        Ok(())
    }

    async fn get_league(&self) -> League {
        let inner = self.inner.lock().await;
        inner.league.sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempDocument;

    const SEEDED: &str = r#"[
            {"Name": "Cleo", "Wins": 10},
            {"Name": "Chris", "Wins": 33}]"#;

    #[tokio::test]
    async fn get_player_score() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents(SEEDED).await?;
        let store = FileSystemPlayerStore::new(tmp.open().await?).await?;

        assert_eq!(store.get_player_score("Chris").await, 33);
        assert_eq!(store.get_player_score("Cleo").await, 10);
        assert_eq!(store.get_player_score("Amy").await, 0);
        assert!(store.find_player("Amy").await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn store_wins_for_existing_players() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents(SEEDED).await?;
        let store = FileSystemPlayerStore::new(tmp.open().await?).await?;

        store.record_win("Chris").await?;
        assert_eq!(store.get_player_score("Chris").await, 34);
        Ok(())
    }

    #[tokio::test]
    async fn store_wins_for_new_players() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents(SEEDED).await?;
        let store = FileSystemPlayerStore::new(tmp.open().await?).await?;

        store.record_win("Pepper").await?;
        assert_eq!(store.get_player_score("Pepper").await, 1);
        assert_eq!(store.find_player("Pepper").await, Some(Player::new("Pepper", 1)));
        Ok(())
    }

    #[tokio::test]
    async fn works_with_an_empty_file() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents("").await?;
        let store = FileSystemPlayerStore::new(tmp.open().await?).await?;
        assert!(store.get_league().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_fails_construction() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents("{not a league").await?;
        let res = FileSystemPlayerStore::new(tmp.open().await?).await;
        assert!(matches!(res, Err(StoreError::Decode(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_players_fail_construction() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents(
            r#"[{"Name":"Cleo","Wins":1},{"Name":"Cleo","Wins":5}]"#,
        )
        .await?;
        let res = FileSystemPlayerStore::new(tmp.open().await?).await;
        assert!(matches!(res, Err(StoreError::DuplicatePlayer(name)) if name == "Cleo"));
        Ok(())
    }

    #[tokio::test]
    async fn league_sorted_and_repeatable() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents(SEEDED).await?;
        let store = FileSystemPlayerStore::new(tmp.open().await?).await?;

        let want = League::new(vec![Player::new("Chris", 33), Player::new("Cleo", 10)]);
        assert_eq!(store.get_league().await, want);
        // read again
        assert_eq!(store.get_league().await, want);
        Ok(())
    }

    #[tokio::test]
    async fn wins_survive_reopening() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents("").await?;
        {
            let store = FileSystemPlayerStore::new(tmp.open().await?).await?;
            for _ in 0..5 {
                store.record_win("Pepper").await?;
            }
            store.record_win("Floyd").await?;
        }

        let reopened = FileSystemPlayerStore::open(tmp.path()).await?;
        assert_eq!(reopened.get_player_score("Pepper").await, 5);
        assert_eq!(reopened.get_player_score("Floyd").await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn document_is_a_complete_snapshot_after_each_win() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents(SEEDED).await?;
        let store = FileSystemPlayerStore::new(tmp.open().await?).await?;
        store.record_win("Cleo").await?;

        let on_disk: League = serde_json::from_str(&tmp.contents().await?)?;
        // storage order, not ranking order
        assert_eq!(
            on_disk,
            League::new(vec![Player::new("Cleo", 11), Player::new("Chris", 33)])
        );
        Ok(())
    }

    #[tokio::test]
    async fn open_creates_missing_file() -> Result<(), anyhow::Error> {
        let path = std::env::temp_dir().join(format!("league_{}.json", uuid::Uuid::new_v4()));
        let store = FileSystemPlayerStore::open(&path).await?;
        assert!(store.get_league().await.is_empty());
        store.record_win("Pepper").await?;
        assert_eq!(tokio::fs::read_to_string(&path).await?, r#"[{"Name":"Pepper","Wins":1}]"#);
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn whitespace_names_are_ordinary_players() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents("").await?;
        let store = FileSystemPlayerStore::new(tmp.open().await?).await?;
        store.record_win(" ").await?;
        assert_eq!(store.find_player(" ").await, Some(Player::new(" ", 1)));
        assert_eq!(tmp.contents().await?, r#"[{"Name":" ","Wins":1}]"#);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_empty_name() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents("").await?;
        let store = FileSystemPlayerStore::new(tmp.open().await?).await?;
        assert!(matches!(store.record_win("").await, Err(StoreError::Validation(_))));
        assert_eq!(tmp.contents().await?, "");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_wins_are_not_lost() -> Result<(), anyhow::Error> {
        let tmp = TempDocument::with_contents("[]").await?;
        let store = FileSystemPlayerStore::new(tmp.open().await?).await?;

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.record_win("Pepper").await })
            })
            .collect();
        for handle in handles {
            handle.await??;
        }

        assert_eq!(store.get_player_score("Pepper").await, 50);
        let reopened = FileSystemPlayerStore::open(tmp.path()).await?;
        assert_eq!(reopened.get_player_score("Pepper").await, 50);
        Ok(())
    }
}
