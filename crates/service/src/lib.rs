//! Service layer for the league: player model, the `PlayerStore` contract,
//! and its in-memory and file-backed implementations.
//! - The HTTP layer only ever sees `dyn PlayerStore`.
//! - File persistence rewrites the whole document on every mutation.

pub mod errors;
pub mod league;
pub mod store;
pub mod storage;
pub mod file;
pub mod memory;
#[cfg(test)]
pub mod test_support;

pub use errors::StoreError;
pub use league::{League, Player};
pub use store::player_store::PlayerStore;
