//! In-memory store implementations, for tests and ephemeral runs.

pub mod player_store;
