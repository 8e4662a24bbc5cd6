//! File-backed store implementations.

pub mod player_store;
