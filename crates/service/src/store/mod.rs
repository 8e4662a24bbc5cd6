//! Store contracts consumed by the HTTP layer.

pub mod player_store;
