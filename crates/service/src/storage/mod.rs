//! Storage primitives for the service layer.
//!
//! Contains the JSON document wrapper that file-backed stores use to load
//! and rewrite their backing file.

pub mod json_document;
