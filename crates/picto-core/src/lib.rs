//! # picto-core
//!
//! Core types for Picto, a photo-sharing relational model.
//!
//! This crate provides the foundational types shared across all Picto crates:
//! - Entity structs for the five record types (users, posts, comments, media, followers)
//! - Declarative table definitions (columns, nullability, uniqueness, foreign keys)
//! - An in-memory entity graph with foreign-key indexes
//! - `to_dict` views that walk the graph into JSON-compatible mappings
//! - Cross-cutting error types

pub mod dict;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod graph;
pub mod schema;
