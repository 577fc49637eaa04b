//! # picto-schema
//!
//! JSON Schema registry and ER diagram rendering for Picto.
//!
//! This crate provides:
//! - `SchemaRegistry`: JSON Schemas for every record and `to_dict` view
//! - `diagram`: DOT and Mermaid renderings of the declared tables, and
//!   `render_er` to write them (or a Graphviz image) to disk
//!
//! Entity and view types are defined in `picto-core` with
//! `#[derive(JsonSchema)]`; table declarations live in `picto_core::schema`.

pub mod diagram;
pub mod error;
pub mod registry;

pub use diagram::{DiagramFormat, DiagramOptions, render_dot, render_er, render_mermaid};
pub use error::{DiagramError, SchemaError};
pub use registry::SchemaRegistry;
