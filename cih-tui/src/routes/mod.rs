//! Route table: maps a path to exactly one page.
//!
//! This module provides:
//! - `RoutePattern` and `Route` for table entries
//! - `ViewRegistry` for ordered, total resolution
//! - `ViewRegistryBuilder` for validated construction

mod pattern;
mod registry;

pub use pattern::{Route, RoutePattern, WILDCARD};
pub use registry::{RegistryError, ViewRegistry, ViewRegistryBuilder};
