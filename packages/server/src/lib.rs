// NeighborNews - API Core
//
// This crate provides the backend for a community news board: members submit
// local news posts, administrators review them, and the public feed serves
// verified posts filtered by district and category.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
