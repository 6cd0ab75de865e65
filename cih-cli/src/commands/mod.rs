pub mod config;
pub mod open;
pub mod render;
pub mod routes;
