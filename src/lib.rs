pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod heatmap;
pub mod notice;
pub mod routes;
pub mod stats;
pub mod trips;
pub mod users;
// cmd and reports belong to the binary (main.rs).

pub use error::{YatraError, YcResult};
