pub mod export;
pub mod list;
pub mod stats;
pub mod users;
