pub mod client;
pub mod migration;
pub mod models;
pub mod queries;

pub use client::{DbClient, DbError};
pub use models::*;
