//! HTTP surface: wire types and the axum router.

pub mod routes;
pub mod types;

pub use routes::{router, AppState};
