//! HTTP API handlers

pub mod buildinfo;
pub mod catalog;
pub mod health;
pub mod runs;
pub mod search;
pub mod session;
pub mod sse;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use search::search;
pub use sse::event_stream;
