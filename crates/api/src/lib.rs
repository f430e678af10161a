//! HTTP and WebSocket server for the premiere signup pipeline.
//!
//! Exposed as a library so integration tests can build the exact same
//! router and middleware stack as the production binary.

pub mod config;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod live;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod ws;
