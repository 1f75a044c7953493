//! HTTP/JSON API server for the restaurant menu.
//!
//! Exposes CRUD endpoints over the in-memory menu collection from
//! `bistro-core`. This crate contains the router, handlers, request schema,
//! validation, error mapping, and request-logging middleware.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod schema;
pub mod state;
pub mod validate;
