//! HTTP handler modules.
//!
//! Handlers are thin: parse the request, acquire the store lock, perform the
//! single store operation, and return JSON. No business logic lives here.

pub mod home;
pub mod menu;
