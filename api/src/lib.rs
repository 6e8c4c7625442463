//! HTTP layer for the Turno phone verification service.
//!
//! Exposes the `/verify-phone` and `/send-sms` endpoints on top of the
//! core verification service, with JWT bearer authentication.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
