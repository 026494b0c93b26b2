//! HTTP driver for a simulated telemetry device.
//!
//! Serves a fixed, in-memory set of readings over `GET /data` (with type
//! filtering and pagination) and accepts a small command vocabulary over
//! `POST /commands`. Everything else is a 404.

pub mod commands;
pub mod errors;
pub mod model;
pub mod rest;
pub mod store;
