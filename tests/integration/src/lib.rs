//! Integration test utilities for the BookNest API
//!
//! Spawns the real server against the PostgreSQL and Redis instances named by
//! `DATABASE_URL` and `REDIS_URL`, and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
