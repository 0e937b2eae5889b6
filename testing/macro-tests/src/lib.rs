//! Fixtures for the derive and build-script integration tests.

pub mod account;
pub mod model;
