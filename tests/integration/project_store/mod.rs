//! Project store integration tests
//!
//! Organized by provider; `common` holds the in-memory provider clients.

pub mod parameter_store;
