//! Domain logic for the reelbite micro-drama platform.
//!
//! This crate is pure: no I/O, no database access. It holds the shared
//! type aliases, the domain error type, and the episode monetization
//! policy (coin split + unlock outcome taxonomy) that the data layer
//! orchestrates.

pub mod error;
pub mod types;
pub mod unlock;
