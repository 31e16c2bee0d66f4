//! Shared test helpers for `devfolio-core` integration tests.
//!
//! These helpers provide reusable fixtures and in-memory ports so that
//! component tests can focus on behaviour instead of storage.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
