//! External repository lookup

pub mod ports;
pub mod service;

pub use service::RepoLookupService;
