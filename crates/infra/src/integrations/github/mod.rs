//! GitHub integration
//!
//! Implements the `RepoListing` port against the GitHub REST API. One
//! request per lookup; the OAuth app's client id/secret travel as query
//! credentials when configured.
//!
//! Status handling:
//! - 2xx: body returned as parsed JSON, unmodified
//! - any other status: `UpstreamNotFound`
//! - no response at all: `Network`

pub mod client;

pub use client::GithubClient;
