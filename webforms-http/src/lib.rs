//! HTTP delivery for form submissions.

mod client;

pub use client::HttpSubmitter;
