//! Configuration & bootstrap for the quant crypto data-fetch pipeline
//!
//! Downstream collaborators (the fetcher, the symbol ranking job, the CSV writer)
//! take a [`Config`] instead of recomputing paths themselves.

pub mod cli;
pub mod config;
pub mod constants;
pub mod logic;
pub mod paths;
pub mod window;

pub use config::Config;
pub use window::{format_timestamp, FetchWindow};
