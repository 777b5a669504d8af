//! Company snapshot extraction for the FMCSA SAFER carrier registry.
//!
//! Raw profile page → document → sections → positional fields → [`CompanyRecord`].

pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod record;
pub mod telemetry;
pub mod utils;

pub use client::SaferClient;
pub use config::Settings;
pub use error::CompanyError;
pub use parser::process_page;
pub use record::{CompanyRecord, ContactFallback};
