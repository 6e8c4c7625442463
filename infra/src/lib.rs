//! # Infrastructure Layer
//!
//! Concrete implementations behind the core contracts:
//! - **Database**: MySQL repositories using SQLx
//! - **SMS**: transport providers (Twilio, Vonage, mock) behind the
//!   dispatcher contract
//! - **Config**: environment-driven configuration for both

pub mod config;
pub mod database;
pub mod sms;

pub use config::{DatabaseConfig, SmsConfig};
pub use sms::{create_dispatcher, ProviderDispatcher, SmsError};
