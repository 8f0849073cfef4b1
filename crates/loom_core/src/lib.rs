//! Campaign content & import processing core.
//!
//! Two stateless text-processing components — the spintax variation engine
//! and the delimited-record import parsers — plus the [`studio::ContentStudio`]
//! controller that composes them for callers. All operations are synchronous
//! and pure; persistence and any UI belong to the caller.

pub mod config;
pub mod error;
pub mod studio;

pub use config::Config;
pub use error::LoomError;
pub use studio::ContentStudio;

pub use loom_traits::{
    AccountImport, AccountRecord, AuthMethod, Cookie, ProxyImport, ProxyRecord, VariationSource,
};
pub use mod_import::{parse_account_file, parse_proxy_file, parse_proxy_line};
pub use mod_spintax::{SpintaxEngine, ThreadRngSource};
