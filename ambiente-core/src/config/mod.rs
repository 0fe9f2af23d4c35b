//! Configuration types
//!
//! Board-agnostic panel configuration. The firmware embeds `panel.toml`
//! and parses it at boot with [`toml::parse_config`].

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
