//! Public entry points: [`Config`], the [`QrTinter`] builder and
//! [`render_config`].

mod config;
mod generator;

pub use config::Config;
pub use generator::{render_config, QrTinter};
