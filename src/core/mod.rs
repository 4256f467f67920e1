//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, CarouselConfig, SiteConfig};
pub use error::{Error, Result};
pub use types::{Language, ServiceSlide, JobPosition, Partner, Stat, ABOUT_STATS};
