//! Core library for the `clima` weather client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather current-weather client and its observer hooks
//! - Shared domain models (queries, results) and condition icon mapping
//!
//! It is used by `clima-cli`, but can also back other front ends.

pub mod client;
pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod wire;

pub use client::{DEFAULT_ENDPOINT, WeatherClient, WeatherObserver, WeatherOutcome};
pub use config::{Config, Units};
pub use error::{ErrorKind, WeatherError};
pub use icon::{ConditionIcon, condition_icon};
pub use model::{WeatherQuery, WeatherResult};
