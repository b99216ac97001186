//! Service container and host-facing flows for the park layer.
//!
//! A host builds one [`ParkServices`] from [`parkmatch_core::AppConfig`] at
//! startup and hands references to its screens; nothing here is global.

pub mod error;
pub mod location;
pub mod services;
pub mod telemetry;

pub use error::{LocationError, ServicesError};
pub use location::{FixedLocation, LocationBridge, LocationDevice, LocationProvider};
pub use services::ParkServices;
pub use telemetry::{env_filter, init_tracing};
