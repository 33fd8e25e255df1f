//! HTTP access to the food data service.
//!
//! [`FoodApiClient`] implements [`foodcheck_core::FoodApi`] on top of
//! `reqwest`, tolerating the service's non-standard `NaN` values.

pub mod client;
pub mod error;
pub mod sanitize;

pub use client::{DEFAULT_BASE_URL, FoodApiClient, REQUEST_TIMEOUT};
pub use error::{ClientError, Result};
pub use sanitize::replace_non_finite;
