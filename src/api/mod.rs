//! HTTP access to the profile API.

mod client;
mod error;
mod models;

pub use client::{ApiClient, ClientConfig, HttpApiClient};
pub use error::ApiError;
pub use models::{Post, User, DEFAULT_PROFILE_IMG_URL};
