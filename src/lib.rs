//! Terminal profile screen backed by a small HTTP API.
//!
//! Data flows one way: the UI asks [`store::ProfileStore`] for a fetch, the
//! store goes through [`repository::Repository`] to an [`api::ApiClient`],
//! and publishes a [`resource::Resource`] the UI re-renders from.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod repository;
pub mod resource;
pub mod store;
pub mod ui;
