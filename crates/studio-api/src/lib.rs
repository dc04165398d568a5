//! HTTP implementation of [`studio_core::StudioApi`].

mod api;
pub mod client;
pub mod config;

pub use client::{ApiClient, USER_ID_HEADER};
pub use config::ApiConfig;
