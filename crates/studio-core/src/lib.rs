//! Content Studio Core Library
//!
//! Domain models, page state machines and the backend seam for the
//! YouTube content studio client.
//!
//! Every page follows the same shape: a form is validated into a typed
//! request, the request is sent through a [`StudioApi`] implementation, and
//! the response lands in a [`page::PageState`] together with a snapshot of
//! the request that produced it.

pub mod analysis;
pub mod analytics;
pub mod api;
pub mod channel;
pub mod combined;
pub mod dashboard;
pub mod error;
pub mod keywords;
pub mod messages;
pub mod page;
pub mod planning;
pub mod platform;
pub mod report;
pub mod session;
pub mod trends;
pub mod viral;

#[cfg(test)]
pub(crate) mod testing;

pub use api::StudioApi;
pub use error::{StudioError, StudioResult};
pub use session::{Session, User};
