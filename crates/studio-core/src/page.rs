//! Page state shared by every feature page.
//!
//! A page owns three pieces of primary state: a loading flag, an error
//! message and the last result. What the page shows is derived from those
//! alone (see [`PageView`]). Secondary actions such as downloading a report
//! or saving a run track their own flags in an [`ActionState`] so they never
//! disturb the primary fetch.

use std::future::Future;
use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{StudioError, StudioResult};

/// Immutable copy of a request that produced a successful result.
///
/// Follow-up actions (report download, save) receive it explicitly so they
/// always replay exactly what the displayed result was computed from.
#[derive(Debug)]
pub struct Snapshot<T> {
    request: Arc<T>,
    taken_at: DateTime<Utc>,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            request: Arc::clone(&self.request),
            taken_at: self.taken_at,
        }
    }
}

impl<T> Snapshot<T> {
    pub fn new(request: T) -> Self {
        Self {
            request: Arc::new(request),
            taken_at: Utc::now(),
        }
    }

    pub fn request(&self) -> &T {
        &self.request
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.request
    }
}

/// The four mutually exclusive things a page can show.
#[derive(Debug, PartialEq)]
pub enum PageView<'a, R> {
    Loading,
    Error(&'a str),
    Empty,
    Ready(&'a R),
}

/// Primary fetch state of a page.
#[derive(Debug)]
pub struct PageState<Req, Res> {
    loading: bool,
    error: String,
    result: Option<Res>,
    snapshot: Option<Snapshot<Req>>,
}

impl<Req, Res> Default for PageState<Req, Res> {
    fn default() -> Self {
        Self {
            loading: false,
            error: String::new(),
            result: None,
            snapshot: None,
        }
    }
}

impl<Req, Res> PageState<Req, Res> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error message; empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn result(&self) -> Option<&Res> {
        self.result.as_ref()
    }

    /// Request behind the current result, if any.
    pub fn snapshot(&self) -> Option<&Snapshot<Req>> {
        self.snapshot.as_ref()
    }

    pub fn view(&self) -> PageView<'_, Res> {
        if self.loading {
            PageView::Loading
        } else if !self.error.is_empty() {
            PageView::Error(&self.error)
        } else if let Some(result) = &self.result {
            PageView::Ready(result)
        } else {
            PageView::Empty
        }
    }

    /// Start a submission: set loading, clear error, result and snapshot.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error.clear();
        self.result = None;
        self.snapshot = None;
    }

    pub fn succeed(&mut self, snapshot: Snapshot<Req>, result: Res) {
        self.error.clear();
        self.result = Some(result);
        self.snapshot = Some(snapshot);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }

    /// Reject a submission before any request is made.
    pub fn reject(&mut self, err: &StudioError) {
        self.begin();
        self.fail(err.to_string());
        self.finish();
    }

    /// Drop everything, as when leaving the page.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Run one submission through the standard lifecycle.
    ///
    /// `call` receives the snapshot of `request` and performs the backend
    /// call. Returns true when the result was stored.
    pub async fn submit<F, Fut>(&mut self, request: Req, call: F) -> bool
    where
        F: FnOnce(Snapshot<Req>) -> Fut,
        Fut: Future<Output = StudioResult<Res>>,
    {
        self.begin();
        let snapshot = Snapshot::new(request);
        let stored = match call(snapshot.clone()).await {
            Ok(result) => {
                self.succeed(snapshot, result);
                true
            }
            Err(err) => {
                debug!(error = %err, "Submission failed");
                self.fail(err.to_string());
                false
            }
        };
        self.finish();
        stored
    }
}

/// Busy/error/message flags for a secondary action.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActionState {
    busy: bool,
    error: String,
    message: String,
}

impl ActionState {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// Confirmation shown after the action succeeded.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn start(&mut self) {
        self.busy = true;
        self.error.clear();
        self.message.clear();
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.message = message.into();
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.error = message.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
