//! Cancellable-future plumbing for the single in-flight request owned by
//! one consumer.

use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable, Aborted};

use crate::FetchError;

/// Tracks the in-flight request belonging to one consumer.
///
/// Starting a new request aborts the previous one, so at most one request
/// is outstanding at a time. Dropping the value aborts whatever is still
/// in flight.
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    in_flight: Option<AbortHandle>,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the outstanding request (if any) and register the next one.
    ///
    /// The returned registration must be passed to [`run_cancellable`]
    /// alongside the request future.
    pub fn supersede(&mut self) -> AbortRegistration {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        registration
    }

    /// Abort the outstanding request without starting a new one.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for RequestLifecycle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run a request future under a cancellation registration.
///
/// An aborted run resolves to [`FetchError::Cancelled`] instead of a
/// transport outcome, even if the transport itself has already produced
/// one. Callers treat `Cancelled` as void rather than committing it.
pub async fn run_cancellable<T>(
    fut: impl Future<Output = Result<T, FetchError>>,
    registration: AbortRegistration,
) -> Result<T, FetchError> {
    match Abortable::new(fut, registration).await {
        Ok(result) => result,
        Err(Aborted) => Err(FetchError::Cancelled),
    }
}
