//! Non-blocking dispatch of conversation requests.
//!
//! `AsyncDispatcher` runs `ConversationSession::submit` on a tokio worker
//! task and reports the outcome through exactly one of two callbacks. An
//! atomic Idle/Busy gate allows a single request in flight; a second
//! `dispatch` while busy is refused without touching the session.
//!
//! This is the error-containment boundary: transport errors and worker
//! panics both end up in `on_failure`, never in the caller.

mod gate;
mod types;


use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinError;
use tracing::{debug, error, warn};

use coach_common::RequestId;

use crate::session::ConversationSession;
use crate::{AiClient, Turn};

use gate::BusyGuard;
pub use types::{DispatchError, DispatchRequest, DispatchState};

pub struct AsyncDispatcher {
    session: Arc<Mutex<ConversationSession>>,
    client: Arc<dyn AiClient>,
    runtime: Handle,
    busy: Arc<AtomicBool>,
}

impl AsyncDispatcher {
    /// Take ownership of `session`; requests run on `runtime`.
    pub fn new(session: ConversationSession, client: Arc<dyn AiClient>, runtime: Handle) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            client,
            runtime,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> DispatchState {
        if self.busy.load(Ordering::Acquire) {
            DispatchState::Busy
        } else {
            DispatchState::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state() == DispatchState::Busy
    }

    /// Submit `user_text` on a worker task.
    ///
    /// Returns immediately. On `Ok`, exactly one callback will run on the
    /// runtime once the request finishes; the gate stays closed until that
    /// callback returns, so a dispatch from inside it is refused as `Busy`.
    /// On `Err` neither callback runs and the session is untouched.
    pub fn dispatch<S, F>(
        &self,
        user_text: impl Into<String>,
        on_success: S,
        on_failure: F,
    ) -> Result<RequestId, DispatchError>
    where
        S: FnOnce(String) + Send + 'static,
        F: FnOnce(String) + Send + 'static,
    {
        let text = user_text.into();
        if text.trim().is_empty() {
            return Err(DispatchError::EmptyInput);
        }

        let guard = BusyGuard::acquire(&self.busy)?;
        let request = DispatchRequest::new(text);
        let id = request.id;
        debug!(request = %id, "dispatching");

        let session = Arc::clone(&self.session);
        let client = Arc::clone(&self.client);
        self.runtime.spawn(async move {
            let outcome = run_request(session, client, request).await;
            match outcome {
                Ok(reply) => on_success(reply),
                Err(description) => on_failure(description),
            }
            // Reopen only after delivery, so completions reach the caller in
            // dispatch order.
            drop(guard);
        });

        Ok(id)
    }

    /// Run `f` against the session while idle.
    pub fn with_session<R>(
        &self,
        f: impl FnOnce(&ConversationSession) -> R,
    ) -> Result<R, DispatchError> {
        if self.is_busy() {
            return Err(DispatchError::Busy);
        }
        let session = self.session.try_lock().map_err(|_| DispatchError::Busy)?;
        Ok(f(&session))
    }

    /// Snapshot of the history. Refused while a request is in flight.
    pub fn history(&self) -> Result<Vec<Turn>, DispatchError> {
        self.with_session(|s| s.history().to_vec())
    }

    /// Clear the history. Refused while a request is in flight.
    pub fn clear_history(&self) -> Result<(), DispatchError> {
        if self.is_busy() {
            return Err(DispatchError::Busy);
        }
        let mut session = self.session.try_lock().map_err(|_| DispatchError::Busy)?;
        session.clear_history();
        Ok(())
    }
}

/// Run one submit on its own task so a panic surfaces as a `JoinError`.
async fn run_request(
    session: Arc<Mutex<ConversationSession>>,
    client: Arc<dyn AiClient>,
    request: DispatchRequest,
) -> Result<String, String> {
    let DispatchRequest { id, text } = request;

    let worker = tokio::spawn(async move {
        let mut session = session.lock().await;
        session.submit(client.as_ref(), &text).await
    });

    match worker.await {
        Ok(Ok(reply)) => {
            debug!(request = %id, len = reply.len(), "request completed");
            Ok(reply)
        }
        Ok(Err(e)) => {
            warn!(request = %id, error = %e, "request failed");
            Err(e.to_string())
        }
        Err(e) => {
            error!(request = %id, "worker task failed: {e}");
            Err(describe_join_error(e))
        }
    }
}

fn describe_join_error(err: JoinError) -> String {
    if !err.is_panic() {
        return "request was cancelled".to_string();
    }
    let payload = err.into_panic();
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    format!("request failed unexpectedly: {detail}")
}
