//! Ports shared with the request pipeline.
//!
//! The pipeline invokes a [`FaultHandler`] once per fault escaping a request
//! handler. Handlers substitute a response only through
//! [`HandlerState::set_handled`]; anything left unhandled keeps propagating.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::domain::{Fault, Outcome};

/// Per-invocation state a fault handler may resolve.
#[derive(Debug)]
pub struct HandlerState<R> {
    response: Option<R>,
}

impl<R> Default for HandlerState<R> {
    fn default() -> Self {
        Self { response: None }
    }
}

impl<R> HandlerState<R> {
    /// Fresh, unhandled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute `response` for the fault.
    pub fn set_handled(&mut self, response: R) {
        self.response = Some(response);
    }

    /// Whether a handler substituted a response.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        self.response.is_some()
    }

    /// The substituted response, if any.
    #[must_use]
    pub const fn response(&self) -> Option<&R> {
        self.response.as_ref()
    }

    /// Consume the state, returning the substituted response.
    #[must_use]
    pub fn into_response(self) -> Option<R> {
        self.response
    }
}

/// Exception-handler stage of the request pipeline.
#[async_trait]
pub trait FaultHandler<Req, Resp>: Send + Sync {
    /// Inspect `fault` raised while handling `request` and optionally
    /// resolve `state`.
    async fn handle(
        &self,
        request: &Req,
        fault: &Fault,
        state: &mut HandlerState<Resp>,
        cancellation: &CancellationToken,
    );
}

/// How a pipeline response type relates to [`Outcome`].
///
/// Implemented for every `Outcome<T>`. Unrelated response types opt in with
/// an empty impl, which declares that faults must not be turned into them.
///
/// # Examples
/// ```
/// use outcome::Outcome;
/// use outcome::inbound::pipeline::PipelineResponse;
///
/// struct Report;
/// impl PipelineResponse for Report {}
///
/// assert!(Report::outcome_conversion().is_none());
/// assert!(Outcome::<String>::outcome_conversion().is_some());
/// ```
pub trait PipelineResponse: Sized {
    /// Conversion from an untyped outcome, or `None` when the type is not an
    /// outcome.
    fn outcome_conversion() -> Option<fn(Outcome) -> Self> {
        None
    }
}

impl<T> PipelineResponse for Outcome<T> {
    fn outcome_conversion() -> Option<fn(Outcome) -> Self> {
        Some(Self::from_untyped)
    }
}

/// Logging capability injected into the fault interceptor.
#[cfg_attr(test, mockall::automock)]
pub trait FaultLogger: Send + Sync {
    /// Record a fault that is about to be converted into an outcome.
    fn log_fault(&self, fault: &Fault);
}

/// [`FaultLogger`] writing through `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFaultLogger;

impl FaultLogger for TracingFaultLogger {
    fn log_fault(&self, fault: &Fault) {
        let mut causes = Vec::new();
        let mut source = fault.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        error!(
            error = %fault,
            detail = ?fault,
            causes = ?causes,
            "unhandled fault converted to outcome"
        );
    }
}

#[cfg(test)]
mod tests;
