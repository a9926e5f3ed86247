//! Ordered registration and dispatch of fault handlers.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::interceptor::OutcomeFaultInterceptor;
use super::ports::{FaultHandler, FaultLogger, HandlerState, PipelineResponse};
use crate::domain::Fault;

/// Fault handlers consulted in registration order for one request type.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use outcome::inbound::pipeline::{FaultHandlerChain, TracingFaultLogger};
/// use outcome::{Fault, Outcome, Status, ValidationError, ValidationFault};
/// use tokio_util::sync::CancellationToken;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let chain = FaultHandlerChain::<String, Outcome<u32>>::new()
///     .with_outcome_interceptor(Arc::new(TracingFaultLogger));
/// let request = "seven".to_owned();
/// let result = chain
///     .send(
///         &request,
///         |_| async {
///             let fault: Fault = Arc::new(ValidationFault::new(
///                 ValidationError::for_field("n", "not a number"),
///             ));
///             Err(fault)
///         },
///         &CancellationToken::new(),
///     )
///     .await;
/// assert_eq!(result.map(|outcome| outcome.status()).ok(), Some(Status::Invalid));
/// # }
/// ```
pub struct FaultHandlerChain<Req, Resp> {
    handlers: Vec<Arc<dyn FaultHandler<Req, Resp>>>,
}

impl<Req, Resp> Default for FaultHandlerChain<Req, Resp> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<Req, Resp> FaultHandlerChain<Req, Resp> {
    /// Chain without handlers; every fault propagates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` after those already registered.
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn FaultHandler<Req, Resp>>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<Req, Resp> FaultHandlerChain<Req, Resp>
where
    Req: Sync + 'static,
    Resp: PipelineResponse + Send + 'static,
{
    /// Append an [`OutcomeFaultInterceptor`] logging through `logger`.
    #[must_use]
    pub fn with_outcome_interceptor(self, logger: Arc<dyn FaultLogger>) -> Self {
        self.with_handler(Arc::new(OutcomeFaultInterceptor::new(logger)))
    }
}

impl<Req, Resp> FaultHandlerChain<Req, Resp>
where
    Req: Sync,
    Resp: Send,
{
    /// Offer `fault` to each handler in order until one substitutes a
    /// response.
    ///
    /// # Errors
    /// Returns `fault` unchanged when no handler resolved it.
    pub async fn resolve(
        &self,
        request: &Req,
        fault: Fault,
        cancellation: &CancellationToken,
    ) -> Result<Resp, Fault> {
        let mut state = HandlerState::new();
        for handler in &self.handlers {
            handler.handle(request, &fault, &mut state, cancellation).await;
            if state.is_handled() {
                break;
            }
        }
        match state.into_response() {
            Some(response) => Ok(response),
            None => {
                debug!(error = %fault, "fault left unhandled by pipeline");
                Err(fault)
            }
        }
    }

    /// Run `handler` for `request`, resolving any fault it returns through
    /// the chain.
    ///
    /// # Errors
    /// Returns the handler's fault when no registered handler resolved it.
    pub async fn send<F, Fut>(
        &self,
        request: &Req,
        handler: F,
        cancellation: &CancellationToken,
    ) -> Result<Resp, Fault>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<Resp, Fault>>,
    {
        match handler(cancellation.clone()).await {
            Ok(response) => Ok(response),
            Err(fault) => self.resolve(request, fault, cancellation).await,
        }
    }
}
