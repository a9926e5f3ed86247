//! Fault interceptor turning handler crashes into typed failure outcomes.

use std::error::Error;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::ports::{FaultHandler, FaultLogger, HandlerState, PipelineResponse, TracingFaultLogger};
use crate::domain::{
    AggregateValidationError, Fault, NotFoundError, Outcome, OutcomeFault, ValidationFault,
};

/// [`FaultHandler`] resolving faults as outcomes for handlers declared to
/// return one.
///
/// Response types without an outcome conversion are left alone: the state
/// stays unhandled and the fault keeps propagating.
pub struct OutcomeFaultInterceptor<Req, Resp> {
    logger: Arc<dyn FaultLogger>,
    pipeline: PhantomData<fn(&Req) -> Resp>,
}

impl<Req, Resp> OutcomeFaultInterceptor<Req, Resp> {
    /// Interceptor logging through `logger`.
    #[must_use]
    pub fn new(logger: Arc<dyn FaultLogger>) -> Self {
        Self {
            logger,
            pipeline: PhantomData,
        }
    }
}

impl<Req, Resp> Default for OutcomeFaultInterceptor<Req, Resp> {
    fn default() -> Self {
        Self::new(Arc::new(TracingFaultLogger))
    }
}

#[async_trait]
impl<Req, Resp> FaultHandler<Req, Resp> for OutcomeFaultInterceptor<Req, Resp>
where
    Req: Sync,
    Resp: PipelineResponse + Send,
{
    async fn handle(
        &self,
        _request: &Req,
        fault: &Fault,
        state: &mut HandlerState<Resp>,
        _cancellation: &CancellationToken,
    ) {
        let Some(convert) = Resp::outcome_conversion() else {
            return;
        };
        self.logger.log_fault(fault);
        state.set_handled(convert(classify(fault)));
    }
}

/// Classify a fault into an untyped outcome; first match wins.
///
/// Validation faults become `Invalid` with every inner error in order,
/// not-found faults become `NotFound` with the fault's message, and anything
/// else becomes `Error` holding the original fault.
pub fn classify(fault: &Fault) -> Outcome {
    let raised: &(dyn Error + Send + Sync + 'static) = &**fault;
    if let Some(outcome_fault) = raised.downcast_ref::<OutcomeFault>() {
        match outcome_fault {
            OutcomeFault::Raised(inner) => return classify(inner),
            OutcomeFault::Validation(aggregate) => return invalid_or_error(aggregate, fault),
            OutcomeFault::NotFound(missing) => return not_found(missing),
            OutcomeFault::Unknown | OutcomeFault::MissingValue => {}
        }
    }
    if let Some(aggregate) = raised.downcast_ref::<AggregateValidationError>() {
        return invalid_or_error(aggregate, fault);
    }
    if let Some(single) = raised.downcast_ref::<ValidationFault>() {
        return Outcome::invalid([single.validation_error().clone()])
            .unwrap_or_else(|_| Outcome::error_from(Arc::clone(fault)));
    }
    if let Some(not_found_error) = raised.downcast_ref::<NotFoundError>() {
        return not_found(not_found_error);
    }
    Outcome::error_from(Arc::clone(fault))
}

fn invalid_or_error(aggregate: &AggregateValidationError, fault: &Fault) -> Outcome {
    // An empty aggregate cannot form an invalid outcome.
    Outcome::invalid(aggregate.validation_errors().cloned())
        .unwrap_or_else(|_| Outcome::error_from(Arc::clone(fault)))
}

fn not_found(error: &NotFoundError) -> Outcome {
    match error.message() {
        Some(message) => Outcome::not_found_with(message),
        None => Outcome::not_found(),
    }
}
