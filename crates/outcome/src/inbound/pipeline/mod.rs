//! Request-pipeline integration: fault handlers that resolve escaping faults
//! as outcomes.

mod chain;
mod interceptor;
mod ports;

pub use chain::FaultHandlerChain;
pub use interceptor::{OutcomeFaultInterceptor, classify};
pub use ports::{FaultHandler, FaultLogger, HandlerState, PipelineResponse, TracingFaultLogger};
