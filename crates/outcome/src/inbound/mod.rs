//! Inbound adapters lowering outcomes into external protocols.

pub mod http;
pub mod pipeline;
