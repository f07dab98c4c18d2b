//! Remote record gateway adapters.
//!
//! This module provides a thin HTTP implementation of the `RecordGateway`
//! port.

mod http_gateway;

pub use http_gateway::HttpRecordGateway;
