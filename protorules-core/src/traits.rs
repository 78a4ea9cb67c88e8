//! # Method Traits
//!
//! Classifiers over [`MethodDescriptor`]. Each boolean classifier is a plain
//! `fn(&MethodDescriptor) -> bool`, so it can be handed directly to the combinators in
//! [`crate::predicate`] or wrapped in a [`Predicate`].
//!
//! The classifiers recognise the following conventions:
//!
//! * **Streaming**: see [`StreamingMode`]. The four modes are mutually exclusive.
//! * **Empty response**: the output type is `google.protobuf.Empty`.
//! * **Long-running operation**: the output type is `google.longrunning.Operation`, with
//!   the eventual response and metadata types declared in the `google.longrunning.operation_info`
//!   method option.
//! * **Pagination**: the request has `page_size` and `page_token` fields, and the response has
//!   a `next_page_token` field plus exactly one repeated message field holding the page elements.
//!
//! A missing trait is never an error. The single fatal case is a response that follows the
//! pagination convention but carries more than one repeated message field, reported by
//! [`determine_pagination`] as [`SchemaContractError::AmbiguousPagination`].
mod longrunning;
mod pagination;
mod streaming;

pub use longrunning::*;
pub use pagination::*;
pub use streaming::*;

use crate::predicate::Predicate;
use prost_reflect::{MethodDescriptor, ServiceDescriptor};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fully qualified name of the well-known empty message.
pub const EMPTY_MESSAGE: &str = "google.protobuf.Empty";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaContractError {
    #[error(
        "Method '{method}' follows the pagination convention but its response '{response}' declares {} repeated message fields ({}), exactly one is allowed",
        .candidates.len(),
        .candidates.join(", ")
    )]
    AmbiguousPagination {
        method: String,
        response: String,
        candidates: Vec<String>,
    },
}

/// Returns `true` if the method responds with `google.protobuf.Empty`.
pub fn is_response_type_empty(method: &MethodDescriptor) -> bool {
    method.output().full_name() == EMPTY_MESSAGE
}

/// The boolean classifiers, addressable by name.
///
/// Names are the snake_case form of the variant (e.g. `"long_running"`), which is how
/// pattern configuration files refer to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodTrait {
    EmptyResponse,
    LongRunning,
    LongRunningMetadataUsedAsResponse,
    NonStreaming,
    ClientStreaming,
    ServerStreaming,
    BidirectionalStreaming,
    Paginated,
}

impl MethodTrait {
    pub const ALL: [MethodTrait; 8] = [
        MethodTrait::EmptyResponse,
        MethodTrait::LongRunning,
        MethodTrait::LongRunningMetadataUsedAsResponse,
        MethodTrait::NonStreaming,
        MethodTrait::ClientStreaming,
        MethodTrait::ServerStreaming,
        MethodTrait::BidirectionalStreaming,
        MethodTrait::Paginated,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MethodTrait::EmptyResponse => "empty_response",
            MethodTrait::LongRunning => "long_running",
            MethodTrait::LongRunningMetadataUsedAsResponse => {
                "long_running_metadata_used_as_response"
            }
            MethodTrait::NonStreaming => "non_streaming",
            MethodTrait::ClientStreaming => "client_streaming",
            MethodTrait::ServerStreaming => "server_streaming",
            MethodTrait::BidirectionalStreaming => "bidirectional_streaming",
            MethodTrait::Paginated => "paginated",
        }
    }

    pub fn predicate(self) -> Predicate<MethodDescriptor> {
        match self {
            MethodTrait::EmptyResponse => Predicate::new(is_response_type_empty),
            MethodTrait::LongRunning => Predicate::new(is_longrunning_operation),
            MethodTrait::LongRunningMetadataUsedAsResponse => {
                Predicate::new(is_longrunning_metadata_type_used_as_response)
            }
            MethodTrait::NonStreaming => Predicate::new(is_non_streaming),
            MethodTrait::ClientStreaming => Predicate::new(is_client_streaming),
            MethodTrait::ServerStreaming => Predicate::new(is_server_streaming),
            MethodTrait::BidirectionalStreaming => Predicate::new(is_bidirectional_streaming),
            MethodTrait::Paginated => paginated(),
        }
    }
}

/// Every classification result for a single method, as handed to the template renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodTraits {
    /// Fully qualified method name (e.g. `my.package.Service.Method`).
    pub method: String,
    pub streaming: StreamingMode,
    pub empty_response: bool,
    pub long_running: bool,
    pub long_running_metadata_used_as_response: bool,
    pub operation_info: Option<OperationInfo>,
    pub paginated: bool,
    pub pagination: Option<Pagination>,
}

impl MethodTraits {
    /// Looks up a boolean classification result by trait.
    pub fn has(&self, method_trait: MethodTrait) -> bool {
        match method_trait {
            MethodTrait::EmptyResponse => self.empty_response,
            MethodTrait::LongRunning => self.long_running,
            MethodTrait::LongRunningMetadataUsedAsResponse => {
                self.long_running_metadata_used_as_response
            }
            MethodTrait::NonStreaming => self.streaming == StreamingMode::Unary,
            MethodTrait::ClientStreaming => self.streaming == StreamingMode::ClientStreaming,
            MethodTrait::ServerStreaming => self.streaming == StreamingMode::ServerStreaming,
            MethodTrait::BidirectionalStreaming => self.streaming == StreamingMode::Bidirectional,
            MethodTrait::Paginated => self.paginated,
        }
    }
}

/// Runs every classifier against `method`.
///
/// # Returns
///
/// * `Ok(MethodTraits)` - The classification results.
/// * `Err(SchemaContractError)` - If the response message breaks the pagination convention.
pub fn classify(method: &MethodDescriptor) -> Result<MethodTraits, SchemaContractError> {
    let pagination = determine_pagination(method)?;

    let traits = MethodTraits {
        method: method.full_name().to_string(),
        streaming: StreamingMode::of(method),
        empty_response: is_response_type_empty(method),
        long_running: is_longrunning_operation(method),
        long_running_metadata_used_as_response: is_longrunning_metadata_type_used_as_response(
            method,
        ),
        operation_info: operation_info(method),
        paginated: is_paginated(method),
        pagination,
    };

    debug!(method = %traits.method, streaming = ?traits.streaming, "classified method");
    Ok(traits)
}

/// Classifies every method of `service`, in declaration order.
///
/// Stops at the first method that breaks a schema contract.
pub fn classify_service(
    service: &ServiceDescriptor,
) -> Result<Vec<MethodTraits>, SchemaContractError> {
    service.methods().map(|method| classify(&method)).collect()
}
