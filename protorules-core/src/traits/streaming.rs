use prost_reflect::MethodDescriptor;
use serde::Serialize;

/// How a method exchanges messages. Fully determined by the two streaming flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamingMode {
    /// Single request, single response.
    Unary,
    /// Stream of requests, single response.
    ClientStreaming,
    /// Single request, stream of responses.
    ServerStreaming,
    /// Stream of requests, stream of responses.
    Bidirectional,
}

impl StreamingMode {
    pub fn of(method: &MethodDescriptor) -> Self {
        match (method.is_client_streaming(), method.is_server_streaming()) {
            (false, false) => StreamingMode::Unary,
            (true, false) => StreamingMode::ClientStreaming,
            (false, true) => StreamingMode::ServerStreaming,
            (true, true) => StreamingMode::Bidirectional,
        }
    }
}

/// Returns `true` if neither the request nor the response is streamed.
pub fn is_non_streaming(method: &MethodDescriptor) -> bool {
    StreamingMode::of(method) == StreamingMode::Unary
}

/// Returns `true` if only the request is streamed.
pub fn is_client_streaming(method: &MethodDescriptor) -> bool {
    StreamingMode::of(method) == StreamingMode::ClientStreaming
}

/// Returns `true` if only the response is streamed.
pub fn is_server_streaming(method: &MethodDescriptor) -> bool {
    StreamingMode::of(method) == StreamingMode::ServerStreaming
}

/// Returns `true` if both the request and the response are streamed.
pub fn is_bidirectional_streaming(method: &MethodDescriptor) -> bool {
    StreamingMode::of(method) == StreamingMode::Bidirectional
}
