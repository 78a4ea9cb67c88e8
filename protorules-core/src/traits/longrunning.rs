use super::EMPTY_MESSAGE;
use prost_reflect::MethodDescriptor;
use serde::Serialize;

/// Fully qualified name of the long-running operation placeholder message.
pub const LONGRUNNING_OPERATION: &str = "google.longrunning.Operation";

/// Fully qualified name of the `MethodOptions` extension declaring the eventual
/// response and metadata types of a long-running method.
pub const OPERATION_INFO_EXTENSION: &str = "google.longrunning.operation_info";

/// The contents of a `google.longrunning.operation_info` method option.
///
/// Type names are kept exactly as written in the schema, which may or may not be
/// fully qualified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    pub response_type: String,
    pub metadata_type: String,
}

/// Returns `true` if the method responds with `google.longrunning.Operation`.
///
/// Matching is done on the fully qualified name, a user message that happens to be called
/// `Operation` does not count.
pub fn is_longrunning_operation(method: &MethodDescriptor) -> bool {
    method.output().full_name() == LONGRUNNING_OPERATION
}

/// Reads the `google.longrunning.operation_info` option of `method`.
///
/// Returns `None` if the option is not set, or if the extension is not known to the
/// method's descriptor pool at all.
pub fn operation_info(method: &MethodDescriptor) -> Option<OperationInfo> {
    let extension = method
        .parent_pool()
        .get_extension_by_name(OPERATION_INFO_EXTENSION)?;

    let options = method.options();
    if !options.has_extension(&extension) {
        return None;
    }

    let value = options.get_extension(&extension);
    let info = value.as_message()?;
    let read = |name: &str| {
        info.get_field_by_name(name)
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default()
    };

    Some(OperationInfo {
        response_type: read("response_type"),
        metadata_type: read("metadata_type"),
    })
}

/// Returns `true` if a long-running method has no real response of its own, so that
/// generated code should surface the operation metadata in its place.
///
/// That is the case when the `operation_info` option is absent, leaves `response_type`
/// empty, or names `google.protobuf.Empty`. Always `false` for methods that are not
/// long-running.
pub fn is_longrunning_metadata_type_used_as_response(method: &MethodDescriptor) -> bool {
    if !is_longrunning_operation(method) {
        return false;
    }

    match operation_info(method) {
        None => true,
        Some(info) => names_empty_message(&info.response_type),
    }
}

fn names_empty_message(type_name: &str) -> bool {
    let type_name = type_name.trim_start_matches('.');
    type_name.is_empty() || type_name == EMPTY_MESSAGE || type_name == "Empty"
}
