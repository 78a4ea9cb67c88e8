use super::SchemaContractError;
use crate::predicate::{Predicate, all_of};
use prost_reflect::{FieldDescriptor, Kind, MessageDescriptor, MethodDescriptor};
use serde::{Serialize, Serializer};
use std::sync::LazyLock;
use tracing::{debug, error};

pub const PAGE_SIZE_FIELD: &str = "page_size";
pub const PAGE_TOKEN_FIELD: &str = "page_token";
pub const NEXT_PAGE_TOKEN_FIELD: &str = "next_page_token";

static PAGINATED: LazyLock<Predicate<MethodDescriptor>> = LazyLock::new(paginated);

/// The field of a paginated response that holds the elements of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Name of the repeated field in the response message.
    pub field_name: String,
    /// Message type of the page elements.
    #[serde(serialize_with = "serialize_full_name")]
    pub element_type: MessageDescriptor,
}

fn serialize_full_name<S: Serializer>(
    message: &MessageDescriptor,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(message.full_name())
}

pub fn has_page_size_field(method: &MethodDescriptor) -> bool {
    method.input().get_field_by_name(PAGE_SIZE_FIELD).is_some()
}

pub fn has_page_token_field(method: &MethodDescriptor) -> bool {
    method.input().get_field_by_name(PAGE_TOKEN_FIELD).is_some()
}

pub fn has_next_page_token_field(method: &MethodDescriptor) -> bool {
    method
        .output()
        .get_field_by_name(NEXT_PAGE_TOKEN_FIELD)
        .is_some()
}

/// Returns `true` if the response declares exactly one repeated message field.
///
/// Map fields are not counted.
pub fn has_single_repeated_message_field(method: &MethodDescriptor) -> bool {
    repeated_message_fields(&method.output()).len() == 1
}

/// The pagination convention as a composed predicate.
pub fn paginated() -> Predicate<MethodDescriptor> {
    all_of([
        Predicate::new(has_page_size_field),
        Predicate::new(has_page_token_field),
        Predicate::new(has_next_page_token_field),
        Predicate::new(has_single_repeated_message_field),
    ])
}

/// Returns `true` if the method follows the pagination convention.
pub fn is_paginated(method: &MethodDescriptor) -> bool {
    PAGINATED.evaluate(method)
}

/// Resolves the repeated field holding the page elements of a paginated method.
///
/// # Returns
///
/// * `Ok(Some(Pagination))` - The method is paginated.
/// * `Ok(None)` - The method does not follow the pagination convention.
/// * `Err(SchemaContractError::AmbiguousPagination)` - The request and response carry the
///   page token fields, but the response declares more than one repeated message field.
///   The schema has to be fixed, this is not a "not paginated" outcome.
pub fn determine_pagination(
    method: &MethodDescriptor,
) -> Result<Option<Pagination>, SchemaContractError> {
    if !(has_page_size_field(method)
        && has_page_token_field(method)
        && has_next_page_token_field(method))
    {
        return Ok(None);
    }

    let response = method.output();
    let mut candidates = repeated_message_fields(&response);

    match candidates.len() {
        0 => Ok(None),
        1 => {
            let (field, element_type) = candidates.remove(0);
            debug!(
                method = method.full_name(),
                field = field.name(),
                element_type = element_type.full_name(),
                "resolved pagination field"
            );
            Ok(Some(Pagination {
                field_name: field.name().to_string(),
                element_type,
            }))
        }
        _ => {
            let err = SchemaContractError::AmbiguousPagination {
                method: method.full_name().to_string(),
                response: response.full_name().to_string(),
                candidates: candidates
                    .iter()
                    .map(|(field, _)| field.name().to_string())
                    .collect(),
            };
            error!("{err}");
            Err(err)
        }
    }
}

/// Repeated message-typed fields of `message`, in declaration order. Map fields are skipped.
///
/// `MessageDescriptor::fields` yields fields sorted by number, so the order is taken from the
/// underlying descriptor proto instead.
fn repeated_message_fields(message: &MessageDescriptor) -> Vec<(FieldDescriptor, MessageDescriptor)> {
    message
        .descriptor_proto()
        .field
        .iter()
        .filter_map(|proto| message.get_field(proto.number() as u32))
        .filter_map(|field| match field.kind() {
            Kind::Message(element_type) if field.is_list() => Some((field, element_type)),
            _ => None,
        })
        .collect()
}
