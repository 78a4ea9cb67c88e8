//! In-memory descriptor fixtures shared by the integration tests.
#![allow(dead_code)]

use prost::Message;
use prost::encoding::{WireType, encode_key, encode_varint};
use prost_reflect::{DescriptorPool, DynamicMessage, MethodDescriptor, Value};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    MethodDescriptorProto, ServiceDescriptorProto,
};
use protorules_core::registry::DescriptorRegistry;

pub const SERVICE: &str = "google.foo.v1.Service";

pub fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

pub fn field(name: &str, number: i32, r#type: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(r#type as i32),
        ..Default::default()
    }
}

pub fn repeated_field(name: &str, number: i32, r#type: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        label: Some(Label::Repeated as i32),
        ..field(name, number, r#type)
    }
}

pub fn repeated_message_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..repeated_field(name, number, Type::Message)
    }
}

pub fn method(name: &str, input_type: &str, output_type: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(input_type.to_string()),
        output_type: Some(output_type.to_string()),
        ..Default::default()
    }
}

pub fn streaming_method(
    name: &str,
    input_type: &str,
    output_type: &str,
    client_streaming: bool,
    server_streaming: bool,
) -> MethodDescriptorProto {
    MethodDescriptorProto {
        client_streaming: Some(client_streaming),
        server_streaming: Some(server_streaming),
        ..method(name, input_type, output_type)
    }
}

/// A `google/foo/v1/service.proto` file in `package`, declaring a single `Service`.
pub fn service_file(
    package: &str,
    messages: Vec<DescriptorProto>,
    methods: Vec<MethodDescriptorProto>,
) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("google/foo/v1/service.proto".to_string()),
        package: Some(package.to_string()),
        message_type: messages,
        service: vec![ServiceDescriptorProto {
            name: Some("Service".to_string()),
            method: methods,
            ..Default::default()
        }],
        ..Default::default()
    }
}

pub fn build_pool(files: Vec<FileDescriptorProto>) -> DescriptorPool {
    DescriptorPool::from_file_descriptor_set(FileDescriptorSet { file: files })
        .expect("Failed to build descriptor pool")
}

pub fn get_method(pool: &DescriptorPool, service: &str, method: &str) -> MethodDescriptor {
    DescriptorRegistry::from_pool(pool.clone())
        .get_method_descriptor(service, method)
        .expect("Method not found")
}

/// A pool holding the page request/response shapes used by the pagination tests.
///
/// `input` and `output` become `google.foo.v1.Input` and `google.foo.v1.Output`, and
/// `google.foo.v1.Bar` / `google.foo.v1.Foo` are available as element types.
pub fn paginated_pool(
    input: Vec<FieldDescriptorProto>,
    output: Vec<FieldDescriptorProto>,
) -> DescriptorPool {
    build_pool(vec![service_file(
        "google.foo.v1",
        vec![
            message("Bar", vec![]),
            message("Foo", vec![]),
            message("Input", input),
            message("Output", output),
        ],
        vec![method(
            "Paginated",
            ".google.foo.v1.Input",
            ".google.foo.v1.Output",
        )],
    )])
}

pub fn paginated_method(
    input: Vec<FieldDescriptorProto>,
    output: Vec<FieldDescriptorProto>,
) -> MethodDescriptor {
    get_method(&paginated_pool(input, output), SERVICE, "Paginated")
}

pub fn page_request_fields() -> Vec<FieldDescriptorProto> {
    vec![
        field("page_size", 1, Type::Int32),
        field("page_token", 2, Type::String),
    ]
}

/// `google/protobuf/empty.proto`.
pub fn empty_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("google/protobuf/empty.proto".to_string()),
        package: Some("google.protobuf".to_string()),
        message_type: vec![message("Empty", vec![])],
        ..Default::default()
    }
}

/// `google/longrunning/operations.proto`, trimmed down to what the classifiers look at.
pub fn longrunning_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("google/longrunning/operations.proto".to_string()),
        package: Some("google.longrunning".to_string()),
        dependency: vec!["google/protobuf/descriptor.proto".to_string()],
        message_type: vec![
            message("Operation", vec![field("name", 1, Type::String)]),
            message(
                "OperationInfo",
                vec![
                    field("response_type", 1, Type::String),
                    field("metadata_type", 2, Type::String),
                ],
            ),
        ],
        extension: vec![FieldDescriptorProto {
            type_name: Some(".google.longrunning.OperationInfo".to_string()),
            extendee: Some(".google.protobuf.MethodOptions".to_string()),
            ..field("operation_info", 1049, Type::Message)
        }],
        ..Default::default()
    }
}

/// The global pool (which carries `google/protobuf/descriptor.proto`) plus the
/// long-running operation definitions.
pub fn longrunning_pool() -> DescriptorPool {
    let mut pool = DescriptorPool::global();
    pool.add_file_descriptor_proto(longrunning_file())
        .expect("Failed to add google/longrunning/operations.proto");
    pool
}

/// Encodes a `google.protobuf.MethodOptions` carrying an `operation_info` extension.
pub fn operation_info_options(
    pool: &DescriptorPool,
    response_type: &str,
    metadata_type: &str,
) -> Vec<u8> {
    let extension = pool
        .get_extension_by_name("google.longrunning.operation_info")
        .expect("operation_info extension not found");
    let info_descriptor = pool
        .get_message_by_name("google.longrunning.OperationInfo")
        .expect("OperationInfo not found");
    let options_descriptor = pool
        .get_message_by_name("google.protobuf.MethodOptions")
        .expect("MethodOptions not found");

    let mut info = DynamicMessage::new(info_descriptor);
    info.set_field_by_name("response_type", Value::String(response_type.to_string()));
    info.set_field_by_name("metadata_type", Value::String(metadata_type.to_string()));

    let mut options = DynamicMessage::new(options_descriptor);
    options.set_extension(&extension, Value::Message(info));
    options.encode_to_vec()
}

/// Encodes `file`, attaching `method_options` to its first method.
///
/// `prost-types` drops extension options, so the options are spliced in as raw
/// length-delimited fields: `MethodDescriptorProto.options` (4), `ServiceDescriptorProto.method`
/// (2) and `FileDescriptorProto.service` (6).
pub fn encode_with_method_options(file: &FileDescriptorProto, method_options: &[u8]) -> Vec<u8> {
    let mut file = file.clone();
    let mut service = file.service.remove(0);
    let method = service.method.remove(0);

    let mut method_bytes = method.encode_to_vec();
    append_length_delimited(4, method_options, &mut method_bytes);

    let mut service_bytes = service.encode_to_vec();
    append_length_delimited(2, &method_bytes, &mut service_bytes);

    let mut file_bytes = file.encode_to_vec();
    append_length_delimited(6, &service_bytes, &mut file_bytes);
    file_bytes
}

fn append_length_delimited(tag: u32, payload: &[u8], buf: &mut Vec<u8>) {
    encode_key(tag, WireType::LengthDelimited, buf);
    encode_varint(payload.len() as u64, buf);
    buf.extend_from_slice(payload);
}

/// A long-running `google.foo.v1.Service.Method0`, optionally declaring `operation_info`.
pub fn longrunning_method(operation_info: Option<(&str, &str)>) -> MethodDescriptor {
    let mut pool = longrunning_pool();
    let mut file = service_file(
        "google.foo.v1",
        vec![message("Bar", vec![])],
        vec![method(
            "Method0",
            ".google.foo.v1.Bar",
            ".google.longrunning.Operation",
        )],
    );
    file.dependency = vec!["google/longrunning/operations.proto".to_string()];

    match operation_info {
        Some((response_type, metadata_type)) => {
            let options = operation_info_options(&pool, response_type, metadata_type);
            let bytes = encode_with_method_options(&file, &options);
            pool.decode_file_descriptor_proto(bytes.as_slice())
                .expect("Failed to decode service file");
        }
        None => pool
            .add_file_descriptor_proto(file)
            .expect("Failed to add service file"),
    }

    get_method(&pool, SERVICE, "Method0")
}
