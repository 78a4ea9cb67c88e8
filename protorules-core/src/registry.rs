//! # Descriptor Registry
//!
//! Loads the schema a generation run works on: an encoded `FileDescriptorSet`, as produced by
//! `protoc --descriptor_set_out` or `tonic-prost-build`, decoded into a
//! [`DescriptorPool`].
//!
//! The registry hands out read-only descriptor handles. It performs no validation beyond what
//! `prost-reflect` does while decoding, all cross references are expected to be resolved.
use prost_reflect::{DescriptorError, DescriptorPool, MethodDescriptor, ServiceDescriptor};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read descriptor set: '{0}'")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode descriptor set: '{0}'")]
    Decode(#[from] DescriptorError),

    #[error("Service '{0}' not found")]
    ServiceNotFound(String),

    #[error("Method '{method}' not found in service '{service}'")]
    MethodNotFound { service: String, method: String },
}

#[derive(Debug, Clone)]
pub struct DescriptorRegistry {
    pool: DescriptorPool,
}

impl DescriptorRegistry {
    /// Decodes a registry from the bytes of an encoded `FileDescriptorSet`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RegistryError> {
        let pool = DescriptorPool::decode(bytes)?;
        Ok(Self { pool })
    }

    /// Reads and decodes a `FileDescriptorSet` file (usually `.bin` or `.pb`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Wraps an already built pool.
    pub fn from_pool(pool: DescriptorPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DescriptorPool {
        &self.pool
    }

    /// Lists the fully qualified names of every service in the registry.
    pub fn list_services(&self) -> Vec<String> {
        self.pool
            .services()
            .map(|s| s.full_name().to_string())
            .collect()
    }

    /// Looks up a service by its fully qualified name (e.g. `my.package.Service`).
    pub fn get_service_descriptor(&self, service: &str) -> Result<ServiceDescriptor, RegistryError> {
        self.pool
            .get_service_by_name(service)
            .ok_or_else(|| RegistryError::ServiceNotFound(service.to_string()))
    }

    /// Looks up a method by service full name and method name (e.g. `SayHello`).
    pub fn get_method_descriptor(
        &self,
        service: &str,
        method: &str,
    ) -> Result<MethodDescriptor, RegistryError> {
        self.get_service_descriptor(service)?
            .methods()
            .find(|m| m.name() == method)
            .ok_or_else(|| RegistryError::MethodNotFound {
                service: service.to_string(),
                method: method.to_string(),
            })
    }
}
