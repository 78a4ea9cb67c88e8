//! # Protorules Core
//!
//! `protorules-core` is the decision layer of a protobuf service code generator. It inspects
//! the schema of a service (methods, their input/output messages and declared options) and
//!
//! 1. classifies each method along independent axes: streaming mode, empty response,
//!    long-running operation, pagination;
//! 2. selects, per method, which pre-authored text fragments the templating stage should emit.
//!
//! ## Key Components
//!
//! * **[`predicate::Predicate`]:** A first-class `(&T) -> bool` value together with the
//!   combinators ([`predicate::not`], [`predicate::and`], [`predicate::or`],
//!   [`predicate::all_of`], [`predicate::any_of`]) used to compose them.
//! * **[`traits`]:** The method classifiers, all expressed over
//!   [`prost_reflect::MethodDescriptor`], plus [`traits::classify`] which bundles every
//!   result into a [`traits::MethodTraits`].
//! * **[`fragment::PredicatedFragment`] & [`fragment::Pattern`]:** Conditional text selection.
//! * **[`registry::DescriptorRegistry`]:** Loads an encoded `FileDescriptorSet` and looks up
//!   services and methods.
//! * **[`config::PatternConfig`]:** Declares patterns in JSON, referring to classifiers by name.
//!
//! ## Re-exports
//!
//! This crate re-exports `prost-reflect` to ensure that consumers build descriptor pools with
//! a compatible version.
pub mod config;
pub mod fragment;
pub mod predicate;
pub mod registry;
pub mod traits;

// Re-exports
pub use prost_reflect;
