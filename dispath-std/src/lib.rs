//! # dispath-std
//!
//! Standard implementations for the dispath dispatch engine.
//!
//! This crate provides:
//! - **Path flattening**: [`RouteTable`](table::RouteTable) turns the
//!   routing definition tree into a flat, traversal-ordered path table
//! - **Argument binding**: [`ArgumentBinder`](binder::ArgumentBinder) maps
//!   an untyped payload onto a processor's declared parameter order
//! - **Default resolution**: [`FactoryResolver`](factory::FactoryResolver),
//!   a map-backed resolver for tests and simple deployments
//! - **Standard hooks**: logging, payload merging
//! - **Testing utilities**: stock processors and hooks with inspection

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use dispath_core;

// Modules
pub mod binder;
pub mod factory;
pub mod hooks;
pub mod table;
pub mod testing;
