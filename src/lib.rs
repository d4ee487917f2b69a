//! Scaffolds ManyWho service types and actions from Swagger definitions.
//!
//! The library is layered: [`generation`] holds the domain model and the
//! mapping from Swagger definitions and operations to declarations,
//! [`application`] runs the scaffold use case, and [`infrastructure`]
//! provides the loaders, renderer, filesystem output, console adapters and
//! external client generator.
#![deny(unsafe_code)]

pub mod application;
pub mod generation;
pub mod infrastructure;
