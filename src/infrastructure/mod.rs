//! Infrastructure layer - concrete implementations of domain and application ports

pub mod codegen;
pub mod console;
pub mod openapi;
pub mod output;
pub mod rendering;
pub mod shell;

pub use codegen::*;
pub use console::*;
pub use openapi::*;
pub use output::*;
pub use rendering::*;
pub use shell::*;
