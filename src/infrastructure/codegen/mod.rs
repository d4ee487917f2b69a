//! External client generators

pub mod swagger_codegen;

pub use swagger_codegen::*;
