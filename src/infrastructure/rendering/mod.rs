//! Source rendering implementations

pub mod java_renderer;

pub use java_renderer::JavaSourceRenderer;
