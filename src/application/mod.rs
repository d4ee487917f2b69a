//! Application layer - orchestrates the scaffold use case

pub mod dto;
pub mod errors;
pub mod scaffold_service;
pub mod traits;

pub use dto::*;
pub use errors::*;
pub use scaffold_service::*;
pub use traits::*;
