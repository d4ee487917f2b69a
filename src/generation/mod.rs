//! Generation domain module - maps a Swagger document to declarations
//!
//! The schema walker turns object definitions into data types. The
//! classifier asks which kind of SDK artifact each operation should become,
//! and the handler registry turns that answer into declarations (today only
//! actions produce any).

pub mod action_emitter;
pub mod builders;
pub mod classifier;
pub mod declarations;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod rules;
pub mod sanitizers;
pub mod schema_walker;
pub mod traits;
pub mod types;
pub mod utils;

pub use action_emitter::*;
pub use classifier::*;
pub use declarations::*;
pub use errors::*;
pub use events::*;
pub use handlers::*;
pub use schema_walker::*;
pub use traits::*;
pub use types::*;
