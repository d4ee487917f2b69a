//! Terminal adapters: operator prompt and progress output

pub mod decision_provider;
pub mod event_sink;

pub use decision_provider::ConsoleDecisionProvider;
pub use event_sink::{ConsoleEventSink, render_event};
