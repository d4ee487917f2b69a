//! Progress events emitted while scaffolding
//!
//! The generation code never prints. It reports what it does through an
//! [`EventSink`] and the caller decides how to show it.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::generation::{Classification, EventSink, HttpMethod, SkipReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    DocumentLoaded {
        source: String,
        definitions: usize,
        operations: usize,
    },
    ClientGenerated {
        output_dir: PathBuf,
    },
    TypeCreated {
        name: String,
    },
    MemberSkipped {
        owner: String,
        member: String,
        reason: SkipReason,
    },
    OperationPresented {
        operation_id: String,
        summary: String,
        method: HttpMethod,
        path: String,
    },
    AnswerRejected {
        operation_id: String,
        answer: String,
        attempt: u32,
    },
    OperationClassified {
        operation_id: String,
        classification: Classification,
    },
    ActionCreated {
        operation_id: String,
        name: String,
        /// Rendered declaration
        source: String,
    },
    /// A classification with no generator attached yet
    ClassificationAcknowledged {
        operation_id: String,
        classification: Classification,
    },
    ArtifactWritten {
        path: PathBuf,
    },
}

/// Forwards events to `tracing` at debug level
#[derive(Debug, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: GenerationEvent) {
        match event {
            GenerationEvent::DocumentLoaded {
                source,
                definitions,
                operations,
            } => tracing::debug!(%source, definitions, operations, "Loaded Swagger document"),
            GenerationEvent::ClientGenerated { output_dir } => {
                tracing::debug!(output_dir = %output_dir.display(), "Generated Swagger client")
            }
            GenerationEvent::TypeCreated { name } => tracing::debug!(%name, "Created type"),
            GenerationEvent::MemberSkipped {
                owner,
                member,
                reason,
            } => tracing::debug!(%owner, %member, %reason, "Skipped member"),
            GenerationEvent::OperationPresented {
                operation_id,
                method,
                path,
                ..
            } => tracing::debug!(%operation_id, %method, %path, "Processing operation"),
            GenerationEvent::AnswerRejected {
                operation_id,
                answer,
                attempt,
            } => tracing::debug!(%operation_id, %answer, attempt, "Rejected classification answer"),
            GenerationEvent::OperationClassified {
                operation_id,
                classification,
            } => tracing::debug!(%operation_id, %classification, "Classified operation"),
            GenerationEvent::ActionCreated {
                operation_id, name, ..
            } => tracing::debug!(%operation_id, %name, "Created action"),
            GenerationEvent::ClassificationAcknowledged {
                operation_id,
                classification,
            } => tracing::debug!(%operation_id, %classification, "Nothing generated for classification"),
            GenerationEvent::ArtifactWritten { path } => {
                tracing::debug!(path = %path.display(), "Wrote artifact")
            }
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<GenerationEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<GenerationEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: GenerationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
