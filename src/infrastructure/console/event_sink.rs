//! Console rendering of progress events

use owo_colors::{OwoColorize, Stream};

use crate::generation::{EventSink, GenerationEvent, TracingEventSink};

/// Operator-facing text for an event, if it has any
pub fn render_event(event: &GenerationEvent) -> Option<String> {
    match event {
        GenerationEvent::DocumentLoaded {
            source,
            definitions,
            operations,
        } => Some(format!(
            "Loaded {source} ({definitions} definitions, {operations} operations)"
        )),
        GenerationEvent::ClientGenerated { output_dir } => Some(format!(
            "Generated the Swagger client in {}",
            output_dir.display()
        )),
        GenerationEvent::TypeCreated { name } => Some(format!(
            "Creating a ManyWho Type for the {name} object definition"
        )),
        GenerationEvent::OperationPresented {
            operation_id,
            summary,
            method,
            path,
        } => Some(format!(
            "Processing method {operation_id} ({summary})\n  {} \t{path}\n",
            method.as_str().to_uppercase()
        )),
        GenerationEvent::AnswerRejected { .. } => {
            Some("Please answer with one of the given options".to_string())
        }
        GenerationEvent::ActionCreated { operation_id, .. } => {
            Some(format!("Creating action with the name {operation_id}"))
        }
        // Any classification whose handler generated nothing, including a
        // replaced action handler
        GenerationEvent::ClassificationAcknowledged { classification, .. } => Some(format!(
            "Creating {}",
            classification.display_name().to_lowercase()
        )),
        GenerationEvent::MemberSkipped { .. }
        | GenerationEvent::OperationClassified { .. }
        | GenerationEvent::ArtifactWritten { .. } => None,
    }
}

/// Prints events for the operator on stdout and forwards them to `tracing`
#[derive(Debug, Default)]
pub struct ConsoleEventSink {
    trace: TracingEventSink,
}

impl ConsoleEventSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for ConsoleEventSink {
    fn emit(&self, event: GenerationEvent) {
        if let Some(text) = render_event(&event) {
            match &event {
                GenerationEvent::OperationPresented { .. } => println!(
                    "{}",
                    text.if_supports_color(Stream::Stdout, |t| t.bold())
                ),
                GenerationEvent::AnswerRejected { .. } => println!(
                    "{}",
                    text.if_supports_color(Stream::Stdout, |t| t.on_red())
                ),
                _ => println!("{text}"),
            }
        }
        self.trace.emit(event);
    }
}
