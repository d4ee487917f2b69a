//! Handlers deciding what each classification generates
//!
//! Only actions produce a declaration today. The other classifications are
//! registered with [`AcknowledgeHandler`] and can be replaced one by one
//! through [`HandlerRegistry::register`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::generation::action_emitter::emit_action;
use crate::generation::{ActionDeclaration, Classification, GenerationError, Operation};

/// What a handler produced for an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    Action(ActionDeclaration),
    /// The classification was accepted but nothing was generated
    Acknowledged,
}

pub trait ClassificationHandler: Send + Sync {
    fn handle(
        &self,
        operation: &Operation,
        actions_package: &str,
    ) -> Result<HandlerOutcome, GenerationError>;
}

/// Emits an action declaration
#[derive(Debug, Default)]
pub struct ActionHandler;

impl ClassificationHandler for ActionHandler {
    fn handle(
        &self,
        operation: &Operation,
        actions_package: &str,
    ) -> Result<HandlerOutcome, GenerationError> {
        emit_action(operation, actions_package).map(HandlerOutcome::Action)
    }
}

/// Accepts the classification without generating anything
#[derive(Debug, Default)]
pub struct AcknowledgeHandler;

impl ClassificationHandler for AcknowledgeHandler {
    fn handle(
        &self,
        _operation: &Operation,
        _actions_package: &str,
    ) -> Result<HandlerOutcome, GenerationError> {
        Ok(HandlerOutcome::Acknowledged)
    }
}

/// Registry mapping each classification to its handler
pub struct HandlerRegistry {
    handlers: HashMap<Classification, Arc<dyn ClassificationHandler>>,
}

impl HandlerRegistry {
    /// Create a new registry with default handlers
    pub fn new() -> Self {
        let mut handlers: HashMap<Classification, Arc<dyn ClassificationHandler>> = HashMap::new();

        for classification in Classification::all() {
            let handler: Arc<dyn ClassificationHandler> = match classification {
                Classification::Action => Arc::new(ActionHandler),
                _ => Arc::new(AcknowledgeHandler),
            };
            handlers.insert(*classification, handler);
        }

        Self { handlers }
    }

    /// Create a registry without any handler
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a custom handler for a classification
    pub fn register(
        &mut self,
        classification: Classification,
        handler: Arc<dyn ClassificationHandler>,
    ) {
        self.handlers.insert(classification, handler);
    }

    pub fn get(
        &self,
        classification: Classification,
    ) -> Result<Arc<dyn ClassificationHandler>, GenerationError> {
        self.handlers
            .get(&classification)
            .cloned()
            .ok_or(GenerationError::UnhandledClassification(classification))
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
