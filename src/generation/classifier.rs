//! Operation classification
//!
//! Every operation in the document is presented to a [`DecisionProvider`],
//! which answers with one of six single-character codes. Anything else is
//! rejected and asked again.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::generation::{
    DecisionProvider, EventSink, GenerationError, GenerationEvent, HttpMethod, Operation,
};

/// Question shown to the operator for every operation
pub const CLASSIFICATION_QUESTION: &str =
    "Is this method an Action (a), Create (c), Delete (d), Load Multiple (m), Load Single (s), Update (u)? ";

/// What an operation should become in the generated service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Action,
    Create,
    Delete,
    LoadMultiple,
    LoadSingle,
    Update,
}

impl Classification {
    pub fn all() -> &'static [Classification] {
        &[
            Classification::Action,
            Classification::Create,
            Classification::Delete,
            Classification::LoadMultiple,
            Classification::LoadSingle,
            Classification::Update,
        ]
    }

    /// The answer code the operator types
    pub fn code(&self) -> &'static str {
        match self {
            Classification::Action => "a",
            Classification::Create => "c",
            Classification::Delete => "d",
            Classification::LoadMultiple => "m",
            Classification::LoadSingle => "s",
            Classification::Update => "u",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::Action => "Action",
            Classification::Create => "Create",
            Classification::Delete => "Delete",
            Classification::LoadMultiple => "Load Multiple",
            Classification::LoadSingle => "Load Single",
            Classification::Update => "Update",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Classification {
    type Err = GenerationError;

    /// Exact, case-sensitive match on the answer code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::all()
            .iter()
            .copied()
            .find(|classification| classification.code() == s)
            .ok_or_else(|| GenerationError::InvalidClassification(s.to_string()))
    }
}

/// Everything the operator is shown for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationPrompt {
    pub operation_id: String,
    pub summary: String,
    pub method: HttpMethod,
    pub path: String,
    /// 1 for the first question about this operation
    pub attempt: u32,
}

impl ClassificationPrompt {
    pub fn question(&self) -> &'static str {
        CLASSIFICATION_QUESTION
    }
}

/// How many invalid answers are tolerated per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryPolicy {
    /// `None` asks until a valid answer or end of input arrives
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    fn exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

/// Asks a [`DecisionProvider`] to classify operations, one at a time
pub struct OperationClassifier<P> {
    provider: P,
    policy: RetryPolicy,
}

impl<P: DecisionProvider> OperationClassifier<P> {
    pub fn new(provider: P, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    /// Classify a single operation.
    ///
    /// Fails with [`GenerationError::Cancelled`] when the provider has no more
    /// answers and with [`GenerationError::RetriesExhausted`] when the retry
    /// policy runs out.
    pub async fn classify(
        &mut self,
        operation: &Operation,
        events: &dyn EventSink,
    ) -> Result<Classification, GenerationError> {
        events.emit(GenerationEvent::OperationPresented {
            operation_id: operation.id.clone(),
            summary: operation.summary.clone(),
            method: operation.method,
            path: operation.path.clone(),
        });

        let mut attempt = 0;
        loop {
            attempt += 1;
            let prompt = ClassificationPrompt {
                operation_id: operation.id.clone(),
                summary: operation.summary.clone(),
                method: operation.method,
                path: operation.path.clone(),
                attempt,
            };

            let answer = self.provider.ask(&prompt).await?.ok_or_else(|| {
                GenerationError::Cancelled {
                    operation_id: operation.id.clone(),
                }
            })?;

            match answer.parse::<Classification>() {
                Ok(classification) => {
                    events.emit(GenerationEvent::OperationClassified {
                        operation_id: operation.id.clone(),
                        classification,
                    });
                    return Ok(classification);
                }
                Err(_) => {
                    tracing::debug!(
                        operation_id = %operation.id,
                        answer = %answer,
                        attempt,
                        "Rejected classification answer"
                    );
                    events.emit(GenerationEvent::AnswerRejected {
                        operation_id: operation.id.clone(),
                        answer,
                        attempt,
                    });
                    if self.policy.exhausted(attempt) {
                        return Err(GenerationError::RetriesExhausted {
                            operation_id: operation.id.clone(),
                            attempts: attempt,
                        });
                    }
                }
            }
        }
    }

    pub fn into_provider(self) -> P {
        self.provider
    }
}

/// Answers from a fixed script, for automated runs.
///
/// Returns `None` (end of input) once the script is used up.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisionProvider {
    answers: VecDeque<String>,
    asked: Vec<ClassificationPrompt>,
}

impl ScriptedDecisionProvider {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order
    pub fn asked(&self) -> &[ClassificationPrompt] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[async_trait]
impl DecisionProvider for ScriptedDecisionProvider {
    async fn ask(
        &mut self,
        prompt: &ClassificationPrompt,
    ) -> Result<Option<String>, GenerationError> {
        self.asked.push(prompt.clone());
        Ok(self.answers.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::RecordingEventSink;

    fn operation() -> Operation {
        Operation {
            id: "getPetById".to_string(),
            path: "/pets/{id}".to_string(),
            method: HttpMethod::Get,
            summary: "Find pet".to_string(),
            parameters: vec![],
        }
    }

    #[test]
    fn test_classification_from_str() {
        assert_eq!("a".parse::<Classification>().unwrap(), Classification::Action);
        assert_eq!("c".parse::<Classification>().unwrap(), Classification::Create);
        assert_eq!("d".parse::<Classification>().unwrap(), Classification::Delete);
        assert_eq!(
            "m".parse::<Classification>().unwrap(),
            Classification::LoadMultiple
        );
        assert_eq!(
            "s".parse::<Classification>().unwrap(),
            Classification::LoadSingle
        );
        assert_eq!("u".parse::<Classification>().unwrap(), Classification::Update);

        assert!("".parse::<Classification>().is_err());
        assert!("x".parse::<Classification>().is_err());
        assert!("A".parse::<Classification>().is_err());
        assert!(" a".parse::<Classification>().is_err());
        assert!("ab".parse::<Classification>().is_err());
    }

    #[test]
    fn test_classification_display() {
        assert_eq!(Classification::LoadMultiple.to_string(), "Load Multiple");
        assert_eq!(Classification::Action.code(), "a");
        assert_eq!(Classification::all().len(), 6);
    }

    #[tokio::test]
    async fn test_invalid_answers_are_reprompted() {
        let provider = ScriptedDecisionProvider::new(["", "x", "A", "a"]);
        let mut classifier = OperationClassifier::new(provider, RetryPolicy::unbounded());
        let events = RecordingEventSink::new();

        let classification = classifier.classify(&operation(), &events).await.unwrap();
        assert_eq!(classification, Classification::Action);

        let provider = classifier.into_provider();
        let attempts: Vec<u32> = provider.asked().iter().map(|p| p.attempt).collect();
        assert_eq!(attempts, vec![1, 2, 3, 4]);
        assert_eq!(provider.remaining(), 0);

        let rejected: Vec<String> = events
            .events()
            .into_iter()
            .filter_map(|event| match event {
                GenerationEvent::AnswerRejected { answer, .. } => Some(answer),
                _ => None,
            })
            .collect();
        assert_eq!(rejected, vec!["", "x", "A"]);
    }

    #[tokio::test]
    async fn test_prompt_carries_operation_details() {
        let provider = ScriptedDecisionProvider::new(["m"]);
        let mut classifier = OperationClassifier::new(provider, RetryPolicy::default());
        let events = RecordingEventSink::new();

        classifier.classify(&operation(), &events).await.unwrap();

        let provider = classifier.into_provider();
        let prompt = &provider.asked()[0];
        assert_eq!(prompt.operation_id, "getPetById");
        assert_eq!(prompt.summary, "Find pet");
        assert_eq!(prompt.method, HttpMethod::Get);
        assert_eq!(prompt.path, "/pets/{id}");
        assert_eq!(prompt.question(), CLASSIFICATION_QUESTION);

        assert_eq!(
            events.events()[0],
            GenerationEvent::OperationPresented {
                operation_id: "getPetById".to_string(),
                summary: "Find pet".to_string(),
                method: HttpMethod::Get,
                path: "/pets/{id}".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_end_of_input_cancels() {
        let provider = ScriptedDecisionProvider::new(["x"]);
        let mut classifier = OperationClassifier::new(provider, RetryPolicy::unbounded());
        let events = RecordingEventSink::new();

        let result = classifier.classify(&operation(), &events).await;
        assert!(matches!(
            result,
            Err(GenerationError::Cancelled { ref operation_id }) if operation_id == "getPetById"
        ));
    }

    #[tokio::test]
    async fn test_bounded_retry_gives_up() {
        let provider = ScriptedDecisionProvider::new(["x", "y", "a"]);
        let mut classifier = OperationClassifier::new(provider, RetryPolicy::bounded(2));
        let events = RecordingEventSink::new();

        let result = classifier.classify(&operation(), &events).await;
        assert!(matches!(
            result,
            Err(GenerationError::RetriesExhausted { attempts: 2, .. })
        ));
        assert_eq!(classifier.into_provider().remaining(), 1);
    }

    #[tokio::test]
    async fn test_bounded_retry_accepts_valid_answer_on_last_attempt() {
        let provider = ScriptedDecisionProvider::new(["x", "u"]);
        let mut classifier = OperationClassifier::new(provider, RetryPolicy::bounded(2));
        let events = RecordingEventSink::new();

        let result = classifier.classify(&operation(), &events).await.unwrap();
        assert_eq!(result, Classification::Update);
    }
}
