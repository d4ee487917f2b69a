//! Use case for scaffolding types and actions from a Swagger document

use std::path::Path;
use std::sync::Arc;

use crate::application::{
    ApplicationError, OutputService, ScaffoldRequest, ScaffoldResponse, ValidationError,
};
use crate::generation::utils::source_path;
use crate::generation::{
    Artifact, ClientGenerationRequest, ClientGenerator, DecisionProvider, EventSink,
    GeneratedType, GenerationEvent, HandlerOutcome, HandlerRegistry, OpenApiLoader,
    OperationClassifier, SkippedMember, SourceRenderer, walk_definitions,
};

/// Use case for scaffolding a service
pub struct ScaffoldServiceUseCase {
    openapi_loader: Arc<dyn OpenApiLoader>,
    renderer: Arc<dyn SourceRenderer>,
    output_service: Arc<dyn OutputService>,
    client_generator: Option<Arc<dyn ClientGenerator>>,
    handlers: Arc<HandlerRegistry>,
    events: Arc<dyn EventSink>,
}

impl ScaffoldServiceUseCase {
    pub fn new(
        openapi_loader: Arc<dyn OpenApiLoader>,
        renderer: Arc<dyn SourceRenderer>,
        output_service: Arc<dyn OutputService>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            openapi_loader,
            renderer,
            output_service,
            client_generator: None,
            handlers: Arc::new(HandlerRegistry::default()),
            events,
        }
    }

    pub fn with_client_generator(mut self, client_generator: Arc<dyn ClientGenerator>) -> Self {
        self.client_generator = Some(client_generator);
        self
    }

    pub fn with_handlers(mut self, handlers: Arc<HandlerRegistry>) -> Self {
        self.handlers = handlers;
        self
    }

    /// Run the whole pipeline: optional client generation, type generation,
    /// then one classification per operation. The first failure aborts.
    pub async fn execute<P: DecisionProvider>(
        &self,
        request: ScaffoldRequest,
        provider: P,
    ) -> Result<ScaffoldResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        let package = request.package_name();
        let source_root = request.source_root();
        let mut response = ScaffoldResponse {
            output_path: request.output_dir.clone(),
            ..ScaffoldResponse::default()
        };

        // 2. Ensure output directory exists
        self.output_service
            .ensure_directory(&request.output_dir)
            .await?;

        // 3. Delegate the full client to the external generator
        if request.generate_client {
            let generator = self.client_generator.as_ref().ok_or_else(|| {
                ValidationError::InvalidConfiguration(
                    "client generation requested but no client generator is configured"
                        .to_string(),
                )
            })?;

            generator
                .generate(&ClientGenerationRequest {
                    source: &request.url,
                    output_dir: &request.output_dir,
                    group: &request.group,
                    artifact: &request.artifact,
                    package: &package,
                })
                .await?;

            self.events.emit(GenerationEvent::ClientGenerated {
                output_dir: request.output_dir.clone(),
            });
            response.client_generated = true;
        }

        // 4. Load the document
        let definition = self.openapi_loader.load(&request.url).await?;
        self.events.emit(GenerationEvent::DocumentLoaded {
            source: request.url.clone(),
            definitions: definition.definitions.len(),
            operations: definition.operation_count(),
        });

        // 5. Types, one per object definition
        let walked = walk_definitions(&definition, &request.types_package())?;
        self.report_skipped(&walked.skipped);
        response.skipped_members += walked.skipped.len();

        for declaration in &walked.types {
            self.events.emit(GenerationEvent::TypeCreated {
                name: declaration.name.clone(),
            });
            let path = self.write_declaration(&source_root, declaration).await?;
            response.written.push(path);
            response.types_created += 1;
        }

        // 6. Operations, one classification each
        let mut classifier = OperationClassifier::new(provider, request.retry);
        let actions_package = request.actions_package();

        for operation in definition.operations() {
            let classification = classifier.classify(operation, self.events.as_ref()).await?;
            let handler = self.handlers.get(classification)?;

            match handler.handle(operation, &actions_package)? {
                HandlerOutcome::Action(action) => {
                    self.report_skipped(&action.skipped);
                    response.skipped_members += action.skipped.len();

                    let source = self.renderer.render(&action.declaration)?;
                    tracing::debug!(
                        operation_id = %operation.id,
                        name = %action.declaration.qualified_name(),
                        "Rendered action:\n{source}"
                    );
                    self.events.emit(GenerationEvent::ActionCreated {
                        operation_id: operation.id.clone(),
                        name: action.declaration.name.clone(),
                        source: source.clone(),
                    });

                    if request.write_actions {
                        let path = source_path(
                            &source_root,
                            &action.declaration,
                            self.renderer.file_extension(),
                        );
                        self.write(Artifact { path: path.clone(), content: source })
                            .await?;
                        response.written.push(path);
                    }
                    response.actions_created += 1;
                }
                HandlerOutcome::Acknowledged => {
                    self.events
                        .emit(GenerationEvent::ClassificationAcknowledged {
                            operation_id: operation.id.clone(),
                            classification,
                        });
                    response.acknowledged += 1;
                }
            }
        }

        Ok(response)
    }

    async fn write_declaration(
        &self,
        source_root: &Path,
        declaration: &GeneratedType,
    ) -> Result<std::path::PathBuf, ApplicationError> {
        let content = self.renderer.render(declaration)?;
        let path = source_path(source_root, declaration, self.renderer.file_extension());
        self.write(Artifact {
            path: path.clone(),
            content,
        })
        .await?;
        Ok(path)
    }

    async fn write(&self, artifact: Artifact) -> Result<(), ApplicationError> {
        self.output_service.write_artifact(&artifact).await?;
        self.events
            .emit(GenerationEvent::ArtifactWritten { path: artifact.path });
        Ok(())
    }

    fn report_skipped(&self, skipped: &[SkippedMember]) {
        for member in skipped {
            self.events.emit(GenerationEvent::MemberSkipped {
                owner: member.owner.clone(),
                member: member.member.clone(),
                reason: member.reason.clone(),
            });
        }
    }
}
