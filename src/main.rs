//! service-creator CLI entrypoint
//! Parses command-line arguments and runs the scaffold use case.
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use service_creator::application::{DEFAULT_OUTPUT_DIR, ScaffoldRequest, ScaffoldServiceUseCase};
use service_creator::generation::RetryPolicy;
use service_creator::infrastructure::{
    CompositeOpenApiLoader, ConsoleDecisionProvider, ConsoleEventSink, DEFAULT_CODEGEN_COMMAND,
    FileSystemOutputService, JavaSourceRenderer, ProcessCommandExecutor,
    SwaggerCodegenClientGenerator,
};

#[derive(Parser)]
#[command(name = "service-creator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Scaffold types and actions from a Swagger definition
    Swagger {
        /// Maven group id, e.g. com.example
        #[arg(long)]
        group: String,
        /// Maven artifact id, e.g. petstore
        #[arg(long)]
        artifact: String,
        /// URL or file path of the Swagger document (JSON or YAML)
        #[arg(long)]
        url: String,
        /// Output directory for generated sources
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
        /// Write action sources instead of only reporting them
        #[arg(long)]
        write_actions: bool,
        /// Give up on an operation after this many invalid answers
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_attempts: Option<u32>,
        /// Generate the full Java client with swagger-codegen first
        #[arg(long)]
        client: bool,
        /// swagger-codegen executable used with --client
        #[arg(long, default_value = DEFAULT_CODEGEN_COMMAND)]
        codegen_command: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the prompt on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Swagger {
            group,
            artifact,
            url,
            output,
            write_actions,
            max_attempts,
            client,
            codegen_command,
        } => {
            let mut request = ScaffoldRequest::new(group, artifact, url);
            request.output_dir = output;
            request.write_actions = write_actions;
            request.generate_client = client;
            request.retry = max_attempts.map_or_else(RetryPolicy::unbounded, RetryPolicy::bounded);

            scaffold(request, codegen_command).await?
        }
    }
    Ok(())
}

async fn scaffold(request: ScaffoldRequest, codegen_command: String) -> anyhow::Result<()> {
    info!(
        url = %request.url,
        package = %request.package_name(),
        output = %request.output_dir.display(),
        "Scaffolding service"
    );

    let loader = CompositeOpenApiLoader::new().context("Failed to initialize Swagger loader")?;
    let renderer = JavaSourceRenderer::new().context("Failed to load Java templates")?;
    let client_generator =
        SwaggerCodegenClientGenerator::new(codegen_command, Arc::new(ProcessCommandExecutor::new()));

    let use_case = ScaffoldServiceUseCase::new(
        Arc::new(loader),
        Arc::new(renderer),
        Arc::new(FileSystemOutputService::new()),
        Arc::new(ConsoleEventSink::new()),
    )
    .with_client_generator(Arc::new(client_generator));

    let response = use_case
        .execute(request, ConsoleDecisionProvider::stdio())
        .await
        .context("Failed to scaffold service")?;

    info!(
        types = response.types_created,
        actions = response.actions_created,
        acknowledged = response.acknowledged,
        skipped = response.skipped_members,
        files = response.written.len(),
        output = %response.output_path.display(),
        "Scaffolding complete"
    );
    Ok(())
}
