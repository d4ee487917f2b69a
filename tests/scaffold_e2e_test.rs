//! End-to-end scaffold runs through the library API

use std::path::Path;
use std::sync::Arc;

use service_creator::application::{ApplicationError, ScaffoldRequest, ScaffoldServiceUseCase};
use service_creator::generation::{
    Classification, GenerationError, GenerationEvent, RecordingEventSink,
    ScriptedDecisionProvider, SkipReason,
};
use service_creator::infrastructure::{
    CompositeOpenApiLoader, FileSystemOutputService, JavaSourceRenderer,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PETSTORE: &str = include_str!("fixtures/petstore.json");

fn use_case(events: Arc<RecordingEventSink>) -> ScaffoldServiceUseCase {
    ScaffoldServiceUseCase::new(
        Arc::new(CompositeOpenApiLoader::new().unwrap()),
        Arc::new(JavaSourceRenderer::new().unwrap()),
        Arc::new(FileSystemOutputService::new()),
        events,
    )
}

fn request(url: String, output: &Path) -> ScaffoldRequest {
    let mut request = ScaffoldRequest::new("com.example", "petstore", url);
    request.output_dir = output.to_path_buf();
    request.write_actions = true;
    request
}

#[tokio::test]
async fn test_scaffold_from_http_document() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/swagger.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PETSTORE)
                .insert_header("content-type", "application/json"),
        )
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let events = Arc::new(RecordingEventSink::new());
    let url = format!("{}/v2/swagger.json", mock_server.uri());

    let response = use_case(events.clone())
        .execute(
            request(url, temp_dir.path()),
            ScriptedDecisionProvider::new(["", "s", "u", "a", "a"]),
        )
        .await
        .unwrap();

    assert_eq!(response.types_created, 2);
    assert_eq!(response.actions_created, 2);
    assert_eq!(response.acknowledged, 2);
    assert_eq!(response.written.len(), 4);

    let source_root = temp_dir.path().join("src/main/java/com/example/petstore");
    let delete_pet =
        std::fs::read_to_string(source_root.join("actions/DeletePet.java")).unwrap();
    let expected = r#"package com.example.petstore.actions;

import com.manywho.sdk.api.ContentType;
import com.manywho.sdk.services.actions.Action;

@Action.Metadata(name = "deletePet", summary = "Deletes a pet", uri = "deletePet")
public final class DeletePet {

    public static class Input {

        @Action.Input(contentType = ContentType.String, name = "api _key", required = false)
        private String api_key;

        @Action.Input(contentType = ContentType.String, name = "pet Id", required = true)
        private String petId;

        public String getApi_key() {
            return api_key;
        }

        public String getPetId() {
            return petId;
        }
    }
}
"#;
    assert_eq!(delete_pet, expected);

    let events = events.events();
    assert!(events.contains(&GenerationEvent::DocumentLoaded {
        source: format!("{}/v2/swagger.json", mock_server.uri()),
        definitions: 3,
        operations: 4,
    }));
    assert!(events.contains(&GenerationEvent::ClassificationAcknowledged {
        operation_id: "listPets".to_string(),
        classification: Classification::LoadSingle,
    }));
    assert!(events.contains(&GenerationEvent::AnswerRejected {
        operation_id: "listPets".to_string(),
        answer: String::new(),
        attempt: 1,
    }));
}

#[tokio::test]
async fn test_scaffold_reports_skipped_members() {
    let temp_dir = TempDir::new().unwrap();
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/petstore.json");
    let events = Arc::new(RecordingEventSink::new());

    let response = use_case(events.clone())
        .execute(
            request(fixture.display().to_string(), temp_dir.path()),
            ScriptedDecisionProvider::new(["m", "a", "s", "d"]),
        )
        .await
        .unwrap();

    // Pet.category, Pet.photoUrls, the Status definition and addPet's body
    assert_eq!(response.skipped_members, 4);

    let events = events.events();
    assert!(events.contains(&GenerationEvent::MemberSkipped {
        owner: "Pet".to_string(),
        member: "category".to_string(),
        reason: SkipReason::Reference("#/definitions/Category".to_string()),
    }));
    assert!(events.contains(&GenerationEvent::MemberSkipped {
        owner: "addPet".to_string(),
        member: "body".to_string(),
        reason: SkipReason::NonScalarParameter,
    }));

    let add_pet = std::fs::read_to_string(
        temp_dir
            .path()
            .join("src/main/java/com/example/petstore/actions/AddPet.java"),
    )
    .unwrap();
    assert!(add_pet.contains("public static class Input {\n    }"));
}

fn write_document(dir: &Path, document: serde_json::Value) -> String {
    let file = dir.join("swagger.json");
    std::fs::write(&file, document.to_string()).unwrap();
    file.display().to_string()
}

#[tokio::test]
async fn test_scaffold_rejects_names_that_are_not_identifiers() {
    for name in ["../../../../escaped", "Pet Store", "class"] {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out");
        let source = write_document(
            temp_dir.path(),
            serde_json::json!({
                "swagger": "2.0",
                "definitions": {
                    name: { "type": "object", "properties": { "id": { "type": "integer" } } }
                },
                "paths": {}
            }),
        );

        let result = use_case(Arc::new(RecordingEventSink::new()))
            .execute(request(source, &output), ScriptedDecisionProvider::new(Vec::<String>::new()))
            .await;

        match result {
            Err(ApplicationError::GenerationError(GenerationError::ValidationError(msg))) => {
                assert!(msg.contains("is not a valid type name"), "{msg}")
            }
            other => panic!("Expected ValidationError for {name:?}, got {other:?}"),
        }
        assert!(!temp_dir.path().join("escaped.java").exists());
        assert!(!output.join("src/main/java/escaped.java").exists());
    }
}

#[tokio::test]
async fn test_scaffold_rejects_reserved_field_name() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_document(
        temp_dir.path(),
        serde_json::json!({
            "swagger": "2.0",
            "definitions": {
                "Pet": { "type": "object", "properties": { "class": { "type": "string" } } }
            },
            "paths": {}
        }),
    );

    let result = use_case(Arc::new(RecordingEventSink::new()))
        .execute(
            request(source, &temp_dir.path().join("out")),
            ScriptedDecisionProvider::new(Vec::<String>::new()),
        )
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::GenerationError(GenerationError::ValidationError(_)))
    ));
    assert!(!temp_dir.path().join("out/src").exists());
}

#[tokio::test]
async fn test_scaffold_skips_composed_properties() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_document(
        temp_dir.path(),
        serde_json::json!({
            "swagger": "2.0",
            "definitions": {
                "Category": { "type": "object", "properties": { "id": { "type": "integer" } } },
                "Pet": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer" },
                        "category": {
                            "description": "Pet category",
                            "allOf": [{ "$ref": "#/definitions/Category" }]
                        }
                    }
                }
            },
            "paths": {}
        }),
    );
    let events = Arc::new(RecordingEventSink::new());

    let response = use_case(events.clone())
        .execute(
            request(source, &temp_dir.path().join("out")),
            ScriptedDecisionProvider::new(Vec::<String>::new()),
        )
        .await
        .unwrap();

    assert_eq!(response.types_created, 2);
    assert_eq!(response.skipped_members, 1);
    assert!(events.events().contains(&GenerationEvent::MemberSkipped {
        owner: "Pet".to_string(),
        member: "category".to_string(),
        reason: SkipReason::UnsupportedSchema,
    }));

    let pet = std::fs::read_to_string(
        temp_dir
            .path()
            .join("out/src/main/java/com/example/petstore/types/Pet.java"),
    )
    .unwrap();
    assert!(pet.contains("private Double id;"));
    assert!(!pet.contains("category;"));
}
