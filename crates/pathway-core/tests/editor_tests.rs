mod common;

use common::create_test_backend;
use pathway_core::{
    editor::{NEW_STEP_CONTENT, NEW_STEP_HEADING},
    DragResult, EditorBuilder, PathwayBackend, PathwayError, SqliteBackend, StepPatch, StepType,
};

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_editing_workflow() {
    let (_temp_dir, backend) = create_test_backend().await;

    let mut editor = EditorBuilder::new(backend)
        .build()
        .await
        .expect("Failed to open editor");
    let pathway_id = editor
        .create_pathway("Integration Test", "Testing the complete workflow")
        .await
        .expect("Failed to create pathway");

    let intro = editor
        .add_step(StepType::ContentStep)
        .await
        .expect("Failed to add content step");
    let exercise = editor
        .add_step(StepType::PathwayStep)
        .await
        .expect("Failed to add pathway step");
    let quiz = editor
        .add_step(StepType::SharedStep)
        .await
        .expect("Failed to add shared step");

    // Each add is persisted immediately
    let fetched = editor
        .backend()
        .fetch_pathway(&pathway_id)
        .await
        .expect("Failed to fetch")
        .expect("Pathway should exist");
    assert_eq!(fetched.steps.len(), 3);
    let intro_payload = fetched.steps.iter().find(|s| s.id == intro).unwrap();
    let content = intro_payload.content.as_ref().expect("Content linked");
    assert_eq!(content.title, NEW_STEP_HEADING);
    assert_eq!(content.content, NEW_STEP_CONTENT);

    // Edit locally, then save
    editor.update_step(
        intro.clone(),
        StepPatch {
            heading: Some("Welcome".to_string()),
            content: Some("What you will learn".to_string()),
            time_limit: Some(60),
            ..StepPatch::default()
        },
    );
    editor.add_tag("rust");
    editor
        .on_drag_end(&DragResult::moved(2, 0))
        .expect("Failed to reorder");
    editor.delete_step(exercise.clone());
    editor.save().await.expect("Failed to save");

    // Reopen from disk
    let backend = editor.into_backend();
    let reopened = EditorBuilder::new(backend)
        .with_pathway(Some(pathway_id.clone()))
        .build()
        .await
        .expect("Failed to reopen pathway");

    let doc = reopened.document();
    assert_eq!(doc.pathway_name, "Integration Test");
    assert_eq!(doc.pathway_tags, vec!["rust".to_string()]);
    assert_eq!(doc.step_order, vec![quiz, intro.clone()]);
    let intro_record = doc.step(&intro).unwrap();
    assert_eq!(intro_record.heading, "Welcome");
    assert_eq!(intro_record.content, "What you will learn");
    assert_eq!(intro_record.time_limit, 60);
    assert!(doc.step(&exercise).is_none());
    assert!(doc.initial_state);

    let summaries = reopened
        .backend()
        .list_pathways()
        .await
        .expect("Failed to list");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_steps, 2);
}

#[tokio::test]
async fn test_open_unknown_pathway() {
    let (_temp_dir, backend) = create_test_backend().await;

    let err = EditorBuilder::new(backend)
        .with_pathway(Some("pathway-unknown"))
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, PathwayError::PathwayNotFound { ref id } if id == "pathway-unknown"));
}

#[tokio::test]
async fn test_delete_pathway_through_backend() {
    let (_temp_dir, backend) = create_test_backend().await;

    let mut editor = EditorBuilder::new(backend).build().await.unwrap();
    let id = editor.create_pathway("Short lived", "").await.unwrap();
    editor.add_step(StepType::PathwayStep).await.unwrap();

    assert!(editor.backend().delete_pathway(&id).await.unwrap());
    assert!(editor.backend().fetch_pathway(&id).await.unwrap().is_none());
    assert!(editor.backend().list_pathways().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_creates_missing_directories() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("data").join("pathway.db");

    let backend = SqliteBackend::open(Some(&db_path))
        .await
        .expect("Failed to open backend");

    assert!(db_path.exists());
    assert_eq!(backend.database_path(), db_path.as_path());
    assert!(backend
        .list_pathways()
        .await
        .expect("Failed to list")
        .is_empty());
}
