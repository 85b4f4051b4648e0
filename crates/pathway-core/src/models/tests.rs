#[cfg(test)]
mod model_tests {
    use crate::models::{
        ContentPayload, PathwayDocument, PathwayUpsert, StepPatch, StepPayload, StepRecord,
        StepSummary, StepType,
    };

    fn create_test_step(id: &str, step_type: StepType) -> StepRecord {
        StepRecord {
            id: id.to_string(),
            heading: format!("Heading {id}"),
            content: "# hello".to_string(),
            step_type,
            selected: false,
            time_limit: 20,
            is_preview: false,
            type_id: String::new(),
            share_id: String::new(),
        }
    }

    fn create_test_document() -> PathwayDocument {
        let mut doc = PathwayDocument {
            pathway_id: "pathway-1".to_string(),
            pathway_name: "Rust Basics".to_string(),
            pathway_description: "Ownership and borrowing".to_string(),
            pathway_tags: vec!["rust".to_string()],
            ..PathwayDocument::default()
        };
        for (id, ty) in [
            ("s1", StepType::PathwayStep),
            ("s2", StepType::ContentStep),
            ("s3", StepType::SharedStep),
        ] {
            doc.steps.insert(id.to_string(), create_test_step(id, ty));
        }
        doc.step_order = vec!["s2".to_string(), "s1".to_string()];
        doc
    }

    #[test]
    fn test_default_document_flags() {
        let doc = PathwayDocument::default();
        assert!(doc.modal_close_on_overlay);
        assert!(!doc.show_pathway_details_screen);
        assert!(!doc.initial_state);
        assert!(doc.selected_step.is_none());
        assert!(doc.is_consistent());
    }

    #[test]
    fn test_ordered_and_deleted_steps() {
        let doc = create_test_document();

        let ordered: Vec<&str> = doc.ordered_steps().map(|s| s.id.as_str()).collect();
        assert_eq!(ordered, vec!["s2", "s1"]);

        let deleted: Vec<&str> = doc.deleted_steps().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(deleted, vec!["s3"]);
        assert_eq!(doc.position_of("s1"), Some(1));
        assert_eq!(doc.position_of("s3"), None);
    }

    #[test]
    fn test_consistency_detects_violations() {
        let mut doc = create_test_document();
        assert!(doc.is_consistent());

        doc.step_order.push("s2".to_string());
        assert!(!doc.is_consistent(), "duplicate id in order");

        let mut doc = create_test_document();
        doc.step_order.push("ghost".to_string());
        assert!(!doc.is_consistent(), "ordered id without record");

        let mut doc = create_test_document();
        for step in doc.steps.values_mut() {
            step.selected = true;
        }
        assert!(!doc.is_consistent(), "more than one selection");
    }

    #[test]
    fn test_step_type_parsing() {
        assert_eq!("content".parse::<StepType>(), Ok(StepType::ContentStep));
        assert_eq!("SHARED_STEP".parse::<StepType>(), Ok(StepType::SharedStep));
        assert_eq!("Pathway".parse::<StepType>(), Ok(StepType::PathwayStep));
        assert!("video".parse::<StepType>().is_err());
    }

    #[test]
    fn test_step_record_serializes_camel_case() {
        let step = create_test_step("s1", StepType::ContentStep);
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["stepType"], "CONTENT_STEP");
        assert_eq!(json["timeLimit"], 20);
        assert_eq!(json["isPreview"], false);
        assert!(json.get("typeId").is_some());
    }

    #[test]
    fn test_partial_step_record_uses_defaults() {
        let step: StepRecord = serde_json::from_str(
            r#"{"id":"s9","heading":"This is a step","stepType":"SHARED_STEP","timeLimit":30}"#,
        )
        .unwrap();

        assert_eq!(step.id, "s9");
        assert_eq!(step.step_type, StepType::SharedStep);
        assert_eq!(step.time_limit, 30);
        assert!(step.content.is_empty());
        assert!(!step.selected);
    }

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut step = create_test_step("s1", StepType::PathwayStep);
        let patch = StepPatch {
            heading: Some("X".to_string()),
            ..StepPatch::default()
        };

        patch.apply_to(&mut step);

        assert_eq!(step.heading, "X");
        assert_eq!(step.time_limit, 20);
        assert_eq!(step.content, "# hello");
        assert!(!patch.is_empty());
        assert!(StepPatch::default().is_empty());
    }

    #[test]
    fn test_record_from_payload_with_content() {
        let payload = StepPayload {
            id: "s1".to_string(),
            index: 0,
            time: 45,
            step_type: StepType::ContentStep,
            content: Some(ContentPayload {
                id: "content-1".to_string(),
                title: "Intro".to_string(),
                content: "Welcome".to_string(),
            }),
            name: "ignored".to_string(),
        };

        let record = StepRecord::from(&payload);
        assert_eq!(record.heading, "Intro");
        assert_eq!(record.content, "Welcome");
        assert_eq!(record.type_id, "content-1");
        assert_eq!(record.time_limit, 45);
        assert!(record.share_id.is_empty());
    }

    #[test]
    fn test_record_from_payload_without_content() {
        let payload = StepPayload {
            id: "s2".to_string(),
            index: 1,
            time: 10,
            step_type: StepType::PathwayStep,
            content: None,
            name: "Pathway Step".to_string(),
        };

        let record = StepRecord::from(&payload);
        assert_eq!(record.heading, "Pathway Step");
        assert!(record.content.is_empty());
        assert!(record.type_id.is_empty());
    }

    #[test]
    fn test_upsert_reads_document_metadata() {
        let doc = create_test_document();
        let summary = StepSummary::from_record(&doc.steps["s2"], 0);
        let upsert = PathwayUpsert::from_document(&doc, vec![summary]);

        assert_eq!(upsert.id, "pathway-1");
        assert_eq!(upsert.name, "Rust Basics");
        assert_eq!(upsert.tags, vec!["rust".to_string()]);
        assert_eq!(upsert.steps[0].id, "s2");
        assert_eq!(upsert.steps[0].time, 20);

        let json = serde_json::to_value(&upsert).unwrap();
        assert_eq!(json["steps"][0]["stepType"], "CONTENT_STEP");
        assert!(json["steps"][0].get("typeId").is_some());
    }
}
