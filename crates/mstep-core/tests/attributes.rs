mod common;

use common::{
    ARTICLE_TYPE_ID, Call, MODIFIED_TS, PUBLISHED_TS, RecordingRepository, restored_location,
    trashed_item,
};
use mstep_core::attributes::{ensure_supported, lookup};
use mstep_core::{MigrationError, RepositoryError, extract, supported_attributes};
use mstep_model::{LocationLike, ReferenceValue};

fn read(entity: &dyn LocationLike, name: &str) -> ReferenceValue {
    let repository = RecordingRepository::new();
    extract(entity, name, &repository).expect(name)
}

#[test]
fn table_lists_every_supported_name() {
    let names: Vec<_> = supported_attributes()
        .iter()
        .map(|attribute| attribute.name)
        .collect();
    insta::assert_snapshot!(names.join("\n"), @r"
    location_id
    id
    remote_id
    location_remote_id
    always_available
    content_id
    content_type_id
    content_type_identifier
    current_version
    current_version_no
    depth
    is_hidden
    main_location_id
    main_language_code
    modification_date
    name
    owner_id
    parent_location_id
    path
    priority
    publication_date
    section_id
    section_identifier
    sort_field
    sort_order
    ");
}

#[test]
fn trashed_item_attributes() {
    let item = trashed_item(42, ARTICLE_TYPE_ID);
    let expected = [
        ("location_id", ReferenceValue::Int(42)),
        ("id", ReferenceValue::Int(42)),
        ("remote_id", "remote-42".into()),
        ("location_remote_id", "remote-42".into()),
        ("always_available", ReferenceValue::Bool(true)),
        ("content_id", ReferenceValue::Int(142)),
        ("content_type_id", ReferenceValue::Int(ARTICLE_TYPE_ID)),
        ("content_type_identifier", "article".into()),
        ("current_version", ReferenceValue::Int(3)),
        ("current_version_no", ReferenceValue::Int(3)),
        ("depth", ReferenceValue::Int(2)),
        ("is_hidden", ReferenceValue::Bool(false)),
        ("main_location_id", ReferenceValue::Null),
        ("main_language_code", "eng-GB".into()),
        ("modification_date", ReferenceValue::Int(MODIFIED_TS)),
        ("name", "Item 42".into()),
        ("owner_id", ReferenceValue::Int(14)),
        ("parent_location_id", ReferenceValue::Int(2)),
        ("path", "/1/2/42/".into()),
        ("priority", ReferenceValue::Int(5)),
        ("publication_date", ReferenceValue::Int(PUBLISHED_TS)),
        ("section_id", ReferenceValue::Int(1)),
        ("section_identifier", "standard".into()),
        ("sort_field", "published".into()),
        ("sort_order", "DESC".into()),
    ];
    assert_eq!(expected.len(), supported_attributes().len());
    for (name, value) in expected {
        assert_eq!(read(&item, name), value, "attribute {name}");
    }
}

#[test]
fn location_attributes() {
    let location = restored_location(&trashed_item(42, ARTICLE_TYPE_ID));
    assert_eq!(read(&location, "location_id"), ReferenceValue::Int(1042));
    assert_eq!(read(&location, "remote_id"), "restored-remote-42".into());
    assert_eq!(read(&location, "main_location_id"), ReferenceValue::Int(1042));
    assert_eq!(read(&location, "is_hidden"), ReferenceValue::Bool(true));
    assert_eq!(read(&location, "section_identifier"), "media".into());
    assert_eq!(read(&location, "sort_field"), "name".into());
    assert_eq!(read(&location, "sort_order"), "ASC".into());
}

#[test]
fn only_lookup_attributes_touch_the_repository() {
    let repository = RecordingRepository::new();
    let item = trashed_item(42, ARTICLE_TYPE_ID);

    for attribute in supported_attributes() {
        attribute.extract(&item, &repository).expect(attribute.name);
    }

    assert_eq!(
        repository.calls(),
        vec![Call::LoadContentType(ARTICLE_TYPE_ID), Call::LoadSection(1)]
    );
}

#[test]
fn lookup_failure_propagates() {
    let repository = RecordingRepository::new();
    let item = trashed_item(42, 999);

    let error = extract(&item, "content_type_identifier", &repository).unwrap_err();

    assert!(matches!(
        error,
        MigrationError::Repository(RepositoryError::NotFound { kind: "content type", ref id }) if id == "999"
    ));
}

#[test]
fn unknown_names_are_rejected() {
    let repository = RecordingRepository::new();
    let item = trashed_item(42, ARTICLE_TYPE_ID);

    for name in ["colour", "", "LOCATION_ID", "location-id"] {
        assert!(lookup(name).is_none());
        assert!(matches!(
            extract(&item, name, &repository),
            Err(MigrationError::UnsupportedReferenceAttribute { .. })
        ));
    }
    assert_eq!(ensure_supported("path").map(|attribute| attribute.name).ok(), Some("path"));
    assert!(repository.calls().is_empty());
}
