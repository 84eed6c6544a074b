//! Shared fixtures: a recording repository and a canned matcher.

#![allow(dead_code)]

use std::cell::RefCell;

use chrono::{TimeZone, Utc};
use mstep_core::{RepositoryError, TrashMatcher, TrashRepository};
use mstep_model::{
    ContentInfo, ContentType, Location, MatchSpec, Section, SortField, SortOrder, TrashedItem,
};

pub const ARTICLE_TYPE_ID: i64 = 16;
pub const FOLDER_TYPE_ID: i64 = 1;
pub const STANDARD_SECTION_ID: i64 = 1;
pub const MEDIA_SECTION_ID: i64 = 3;
pub const RESTORED_ID_OFFSET: i64 = 1000;

/// 2024-01-01T00:00:00Z
pub const MODIFIED_TS: i64 = 1_704_067_200;
/// 2023-06-15T12:00:00Z
pub const PUBLISHED_TS: i64 = 1_686_830_400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    EmptyTrash,
    Recover(i64),
    Delete(i64),
    LoadContentType(i64),
    LoadSection(i64),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(self, Call::EmptyTrash | Call::Recover(_) | Call::Delete(_))
    }
}

pub fn trashed_item(id: i64, content_type_id: i64) -> TrashedItem {
    TrashedItem {
        id,
        remote_id: format!("remote-{id}"),
        parent_location_id: 2,
        path_string: format!("/1/2/{id}/"),
        depth: 2,
        priority: 5,
        hidden: false,
        sort_field: SortField::Published,
        sort_order: SortOrder::Desc,
        content_info: ContentInfo {
            id: id + 100,
            content_type_id,
            name: format!("Item {id}"),
            owner_id: 14,
            section_id: STANDARD_SECTION_ID,
            current_version_no: 3,
            main_location_id: None,
            main_language_code: "eng-GB".to_string(),
            always_available: true,
            modification_date: Utc.timestamp_opt(MODIFIED_TS, 0).unwrap(),
            published_date: Utc.timestamp_opt(PUBLISHED_TS, 0).unwrap(),
        },
        trashed: Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap(),
    }
}

/// Location produced by [`RecordingRepository::recover`] for `item`.
pub fn restored_location(item: &TrashedItem) -> Location {
    let id = item.id + RESTORED_ID_OFFSET;
    let mut content_info = item.content_info.clone();
    content_info.main_location_id = Some(id);
    content_info.section_id = MEDIA_SECTION_ID;
    Location {
        id,
        remote_id: format!("restored-{}", item.remote_id),
        parent_location_id: item.parent_location_id,
        path_string: format!("/1/{}/{id}/", item.parent_location_id),
        depth: item.depth,
        priority: 0,
        hidden: true,
        sort_field: SortField::Name,
        sort_order: SortOrder::Asc,
        content_info,
    }
}

/// Repository double that records every call.
pub struct RecordingRepository {
    calls: RefCell<Vec<Call>>,
    content_types: Vec<ContentType>,
    sections: Vec<Section>,
    fail_on: Option<i64>,
}

impl Default for RecordingRepository {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            content_types: vec![
                ContentType {
                    id: FOLDER_TYPE_ID,
                    identifier: "folder".to_string(),
                },
                ContentType {
                    id: ARTICLE_TYPE_ID,
                    identifier: "article".to_string(),
                },
            ],
            sections: vec![
                Section {
                    id: STANDARD_SECTION_ID,
                    identifier: "standard".to_string(),
                },
                Section {
                    id: MEDIA_SECTION_ID,
                    identifier: "media".to_string(),
                },
            ],
            fail_on: None,
        }
    }
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes recover and delete fail for the item with this id.
    pub fn failing_on(mut self, item_id: i64) -> Self {
        self.fail_on = Some(item_id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(Call::is_mutation)
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check_failure(&self, operation: &str, item: &TrashedItem) -> Result<(), RepositoryError> {
        if self.fail_on == Some(item.id) {
            return Err(RepositoryError::backend(
                operation,
                format!("item {} is locked", item.id),
            ));
        }
        Ok(())
    }
}

impl TrashRepository for RecordingRepository {
    fn empty_trash(&self) -> Result<(), RepositoryError> {
        self.record(Call::EmptyTrash);
        Ok(())
    }

    fn recover(&self, item: &TrashedItem) -> Result<Location, RepositoryError> {
        self.check_failure("recover", item)?;
        self.record(Call::Recover(item.id));
        Ok(restored_location(item))
    }

    fn delete_trash_item(&self, item: &TrashedItem) -> Result<(), RepositoryError> {
        self.check_failure("delete", item)?;
        self.record(Call::Delete(item.id));
        Ok(())
    }

    fn load_content_type(&self, id: i64) -> Result<ContentType, RepositoryError> {
        self.record(Call::LoadContentType(id));
        self.content_types
            .iter()
            .find(|content_type| content_type.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("content type", id))
    }

    fn load_section(&self, id: i64) -> Result<Section, RepositoryError> {
        self.record(Call::LoadSection(id));
        self.sections
            .iter()
            .find(|section| section.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("section", id))
    }
}

/// Matcher double returning a fixed collection and recording the
/// conditions it was asked for.
#[derive(Default)]
pub struct CannedMatcher {
    items: Vec<TrashedItem>,
    seen: RefCell<Vec<MatchSpec>>,
}

impl CannedMatcher {
    pub fn returning(items: Vec<TrashedItem>) -> Self {
        Self {
            items,
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<MatchSpec> {
        self.seen.borrow().clone()
    }
}

impl TrashMatcher for CannedMatcher {
    fn match_items(&self, conditions: &MatchSpec) -> Result<Vec<TrashedItem>, RepositoryError> {
        self.seen.borrow_mut().push(conditions.clone());
        Ok(self.items.clone())
    }
}

/// Matcher double selecting items by the `item_id` condition.
pub struct ItemIdMatcher {
    items: Vec<TrashedItem>,
}

impl ItemIdMatcher {
    pub fn over(items: Vec<TrashedItem>) -> Self {
        Self { items }
    }
}

impl TrashMatcher for ItemIdMatcher {
    fn match_items(&self, conditions: &MatchSpec) -> Result<Vec<TrashedItem>, RepositoryError> {
        let Some(wanted) = conditions.get("item_id").and_then(serde_json::Value::as_i64) else {
            return Err(RepositoryError::backend(
                "match",
                format!("unsupported conditions {conditions}"),
            ));
        };
        Ok(self
            .items
            .iter()
            .filter(|item| item.id == wanted)
            .cloned()
            .collect())
    }
}
