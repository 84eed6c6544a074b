//! Repository entities acted upon by trash steps.
//!
//! A trashed item is a location that has been moved to the trash; recovering
//! it produces a new [`Location`]. Both carry the same hierarchy fields and an
//! attached [`ContentInfo`], exposed through [`LocationLike`] so reference
//! extraction treats them uniformly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sort::{SortField, SortOrder};

/// Metadata of the content object placed at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    pub id: i64,
    pub content_type_id: i64,
    pub name: String,
    pub owner_id: i64,
    pub section_id: i64,
    pub current_version_no: i64,
    pub main_location_id: Option<i64>,
    pub main_language_code: String,
    pub always_available: bool,
    pub modification_date: DateTime<Utc>,
    pub published_date: DateTime<Utc>,
}

/// A location in the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub remote_id: String,
    pub parent_location_id: i64,
    pub path_string: String,
    pub depth: i64,
    pub priority: i64,
    pub hidden: bool,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub content_info: ContentInfo,
}

/// A location that currently sits in the trash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashedItem {
    pub id: i64,
    pub remote_id: String,
    pub parent_location_id: i64,
    pub path_string: String,
    pub depth: i64,
    pub priority: i64,
    pub hidden: bool,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub content_info: ContentInfo,
    pub trashed: DateTime<Utc>,
}

/// Hierarchy fields plus an attached content record.
pub trait LocationLike {
    fn id(&self) -> i64;
    fn remote_id(&self) -> &str;
    fn parent_location_id(&self) -> i64;
    fn path_string(&self) -> &str;
    fn depth(&self) -> i64;
    fn priority(&self) -> i64;
    fn hidden(&self) -> bool;
    fn sort_field(&self) -> SortField;
    fn sort_order(&self) -> SortOrder;
    fn content_info(&self) -> &ContentInfo;

    fn content_id(&self) -> i64 {
        self.content_info().id
    }
}

macro_rules! impl_location_like {
    ($ty:ty) => {
        impl LocationLike for $ty {
            fn id(&self) -> i64 {
                self.id
            }
            fn remote_id(&self) -> &str {
                &self.remote_id
            }
            fn parent_location_id(&self) -> i64 {
                self.parent_location_id
            }
            fn path_string(&self) -> &str {
                &self.path_string
            }
            fn depth(&self) -> i64 {
                self.depth
            }
            fn priority(&self) -> i64 {
                self.priority
            }
            fn hidden(&self) -> bool {
                self.hidden
            }
            fn sort_field(&self) -> SortField {
                self.sort_field
            }
            fn sort_order(&self) -> SortOrder {
                self.sort_order
            }
            fn content_info(&self) -> &ContentInfo {
                &self.content_info
            }
        }
    };
}

impl_location_like!(Location);
impl_location_like!(TrashedItem);

/// Content type as returned by a repository lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    pub id: i64,
    pub identifier: String,
}

/// Section as returned by a repository lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub identifier: String,
}
