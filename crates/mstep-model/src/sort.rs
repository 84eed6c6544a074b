//! Location sort settings and their symbolic names.
//!
//! Repositories store sort settings as numeric codes; step descriptions and
//! references use the symbolic names (`published`, `ASC`, ...). Both enums
//! convert in either direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Field used to sort the children of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Path,
    Published,
    Modified,
    Section,
    Depth,
    ClassIdentifier,
    ClassName,
    Priority,
    Name,
    ModifiedSubnode,
    NodeId,
    ContentobjectId,
}

impl SortField {
    pub const ALL: [SortField; 12] = [
        SortField::Path,
        SortField::Published,
        SortField::Modified,
        SortField::Section,
        SortField::Depth,
        SortField::ClassIdentifier,
        SortField::ClassName,
        SortField::Priority,
        SortField::Name,
        SortField::ModifiedSubnode,
        SortField::NodeId,
        SortField::ContentobjectId,
    ];

    /// Symbolic name used in step descriptions and references.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Path => "path",
            SortField::Published => "published",
            SortField::Modified => "modified",
            SortField::Section => "section",
            SortField::Depth => "depth",
            SortField::ClassIdentifier => "class_identifier",
            SortField::ClassName => "class_name",
            SortField::Priority => "priority",
            SortField::Name => "name",
            SortField::ModifiedSubnode => "modified_subnode",
            SortField::NodeId => "node_id",
            SortField::ContentobjectId => "contentobject_id",
        }
    }

    /// Numeric code as stored by the repository.
    pub fn code(&self) -> i32 {
        match self {
            SortField::Path => 1,
            SortField::Published => 2,
            SortField::Modified => 3,
            SortField::Section => 4,
            SortField::Depth => 5,
            SortField::ClassIdentifier => 6,
            SortField::ClassName => 7,
            SortField::Priority => 8,
            SortField::Name => 9,
            SortField::ModifiedSubnode => 10,
            SortField::NodeId => 11,
            SortField::ContentobjectId => 12,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, ModelError> {
        Self::ALL
            .into_iter()
            .find(|field| field.code() == code)
            .ok_or(ModelError::UnknownSortFieldCode(code))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownSortField(s.to_string()))
    }
}

/// Direction of a location's child sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Desc,
    Asc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Desc => "DESC",
            SortOrder::Asc => "ASC",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            SortOrder::Desc => 0,
            SortOrder::Asc => 1,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, ModelError> {
        match code {
            0 => Ok(SortOrder::Desc),
            1 => Ok(SortOrder::Asc),
            _ => Err(ModelError::UnknownSortOrderCode(code)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(ModelError::UnknownSortOrder(s.to_string())),
        }
    }
}
