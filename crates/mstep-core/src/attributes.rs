//! Reference attribute table for trashed items and locations.
//!
//! Each supported attribute name maps to a small extraction function. Most
//! read a field of the entity or of its content info; `content_type_identifier`
//! and `section_identifier` need a repository lookup.

use mstep_model::{LocationLike, ReferenceValue};

use crate::error::{MigrationError, RepositoryError, Result};
use crate::repository::TrashRepository;

type Extractor =
    fn(&dyn LocationLike, &dyn TrashRepository) -> std::result::Result<ReferenceValue, RepositoryError>;

/// One entry of the attribute table.
pub struct ReferenceAttribute {
    pub name: &'static str,
    /// Human-readable description of where the value comes from.
    pub source: &'static str,
    extract: Extractor,
}

impl ReferenceAttribute {
    pub fn extract(
        &self,
        entity: &dyn LocationLike,
        repository: &dyn TrashRepository,
    ) -> Result<ReferenceValue> {
        Ok((self.extract)(entity, repository)?)
    }
}

impl std::fmt::Debug for ReferenceAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceAttribute")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

static ATTRIBUTES: &[ReferenceAttribute] = &[
    ReferenceAttribute {
        name: "location_id",
        source: "location id",
        extract: |item, _| Ok(item.id().into()),
    },
    ReferenceAttribute {
        name: "id",
        source: "location id",
        extract: |item, _| Ok(item.id().into()),
    },
    ReferenceAttribute {
        name: "remote_id",
        source: "location remote id",
        extract: |item, _| Ok(item.remote_id().into()),
    },
    ReferenceAttribute {
        name: "location_remote_id",
        source: "location remote id",
        extract: |item, _| Ok(item.remote_id().into()),
    },
    ReferenceAttribute {
        name: "always_available",
        source: "content always-available flag",
        extract: |item, _| Ok(item.content_info().always_available.into()),
    },
    ReferenceAttribute {
        name: "content_id",
        source: "content id",
        extract: |item, _| Ok(item.content_id().into()),
    },
    ReferenceAttribute {
        name: "content_type_id",
        source: "content type id",
        extract: |item, _| Ok(item.content_info().content_type_id.into()),
    },
    ReferenceAttribute {
        name: "content_type_identifier",
        source: "content type identifier (repository lookup)",
        extract: |item, repository| {
            let content_type = repository.load_content_type(item.content_info().content_type_id)?;
            Ok(content_type.identifier.into())
        },
    },
    ReferenceAttribute {
        name: "current_version",
        source: "content current version number",
        extract: |item, _| Ok(item.content_info().current_version_no.into()),
    },
    ReferenceAttribute {
        name: "current_version_no",
        source: "content current version number",
        extract: |item, _| Ok(item.content_info().current_version_no.into()),
    },
    ReferenceAttribute {
        name: "depth",
        source: "location depth",
        extract: |item, _| Ok(item.depth().into()),
    },
    ReferenceAttribute {
        name: "is_hidden",
        source: "location hidden flag",
        extract: |item, _| Ok(item.hidden().into()),
    },
    ReferenceAttribute {
        name: "main_location_id",
        source: "content main location id",
        extract: |item, _| Ok(item.content_info().main_location_id.into()),
    },
    ReferenceAttribute {
        name: "main_language_code",
        source: "content main language code",
        extract: |item, _| Ok(item.content_info().main_language_code.as_str().into()),
    },
    ReferenceAttribute {
        name: "modification_date",
        source: "content modification date (unix timestamp)",
        extract: |item, _| Ok(item.content_info().modification_date.timestamp().into()),
    },
    ReferenceAttribute {
        name: "name",
        source: "content name",
        extract: |item, _| Ok(item.content_info().name.as_str().into()),
    },
    ReferenceAttribute {
        name: "owner_id",
        source: "content owner id",
        extract: |item, _| Ok(item.content_info().owner_id.into()),
    },
    ReferenceAttribute {
        name: "parent_location_id",
        source: "parent location id",
        extract: |item, _| Ok(item.parent_location_id().into()),
    },
    ReferenceAttribute {
        name: "path",
        source: "location path string",
        extract: |item, _| Ok(item.path_string().into()),
    },
    ReferenceAttribute {
        name: "priority",
        source: "location priority",
        extract: |item, _| Ok(item.priority().into()),
    },
    ReferenceAttribute {
        name: "publication_date",
        source: "content publication date (unix timestamp)",
        extract: |item, _| Ok(item.content_info().published_date.timestamp().into()),
    },
    ReferenceAttribute {
        name: "section_id",
        source: "content section id",
        extract: |item, _| Ok(item.content_info().section_id.into()),
    },
    ReferenceAttribute {
        name: "section_identifier",
        source: "section identifier (repository lookup)",
        extract: |item, repository| {
            let section = repository.load_section(item.content_info().section_id)?;
            Ok(section.identifier.into())
        },
    },
    ReferenceAttribute {
        name: "sort_field",
        source: "location sort field name",
        extract: |item, _| Ok(item.sort_field().as_str().into()),
    },
    ReferenceAttribute {
        name: "sort_order",
        source: "location sort order name",
        extract: |item, _| Ok(item.sort_order().as_str().into()),
    },
];

/// All supported attributes, in table order.
pub fn supported_attributes() -> &'static [ReferenceAttribute] {
    ATTRIBUTES
}

pub fn lookup(name: &str) -> Option<&'static ReferenceAttribute> {
    ATTRIBUTES.iter().find(|attribute| attribute.name == name)
}

/// Checks that `name` is in the attribute table.
pub fn ensure_supported(name: &str) -> Result<&'static ReferenceAttribute> {
    lookup(name).ok_or_else(|| MigrationError::UnsupportedReferenceAttribute {
        attribute: name.to_string(),
    })
}

/// Reads attribute `name` from `entity`.
///
/// # Errors
///
/// [`MigrationError::UnsupportedReferenceAttribute`] for names outside the
/// table, or a repository error from a lookup attribute.
pub fn extract(
    entity: &dyn LocationLike,
    name: &str,
    repository: &dyn TrashRepository,
) -> Result<ReferenceValue> {
    ensure_supported(name)?.extract(entity, repository)
}

/// Returns the only element of `items`.
///
/// # Errors
///
/// [`MigrationError::EmptyResult`] for an empty slice and
/// [`MigrationError::AmbiguousReferenceTarget`] for more than one element.
pub fn single_of<T>(items: &[T]) -> Result<&T> {
    match items {
        [single] => Ok(single),
        [] => Err(MigrationError::EmptyResult),
        _ => Err(MigrationError::AmbiguousReferenceTarget { count: items.len() }),
    }
}
