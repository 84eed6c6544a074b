pub mod error;
pub mod location;
pub mod sort;
pub mod step;
pub mod value;

pub use error::{ModelError, Result};
pub use location::{ContentInfo, ContentType, Location, LocationLike, Section, TrashedItem};
pub use sort::{SortField, SortOrder};
pub use step::{MatchSpec, ReferenceDefinition, Step};
pub use value::ReferenceValue;
