//! Step descriptions as produced by the migration file loader.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Nested match specification, possibly containing reference placeholders.
pub type MatchSpec = Value;

/// One declarative unit of migration work.
///
/// The action is kept as the raw name from the migration file; executors
/// resolve it against their own closed set of actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "type")]
    pub step_type: String,
    #[serde(rename = "mode", alias = "action")]
    pub action: String,
    #[serde(
        rename = "match",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub match_spec: Option<MatchSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<ReferenceDefinition>>,
}

impl Step {
    pub fn new(step_type: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            step_type: step_type.into(),
            action: action.into(),
            match_spec: None,
            references: None,
        }
    }

    pub fn with_match(mut self, match_spec: MatchSpec) -> Self {
        self.match_spec = Some(match_spec);
        self
    }

    pub fn with_references(mut self, references: Vec<ReferenceDefinition>) -> Self {
        self.references = Some(references);
        self
    }

    /// Reference definitions requested by this step (empty when none).
    pub fn reference_definitions(&self) -> &[ReferenceDefinition] {
        self.references.as_deref().unwrap_or_default()
    }

    /// True when at least one reference must be extracted after the action.
    pub fn wants_references(&self) -> bool {
        !self.reference_definitions().is_empty()
    }
}

/// Output reference: store `attribute` of the acted-upon entity as `identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDefinition {
    pub identifier: String,
    pub attribute: String,
    #[serde(default)]
    pub overwrite: bool,
}

impl ReferenceDefinition {
    pub fn new(identifier: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            attribute: attribute.into(),
            overwrite: false,
        }
    }

    pub fn overwriting(mut self) -> Self {
        self.overwrite = true;
        self
    }
}
