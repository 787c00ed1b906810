//! A space (room/area) in the planning program.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::column::FieldValue;

/// Stable space identifier.
///
/// Generated as a UUIDv4 in simple (non-hyphenated) form, which guarantees
/// the `-` used by [`super::PairKey`] never occurs inside an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(pub String);

impl SpaceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SpaceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Privacy requirement for a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Privacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Privacy::Low => write!(f, "low"),
            Privacy::Medium => write!(f, "medium"),
            Privacy::High => write!(f, "high"),
        }
    }
}

/// A named space with its planning criteria.
///
/// Serialized in camelCase so project JSON files interchange with the web
/// client's format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: SpaceId,
    pub name: String,
    /// Planned floor area in square feet. `None` renders as `-` and counts
    /// as zero in program totals.
    pub planned_area: Option<f64>,
    pub daylight: bool,
    pub plumbing: bool,
    pub privacy: Privacy,
    pub equipment: String,
    pub notes: String,
    /// Values for user-defined columns, keyed by column id. Value shape is
    /// governed by the column schema, not by this map.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, FieldValue>,
}

impl Space {
    /// Create a space with a generated id and default criteria.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SpaceId::generate(),
            name: name.into(),
            planned_area: None,
            daylight: false,
            plumbing: false,
            privacy: Privacy::Medium,
            equipment: String::new(),
            notes: String::new(),
            custom_fields: HashMap::new(),
        }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.planned_area = Some(area);
        self
    }

    pub fn with_privacy(mut self, privacy: Privacy) -> Self {
        self.privacy = privacy;
        self
    }

    pub fn with_field(mut self, column_id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.custom_fields.insert(column_id.into(), value.into());
        self
    }

    pub fn field(&self, column_id: &str) -> Option<&FieldValue> {
        self.custom_fields.get(column_id)
    }
}
