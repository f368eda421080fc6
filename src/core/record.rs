//! Record model.
//!
//! A [`Record`] is a generic key/value document so that filters and sorts
//! can address any field by path. [`Port`], [`NewPort`] and [`PortPatch`]
//! are typed views for callers that know the sea-port shape.

use super::error::{PortError, Result};
use super::path::FieldPath;
use super::value::render_value;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

pub type Fields = serde_json::Map<String, JsonValue>;

pub const ID_KEY: &str = "id";

/// One stored entity. The `id` key is always present and always a string.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    document: Fields,
}

impl Record {
    /// Build a record, overriding any `id` already present in `fields`.
    pub fn new(id: impl Into<String>, mut fields: Fields) -> Self {
        fields.insert(ID_KEY.to_string(), JsonValue::String(id.into()));
        Self { document: fields }
    }

    pub fn id(&self) -> &str {
        self.document
            .get(ID_KEY)
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
    }

    pub fn fields(&self) -> &Fields {
        &self.document
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.document.get(key)
    }

    pub fn resolve(&self, path: &FieldPath) -> Option<&JsonValue> {
        path.resolve(&self.document)
    }

    /// Resolved value rendered as text, `None` when absent.
    pub fn text(&self, path: &FieldPath) -> Option<String> {
        self.resolve(path).map(render_value)
    }

    /// Shallow merge: each top-level key in `patch` replaces the stored
    /// value wholesale, nested objects included. The identifier never moves.
    pub(crate) fn merge(&mut self, patch: Fields) {
        for (key, value) in patch {
            if key == ID_KEY {
                continue;
            }
            self.document.insert(key, value);
        }
    }

    pub fn to_port(&self) -> Result<Port> {
        serde_json::from_value(JsonValue::Object(self.document.clone())).map_err(|e| {
            PortError::invalid_record(format!("record {} is not a port: {}", self.id(), e))
        })
    }

    pub fn into_fields(self) -> Fields {
        self.document
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let document = Fields::deserialize(deserializer)?;
        match document.get(ID_KEY) {
            Some(JsonValue::String(_)) => Ok(Self { document }),
            _ => Err(D::Error::custom("record requires a string `id`")),
        }
    }
}

/// Accept a JSON payload as record fields; anything but an object is rejected.
pub fn fields_from_json(value: JsonValue) -> Result<Fields> {
    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(PortError::invalid_record(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn to_fields<T: Serialize>(value: &T) -> Result<Fields> {
    let json = serde_json::to_value(value).map_err(|e| PortError::invalid_record(e.to_string()))?;
    fields_from_json(json)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

// ============================================================================
// Typed views
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A sea port as stored in the table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Port {
    pub id: String,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub coordinates: Coordinates,
    pub province: String,
    pub timezone: String,
    pub code: String,
    pub unlocs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
}

/// Port data without an identifier, used for `create`.
///
/// Defaults match an empty entry form: blank text, `(0, 0)` coordinates,
/// no secondary codes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPort {
    pub name: String,
    pub country: String,
    pub continent: String,
    pub coordinates: Coordinates,
    pub province: String,
    pub timezone: String,
    pub code: String,
    pub unlocs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
}

impl NewPort {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn into_fields(self) -> Result<Fields> {
        to_fields(&self)
    }
}

/// Partial update. Only the fields that are set are sent, so the merge
/// leaves everything else untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
}

impl PortPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn continent(mut self, continent: impl Into<String>) -> Self {
        self.continent = Some(continent.into());
        self
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(Coordinates::new(latitude, longitude));
        self
    }

    pub fn unlocs(mut self, unlocs: Vec<String>) -> Self {
        self.unlocs = Some(unlocs);
        self
    }

    pub fn alias(mut self, alias: Vec<String>) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn into_fields(self) -> Result<Fields> {
        to_fields(&self)
    }
}
