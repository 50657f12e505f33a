// web_app/model/mod.rs - Shared data models for the catalog
//
// These types are used by the storage layer, the manager and the UI.
// The JSON shape of `Product` is the persisted format, so field names
// and timestamp encoding must stay stable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// A catalog entry as stored in the products slot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "js_number::serialize")]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Only set once the product has been edited
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso_millis::option"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    /// Fields this screen does not edit, carried through every rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// A fresh product built from a validated draft
    pub fn new(id: impl Into<String>, draft: &ProductDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: draft.name.clone(),
            price: draft.price,
            image: draft.image.clone(),
            created_at,
            updated_at: None,
            extra: Map::new(),
        }
    }
}

/// Editable fields of the product form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: 0.0,
            image: String::new(),
        }
    }
}

/// Form input identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    Name,
    Price,
    Image,
}

impl DraftField {
    /// Look up a field by its input `name` attribute
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(DraftField::Name),
            "price" => Some(DraftField::Price),
            "image" => Some(DraftField::Image),
            _ => None,
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftField::Name => write!(f, "name"),
            DraftField::Price => write!(f, "price"),
            DraftField::Image => write!(f, "image"),
        }
    }
}

impl ProductDraft {
    /// Pre-populate the form from an existing product
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }

    /// Apply a raw input value. Numeric fields fall back to 0 when unparsable.
    pub fn set_field(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Name => self.name = raw.to_string(),
            DraftField::Price => self.price = parse_number(raw),
            DraftField::Image => self.image = raw.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        // `!(x > 0)` also rejects NaN
        if !(self.price > 0.0) {
            return Err(ValidationError::NonPositivePrice);
        }
        Ok(())
    }

    /// Overwrite the editable fields of `product`
    pub fn apply_to(&self, product: &mut Product) {
        product.name = self.name.clone();
        product.price = self.price;
        product.image = self.image.clone();
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Role supplied by the identity collaborator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    /// Any other role, kept verbatim for display
    Viewer(String),
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Viewer(String::new())
    }
}

impl From<&str> for UserRole {
    fn from(raw: &str) -> Self {
        if raw == "admin" {
            UserRole::Admin
        } else {
            UserRole::Viewer(raw.to_string())
        }
    }
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Viewer(role) => write!(f, "{}", role),
        }
    }
}

/// Data lifecycle of the catalog screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

/// Which submit path the open form takes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the product with this id
    Edit(String),
}

/// Overlay form state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    Open { mode: FormMode, draft: ProductDraft },
}

impl FormState {
    pub fn is_open(&self) -> bool {
        matches!(self, FormState::Open { .. })
    }

    pub fn draft(&self) -> Option<&ProductDraft> {
        match self {
            FormState::Open { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    pub fn mode(&self) -> Option<&FormMode> {
        match self {
            FormState::Open { mode, .. } => Some(mode),
            FormState::Closed => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode(), Some(FormMode::Edit(_)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the notification surface
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Most notices kept on screen at once
pub const MAX_NOTICES: usize = 5;

/// Append `notice`, dropping the oldest ones past `MAX_NOTICES`
pub fn push_notice(list: &mut Vec<Notice>, notice: Notice) {
    list.push(notice);
    if list.len() > MAX_NOTICES {
        let excess = list.len() - MAX_NOTICES;
        list.drain(..excess);
    }
}

/// Numbers written the way a browser's `JSON.stringify` writes them:
/// whole values within the safe integer range carry no fraction.
mod js_number {
    use serde::Serializer;

    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            s.serialize_i64(*value as i64)
        } else {
            s.serialize_f64(*value)
        }
    }
}

/// Timestamps in the browser `toISOString` shape: UTC, milliseconds, `Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw).map(|ts| ts.with_timezone(&Utc))
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => s.serialize_some(&ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(d)?
                .map(|raw| parse(&raw).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
