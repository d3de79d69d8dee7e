//! Label models.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A personal label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
    pub color: Color,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub favorite: bool,
}

/// Body for creating a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateLabel {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl CreateLabel {
    /// Creates a request with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order: None,
            color: None,
            favorite: None,
        }
    }
}

/// Body for updating a label. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}
