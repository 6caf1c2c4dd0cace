//! Jikan response envelope and the per-category validation trait.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ToolError, ToolResult};

/// A category of upstream record that can be validated into a typed entity.
pub trait Entity: Serialize + Sized {
    /// Upstream record shape; unknown fields are ignored.
    type Record: DeserializeOwned;

    /// Category name used in failure messages.
    const CATEGORY: &'static str;

    fn from_record(record: Self::Record) -> Self;

    /// Check `raw` against the category shape and coerce it into `Self`.
    fn validate(raw: &Value) -> ToolResult<Self> {
        <Self::Record as Deserialize>::deserialize(raw)
            .map(Self::from_record)
            .map_err(|e| ToolError::validation(format!("{}: {}", Self::CATEGORY, e)))
    }
}

/// Upstream pagination block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub last_visible_page: u32,
    pub has_next_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<PaginationItems>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationItems {
    pub count: u32,
    pub total: u32,
    pub per_page: u32,
}

/// One page of validated entities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn data_field(body: &Value) -> ToolResult<&Value> {
    body.as_object()
        .ok_or_else(|| ToolError::validation("response body is not a JSON object"))?
        .get("data")
        .ok_or_else(|| ToolError::validation("response is missing 'data'"))
}

/// Validate a list response: `data` must be an array of `E` records.
pub fn validate_list<E: Entity>(body: &Value) -> ToolResult<Page<E>> {
    let data = data_field(body)?
        .as_array()
        .ok_or_else(|| ToolError::validation("'data' is not a list"))?;

    let items = data
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            E::validate(raw).map_err(|e| match e {
                ToolError::Validation { message } => {
                    ToolError::validation(format!("data[{}]: {}", idx, message))
                }
                other => other,
            })
        })
        .collect::<ToolResult<Vec<E>>>()?;

    let pagination = match body.get("pagination") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(
            Pagination::deserialize(raw)
                .map_err(|e| ToolError::validation(format!("pagination: {}", e)))?,
        ),
    };

    Ok(Page { items, pagination })
}

/// Validate a single-resource response: `data` must be one `E` record.
pub fn validate_item<E: Entity>(body: &Value) -> ToolResult<E> {
    let data = data_field(body)?;
    if !data.is_object() {
        return Err(ToolError::validation("'data' is not an object"));
    }
    E::validate(data)
}
