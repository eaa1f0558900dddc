use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination metadata of the competitions listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(rename = "numPages")]
    pub num_pages: u32,
}

/// One decoded page of `/competitions?page={n}&pageSize=100`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResult {
    #[serde(rename = "pageInfo", default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    pub content: Vec<CompetitionSummary>,
}

/// Raw competition entry as returned by the API.
///
/// Kept as an untyped JSON value so that a missing field is reported while
/// flattening, naming the field, instead of failing the decode of the whole
/// page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CompetitionSummary(Value);

impl CompetitionSummary {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Top-level field as sent, `null` included. `None` only when absent.
    pub fn raw_field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Top-level field, `None` when absent or `null`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Two-level field such as `location.city`.
    pub fn nested(&self, outer: &str, inner: &str) -> Option<&Value> {
        lookup_nested(&self.0, outer, inner)
    }
}

impl From<Value> for CompetitionSummary {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Resolves `value[outer][inner]`.
///
/// Returns `None` if either key is missing, if the outer value is not an
/// object, or if the resolved value is `null`.
pub fn lookup_nested<'a>(value: &'a Value, outer: &str, inner: &str) -> Option<&'a Value> {
    value
        .get(outer)?
        .get(inner)
        .filter(|v| !v.is_null())
}
