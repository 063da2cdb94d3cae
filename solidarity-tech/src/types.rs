//! Solidarity Tech request and response types.
//!
//! Only the list endpoints the vendor documents have typed responses. Models
//! are lenient: every field is optional and fields not modelled here are
//! kept in `extra`, so an API addition never breaks decoding.

use std::fmt;

use fetch_core::Params;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier for `/{resource}/{id}` operations.
///
/// Accepts numbers or strings. Unreserved characters reach the path as
/// written; anything else is percent-encoded so the id stays one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<i32> for ResourceId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Paging and filter parameters for list endpoints.
///
/// ## Examples
///
/// ```rust
/// use fetch_core::Params;
/// use solidarity_tech::ListParams;
///
/// let params: Params = ListParams::new().limit(50).offset(100).filter("chapter_id", 3).into();
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.get("_limit"), Some(&serde_json::json!(50)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListParams {
    /// Page size (`_limit`).
    #[serde(rename = "_limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of records to skip (`_offset`).
    #[serde(rename = "_offset", skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Resource-specific filters, sent as query parameters.
    #[serde(flatten)]
    pub filters: Map<String, Value>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }
}

impl From<ListParams> for Params {
    fn from(list: ListParams) -> Self {
        let mut params = Params::new();
        if let Some(limit) = list.limit {
            params.insert("_limit", limit);
        }
        if let Some(offset) = list.offset {
            params.insert("_offset", offset);
        }
        params.extend(Params::from(list.filters));
        params
    }
}

/// Envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// The records on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Paging metadata as returned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Paging metadata on list responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A person in the CRM.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Fields not modelled above, including custom user properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A sent or received text message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An entry in a user's activity feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A phone call placed through a phonebank or call page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Call {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An organization-defined field on user records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomUserProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type ActivityList = ListResponse<Activity>;
pub type CallList = ListResponse<Call>;
pub type ChapterList = ListResponse<Chapter>;
pub type CustomUserPropertyList = ListResponse<CustomUserProperty>;
pub type TextList = ListResponse<Text>;
pub type UserList = ListResponse<User>;

/// Body for creating, upserting or updating a user.
///
/// ## Examples
///
/// ```rust
/// use solidarity_tech::UserInput;
///
/// let body = UserInput::new().first_name("Ada").email("ada@example.org");
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json, serde_json::json!({"first_name": "Ada", "email": "ada@example.org"}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<u64>,
    /// Additional fields, such as custom user properties.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn chapter_id(mut self, chapter_id: u64) -> Self {
        self.chapter_id = Some(chapter_id);
        self
    }

    /// Sets any other field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Body for recording a user action.
///
/// Actions for donation pages and scheduled call pages cannot be created
/// through the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserActionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserActionInput {
    pub fn new(user_id: u64, page_id: u64) -> Self {
        Self {
            user_id: Some(user_id),
            page_id: Some(page_id),
            extra: Map::new(),
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_id_conversions() {
        assert_eq!(ResourceId::from(42u64).as_str(), "42");
        assert_eq!(ResourceId::from(-1i32).to_string(), "-1");
        assert_eq!(ResourceId::from("abc-123").as_str(), "abc-123");
    }

    #[test]
    fn list_params_into_params() {
        let params: Params = ListParams::new()
            .limit(10)
            .filter("email", "ada@example.org")
            .into();
        assert_eq!(params.get("_limit"), Some(&json!(10)));
        assert_eq!(params.get("_offset"), None);
        assert_eq!(params.get("email"), Some(&json!("ada@example.org")));
    }

    #[test]
    fn empty_list_params_are_empty() {
        let params: Params = ListParams::default().into();
        assert!(params.is_empty());
    }

    #[test]
    fn user_list_keeps_unknown_fields() {
        let list: UserList = serde_json::from_value(json!({
            "data": [{
                "id": 1,
                "first_name": "Ada",
                "custom_user_properties": {"shirt_size": "M"}
            }],
            "meta": {"total_count": 1, "limit": 20, "offset": 0}
        }))
        .unwrap();

        assert_eq!(list.data.len(), 1);
        let user = &list.data[0];
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert!(user.email.is_none());
        assert_eq!(
            user.extra["custom_user_properties"],
            json!({"shirt_size": "M"})
        );
        assert_eq!(list.meta.unwrap().total_count, Some(1));
    }

    #[test]
    fn list_without_data_decodes_empty() {
        let list: TextList = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(list.data.is_empty());
        assert!(list.meta.is_none());
        assert_eq!(list.extra["status"], "ok");
    }

    #[test]
    fn user_action_input_serializes_extra_fields() {
        let body = UserActionInput::new(7, 12).field("custom_answer", "yes");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"user_id": 7, "page_id": 12, "custom_answer": "yes"})
        );
    }
}
