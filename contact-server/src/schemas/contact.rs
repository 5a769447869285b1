//! Contact form request / response types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::NewContactMessage;
use crate::error::ServerError;

pub const SAVED_MESSAGE: &str = "Message saved successfully!";

/// Request body for `POST /api/contact`.
///
/// Every field is optional at the wire level; [`ContactRequest::into_new_message`]
/// rejects the submission unless all three are present and non-empty.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    /// Sender name (stored in a 100-character column).
    #[serde(default, deserialize_with = "string_or_missing")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    /// Sender email. Not format-checked.
    #[serde(default, deserialize_with = "string_or_missing")]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    /// Free-text message body.
    #[serde(default, deserialize_with = "string_or_missing")]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Read the form fields out of a decoded JSON body.
    ///
    /// Only a JSON object carries named fields; arrays and scalars yield an
    /// empty request rather than being matched by position.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(map) => {
                serde_json::from_value(Value::Object(map)).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }

    /// Check presence of all three fields and turn them into an insert payload.
    pub fn into_new_message(self) -> Result<NewContactMessage, ServerError> {
        self.validate()?;
        match (self.name, self.email, self.message) {
            (Some(name), Some(email), Some(message)) => Ok(NewContactMessage {
                name,
                email,
                message,
            }),
            _ => Err(ServerError::MissingFields),
        }
    }
}

/// Body of a successful `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn saved() -> Self {
        Self {
            success: true,
            message: SAVED_MESSAGE.to_owned(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Keep JSON strings; anything else (`null`, `false`, `0`, numbers, objects)
/// counts as a missing field.
fn string_or_missing<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
