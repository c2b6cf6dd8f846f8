use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreSignedUrlResponse {
    pub file_id: String,
    /// Single-use upload target issued by the storage backend
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TextFromImageResponse {
    pub text: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Missing fileName"))]
    pub file_name: String,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTextRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Missing fileId"))]
    pub file_id: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub server_time: String,
}

// `null` counts as absent, same as a missing key
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_absent_fields_deserialize_to_empty() {
        for body in [json!({}), json!({ "fileName": null })] {
            let req: PresignedUrlRequest = serde_json::from_value(body).unwrap();
            assert_eq!(req.file_name, "");
        }
        let req: ExtractTextRequest = serde_json::from_value(json!({ "fileId": null })).unwrap();
        assert_eq!(req.file_id, "");
    }

    #[test]
    fn non_string_field_is_still_rejected() {
        assert!(serde_json::from_value::<ExtractTextRequest>(json!({ "fileId": 42 })).is_err());
    }
}
