use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
    response::IntoResponse,
};
use validator::{Validate, ValidationErrors};
use crate::utils::api_response::ResponseBuilder;

pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| {
                let message = format!("Invalid JSON format: {}", err.body_text());
                ResponseBuilder::error(StatusCode::BAD_REQUEST, &message).into_response()
            })?;

        if let Err(e) = payload.validate() {
            let message = first_message(&e);
            return Err(ResponseBuilder::error(StatusCode::BAD_REQUEST, &message).into_response());
        }

        Ok(ValidatedJson(payload))
    }
}

// Lowest field name wins so the reported error is stable
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid value".to_string())
}
