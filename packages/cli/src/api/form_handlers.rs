// ABOUTME: HTTP handlers for the Contact Us settings form
// ABOUTME: Form view on GET, validated submission on POST

use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};
use tracing::info;

use contactus_settings::{Actor, RequestContext, SettingsRecord};

use crate::api::AppState;
use crate::error::AppError;

/// Header carrying the authenticated actor's id
pub const ACTOR_ID_HEADER: &str = "x-actor-id";

/// Header carrying the authenticated actor's email
pub const ACTOR_EMAIL_HEADER: &str = "x-actor-email";

const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Get the form view for a renderer
pub async fn get_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let actor = actor_from_headers(&headers)?;
    info!(actor = %actor.id, "Loading Contact Us settings form");

    let view = state.service.form(&actor).await?;
    Ok(Json(json!({
        "success": true,
        "data": view,
        "error": null
    })))
}

/// Submit the form
pub async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(submitted): Json<SettingsRecord>,
) -> Result<Json<Value>, AppError> {
    let actor = actor_from_headers(&headers)?;
    let ctx = RequestContext {
        actor,
        client_ip: client_ip(&headers),
    };
    info!(
        actor = %ctx.actor.id,
        client_ip = %ctx.client_ip,
        "Submitting Contact Us settings form"
    );

    let outcome = state.service.submit(&ctx, submitted).await?;
    let changed_fields: Vec<&'static str> =
        outcome.changes.iter().map(|c| c.field.key()).collect();

    Ok(Json(json!({
        "success": true,
        "data": { "changed_fields": changed_fields },
        "error": null
    })))
}

fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, AppError> {
    let id = required_header(headers, ACTOR_ID_HEADER)?;
    let email = required_header(headers, ACTOR_EMAIL_HEADER)?;
    Ok(Actor { id, email })
}

fn required_header(headers: &HeaderMap, name: &str) -> Result<String, AppError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Unauthorized {
            message: format!("Missing {} header", name),
        })
}

/// First hop of X-Forwarded-For, or "unknown" when the header is absent
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_ip_takes_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            FORWARDED_FOR_HEADER,
            HeaderValue::from_static("10.0.0.7, 192.168.1.1"),
        );
        assert_eq!(client_ip(&headers), "10.0.0.7");
    }

    #[test]
    fn test_client_ip_defaults_to_unknown() {
        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }

    #[test]
    fn test_actor_requires_both_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(ACTOR_ID_HEADER, HeaderValue::from_static("admin"));
        assert!(actor_from_headers(&headers).is_err());

        headers.insert(
            ACTOR_EMAIL_HEADER,
            HeaderValue::from_static("admin@x.com"),
        );
        let actor = actor_from_headers(&headers).unwrap();
        assert_eq!(actor.id, "admin");
        assert_eq!(actor.email, "admin@x.com");
    }

    #[test]
    fn test_empty_actor_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(ACTOR_ID_HEADER, HeaderValue::from_static(""));
        headers.insert(
            ACTOR_EMAIL_HEADER,
            HeaderValue::from_static("admin@x.com"),
        );
        assert!(actor_from_headers(&headers).is_err());
    }
}
