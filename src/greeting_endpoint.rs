use crate::error::ServerError;
use crate::greeting::{self, GreetingRequest};
use axum::body::Body;
use axum::extract::Request;
use lambda_http::tracing;

const BODY_LIMIT: usize = 1024 * 1024;

pub async fn demo_function(request: Request) -> Result<String, ServerError> {
    tracing::info!(
        method = %request.method(),
        "Http function processed request for url \"{}\"",
        request.uri()
    );

    let query_name = request.uri().query().and_then(name_from_query);
    let body_text = match query_name.as_deref() {
        Some(name) if !name.is_empty() => None,
        _ => read_body_text(request.into_body()).await?,
    };

    Ok(greeting::handle(&GreetingRequest::new(query_name, body_text)))
}

// First `name` pair wins, matching URLSearchParams.get.
fn name_from_query(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.into_owned())
}

async fn read_body_text(body: Body) -> Result<Option<String>, ServerError> {
    let bytes = axum::body::to_bytes(body, BODY_LIMIT).await?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}
