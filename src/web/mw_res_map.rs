
use crate::web::{self, ClientError};
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

/// Rewrites responses that carry a `web::Error` into the client error body.
/// Successful responses pass through untouched.
pub async fn mw_response_map(uri: Uri, req_method: Method, res: Response) -> Response {
    debug!("{:<12} - mw_response_map {req_method} {uri}", "RES_MAPPER");

    let Some(web_error) = res.extensions().get::<web::Error>() else {
        return res;
    };

    let req_uuid = Uuid::new_v4();
    let (status_code, client_error) = web_error.client_status_and_error();
    debug!(
        "{:<12} - {req_method} {uri} -> {status_code} {} req_uuid={req_uuid} cause={web_error:?}",
        "RES_MAPPER",
        client_error.as_ref()
    );

    (status_code, Json(client_error_body(&client_error, req_uuid))).into_response()
}

fn client_error_body(client_error: &ClientError, req_uuid: Uuid) -> Value {
    json!({
        "error": {
            "type": client_error.as_ref(),
            "req_uuid": req_uuid.to_string(),
        }
    })
}
