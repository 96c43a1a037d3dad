use crate::errors::ServerError;
use crate::responses::{build, ResultResp};
use astra::Body;
use serde::Serialize;

pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!("failed to serialize JSON response: {e}");
        ServerError::InternalError
    })?;

    build(status, mime::APPLICATION_JSON.as_ref(), Body::from(body))
}
