//! Backend Command Wrappers
//!
//! Frontend bindings to the REST backend, using the browser `fetch` API.

mod todo;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use todo::*;

fn transport(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

/// Send a request; any non-2xx response becomes `ApiError::Status`
async fn send(method: &str, url: &str, body: Option<String>) -> ApiResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        let headers = Headers::new().map_err(transport)?;
        headers.set("Content-Type", "application/json").map_err(transport)?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("response is not a Response".to_string()))?;

    if !resp.ok() {
        // Body is best effort: it only carries the optional error message
        let body = read_text(&resp).await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), &body));
    }
    Ok(resp)
}

async fn read_text(resp: &Response) -> ApiResult<String> {
    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    Ok(text.as_string().unwrap_or_default())
}

async fn read_json<T: DeserializeOwned>(resp: &Response) -> ApiResult<T> {
    let json = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(format!("{:?}", e)))?)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

fn to_body<T: serde::Serialize>(value: &T) -> ApiResult<String> {
    serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))
}
