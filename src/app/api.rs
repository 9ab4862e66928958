//! Client-side fetch helpers for the contact and chat endpoints.
//!
//! Browser builds talk to `window.fetch` through `web_sys`; SSR builds get
//! stubs that fail with [`ApiError::Unavailable`], since handlers only ever
//! run after hydration.

use futures::stream::LocalBoxStream;
use serde::Deserialize;
use url::form_urlencoded;

/// Chat endpoint served by the backend.
pub const CHAT_ENDPOINT: &str = "/chatbot-response/";

/// A byte stream of response body chunks, read one at a time.
pub type ChunkStream = LocalBoxStream<'static, Result<Vec<u8>, ApiError>>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("fetch is only available in browser")]
    Unavailable,
    #[error("{0}")]
    Js(String),
    #[error("AI server error.")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Encode `(name, value)` pairs as an `application/x-www-form-urlencoded` body.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in fields {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// Prefer the JS error's own message, as shown to the user inline.
#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    use wasm_bindgen::JsCast;

    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Js(message)
}

#[cfg(target_arch = "wasm32")]
async fn post_form(
    url: &str,
    fields: &[(&str, &str)],
    extra_headers: &[(&str, &str)],
) -> Result<web_sys::Response, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    let window = web_sys::window().ok_or(ApiError::Unavailable)?;

    let headers = Headers::new().map_err(js_error)?;
    headers
        .set(
            "Content-Type",
            "application/x-www-form-urlencoded;charset=UTF-8",
        )
        .map_err(js_error)?;
    for (name, value) in extra_headers {
        headers.set(name, value).map_err(js_error)?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&encode_form(fields)));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;

    resp_value
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Js("Not a Response".into()))
}

/// POST form fields and decode the JSON reply (client-side only).
///
/// The status code is not checked: the contact endpoint reports application
/// failures inside the JSON body.
#[cfg(target_arch = "wasm32")]
pub async fn post_form_json<R: for<'de> Deserialize<'de>>(
    url: &str,
    fields: &[(&str, &str)],
    headers: &[(&str, &str)],
) -> Result<R, ApiError> {
    use wasm_bindgen_futures::JsFuture;

    let resp = post_form(url, fields, headers).await?;

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn post_form_json<R: for<'de> Deserialize<'de>>(
    _url: &str,
    _fields: &[(&str, &str)],
    _headers: &[(&str, &str)],
) -> Result<R, ApiError> {
    Err(ApiError::Unavailable)
}

/// POST form fields and return the response body as a chunk stream.
///
/// Fails with [`ApiError::Status`] before any body is read if the response
/// is not ok.
#[cfg(target_arch = "wasm32")]
pub async fn post_form_stream(url: &str, fields: &[(&str, &str)]) -> Result<ChunkStream, ApiError> {
    use futures::StreamExt;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::ReadableStreamDefaultReader;

    let resp = post_form(url, fields, &[]).await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    let body = resp
        .body()
        .ok_or_else(|| ApiError::Decode("response has no body".into()))?;
    let reader: ReadableStreamDefaultReader = body.get_reader().unchecked_into();

    let chunks = futures::stream::unfold(Some(reader), |reader| async move {
        let reader = reader?;
        let result = match JsFuture::from(reader.read()).await {
            Ok(result) => result,
            Err(e) => return Some((Err(js_error(e)), None)),
        };
        let done = js_sys::Reflect::get(&result, &"done".into())
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        if done {
            return None;
        }
        match js_sys::Reflect::get(&result, &"value".into()) {
            Ok(value) => {
                let bytes = js_sys::Uint8Array::new(&value).to_vec();
                Some((Ok(bytes), Some(reader)))
            }
            Err(e) => Some((Err(js_error(e)), None)),
        }
    });

    Ok(chunks.boxed_local())
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn post_form_stream(
    _url: &str,
    _fields: &[(&str, &str)],
) -> Result<ChunkStream, ApiError> {
    Err(ApiError::Unavailable)
}
