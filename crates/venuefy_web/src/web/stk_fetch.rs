use std::future::Future;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use venuefy::stk::{StkGateway, StkOutcome, StkPushRequest};

use super::dom;

/// `fetch`-backed gateway. One POST per call, no retries, no timeout.
pub(super) struct FetchGateway {
    endpoint: String,
}

impl FetchGateway {
    pub(super) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl StkGateway for FetchGateway {
    fn initiate(&self, request: StkPushRequest) -> impl Future<Output = StkOutcome> {
        let endpoint = self.endpoint.clone();
        async move {
            match post_json(&endpoint, &request.to_json()).await {
                Ok(body) => StkOutcome::from_body(&body),
                Err(detail) => StkOutcome::Transport { detail },
            }
        }
    }
}

async fn post_json(url: &str, body: &str) -> Result<String, String> {
    let window = dom::window()?;

    let headers = web_sys::Headers::new().map_err(|_| "fetch: Headers::new failed")?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| "fetch: set Content-Type failed")?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web_sys::RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = web_sys::Request::new_with_str_and_init(url, &init)
        .map_err(|_| format!("fetch: invalid request to {url}"))?;

    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch: {}", describe(&e)))?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|_| "fetch: not a Response")?;

    let text = resp.text().map_err(|_| "fetch: body unreadable")?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| format!("fetch: body: {}", describe(&e)))?;
    text.as_string()
        .ok_or_else(|| "fetch: body is not text".to_string())
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}
