//! Joke API Client
//!
//! Frontend bindings to the remote joke endpoint.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::JokeResponse;

pub const API_URL: &str = "https://icanhazdadjoke.com/";

/// Failure while requesting a joke: network error or non-success status
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct FetchError(pub String);

/// Source of jokes, one per request
pub trait JokeSource {
    async fn fetch_joke(&self) -> Result<JokeResponse, FetchError>;
}

/// Client for the public dad-joke endpoint, via the browser Fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct DadJokeApi;

impl JokeSource for DadJokeApi {
    async fn fetch_joke(&self) -> Result<JokeResponse, FetchError> {
        let opts = RequestInit::new();
        opts.set_method("GET");

        let request = Request::new_with_str_and_init(API_URL, &opts).map_err(fetch_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(fetch_error)?;

        let window =
            web_sys::window().ok_or_else(|| FetchError("no window available".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(fetch_error)?;
        let response: Response = response.dyn_into().map_err(fetch_error)?;

        if !response.ok() {
            return Err(FetchError(format!(
                "{} returned status {}",
                API_URL,
                response.status()
            )));
        }

        let body = JsFuture::from(response.json().map_err(fetch_error)?)
            .await
            .map_err(fetch_error)?;
        serde_wasm_bindgen::from_value(body).map_err(|err| FetchError(err.to_string()))
    }
}

/// Keep the JS-side description of the failure
fn fetch_error(value: JsValue) -> FetchError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    FetchError(message)
}
