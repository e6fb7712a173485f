pub mod prediction;

use crate::settings;
use common::PredictError;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

/// Human-readable cause of a transport failure, without the JS error name.
fn describe(err: gloo_net::Error) -> String {
    match err {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}

/// POSTs a JSON body and decodes the JSON reply.
///
/// The HTTP status is only logged: backends report failures inside the
/// body, so a non-2xx reply with a well-formed body decodes like any other.
/// Anything that prevents sending or decoding is a network error.
pub async fn post_json<T, B>(endpoint: &str, body: &B) -> Result<T, PredictError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = describe(e);
            log::error!("POST {} - Failed to serialize request: {}", endpoint, error_msg);
            PredictError::Network(error_msg)
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = describe(e);
            log::error!("POST {} - Request failed: {}", endpoint, error_msg);
            PredictError::Network(error_msg)
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let parsed = response.json::<T>().await.map_err(|e| {
        let error_msg = describe(e);
        log::error!("POST {} - Failed to parse response: {}", endpoint, error_msg);
        PredictError::Network(error_msg)
    })?;

    log::info!("POST {} - Response decoded", endpoint);
    Ok(parsed)
}
