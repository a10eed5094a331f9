use crate::objects::{
    ApiConfig, DownloadRequest, DownloadResults, JsError, PersonaOutcome, PersonaRequest,
    VodInventory,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub enum HttpMethod {
    Get,
    Post,
}

/// Status line and body of a settled request.
struct FetchedText {
    ok: bool,
    status: u16,
    status_text: String,
    body: String,
}

pub async fn list_vods(config: &ApiConfig) -> Result<VodInventory, JsError> {
    fetch_deserializable(&config.list_vods_url(), HttpMethod::Get, None, None).await
}

pub async fn download_chats(
    config: &ApiConfig,
    request: &DownloadRequest,
) -> Result<DownloadResults, JsError> {
    post_form(&config.download_url(), &request.form_pairs()).await
}

pub async fn generate_personas(
    config: &ApiConfig,
    request: &PersonaRequest,
) -> Result<PersonaOutcome, JsError> {
    post_form(&config.generate_personas_url(), &request.form_pairs()).await
}

pub fn encode_form_pairs(pairs: &[(&str, String)]) -> String {
    let mut tmp = url::form_urlencoded::Serializer::new(String::new());

    for (key, value) in pairs {
        tmp.append_pair(key, value);
    }

    tmp.finish()
}

/// The backend reports logical failures in the body, so a body of the expected
/// shape wins over the status code. Anything else on a non-2xx is a transport error.
pub fn parse_body<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<T, JsError> {
    match (serde_json::from_str::<T>(body), ok) {
        (Ok(val), _) => Ok(val),
        (Err(e), true) => Err(e.into()),
        (Err(_), false) => Err(format!("fetcher error: {}: {}", status, status_text).into()),
    }
}

async fn post_form<T: DeserializeOwned>(
    url: &str,
    pairs: &[(&str, String)],
) -> Result<T, JsError> {
    let headers = HashMap::from([(String::from("Content-Type"), String::from(FORM_CONTENT_TYPE))]);

    fetch_deserializable(
        url,
        HttpMethod::Post,
        Some(headers),
        Some(encode_form_pairs(pairs)),
    )
    .await
}

async fn fetch(
    url: &str,
    method: HttpMethod,
    headers: Option<HashMap<String, String>>,
    body: Option<String>,
) -> Result<web_sys::Response, JsError> {
    let mut opts = web_sys::RequestInit::new();

    match method {
        HttpMethod::Get => opts.method("GET"),
        HttpMethod::Post => opts.method("POST"),
    };

    if let Some(headers) = headers {
        let opt_headers = web_sys::Headers::new()?;

        for (key, val) in headers {
            opt_headers.append(&key, &val)?;
        }

        opts.headers(&opt_headers);
    }

    if let Some(val) = body {
        opts.body(Some(&serde_wasm_bindgen::to_value(&val)?));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or("error getting window")?;

    log::debug!("fetcher: {} {}", request.method(), url);

    JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(Into::into)
}

async fn fetch_text(
    url: &str,
    method: HttpMethod,
    headers: Option<HashMap<String, String>>,
    body: Option<String>,
) -> Result<FetchedText, JsError> {
    let resp = fetch(url, method, headers, body).await?;
    let body = JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .ok_or("error casting fetched value to string")?;

    Ok(FetchedText {
        ok: resp.ok(),
        status: resp.status(),
        status_text: resp.status_text(),
        body,
    })
}

// Parsed from text: `Response::json` goes through a JS object, which reorders
// integer-like keys of the download results.
async fn fetch_deserializable<T: DeserializeOwned>(
    url: &str,
    method: HttpMethod,
    headers: Option<HashMap<String, String>>,
    body: Option<String>,
) -> Result<T, JsError> {
    let fetched = fetch_text(url, method, headers, body).await?;

    parse_body(
        fetched.ok,
        fetched.status,
        &fetched.status_text,
        &fetched.body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_form_fields() {
        let body = encode_form_pairs(&[
            ("twitch_urls", String::from("https://www.twitch.tv/videos/1,2")),
            ("num_personas", String::from("3")),
        ]);

        assert_eq!(
            body,
            "twitch_urls=https%3A%2F%2Fwww.twitch.tv%2Fvideos%2F1%2C2&num_personas=3"
        );
    }

    #[test]
    fn error_status_with_expected_body_is_a_response() {
        let outcome: PersonaOutcome = parse_body(
            false,
            500,
            "Internal Server Error",
            r#"{"success":false,"message":"Processing failed: boom"}"#,
        )
        .unwrap();

        assert_eq!(outcome.message.as_deref(), Some("Processing failed: boom"));
    }

    #[test]
    fn error_status_with_html_body_is_a_transport_error() {
        let res = parse_body::<VodInventory>(false, 502, "Bad Gateway", "<html></html>");

        assert_eq!(
            res,
            Err(JsError::from("fetcher error: 502: Bad Gateway"))
        );
    }

    #[test]
    fn ok_status_with_bad_body_is_a_parse_error() {
        let res = parse_body::<VodInventory>(true, 200, "OK", "not json");

        assert!(res.is_err());
        assert!(!res.unwrap_err().description.contains("fetcher error"));
    }
}
