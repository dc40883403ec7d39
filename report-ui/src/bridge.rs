//! Raw browser API access: fetch, the file reader, the geolocation
//! request, navigation, and smooth scrolling. Components own state and
//! rendering; everything that touches `web_sys` directly lives here.

use crate::dto::ApiError;
use issue_core::{Issue, GEO_WAIT_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    File, FileReader, FormData, Headers, HtmlFormElement, Position, PositionError,
    PositionOptions, ProgressEvent, RequestInit, Response, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window not available".to_string())
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Unexpected browser error".to_string())
}

/// One-shot GET of the issues feed. Non-OK statuses and undecodable
/// bodies both surface as errors; the caller decides how to display them.
pub async fn fetch_issues(url: &str) -> Result<Vec<Issue>, String> {
    let response: Response = JsFuture::from(window()?.fetch_with_str(url))
        .await
        .map_err(|e| js_error_message(&e))?
        .dyn_into()
        .map_err(|_| "fetch did not return a response".to_string())?;
    if !response.ok() {
        return Err(format!(
            "feed request failed with status {}",
            response.status()
        ));
    }
    let body = JsFuture::from(response.json().map_err(|e| js_error_message(&e))?)
        .await
        .map_err(|e| js_error_message(&e))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

/// Serializes the form as multipart data and POSTs it to the report
/// endpoint. On a non-2xx status the server's `error` string is returned
/// when present, otherwise a generic message.
pub async fn submit_report(url: &str, form: &HtmlFormElement) -> Result<(), String> {
    let data = FormData::new_with_form(form).map_err(|e| js_error_message(&e))?;
    let headers = Headers::new().map_err(|e| js_error_message(&e))?;
    headers
        .append("Accept", "application/json")
        .map_err(|e| js_error_message(&e))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(data.as_ref());

    let response: Response = JsFuture::from(window()?.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| js_error_message(&e))?
        .dyn_into()
        .map_err(|_| "fetch did not return a response".to_string())?;

    if response.ok() {
        return Ok(());
    }

    let message = match response.json() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|body| serde_wasm_bindgen::from_value::<ApiError>(body).ok())
            .and_then(|body| body.error),
        Err(_) => None,
    };
    Err(message.unwrap_or_else(|| "Error submitting report".to_string()))
}

/// Starts a native geolocation request with high accuracy, no cached
/// position, and the shared 10s timeout. Exactly one of the callbacks
/// fires; the request itself cannot be cancelled once started.
pub fn request_position(
    on_success: impl FnOnce(f64, f64) + 'static,
    on_error: impl FnOnce(u16) + 'static,
) -> Result<(), String> {
    let geolocation = window()?
        .navigator()
        .geolocation()
        .map_err(|_| "Geolocation is not supported by your browser".to_string())?;

    let success = Closure::once_into_js(move |position: Position| {
        let coords = position.coords();
        on_success(coords.latitude(), coords.longitude());
    });
    let failure = Closure::once_into_js(move |error: PositionError| {
        on_error(error.code());
    });

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(GEO_WAIT_MS as u32);
    options.set_maximum_age(0);

    geolocation
        .get_current_position_with_error_callback_and_options(
            success.unchecked_ref(),
            Some(failure.unchecked_ref()),
            &options,
        )
        .map_err(|e| js_error_message(&e))
}

/// Reads the file as a data URL and hands it to the callback once
/// decoding completes.
pub fn read_as_data_url(
    file: &File,
    on_loaded: impl FnOnce(String) + 'static,
) -> Result<(), String> {
    let reader = FileReader::new().map_err(|e| js_error_message(&e))?;
    let inner = reader.clone();
    let onload = Closure::once_into_js(move |_event: ProgressEvent| {
        if let Ok(result) = inner.result() {
            if let Some(url) = result.as_string() {
                on_loaded(url);
            }
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.read_as_data_url(file).map_err(|e| js_error_message(&e))
}

pub fn navigate_to(url: &str) {
    if let Ok(window) = window() {
        if let Err(error) = window.location().set_href(url) {
            web_sys::console::error_1(&error);
        }
    }
}

/// Scrolls the element a same-page `#anchor` points at into view.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = href.strip_prefix('#') else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(target) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Locale-formatted date for the issue card footer.
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    js_sys::Date::new(&JsValue::from_str(value))
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}
