use crate::bridge;
use crate::config::AppConfig;
use issue_core::{
    format_coord, geolocation_error_message, validate_image, StatusLevel, GEO_TIMEOUT_MESSAGE,
    GEO_WAIT_MS, LOCATION_RESET_MS, REDIRECT_DELAY_MS, STATUS_CLEAR_MS, STATUS_FADE_MS,
};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;

#[derive(Clone, Copy, PartialEq)]
enum LocationButton {
    Idle,
    Working,
    Found,
    Failed,
}

/// Report submission page: image validation with inline preview,
/// geolocation capture with a UI-level wait bound, multipart submission,
/// and the single-slot transient status banner.
///
/// The geolocation wait timer only resets the button; the native request
/// keeps running and a late resolution overwrites the fields. That race
/// is accepted, not cancelled.
#[component]
pub fn ReportForm() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let status_text = create_rw_signal(String::new());
    let status_level = create_rw_signal(StatusLevel::Info);
    let status_visible = create_rw_signal(false);
    let fade_timer = store_value(None::<TimeoutHandle>);
    let clear_timer = store_value(None::<TimeoutHandle>);

    // Single-slot banner: a new message preempts both timers of the old one.
    let show_status = move |message: String, level: StatusLevel| {
        if let Some(handle) = fade_timer.get_value() {
            handle.clear();
        }
        if let Some(handle) = clear_timer.get_value() {
            handle.clear();
        }
        status_text.set(message);
        status_level.set(level);
        status_visible.set(true);
        let fade = set_timeout_with_handle(
            move || {
                status_visible.set(false);
                let clear = set_timeout_with_handle(
                    move || status_text.set(String::new()),
                    Duration::from_millis(STATUS_CLEAR_MS),
                );
                clear_timer.set_value(clear.ok());
            },
            Duration::from_millis(STATUS_FADE_MS),
        );
        fade_timer.set_value(fade.ok());
    };

    let preview = create_rw_signal(None::<String>);
    let image_input = create_node_ref::<html::Input>();

    let on_image_change = move |_| {
        preview.set(None);
        let Some(input) = image_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Err(message) = validate_image(file.size() as u64, &file.type_()) {
            show_status(message, StatusLevel::Error);
            input.set_value("");
            return;
        }
        if let Err(message) = bridge::read_as_data_url(&file, move |url| preview.set(Some(url))) {
            show_status(message, StatusLevel::Error);
        }
    };

    let latitude = create_rw_signal(String::new());
    let longitude = create_rw_signal(String::new());
    let location_state = create_rw_signal(LocationButton::Idle);
    let wait_timer = store_value(None::<TimeoutHandle>);

    let on_get_location = move |_| {
        location_state.set(LocationButton::Working);

        // UI-level wait bound; does not cancel the native request.
        let timeout = set_timeout_with_handle(
            move || {
                location_state.set(LocationButton::Idle);
                show_status(GEO_TIMEOUT_MESSAGE.to_string(), StatusLevel::Error);
            },
            Duration::from_millis(GEO_WAIT_MS),
        );
        wait_timer.set_value(timeout.ok());

        let outcome = bridge::request_position(
            move |lat, lon| {
                if let Some(handle) = wait_timer.get_value() {
                    handle.clear();
                }
                latitude.set(format_coord(lat));
                longitude.set(format_coord(lon));
                location_state.set(LocationButton::Found);
                set_timeout(
                    move || location_state.set(LocationButton::Idle),
                    Duration::from_millis(LOCATION_RESET_MS),
                );
            },
            move |code| {
                if let Some(handle) = wait_timer.get_value() {
                    handle.clear();
                }
                location_state.set(LocationButton::Failed);
                show_status(
                    geolocation_error_message(code).to_string(),
                    StatusLevel::Error,
                );
            },
        );
        if let Err(message) = outcome {
            if let Some(handle) = wait_timer.get_value() {
                handle.clear();
            }
            location_state.set(LocationButton::Idle);
            show_status(message, StatusLevel::Error);
        }
    };

    let location_label = move || match location_state.get() {
        LocationButton::Idle => "Get Current Location",
        LocationButton::Working => "Getting Location...",
        LocationButton::Found => "Location Found",
        LocationButton::Failed => "Location Error",
    };

    let submitting = create_rw_signal(false);
    let form_ref = create_node_ref::<html::Form>();
    let report_url = config.report_url.clone();
    let issues_page = config.issues_page.clone();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        submitting.set(true);
        let report_url = report_url.clone();
        let issues_page = issues_page.clone();
        spawn_local(async move {
            match bridge::submit_report(&report_url, &form).await {
                Ok(()) => {
                    show_status("Issue reported successfully!".to_string(), StatusLevel::Success);
                    form.reset();
                    preview.set(None);
                    latitude.set(String::new());
                    longitude.set(String::new());
                    set_timeout(
                        move || bridge::navigate_to(&issues_page),
                        Duration::from_millis(REDIRECT_DELAY_MS),
                    );
                }
                Err(message) => show_status(message, StatusLevel::Error),
            }
            submitting.set(false);
        });
    };

    view! {
      <section class="report-section" id="report-form">
        <nav class="page-nav">
          <a
            href="#report-form"
            on:click=move |ev| {
                ev.prevent_default();
                bridge::scroll_to_anchor("#report-form");
            }
          >
            "Report an Issue"
          </a>
        </nav>

        <div
          id="statusMsg"
          class=move || format!("status-message {}", status_level.get().class_name())
          style:opacity=move || if status_visible.get() { "1" } else { "0" }
        >
          {move || status_text.get()}
        </div>

        <form id="report-form-el" node_ref=form_ref on:submit=on_submit>
          <input type="text" name="title" placeholder="Issue title" required/>
          <select name="type" required>
            <option value="Pothole">"Pothole"</option>
            <option value="Street Light">"Street Light"</option>
            <option value="Garbage">"Garbage"</option>
            <option value="Graffiti">"Graffiti"</option>
            <option value="Water Leak">"Water Leak"</option>
            <option value="Other">"Other"</option>
          </select>
          <textarea name="description" placeholder="Describe the issue" required></textarea>

          <div class="location-row">
            <input
              type="text"
              name="latitude"
              id="latitude"
              placeholder="Latitude"
              readonly
              prop:value=move || latitude.get()
            />
            <input
              type="text"
              name="longitude"
              id="longitude"
              placeholder="Longitude"
              readonly
              prop:value=move || longitude.get()
            />
            <button
              type="button"
              id="getLocation"
              prop:disabled=move || {
                  matches!(
                      location_state.get(),
                      LocationButton::Working | LocationButton::Found
                  )
              }
              on:click=on_get_location
            >
              {location_label}
            </button>
          </div>

          <input
            type="file"
            name="image"
            id="images"
            accept="image/*"
            node_ref=image_input
            on:change=on_image_change
          />
          <div id="imagePreview">
            {move || {
                preview.get().map(|src| view! { <img src=src class="preview-image"/> })
            }}
          </div>

          <button type="submit" prop:disabled=move || submitting.get()>
            {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
          </button>
        </form>
      </section>
    }
}
