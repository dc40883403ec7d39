use crate::bridge;
use crate::config::AppConfig;
use issue_core::{filter_issues, status_class, FeedPhase, Issue};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

/// Issue feed page: fetches the working set once on mount, then
/// re-renders a filtered subset whenever either selector changes.
/// Filtering is a pure predicate over the in-memory list, never the DOM,
/// and never re-fetches.
#[component]
pub fn IssueFeed() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let issues = create_rw_signal(Vec::<Issue>::new());
    let phase = create_rw_signal(FeedPhase::Loading);
    let type_filter = create_rw_signal(String::new());
    let status_filter = create_rw_signal(String::new());

    let issues_url = config.issues_url.clone();
    spawn_local(async move {
        match bridge::fetch_issues(&issues_url).await {
            Ok(list) => {
                issues.set(list);
                phase.set(FeedPhase::Loaded);
            }
            Err(message) => {
                web_sys::console::error_1(&format!("Error fetching issues: {message}").into());
                phase.set(FeedPhase::Error);
            }
        }
    });

    let visible = create_memo(move |_| {
        filter_issues(&issues.get(), &type_filter.get(), &status_filter.get())
    });

    view! {
      <section class="issues-section">
        <div class="filters">
          <select id="filterType" on:change=move |ev| type_filter.set(event_target_value(&ev))>
            <option value="">"All Types"</option>
            <option value="Pothole">"Pothole"</option>
            <option value="Street Light">"Street Light"</option>
            <option value="Garbage">"Garbage"</option>
            <option value="Graffiti">"Graffiti"</option>
            <option value="Water Leak">"Water Leak"</option>
            <option value="Other">"Other"</option>
          </select>
          <select id="filterStatus" on:change=move |ev| status_filter.set(event_target_value(&ev))>
            <option value="">"All Statuses"</option>
            <option value="Pending">"Pending"</option>
            <option value="In Progress">"In Progress"</option>
            <option value="Resolved">"Resolved"</option>
          </select>
        </div>
        <div class="issues-grid" id="issues-grid">
          <Show when=move || phase.get() == FeedPhase::Error fallback=|| ()>
            <p class="error-message">"Failed to load issues. Please try again later."</p>
          </Show>
          // Records carry no identity, so the grid is fully replaced on
          // every filter change instead of keyed-diffed.
          {move || {
              visible
                  .get()
                  .into_iter()
                  .map(|issue| view! { <IssueCard issue=issue/> })
                  .collect_view()
          }}
        </div>
      </section>
    }
}

#[component]
fn IssueCard(issue: Issue) -> impl IntoView {
    let badge = status_class(&issue.status);
    view! {
      <div class=format!("issue-card {badge}")>
        <div class="issue-header">
          <h3>{issue.title.clone()}</h3>
          <span class=format!("status-badge {badge}")>{issue.status.clone()}</span>
        </div>
        <p class="issue-type">{issue.issue_type.clone()}</p>
        <p class="issue-description">{issue.description.clone()}</p>
        {issue
            .image
            .clone()
            .map(|src| view! { <img src=src alt="Issue image" class="issue-image"/> })}
        <div class="issue-footer">
          <span>{bridge::format_date(&issue.date)}</span>
          <span>"View on Map"</span>
        </div>
      </div>
    }
}
