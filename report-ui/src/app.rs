use crate::components::feed::IssueFeed;
use crate::components::report_form::ReportForm;
use crate::config::AppConfig;
use leptos::*;

fn on_issues_page() -> bool {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| path.ends_with("/issues.html"))
        .unwrap_or(false)
}

/// Mounts whichever page controller the current document belongs to. The
/// two controllers are independent and share no state.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::default());
    let issues_page = on_issues_page();

    view! {
      <Show when=move || issues_page fallback=|| view! { <ReportForm/> }>
        <IssueFeed/>
      </Show>
    }
}
