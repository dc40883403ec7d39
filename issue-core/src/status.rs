/// Severity of a transient status banner message; maps onto the CSS
/// class the banner carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl StatusLevel {
    pub fn class_name(self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Success => "success",
            StatusLevel::Error => "error",
        }
    }
}

/// A banner fades after five seconds and its text clears 300ms later.
/// Showing a new message preempts both timers of the previous one.
pub const STATUS_FADE_MS: u64 = 5_000;
pub const STATUS_CLEAR_MS: u64 = 300;

/// Delay between a successful submission and navigating to the feed.
pub const REDIRECT_DELAY_MS: u64 = 2_000;
