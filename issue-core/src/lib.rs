//! DOM-free logic for the civic issue reporter: the issue model and
//! filter predicate, image upload rules, geolocation helpers, and the
//! status banner vocabulary. Everything here is testable on the host.

pub mod geo;
pub mod image;
pub mod issue;
pub mod status;

pub use geo::{
    format_coord, geolocation_error_message, GEO_TIMEOUT_MESSAGE, GEO_WAIT_MS, LOCATION_RESET_MS,
};
pub use image::{validate_image, ACCEPTED_IMAGE_TYPES, MAX_IMAGE_BYTES};
pub use issue::{filter_issues, matches_filters, status_class, FeedPhase, Issue};
pub use status::{StatusLevel, REDIRECT_DELAY_MS, STATUS_CLEAR_MS, STATUS_FADE_MS};
