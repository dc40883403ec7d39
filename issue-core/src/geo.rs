/// Outer UI wait on a geolocation request, and the native request's own
/// timeout. The native call is never cancelled; when the UI timer wins,
/// a late resolution harmlessly overwrites the fields.
pub const GEO_WAIT_MS: u64 = 10_000;

/// How long the "Location Found" confirmation stays on the button.
pub const LOCATION_RESET_MS: u64 = 2_000;

pub const GEO_TIMEOUT_MESSAGE: &str = "Location request timed out. Please try again.";

/// Coordinates are written into the form rounded to six decimals.
pub fn format_coord(value: f64) -> String {
    format!("{value:.6}")
}

/// Maps the native geolocation error codes to the fixed user-facing
/// messages, with a generic fallback for codes the table does not know.
pub fn geolocation_error_message(code: u16) -> &'static str {
    match code {
        1 => "Permission denied. Please enable location access.",
        2 => "Location unavailable. Please try again.",
        3 => "Request timed out. Please try again.",
        _ => "Could not get location",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_six_decimals() {
        assert_eq!(format_coord(37.4219999), "37.422000");
        assert_eq!(format_coord(-122.0840575), "-122.084058");
    }

    #[test]
    fn pads_short_fractions() {
        assert_eq!(format_coord(40.5), "40.500000");
        assert_eq!(format_coord(0.0), "0.000000");
    }

    #[test]
    fn known_error_codes() {
        assert_eq!(
            geolocation_error_message(1),
            "Permission denied. Please enable location access."
        );
        assert_eq!(
            geolocation_error_message(2),
            "Location unavailable. Please try again."
        );
        assert_eq!(
            geolocation_error_message(3),
            "Request timed out. Please try again."
        );
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(geolocation_error_message(0), "Could not get location");
        assert_eq!(geolocation_error_message(42), "Could not get location");
    }
}
