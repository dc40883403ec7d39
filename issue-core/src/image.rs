/// Upload cap enforced client-side before any network round-trip.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Checks a selected file against the size cap and the accepted MIME
/// types. The error string is shown to the user verbatim.
pub fn validate_image(size: u64, mime: &str) -> Result<(), String> {
    if size > MAX_IMAGE_BYTES {
        return Err("Image size should be less than 5MB".into());
    }
    if !ACCEPTED_IMAGE_TYPES.contains(&mime) {
        return Err("Please upload a valid image file (JPEG, PNG, or GIF)".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn accepts_four_mib_jpeg() {
        assert!(validate_image(4 * MIB, "image/jpeg").is_ok());
    }

    #[test]
    fn accepts_every_listed_type() {
        for mime in ACCEPTED_IMAGE_TYPES {
            assert!(validate_image(1, mime).is_ok());
        }
    }

    #[test]
    fn accepts_file_at_exact_cap() {
        assert!(validate_image(MAX_IMAGE_BYTES, "image/png").is_ok());
    }

    #[test]
    fn rejects_six_mib_png_for_size() {
        let err = validate_image(6 * MIB, "image/png").unwrap_err();
        assert_eq!(err, "Image size should be less than 5MB");
    }

    #[test]
    fn rejects_pdf_for_type() {
        let err = validate_image(MIB, "application/pdf").unwrap_err();
        assert_eq!(err, "Please upload a valid image file (JPEG, PNG, or GIF)");
    }

    #[test]
    fn size_check_runs_before_type_check() {
        let err = validate_image(6 * MIB, "application/pdf").unwrap_err();
        assert_eq!(err, "Image size should be less than 5MB");
    }
}
