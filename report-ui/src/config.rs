/// Endpoint configuration for the two page controllers. The feed is read
/// cross-origin from the API host; the report POST stays same-origin.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub issues_url: String,
    pub report_url: String,
    pub issues_page: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            issues_url: "http://localhost:5000/issues".into(),
            report_url: "/api/report".into(),
            issues_page: "/issues.html".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_is_absolute_and_report_is_relative() {
        let config = AppConfig::default();
        assert!(config.issues_url.starts_with("http://"));
        assert!(config.report_url.starts_with('/'));
        assert!(config.issues_page.ends_with(".html"));
    }
}
