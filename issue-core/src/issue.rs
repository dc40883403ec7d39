use serde::{Deserialize, Serialize};

/// A reported issue as served by the feed endpoint. The list is an opaque
/// ordered sequence for display; nothing here is mutated client-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub status: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "timestamp")]
    pub date: String,
}

/// Feed lifecycle: `Loading` until the fetch resolves, then `Loaded` or
/// `Error`. Filtering never leaves `Loaded` and never re-fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedPhase {
    Loading,
    Loaded,
    Error,
}

/// CSS class fragment for an issue status. Display styling only; the
/// filter itself matches statuses exactly.
pub fn status_class(status: &str) -> String {
    status.to_lowercase()
}

/// An empty selector value matches everything; otherwise exact equality.
pub fn matches_filters(issue: &Issue, type_filter: &str, status_filter: &str) -> bool {
    let matches_type = type_filter.is_empty() || issue.issue_type == type_filter;
    let matches_status = status_filter.is_empty() || issue.status == status_filter;
    matches_type && matches_status
}

/// Conjunction of the two selector predicates over the in-memory working
/// set, preserving order.
pub fn filter_issues(issues: &[Issue], type_filter: &str, status_filter: &str) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| matches_filters(issue, type_filter, status_filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(title: &str, issue_type: &str, status: &str) -> Issue {
        Issue {
            title: title.into(),
            issue_type: issue_type.into(),
            status: status.into(),
            description: "desc".into(),
            image: None,
            date: "2025-01-01T00:00:00".into(),
        }
    }

    fn sample() -> Vec<Issue> {
        vec![
            issue("a", "Pothole", "Pending"),
            issue("b", "Pothole", "Resolved"),
            issue("c", "Garbage", "Pending"),
            issue("d", "Graffiti", "In Progress"),
        ]
    }

    #[test]
    fn empty_filters_are_identity() {
        let issues = sample();
        let filtered = filter_issues(&issues, "", "");
        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c", "d"]);
    }

    #[test]
    fn filters_conjoin() {
        let issues = sample();
        let filtered = filter_issues(&issues, "Pothole", "Pending");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "a");
    }

    #[test]
    fn type_only_filter() {
        let filtered = filter_issues(&sample(), "Pothole", "");
        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[test]
    fn status_only_filter() {
        let filtered = filter_issues(&sample(), "", "Pending");
        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn filter_matching_is_case_sensitive() {
        assert!(filter_issues(&sample(), "pothole", "").is_empty());
        assert!(filter_issues(&sample(), "", "pending").is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_issues(&sample(), "Pothole", "In Progress").is_empty());
    }

    #[test]
    fn status_class_lowercases_for_styling() {
        assert_eq!(status_class("Pending"), "pending");
        assert_eq!(status_class("In Progress"), "in progress");
        assert_eq!(status_class("Resolved"), "resolved");
    }

    #[test]
    fn deserializes_feed_record() {
        let json = r#"{
            "id": 7,
            "title": "Broken street light",
            "type": "Street Light",
            "status": "Pending",
            "description": "Out for a week",
            "latitude": 40.1,
            "longitude": -88.2,
            "image": "/uploads/1_light.jpg",
            "timestamp": "2025-03-02T10:00:00"
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.issue_type, "Street Light");
        assert_eq!(issue.image.as_deref(), Some("/uploads/1_light.jpg"));
        assert_eq!(issue.date, "2025-03-02T10:00:00");
    }

    #[test]
    fn deserializes_without_image_or_date() {
        let json = r#"{
            "title": "t",
            "type": "Other",
            "status": "Resolved",
            "description": "d"
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert!(issue.image.is_none());
        assert!(issue.date.is_empty());
    }
}
