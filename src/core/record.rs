//! Canonical data structure for one analyzed URL.
//!
//! Every row in the results table is an [`AnalysisRecord`]: the outcome of
//! checking a single site's robots.txt for Google-crawler disallow rules.
//! The struct carries both the structured verdict and the raw robots.txt
//! content for display in the detail window.

/// Outcome of the analysis request for one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// robots.txt was fetched and evaluated.
    Success,
    /// The fetch or evaluation failed; see `error_message`.
    Error,
}

/// One `Disallow:` rule that applies to a Google user agent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisallowRule {
    /// The user agent the rule block was declared for (e.g. `"Googlebot"`).
    pub agent: String,
    /// The disallowed path pattern (e.g. `"/private/"`).
    pub rule: String,
}

/// Display category of a record, driving filter visibility and row colour.
///
/// Each record maps to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Analysis succeeded and Google crawlers are not restricted.
    Allowed,
    /// Analysis succeeded and at least one Google crawler is restricted.
    Disallowed,
    /// The analysis itself failed.
    Error,
}

/// Analysis result for a single submitted URL.
///
/// The field set mirrors the report schema RobotScope imports and exports,
/// so records round-trip through JSON unchanged. Optional fields default to
/// empty when absent from an imported report.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisRecord {
    /// The URL as the user submitted it.
    pub url: String,

    /// Resolved robots.txt URL (e.g. `https://example.com/robots.txt`).
    /// Empty for records whose fetch never got that far.
    #[serde(default)]
    pub robots_url: String,

    /// Whether the analysis succeeded or failed.
    pub status: AnalysisStatus,

    /// `true` if any Google user agent is disallowed by the robots.txt.
    #[serde(default)]
    pub google_disallowed: bool,

    /// The disallow rules that matched Google user agents.
    #[serde(default)]
    pub disallow_rules: Vec<DisallowRule>,

    /// Raw robots.txt content — retained verbatim for the detail window.
    #[serde(default)]
    pub robots_content: String,

    /// Human-readable failure description; empty on success.
    #[serde(default)]
    pub error_message: String,
}

impl AnalysisRecord {
    /// Build an error record for a URL whose analysis failed outright.
    pub fn failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            robots_url: String::new(),
            status: AnalysisStatus::Error,
            google_disallowed: false,
            disallow_rules: Vec::new(),
            robots_content: String::new(),
            error_message: message.into(),
        }
    }

    /// The display category this record falls into.
    pub fn category(&self) -> Category {
        match self.status {
            AnalysisStatus::Error => Category::Error,
            AnalysisStatus::Success => {
                if self.google_disallowed {
                    Category::Disallowed
                } else {
                    Category::Allowed
                }
            }
        }
    }

    /// Text shown in the Status column.
    pub fn status_label(&self) -> &'static str {
        match self.status {
            AnalysisStatus::Success => "success",
            AnalysisStatus::Error => "error",
        }
    }

    /// Text shown in the Google Check column.
    pub fn check_label(&self) -> &'static str {
        match self.category() {
            Category::Allowed => "Allowed",
            Category::Disallowed => "Disallowed",
            Category::Error => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(url: &str, disallowed: bool) -> AnalysisRecord {
        AnalysisRecord {
            url: url.into(),
            robots_url: format!("{url}/robots.txt"),
            status: AnalysisStatus::Success,
            google_disallowed: disallowed,
            disallow_rules: vec![],
            robots_content: "User-agent: *".into(),
            error_message: String::new(),
        }
    }

    #[test]
    fn category_follows_status_and_verdict() {
        assert_eq!(success("https://a.com", false).category(), Category::Allowed);
        assert_eq!(
            success("https://a.com", true).category(),
            Category::Disallowed
        );
        assert_eq!(
            AnalysisRecord::failed("https://a.com", "timeout").category(),
            Category::Error
        );
    }

    #[test]
    fn check_label_matches_category() {
        assert_eq!(success("x", false).check_label(), "Allowed");
        assert_eq!(success("x", true).check_label(), "Disallowed");
        assert_eq!(AnalysisRecord::failed("x", "boom").check_label(), "Error");
    }
}
