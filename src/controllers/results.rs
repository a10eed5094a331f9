use crate::objects::{DownloadOutcome, VodId};

pub const DOWNLOAD_BUSY_LABEL: &str = "Downloading chat...";
pub const PERSONA_BUSY_LABEL: &str = "Generating personas...";
pub const PERSONA_SUCCESS_TEXT: &str = "Personas generated!";
pub const UNKNOWN_ERROR_TEXT: &str = "unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl Severity {
    pub fn text_class(&self) -> &'static str {
        match self {
            Severity::Success => "has-text-success",
            Severity::Danger => "has-text-danger",
        }
    }
}

impl From<bool> for Severity {
    fn from(success: bool) -> Self {
        match success {
            true => Severity::Success,
            false => Severity::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub vod_id: VodId,
    pub message: String,
    pub severity: Severity,
}

impl ResultRow {
    pub fn text(&self) -> String {
        format!("{}: {}", self.vod_id, self.message)
    }
}

impl From<(&VodId, &DownloadOutcome)> for ResultRow {
    fn from((vod_id, outcome): (&VodId, &DownloadOutcome)) -> Self {
        Self {
            vod_id: vod_id.clone(),
            message: outcome.message.clone(),
            severity: outcome.success.into(),
        }
    }
}

/// Content of the results region. Every write replaces the previous one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsView {
    #[default]
    Hidden,
    Busy(&'static str),
    Downloads(Vec<ResultRow>),
    PersonasReady { vod_id: VodId },
    Error(String),
}

impl ResultsView {
    pub fn error(err: impl ToString) -> Self {
        ResultsView::Error(err.to_string())
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ResultsView::Hidden)
    }

    pub fn banner_text(&self) -> Option<String> {
        match self {
            ResultsView::PersonasReady { .. } => Some(String::from(PERSONA_SUCCESS_TEXT)),
            ResultsView::Error(message) => Some(format!("Error: {}", message)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_from_outcome() {
        let row = ResultRow::from((
            &VodId::from("456"),
            &DownloadOutcome {
                success: false,
                message: String::from("not found"),
            },
        ));

        assert_eq!(row.text(), "456: not found");
        assert_eq!(row.severity, Severity::Danger);
        assert_eq!(row.severity.text_class(), "has-text-danger");
    }

    #[test]
    fn banners() {
        assert_eq!(
            ResultsView::error("quota exceeded").banner_text().as_deref(),
            Some("Error: quota exceeded")
        );
        assert_eq!(ResultsView::Busy(DOWNLOAD_BUSY_LABEL).banner_text(), None);
        assert!(!ResultsView::default().is_visible());
        assert!(ResultsView::Busy(PERSONA_BUSY_LABEL).is_visible());
    }
}
