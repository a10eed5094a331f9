use super::{ResultRow, ResultsView, Submissions, Submit, Ticket, DOWNLOAD_BUSY_LABEL};
use crate::objects::{DownloadRequest, DownloadResults, JsError};

/// What a settled download asks of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSettled {
    /// `None` when the response belongs to a superseded submission.
    pub view: Option<ResultsView>,
    pub refresh_inventory: bool,
}

#[derive(Debug, Default)]
pub struct DownloadController {
    submissions: Submissions,
}

impl DownloadController {
    /// Every call supersedes earlier submissions, rejected ones included.
    pub fn submit(&mut self, raw_urls: &str) -> Submit<DownloadRequest> {
        let ticket = self.submissions.begin();

        match DownloadRequest::parse(raw_urls) {
            Ok(request) => Submit::Send {
                ticket,
                request,
                busy: ResultsView::Busy(DOWNLOAD_BUSY_LABEL),
            },
            Err(e) => Submit::Rejected(ResultsView::error(e)),
        }
    }

    pub fn settle(
        &mut self,
        ticket: Ticket,
        res: Result<DownloadResults, JsError>,
    ) -> DownloadSettled {
        let current = self.submissions.is_current(ticket);

        if !current {
            log::debug!("download: discarding response of superseded submission");
        }

        match res {
            // the backend may have registered new VODs even if one row failed
            Ok(results) => DownloadSettled {
                view: current.then(|| {
                    ResultsView::Downloads(
                        results
                            .iter()
                            .map(|(id, outcome)| ResultRow::from((id, outcome)))
                            .collect(),
                    )
                }),
                refresh_inventory: true,
            },
            Err(e) => {
                log::error!("download failed: {}", e);
                DownloadSettled {
                    view: current.then(|| ResultsView::error(e)),
                    refresh_inventory: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        controllers::Severity,
        objects::{DownloadOutcome, FormError, VodId},
    };

    fn outcome(success: bool, message: &str) -> DownloadOutcome {
        DownloadOutcome {
            success,
            message: String::from(message),
        }
    }

    fn send(controller: &mut DownloadController, raw: &str) -> Ticket {
        match controller.submit(raw) {
            Submit::Send { ticket, busy, .. } => {
                assert_eq!(busy, ResultsView::Busy(DOWNLOAD_BUSY_LABEL));
                ticket
            }
            Submit::Rejected(view) => panic!("unexpected rejection: {:?}", view),
        }
    }

    #[test]
    fn rows_are_styled_independently() {
        let mut controller = DownloadController::default();
        let ticket = send(&mut controller, "A,B,C");
        let results = DownloadResults::from(vec![
            (VodId::from("A"), outcome(true, "ok")),
            (VodId::from("B"), outcome(false, "not found")),
            (VodId::from("C"), outcome(true, "ok")),
        ]);

        let settled = controller.settle(ticket, Ok(results));

        match settled.view {
            Some(ResultsView::Downloads(rows)) => {
                let severities: Vec<Severity> = rows.iter().map(|row| row.severity).collect();

                assert_eq!(
                    severities,
                    vec![Severity::Success, Severity::Danger, Severity::Success]
                );
            }
            other => panic!("unexpected view: {:?}", other),
        }
        assert!(settled.refresh_inventory);
    }

    #[test]
    fn empty_results_still_refresh_inventory() {
        let mut controller = DownloadController::default();
        let ticket = send(&mut controller, "123");

        let settled = controller.settle(ticket, Ok(DownloadResults::default()));

        assert_eq!(settled.view, Some(ResultsView::Downloads(Vec::new())));
        assert!(settled.refresh_inventory);
    }

    #[test]
    fn transport_failure_renders_banner_without_refresh() {
        let mut controller = DownloadController::default();
        let ticket = send(&mut controller, "123");

        let settled = controller.settle(ticket, Err(JsError::from("Failed to fetch")));

        assert_eq!(
            settled,
            DownloadSettled {
                view: Some(ResultsView::Error(String::from("Failed to fetch"))),
                refresh_inventory: false,
            }
        );
    }

    #[test]
    fn stale_response_is_not_rendered_but_refreshes() {
        let mut controller = DownloadController::default();
        let first = send(&mut controller, "123");
        let second = send(&mut controller, "456");

        let stale = controller.settle(
            first,
            Ok(DownloadResults::from(vec![(
                VodId::from("123"),
                outcome(true, "ok"),
            )])),
        );
        let stale_failure = controller.settle(first, Err(JsError::from("Failed to fetch")));
        let latest = controller.settle(
            second,
            Ok(DownloadResults::from(vec![(
                VodId::from("456"),
                outcome(true, "ok"),
            )])),
        );

        assert_eq!(stale.view, None);
        assert!(stale.refresh_inventory);
        assert_eq!(stale_failure.view, None);
        assert!(!stale_failure.refresh_inventory);
        assert!(
            matches!(latest.view, Some(ResultsView::Downloads(rows)) if rows[0].text() == "456: ok")
        );
    }

    #[test]
    fn rejected_form_supersedes_request_in_flight() {
        let mut controller = DownloadController::default();
        let ticket = send(&mut controller, "123");

        assert_eq!(
            controller.submit("  "),
            Submit::Rejected(ResultsView::error(FormError::NoVodUrls))
        );

        let settled = controller.settle(ticket, Ok(DownloadResults::default()));

        // the validation banner stays, the inventory still follows the backend
        assert_eq!(settled.view, None);
        assert!(settled.refresh_inventory);
    }
}
