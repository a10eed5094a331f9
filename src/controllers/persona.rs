use super::{ResultsView, Submissions, Submit, Ticket, PERSONA_BUSY_LABEL, UNKNOWN_ERROR_TEXT};
use crate::objects::{JsError, PersonaOutcome, PersonaRequest, VodId};

#[derive(Debug, Default)]
pub struct PersonaController {
    submissions: Submissions,
    in_flight: Option<(Ticket, VodId)>,
}

impl PersonaController {
    /// Every call supersedes earlier submissions, rejected ones included.
    pub fn submit(&mut self, vod_id: &str, num_personas: &str) -> Submit<PersonaRequest> {
        let ticket = self.submissions.begin();

        match PersonaRequest::parse(vod_id, num_personas) {
            Ok(request) => {
                self.in_flight = Some((ticket, request.vod_id.clone()));
                Submit::Send {
                    ticket,
                    request,
                    busy: ResultsView::Busy(PERSONA_BUSY_LABEL),
                }
            }
            Err(e) => {
                self.in_flight = None;
                Submit::Rejected(ResultsView::error(e))
            }
        }
    }

    /// Returns `None` for a superseded submission.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        res: Result<PersonaOutcome, JsError>,
    ) -> Option<ResultsView> {
        // the link target is the id that was submitted, whatever the body says
        let vod_id = match self.in_flight.take() {
            Some((in_flight, vod_id)) if in_flight == ticket => vod_id,
            other => {
                self.in_flight = other;
                log::debug!("persona: discarding response of superseded submission");
                return None;
            }
        };

        Some(match res {
            Ok(PersonaOutcome { success: true, .. }) => ResultsView::PersonasReady { vod_id },
            Ok(PersonaOutcome {
                success: false,
                message,
            }) => ResultsView::Error(message.unwrap_or_else(|| String::from(UNKNOWN_ERROR_TEXT))),
            Err(e) => {
                log::error!("persona generation failed: {}", e);
                ResultsView::error(e)
            }
        })
    }
}
