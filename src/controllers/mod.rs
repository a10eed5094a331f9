//! Platform-free view-models behind the forms and the VOD select.
//!
//! Components feed them form values and settled responses; they answer with
//! the next [`ResultsView`] and with the side effects to run.

mod download;
pub use download::*;
mod inventory;
pub use inventory::*;
mod persona;
pub use persona::*;
mod results;
pub use results::*;
mod submission;
pub use submission::*;

/// Result of handing a form to a controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Submit<R> {
    /// Render `busy`, then issue `request` and settle it with `ticket`.
    Send {
        ticket: Ticket,
        request: R,
        busy: ResultsView,
    },
    /// The form did not validate; render the view, nothing is sent.
    Rejected(ResultsView),
}
