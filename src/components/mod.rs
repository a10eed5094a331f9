mod download_form;
mod nav_bar;
mod persona_form;
mod results_panel;
pub mod router;
mod top;
mod vod_select;
pub use download_form::DownloadForm;
pub use nav_bar::NavBar;
pub use persona_form::PersonaForm;
pub use results_panel::ResultsPanel;
pub use top::Top;
pub use vod_select::VodSelect;
