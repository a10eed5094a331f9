use super::router::persona_path;
use crate::controllers::{ResultRow, ResultsView};
use yew::prelude::*;

/// The region both forms report into.
pub struct ResultsPanel {}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub view: ResultsView,
}

impl ResultsPanel {
    fn view_busy(&self, label: &str) -> Html {
        html! {
            <div class="has-text-centered">
                <progress class="progress is-small is-primary" max="100"></progress>
                <p>{label}</p>
            </div>
        }
    }

    fn view_rows(&self, rows: &[ResultRow]) -> Html {
        html! {
            <>
                <h4 class="title is-5">{"Results:"}</h4>
                <ul>
                    { for rows.iter().map(|row| html! {
                        <li class={row.severity.text_class()}>{row.text()}</li>
                    }) }
                </ul>
            </>
        }
    }

    fn view_banner(&self, view: &ResultsView, color: &'static str) -> Html {
        match view.banner_text() {
            Some(text) => html! { <div class={classes!("notification", color)}>{text}</div> },
            None => html! {},
        }
    }
}

impl Component for ResultsPanel {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = &ctx.props().view;

        if !view.is_visible() {
            return html! {};
        }

        html! {
            <section class="section" id="results">
                <div class="box">
                    {match view {
                        ResultsView::Hidden => html! {},
                        ResultsView::Busy(label) => self.view_busy(label),
                        ResultsView::Downloads(rows) => self.view_rows(rows),
                        ResultsView::PersonasReady { vod_id } => html! {
                            <>
                                { self.view_banner(view, "is-success") }
                                <a href={persona_path(vod_id)} class="button is-primary">{"View Personas"}</a>
                            </>
                        },
                        ResultsView::Error(_) => self.view_banner(view, "is-danger"),
                    }}
                </div>
            </section>
        }
    }
}
