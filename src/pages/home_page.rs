use crate::{
    components::{DownloadForm, NavBar, PersonaForm, ResultsPanel},
    controllers::ResultsView,
    objects::ApiConfig,
};
use yew::{prelude::*, Html};

/// Both forms side by side over a shared results region.
pub struct HomePage {
    config: ApiConfig,
    results: ResultsView,
}
pub enum Message {
    Results(ResultsView),
}

impl Component for HomePage {
    type Message = Message;
    type Properties = ();

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_results = ctx.link().callback(Message::Results);

        html! {
            <>
                <NavBar/>
                <section class="section">
                    <div class="columns">
                        <div class="column">
                            <div class="title is-4">{"Download chat"}</div>
                            <DownloadForm config={self.config.clone()} on_results={on_results.clone()}/>
                        </div>
                        <div class="column">
                            <div class="title is-4">{"Generate personas"}</div>
                            <PersonaForm config={self.config.clone()} on_results={on_results}/>
                        </div>
                    </div>
                </section>
                <ResultsPanel view={self.results.clone()}/>
            </>
        }
    }

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: ApiConfig::load(),
            results: ResultsView::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Results(view) => {
                self.results = view;
                true
            }
        }
    }
}
