use crate::{objects::VodId, pages::home_page::HomePage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, Debug, Clone, PartialEq)]
pub enum AppRoute {
    #[at("/")]
    Home,
    /// Served by the backend. Only used to build [`persona_path`]; the
    /// link is a plain `<a href>`, so this app never renders the route.
    #[at("/view_personas/:vod_id")]
    PersonaView { vod_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn persona_path(vod_id: &VodId) -> String {
    AppRoute::PersonaView {
        vod_id: vod_id.to_string(),
    }
    .to_path()
}

pub fn switch(route: &AppRoute) -> Html {
    match route {
        AppRoute::Home => html! {<HomePage/>},
        AppRoute::PersonaView { .. } | AppRoute::NotFound => html! {
            <section class="section">
                <p class="title">{"Page not found"}</p>
                <Link<AppRoute> classes={classes!("button")} to={AppRoute::Home}>{"Back to start"}</Link<AppRoute>>
            </section>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_path_embeds_vod_id() {
        assert_eq!(persona_path(&VodId::from("789")), "/view_personas/789");
    }
}
