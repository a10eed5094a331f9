use super::router::AppRoute;
use yew::{prelude::*, Html};
use yew_router::prelude::Link;

/// Brand bar; the console is a single page, so the title links back to it.
pub struct NavBar {}

impl Component for NavBar {
    type Message = ();
    type Properties = ();

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <nav class="navbar is-primary" role="navigation">
                <div class="navbar-brand">
                    <Link<AppRoute> classes={classes!("navbar-item", "title")} to={AppRoute::Home}>{"VOD Chat Console"}</Link<AppRoute>>
                </div>
            </nav>
        }
    }

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }
}
