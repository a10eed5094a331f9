use crate::{
    agents::{
        fetcher,
        inventory::{self, Inventory},
    },
    controllers::{DownloadController, ResultsView, Submit, Ticket},
    objects::{ApiConfig, DownloadResults, JsError, TWITCH_URLS_FIELD},
};
use web_sys::{FocusEvent, HtmlTextAreaElement};
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};

pub struct DownloadForm {
    controller: DownloadController,
    inventory: Dispatcher<Inventory>,
    urls_ref: NodeRef,
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub config: ApiConfig,
    pub on_results: Callback<ResultsView>,
}

pub enum Message {
    Submit,
    Settled(Ticket, Result<DownloadResults, JsError>),
}

impl DownloadForm {
    fn process_update(&mut self, ctx: &Context<Self>, msg: Message) -> Result<bool, JsError> {
        match msg {
            Message::Submit => {
                let raw_urls = self
                    .urls_ref
                    .cast::<HtmlTextAreaElement>()
                    .ok_or("error getting VOD url input")?
                    .value();

                match self.controller.submit(&raw_urls) {
                    Submit::Send {
                        ticket,
                        request,
                        busy,
                    } => {
                        ctx.props().on_results.emit(busy);

                        let config = ctx.props().config.clone();

                        ctx.link().send_future(async move {
                            Message::Settled(
                                ticket,
                                fetcher::download_chats(&config, &request).await,
                            )
                        });
                    }
                    Submit::Rejected(view) => ctx.props().on_results.emit(view),
                }
                Ok(false)
            }
            Message::Settled(ticket, res) => {
                let settled = self.controller.settle(ticket, res);

                if let Some(view) = settled.view {
                    ctx.props().on_results.emit(view);
                }
                if settled.refresh_inventory {
                    self.inventory.send(inventory::Request::Refresh);
                }
                Ok(false)
            }
        }
    }
}

impl Component for DownloadForm {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: DownloadController::default(),
            inventory: Inventory::dispatcher(),
            urls_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match self.process_update(ctx, msg) {
            Ok(should_render) => should_render,
            Err(e) => {
                log::error!("download form: {}", e);
                ctx.props().on_results.emit(ResultsView::error(e));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: FocusEvent| {
            e.prevent_default();
            Message::Submit
        });

        html! {
            <form id="downloadForm" onsubmit={onsubmit}>
                <div class="field">
                    <label class="label" for={TWITCH_URLS_FIELD}>{"VOD urls"}</label>
                    <div class="control">
                        <textarea class="textarea" id={TWITCH_URLS_FIELD} name={TWITCH_URLS_FIELD} ref={self.urls_ref.clone()} placeholder="https://www.twitch.tv/videos/123456789, one per line or comma separated"></textarea>
                    </div>
                </div>
                <div class="field">
                    <div class="control"><button class="button is-primary" type="submit">{"Download chat"}</button></div>
                </div>
            </form>
        }
    }
}
