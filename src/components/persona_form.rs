use super::vod_select::VodSelect;
use crate::{
    agents::fetcher,
    controllers::{PersonaController, ResultsView, Submit, Ticket},
    objects::{
        ApiConfig, JsError, PersonaOutcome, DEFAULT_NUM_PERSONAS, MAX_PERSONAS,
        NUM_PERSONAS_FIELD, VOD_ID_FIELD,
    },
};
use web_sys::{FocusEvent, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub struct PersonaForm {
    controller: PersonaController,
    select_ref: NodeRef,
    count_ref: NodeRef,
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub config: ApiConfig,
    pub on_results: Callback<ResultsView>,
}

pub enum Message {
    Submit,
    Settled(Ticket, Result<PersonaOutcome, JsError>),
}

impl PersonaForm {
    fn process_update(&mut self, ctx: &Context<Self>, msg: Message) -> Result<bool, JsError> {
        match msg {
            Message::Submit => {
                let vod_id = self
                    .select_ref
                    .cast::<HtmlSelectElement>()
                    .ok_or("error getting VOD select")?
                    .value();
                let num_personas = self
                    .count_ref
                    .cast::<HtmlInputElement>()
                    .ok_or("error getting persona count input")?
                    .value();

                match self.controller.submit(&vod_id, &num_personas) {
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
                                fetcher::generate_personas(&config, &request).await,
                            )
                        });
                    }
                    Submit::Rejected(view) => ctx.props().on_results.emit(view),
                }
                Ok(false)
            }
            Message::Settled(ticket, res) => {
                if let Some(view) = self.controller.settle(ticket, res) {
                    ctx.props().on_results.emit(view);
                }
                Ok(false)
            }
        }
    }
}

impl Component for PersonaForm {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: PersonaController::default(),
            select_ref: NodeRef::default(),
            count_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match self.process_update(ctx, msg) {
            Ok(should_render) => should_render,
            Err(e) => {
                log::error!("persona form: {}", e);
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
            <form id="personaForm" onsubmit={onsubmit}>
                <div class="field">
                    <label class="label" for={VOD_ID_FIELD}>{"VOD"}</label>
                    <div class="control">
                        <VodSelect select_ref={self.select_ref.clone()}/>
                    </div>
                </div>
                <div class="field">
                    <label class="label" for={NUM_PERSONAS_FIELD}>{"Number of personas"}</label>
                    <div class="control">
                        <input class="input" type="number" id={NUM_PERSONAS_FIELD} name={NUM_PERSONAS_FIELD} ref={self.count_ref.clone()} min="1" max={MAX_PERSONAS.to_string()} value={DEFAULT_NUM_PERSONAS.to_string()}/>
                    </div>
                </div>
                <div class="field">
                    <div class="control"><button class="button is-primary" type="submit">{"Generate personas"}</button></div>
                </div>
            </form>
        }
    }
}
