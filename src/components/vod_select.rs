use crate::{
    agents::inventory::{self, Inventory},
    controllers::VodOptions,
    objects::VOD_ID_FIELD,
};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

/// Single-choice control filled from the backend inventory.
pub struct VodSelect {
    _inventory: Box<dyn Bridge<Inventory>>,
    options: VodOptions,
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub select_ref: NodeRef,
}

pub enum Message {
    InventoryResponse(inventory::Response),
    Select(Event),
}

impl Component for VodSelect {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut inventory = Inventory::bridge(ctx.link().callback(Message::InventoryResponse));

        inventory.send(inventory::Request::Refresh);

        Self {
            _inventory: inventory,
            options: VodOptions::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::InventoryResponse(inventory::Response::Inventory(inventory)) => {
                self.options.replace(inventory);
                true
            }
            Message::Select(event) => match event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            {
                Some(select) => {
                    self.options.select(&select.value());
                    false
                }
                None => {
                    log::error!("vod select: change event without select target");
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="select is-fullwidth">
                <select id={VOD_ID_FIELD} name={VOD_ID_FIELD} ref={ctx.props().select_ref.clone()} onchange={ctx.link().callback(Message::Select)}>
                    { for self.options.options().into_iter().map(|opt| html! {
                        <option value={opt.value} selected={opt.selected}>{opt.label}</option>
                    }) }
                </select>
            </div>
        }
    }
}
