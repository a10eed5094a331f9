use super::fetcher;
use crate::{
    controllers::{InventorySync, Ticket},
    objects::{ApiConfig, JsError, VodInventory},
};
use yew_agent::{Agent, AgentLink, Context, HandlerId};

#[derive(Debug)]
pub enum Request {
    Refresh, // answers all subscribers
}

#[derive(Debug, Clone)]
pub enum Response {
    Inventory(VodInventory),
}

#[derive(Debug)]
pub enum Message {
    Fetched(Ticket, Result<VodInventory, JsError>),
}

/// Keeps every mounted VOD select in line with the backend inventory.
pub struct Inventory {
    link: AgentLink<Self>,
    sync: InventorySync<HandlerId>,
    config: ApiConfig,
}

impl Inventory {
    fn refresh(&mut self) {
        let ticket = match self.sync.refresh() {
            Some(ticket) => ticket,
            None => {
                log::debug!("inventory: no VOD select mounted, skipping refresh");
                return;
            }
        };
        let config = self.config.clone();

        self.link.send_future(async move {
            Message::Fetched(ticket, fetcher::list_vods(&config).await)
        });
    }

    fn notify_subscribed(&self, inventory: VodInventory) {
        for subscriber in self.sync.subscribers() {
            self.link
                .respond(*subscriber, Response::Inventory(inventory.clone()));
        }
    }
}

impl Agent for Inventory {
    type Reach = Context<Self>;
    type Message = Message;
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            sync: InventorySync::default(),
            config: ApiConfig::load(),
        }
    }

    fn update(&mut self, msg: Self::Message) {
        match msg {
            Message::Fetched(ticket, res) => {
                if let Some(inventory) = self.sync.settle(ticket, res) {
                    self.notify_subscribed(inventory);
                }
            }
        }
    }

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        match msg {
            Request::Refresh => self.refresh(),
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.sync.connect(id, id.is_respondable());
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.sync.disconnect(id);
    }
}
