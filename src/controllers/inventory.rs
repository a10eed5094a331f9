use super::{Submissions, Ticket};
use crate::objects::{JsError, VodId, VodInventory};
use std::{collections::HashSet, hash::Hash};

pub const VOD_PLACEHOLDER_LABEL: &str = "Select a VOD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VodOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Options of the VOD select: the placeholder followed by the last inventory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VodOptions {
    inventory: VodInventory,
    selected: Option<VodId>,
}

impl VodOptions {
    /// Swaps the whole option set. The selection survives only if its id is still listed.
    pub fn replace(&mut self, inventory: VodInventory) {
        if let Some(selected) = &self.selected {
            if !inventory.contains(selected) {
                self.selected = None;
            }
        }
        self.inventory = inventory;
    }

    pub fn select(&mut self, value: &str) {
        self.selected = match value {
            "" => None,
            value => Some(VodId::from(value)),
        };
    }

    pub fn selected(&self) -> Option<&VodId> {
        self.selected.as_ref()
    }

    pub fn options(&self) -> Vec<VodOption> {
        let placeholder = VodOption {
            value: String::new(),
            label: String::from(VOD_PLACEHOLDER_LABEL),
            selected: self.selected.is_none(),
        };
        let mut marked = false;

        std::iter::once(placeholder)
            .chain(self.inventory.iter().map(|vod_id| {
                // with duplicate ids only the first copy is marked
                let selected = !marked && self.selected.as_ref() == Some(vod_id);

                marked |= selected;
                VodOption {
                    value: vod_id.to_string(),
                    label: vod_id.to_string(),
                    selected,
                }
            }))
            .collect()
    }
}

/// Bookkeeping of the inventory service: which selects listen and which fetch may answer them.
#[derive(Debug)]
pub struct InventorySync<H> {
    subscribers: HashSet<H>,
    fetches: Submissions,
}

impl<H> Default for InventorySync<H> {
    fn default() -> Self {
        Self {
            subscribers: HashSet::new(),
            fetches: Submissions::default(),
        }
    }
}

impl<H: Copy + Eq + Hash> InventorySync<H> {
    /// Only handlers that can be answered count; dispatchers merely ask for refreshes.
    pub fn connect(&mut self, id: H, respondable: bool) {
        if respondable {
            self.subscribers.insert(id);
        }
    }

    pub fn disconnect(&mut self, id: H) {
        self.subscribers.remove(&id);
    }

    pub fn subscribers(&self) -> impl Iterator<Item = &H> {
        self.subscribers.iter()
    }

    /// `None` when no select is mounted: nothing to fill, nothing fetched.
    pub fn refresh(&mut self) -> Option<Ticket> {
        match self.subscribers.is_empty() {
            true => None,
            false => Some(self.fetches.begin()),
        }
    }

    /// The inventory to broadcast, if this fetch is the latest and succeeded.
    /// Failures only reach the console; the selects keep what they show.
    pub fn settle(
        &self,
        ticket: Ticket,
        res: Result<VodInventory, JsError>,
    ) -> Option<VodInventory> {
        match res {
            Ok(_) if !self.fetches.is_current(ticket) => {
                log::debug!("inventory: discarding superseded listing");
                None
            }
            Ok(inventory) => {
                log::debug!("inventory: {} VODs", inventory.len());
                Some(inventory)
            }
            Err(e) => {
                log::error!("error loading VODs: {}", e);
                None
            }
        }
    }
}
