use serde::Deserialize;
use std::fmt::Display;

/// Opaque token naming one VOD in the backend's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct VodId(String);

impl VodId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VodId {
    fn from(id: &str) -> Self {
        Self(String::from(id))
    }
}

impl From<String> for VodId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Body of the inventory listing, in backend order.
pub type VodInventory = Vec<VodId>;
