pub mod fetcher;
pub mod inventory;
