pub mod agents;
pub mod components;
pub mod controllers;
pub mod objects;
pub mod pages;
