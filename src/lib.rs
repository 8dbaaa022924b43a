pub mod catalog;
pub mod config;
pub mod error;
pub mod expiry;
pub mod fields;
pub mod menu;
pub mod notify;
pub mod replace;
pub mod sandwich;
pub mod state;
pub mod workflow;
