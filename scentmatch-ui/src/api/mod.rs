//! HTTP handlers for scentmatch-ui

pub mod health;
pub mod ui;

pub use health::health_routes;
pub use ui::{form_page, submit_preferences};
