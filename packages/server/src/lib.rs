// Hommage - Memorial Event Site API
//
// This crate provides the backend for the memorial site: it receives form
// submissions from the static front-end (attendance, hotel reservation,
// pagne orders, condolences), relays each one as a formatted HTML email,
// and keeps the most recent condolence messages in memory for display.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
