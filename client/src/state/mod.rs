//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs held in `RwSignal`s by the app root and the wall page.
//! All transitions are ordinary methods so they can be tested without a
//! browser.

pub mod auth;
pub mod ui;
pub mod wall;
