//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive data and signals as props
//! and report user intent upward through callbacks. Only the wall page talks
//! to the API.

pub mod add_image_modal;
pub mod add_sticky_modal;
pub mod header;
pub mod image_card;
pub mod lightbox;
pub mod sticky_note;
