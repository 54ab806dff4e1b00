//! Reusable UI widgets

pub mod forms;
pub mod header;
pub mod notifications;
pub mod quote_card;
