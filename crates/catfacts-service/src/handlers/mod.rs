//! API handlers.

pub mod facts;
pub mod health;
pub mod ui;
