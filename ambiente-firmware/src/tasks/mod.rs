//! Embassy async tasks
//!
//! The button task and the panel task communicate only through the
//! shared state in [`crate::channels`].

pub mod buttons;
pub mod events;
pub mod panel;

pub use buttons::buttons_task;
pub use events::event_log_task;
pub use panel::{panel_task, FrontPanel};
