//! Screen state machine
//!
//! The panel cycles through four screens. Each screen owns its per-tick
//! behavior; entry actions run once per screen change.

pub mod events;
pub mod machine;

pub use events::PanelEvent;
pub use machine::Screen;
