//! Button input handling
//!
//! Two edge-triggered buttons feed the [`InputRouter`], which is shared
//! between the edge task and the poll loop. The polled confirm button is
//! debounced per screen with a [`PressDetector`].

pub mod press;
pub mod router;

pub use press::PressDetector;
pub use router::{EdgeSource, InputRouter};
