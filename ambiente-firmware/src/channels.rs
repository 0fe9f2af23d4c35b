//! State shared between tasks
//!
//! The button task and the panel task only meet here: edges go through the
//! atomic [`InputRouter`], and the panel publishes what it did on
//! [`EVENT_CHANNEL`] for the event log task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use ambiente_core::config::Timing;
use ambiente_core::input::InputRouter;
use ambiente_core::state::PanelEvent;

/// Channel capacity for panel events
const EVENT_CHANNEL_SIZE: usize = 16;

/// Button edges waiting for the poll loop
///
/// Starts with the default debounce window; the panel task applies the
/// configured one on start.
pub static INPUT_ROUTER: InputRouter = InputRouter::new(Timing::DEFAULT.debounce_ms);

/// Panel events (for logging)
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, PanelEvent, EVENT_CHANNEL_SIZE> =
    Channel::new();
