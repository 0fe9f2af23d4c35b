//! Debounced edge router
//!
//! The edge task calls [`InputRouter::on_edge`] for every falling edge. The
//! poll loop drains the resulting flags once per tick. Everything is kept
//! in atomics so the router can live in a `static` and be touched from
//! both sides without a lock.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Physical source of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeSource {
    /// Joystick push switch, advances the menu
    Menu,
    /// Button B, toggles the low-water latch
    Secondary,
}

/// Shared debounce clock and saturating event flags
pub struct InputRouter {
    debounce_ms: AtomicU32,
    /// Timestamp of the last accepted edge from either source
    last_accept_ms: AtomicU32,
    advance: AtomicBool,
    secondary: AtomicBool,
    menu_enabled: AtomicBool,
    secondary_enabled: AtomicBool,
}

impl InputRouter {
    /// Create a router with both sources enabled
    ///
    /// The debounce clock starts at zero, so edges in the first
    /// `debounce_ms` after boot are dropped.
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms: AtomicU32::new(debounce_ms),
            last_accept_ms: AtomicU32::new(0),
            advance: AtomicBool::new(false),
            secondary: AtomicBool::new(false),
            menu_enabled: AtomicBool::new(true),
            secondary_enabled: AtomicBool::new(true),
        }
    }

    pub fn set_debounce_ms(&self, debounce_ms: u32) {
        self.debounce_ms.store(debounce_ms, Ordering::Relaxed);
    }

    /// Handle one raw edge at `now_ms`
    ///
    /// Returns `true` if the edge was accepted. Edges from a disabled
    /// source leave the debounce clock untouched.
    pub fn on_edge(&self, source: EdgeSource, now_ms: u32) -> bool {
        if !self.is_enabled(source) {
            return false;
        }

        let last = self.last_accept_ms.load(Ordering::Acquire);
        if now_ms.wrapping_sub(last) <= self.debounce_ms.load(Ordering::Relaxed) {
            return false;
        }

        self.last_accept_ms.store(now_ms, Ordering::Release);
        self.flag(source).store(true, Ordering::Release);
        true
    }

    /// Consume a pending menu-advance event
    pub fn take_advance(&self) -> bool {
        self.advance.swap(false, Ordering::AcqRel)
    }

    /// Consume a pending secondary-toggle event
    pub fn take_secondary(&self) -> bool {
        self.secondary.swap(false, Ordering::AcqRel)
    }

    pub fn set_enabled(&self, source: EdgeSource, enabled: bool) {
        self.enable_bit(source).store(enabled, Ordering::Release);
    }

    pub fn is_enabled(&self, source: EdgeSource) -> bool {
        self.enable_bit(source).load(Ordering::Acquire)
    }

    fn flag(&self, source: EdgeSource) -> &AtomicBool {
        match source {
            EdgeSource::Menu => &self.advance,
            EdgeSource::Secondary => &self.secondary,
        }
    }

    fn enable_bit(&self, source: EdgeSource) -> &AtomicBool {
        match source {
            EdgeSource::Menu => &self.menu_enabled,
            EdgeSource::Secondary => &self.secondary_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_sets_flag() {
        let router = InputRouter::new(200);
        assert!(router.on_edge(EdgeSource::Menu, 1000));
        assert!(router.take_advance());
        assert!(!router.take_advance());
        assert!(!router.take_secondary());
    }

    #[test]
    fn test_boot_window_ignored() {
        let router = InputRouter::new(200);
        assert!(!router.on_edge(EdgeSource::Menu, 150));
        assert!(!router.on_edge(EdgeSource::Menu, 200));
        assert!(router.on_edge(EdgeSource::Menu, 201));
    }

    #[test]
    fn test_debounce_shared_between_sources() {
        let router = InputRouter::new(200);
        assert!(router.on_edge(EdgeSource::Menu, 1000));
        assert!(!router.on_edge(EdgeSource::Secondary, 1100));
        assert!(!router.on_edge(EdgeSource::Menu, 1200));
        assert!(router.on_edge(EdgeSource::Secondary, 1201));
        assert!(router.take_advance());
        assert!(router.take_secondary());
    }

    #[test]
    fn test_rejected_edge_does_not_reset_clock() {
        let router = InputRouter::new(200);
        assert!(router.on_edge(EdgeSource::Menu, 1000));
        assert!(!router.on_edge(EdgeSource::Menu, 1150));
        // Measured from 1000, not from the rejected edge at 1150
        assert!(router.on_edge(EdgeSource::Menu, 1250));
    }

    #[test]
    fn test_flags_coalesce() {
        let router = InputRouter::new(200);
        assert!(router.on_edge(EdgeSource::Menu, 1000));
        assert!(router.on_edge(EdgeSource::Menu, 1300));
        assert!(router.on_edge(EdgeSource::Menu, 1600));
        assert!(router.take_advance());
        assert!(!router.take_advance());
    }

    #[test]
    fn test_disabled_source_ignored() {
        let router = InputRouter::new(200);
        router.set_enabled(EdgeSource::Secondary, false);
        assert!(!router.on_edge(EdgeSource::Secondary, 1000));
        assert!(!router.take_secondary());
        // Disabled edge did not touch the clock
        assert!(router.on_edge(EdgeSource::Menu, 1050));

        router.set_enabled(EdgeSource::Secondary, true);
        assert!(router.on_edge(EdgeSource::Secondary, 1300));
        assert!(router.take_secondary());
    }

    #[test]
    fn test_clock_wraparound() {
        let router = InputRouter::new(200);
        assert!(router.on_edge(EdgeSource::Menu, u32::MAX - 50));
        assert!(!router.on_edge(EdgeSource::Menu, 100));
        assert!(router.on_edge(EdgeSource::Menu, 200));
    }
}
