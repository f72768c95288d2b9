//! The diagnostics gate.
//!
//! Informational events are emitted only while debug mode is on; error
//! events bypass the gate everywhere. The flag is plain instance state, so
//! two [`Stowage`](crate::Stowage) instances can hold different settings,
//! and flipping it needs `&mut` access like any other field.

use tracing::info;

/// Per-instance switch for informational logging. Off by default.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Diagnostics {
    debug: bool,
}

impl Diagnostics {
    /// Overwrite the debug state.
    ///
    /// The change itself is reported only when debug mode was already on,
    /// so turning it on stays silent and turning it off announces itself.
    pub fn set_debug_mode(&mut self, on: bool) {
        if self.debug {
            info!(debug_mode = on, "changing debug mode");
        }
        self.debug = on;
    }

    /// Current debug state; informational events fire only while this is true.
    pub fn debug_mode(&self) -> bool {
        self.debug
    }
}
