// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of the mock processing run.

/// Phase of the Run trigger.
///
/// `Done` is transient: the next UI tick returns it to `Idle`, so the
/// trigger can never be left stuck mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Done,
}

impl RunPhase {
    #[must_use]
    pub fn is_running(self) -> bool {
        self == RunPhase::Running
    }
}
