// src/exit.rs
//! Process exit codes for `lineage`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LineageExit {
    /// Command completed.
    Success = 0,
    /// Generic error (I/O, unreadable snapshot, bad config).
    Error = 1,
    /// The request named something that does not exist (unknown person or family).
    InvalidInput = 2,
    /// `check` found integrity warnings in the snapshot.
    IntegrityWarnings = 3,
}

impl LineageExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for LineageExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
