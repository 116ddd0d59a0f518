// src/exit.rs
//! Process exit codes for `wingman`.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WingmanExit {
    Success = 0,
    /// Any failure: IO, config, parse, walk.
    Error = 1,
    /// The prompt was printed but some blocks did not fit the budget.
    Truncated = 3,
}

impl WingmanExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for WingmanExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
