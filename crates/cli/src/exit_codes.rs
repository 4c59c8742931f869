//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Codes
//!
//! | Code | Description                                          |
//! |------|------------------------------------------------------|
//! | 0    | Success                                              |
//! | 1    | General error (unspecified)                          |
//! | 2    | CLI usage error (bad args, unreadable session file)  |
//! | 3    | Calculation blocked (mandatory field missing)        |
//! | 4    | Malformed session JSON                               |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant below
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing or unreadable session file.
pub const EXIT_USAGE: u8 = 2;

/// Calculation blocked - a mandatory field (soldeDeDebut) is missing
/// or zero. `caisse calc` and `caisse validate` both use this.
pub const EXIT_BLOCKED: u8 = 3;

/// Session file exists and is readable but is not valid session JSON.
pub const EXIT_BAD_SESSION: u8 = 4;

use crate::session::SessionError;

/// Map a session error to its registered exit code.
pub fn session_exit_code(err: &SessionError) -> u8 {
    match err {
        SessionError::Read(..) => EXIT_USAGE,
        SessionError::Parse(..) => EXIT_BAD_SESSION,
        SessionError::Write(..) => EXIT_ERROR,
    }
}
