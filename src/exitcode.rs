//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination, the user answered `no`
pub const OK: i32 = 0;

/// Input ended before the session did
pub const NOINPUT: i32 = 66;

/// Input/output error on the terminal
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
