//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Description                                          |
//! |------|------------------------------------------------------|
//! | 0    | Success — every left row matched                     |
//! | 1    | Comparison ran; unmatched rows found (like diff(1))  |
//! | 2    | Invalid config (parse, validation, unknown column)   |
//! | 4    | Runtime error (unreadable config, unwritable output) |
//! | 5    | Input file failed to decode                          |

/// Comparison completed but some left rows had no match.
pub const EXIT_UNMATCHED: u8 = 1;

/// Config failed to parse or validate.
pub const EXIT_INVALID_CONFIG: u8 = 2;

/// Runtime error — cannot read the config or write the output.
pub const EXIT_RUNTIME: u8 = 4;

/// An input spreadsheet failed to decode.
pub const EXIT_PARSE: u8 = 5;
