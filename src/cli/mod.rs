//! Command-line interface for the `libzip` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity and the shared `DISPLAY_LEVEL` atomic with its display macros. |
//! | [`help`]      | Usage, long help and version printers. |
//! | [`arg_utils`] | Low-level helpers: path basename, integer parsing, long-option prefixes. |
//! | [`op_mode`]   | `OpMode`, suffix-based mode selection and environment-based defaults. |
//! | [`args`]      | `ParsedArgs`: the argument loop that produces the final runtime options. |
//!
//! Typical call sequence: `parse_args` → resolve `OpMode` per input → hand
//! off to [`crate::io`].

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod op_mode;
pub mod args;
