//! Suspicious marker scanning over raw document bytes.
//!
//! Markers are literal PDF action/object tokens (`/JavaScript`, `/URI`, ...)
//! optionally followed by a parenthesised payload. Scanning is best-effort
//! text matching over lossy-decoded bytes and never fails, whatever the
//! input looks like.

pub(crate) mod literal;
mod scanner;

pub use scanner::scan_signals;
