//! Shared plumbing for the `quire` binary: platform directories and logging.
//!
//! The palette itself lives in `quire-palette`; the terminal host in
//! `quire-tui`.

pub mod app_dirs;
pub mod logging;
