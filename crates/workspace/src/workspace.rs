//! Session arena for paneterm.
//!
//! Owns one layout per session, applies commands and keys to it, and
//! reports tab lifecycle changes to the terminal transport.

mod command_palette;
mod commands;
mod error;
mod keymap;
mod sessions;
mod transport;

pub use command_palette::{CommandEntry, CommandPalette};
pub use error::{Result, WorkspaceError};
pub use keymap::{ChordError, KeyChord, Keymap};
pub use sessions::Workspace;
pub use transport::{NullTransport, TerminalTransport};
