//! # Editing
//!
//! Keystroke handling on top of the document model.
//!
//! - **`keys`**: `Key` identifiers, key scripts and the `KeyOutcome` result
//! - **`shortcuts`**: the table of markdown-like prefixes that format a block
//! - **`autoformat`**: `AutoFormatter`, the per-keystroke state machine
//! - **`session`**: `EditorSession`, a host that owns a document and applies
//!   plain edits whenever the auto-formatter passes a key through
//!
//! The auto-formatter never asks the host to continue a handler chain: it
//! returns `Intercepted` with the new selection or `Passthrough`, and the host
//! acts on that value.

pub mod autoformat;
pub mod keys;
pub mod session;
pub mod shortcuts;

pub use autoformat::{AutoFormatter, effective_kind, handle_key};
pub use keys::{Key, KeyOutcome, parse_script};
pub use session::{EditorSession, SessionOptions, unescape_markdown};
pub use shortcuts::{Shortcut, ShortcutTable};

use crate::models::{Document, ModelResult};

/// Runs a multi-step edit, restoring the document if any step fails.
pub(crate) fn transact<T>(
    doc: &mut Document,
    edit: impl FnOnce(&mut Document) -> ModelResult<T>,
) -> ModelResult<T> {
    let before = doc.clone();
    let result = edit(doc);
    if result.is_err() {
        *doc = before;
    }
    result
}
