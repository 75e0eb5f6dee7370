//! Browser-side helpers that pages call for document-level effects.
//!
//! `scroll_lock` toggles `overflow` on `<body>` while the detail overlay is
//! open. It writes to the DOM only in hydrate builds and is a no-op on the
//! server.

pub mod scroll_lock;
