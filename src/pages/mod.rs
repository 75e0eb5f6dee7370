//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The home page owns orchestration (spawning dispatcher calls, window-level
//! keyboard handling) and delegates rendering to `components`.

pub mod home;
