//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page has a single shared model, `recipes::RecipeState`, provided once
//! through context and mutated only by the dispatcher and the panel controls.

pub mod recipes;
