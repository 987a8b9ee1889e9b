//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the storefront header chrome and read/write the shared
//! cart state from Leptos context.

pub mod cart_dropdown;
pub mod cart_line;
pub mod header;
