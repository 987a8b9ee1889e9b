//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates the header and cart
//! rendering to `components`.

pub mod cart;
pub mod home;
