//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages receive the auth signal as a prop from the app root.

pub mod login;
pub mod register;
pub mod wall;
