//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page binds its data through `util::resource` and delegates shared
//! rendering to `components`; none of them talks to the network directly.

pub mod cart;
pub mod change_password;
pub mod courses;
pub mod exam_results;
