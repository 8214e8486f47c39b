//! Platform-neutral intake core.
//!
//! Everything in here is plain Rust: the page, the browser, and the network
//! are reached only through [`IntakeView`] and through the caller that
//! performs the upload. That keeps the whole lifecycle testable natively.
//!
//! ```text
//! drop / pick ──► validate ──► (caller uploads) ──► finish ──► render
//!                    │                                 │
//!                    └── notice, stay idle             └── alert, reset
//! ```

mod format;
mod state;
mod validate;
mod view;
mod widget;

pub use format::*;
pub use state::*;
pub use validate::*;
pub use view::*;
pub use widget::*;
