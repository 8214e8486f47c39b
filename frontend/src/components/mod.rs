//! UI Components for the intake page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`IntakePanel`] - Drop zone, file picker, and the upload lifecycle
//! - [`ProgressSection`] - In-flight indicator
//! - [`ResultSection`] - Converted totals and download control
//!
//! # View binding
//! - [`SignalView`] - Signal-backed [`crate::intake::IntakeView`]

mod hero;
mod upload;
mod progress;
mod result;
mod footer;
mod view;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use result::*;
pub use footer::*;
pub use view::*;
