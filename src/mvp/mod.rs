//! One-shot projection of the current MVP document onto a display surface.
//!
//! The flow is: load the document ([`loader`]), take its first record, turn it
//! into display strings ([`MvpDisplay::project`]) and write those into a
//! [`DisplaySurface`] in one step. Every failure degrades to "no update".

mod error;
pub mod loader;
mod model;
mod projection;
mod surface;

pub use error::{MvpError, MvpResult};
pub use loader::{MvpSource, load_current_mvp, run_once};
pub use model::{MvpRecord, MvpStats};
pub use projection::MvpDisplay;
pub use surface::{DisplaySurface, Region, TextSurface};
