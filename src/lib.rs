//! time-ruler: interactive horizontal time-ruler core.
//!
//! The crate turns a reference time, a granularity ladder and pointer input
//! into deterministic draw instructions. Hosts own the event loop and the
//! drawing backend; the ruler owns layout, mapping and interaction state.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimeRuler, TimeRulerConfig};
pub use error::{RulerError, RulerResult};
