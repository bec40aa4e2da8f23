//! ## Resonance
//!
//! Decorative ripple overlay for web page backgrounds, built with WebAssembly.
//!
//! Every few seconds a pulse starts a new wave at the center of the viewport.
//! The wave spreads towards both edges as a pair of dark bands whose strength
//! decays while oscillating, until it fades out. On every animation frame, the
//! active waves are turned into CSS linear gradients layered on a full
//! viewport overlay.
//!
//! ```no_run
//! use resonance::{EffectController, EffectOptions, OverlaySurface};
//!
//! # fn main() -> Result<(), resonance::error::Error> {
//! let options = EffectOptions::default();
//! let surface = OverlaySurface::new_with_options(&options)?;
//! let mut effect = EffectController::new(surface, options)?;
//! effect.start()?;
//! // The effect stops when `effect` is dropped.
//! # Ok(())
//! # }
//! ```
//!
//! The numeric core ([`Wave`], [`Compositor`]) does not depend on the browser
//! and can be driven with any clock and any [`Surface`].

/// Waves and their visual parameters.
pub mod wave;

/// CSS gradient layers.
pub mod gradient;

/// Active wave tracking and frame compositing.
pub mod compositor;

/// Paintable surfaces.
pub mod surface;

/// Timer and animation frame lifecycle.
pub mod controller;

/// Time and callback sources.
pub mod scheduler;

/// Configuration.
pub mod options;

/// Error type.
pub mod error;

/// Utility functions.
pub mod utils;

pub use compositor::Compositor;
pub use controller::EffectController;
pub use gradient::{Background, GradientLayer};
pub use options::EffectOptions;
pub use scheduler::{BrowserScheduler, Scheduler};
pub use surface::{MemorySurface, OverlaySurface, Surface};
pub use wave::{Wave, WaveId, WaveParameters};
