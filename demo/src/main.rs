//! Starts the ripple overlay behind the page content.
//!
//! Build and serve with `trunk serve` from this directory.

use std::io;

use resonance::{EffectController, EffectOptions, OverlaySurface};

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let options = EffectOptions::default();
    let surface = OverlaySurface::new_with_options(&options)?;
    let mut effect = EffectController::new(surface, options)?;
    effect.start()?;

    // Dropping the controller would stop the effect, keep it for the
    // lifetime of the page instead.
    std::mem::forget(effect);

    Ok(())
}
