use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use crate::{
    compositor::Compositor,
    error::Error,
    gradient::Background,
    options::EffectOptions,
    scheduler::{BrowserScheduler, Scheduler},
    surface::Surface,
    utils::{log_debug, log_error},
};

/// State shared between the controller and the scheduled callbacks.
#[derive(Debug)]
struct EffectState<S> {
    compositor: Compositor,
    surface: S,
}

/// Drives the ripple effect on a [`Surface`].
///
/// [`EffectController::start`] triggers a first pulse, then one pulse every
/// [`EffectOptions::pulse_interval`], and repaints the surface on every
/// display frame. Both registrations are released by
/// [`EffectController::stop`] or when the controller is dropped.
///
/// In the browser, the default [`BrowserScheduler`] relies on `setInterval`
/// and [`requestAnimationFrame`].
///
/// [`requestAnimationFrame`]: https://developer.mozilla.org/en-US/docs/Web/API/Window/requestAnimationFrame
#[derive(Debug)]
pub struct EffectController<S: Surface + 'static, C: Scheduler = BrowserScheduler> {
    /// Waves and surface.
    state: Rc<RefCell<EffectState<S>>>,
    /// Options.
    options: EffectOptions,
    /// Time and callback source.
    scheduler: C,
    /// Repeating pulse timer, set while running.
    pulse_timer: Option<C::Interval>,
    /// Frame callback, set while running.
    frame_loop: Option<C::Frame>,
}

impl<S: Surface + 'static> EffectController<S> {
    /// Constructs a new [`EffectController`] painting on the given surface.
    ///
    /// The effect does not run until [`EffectController::start`] is called.
    pub fn new(surface: S, options: EffectOptions) -> Result<Self, Error> {
        Self::with_scheduler(surface, options, BrowserScheduler)
    }
}

impl<S: Surface + 'static, C: Scheduler> EffectController<S, C> {
    /// Constructs a new [`EffectController`] driven by the given scheduler.
    pub fn with_scheduler(surface: S, options: EffectOptions, scheduler: C) -> Result<Self, Error> {
        options.validate()?;
        Ok(Self {
            state: Rc::new(RefCell::new(EffectState {
                compositor: Compositor::new(&options),
                surface,
            })),
            options,
            scheduler,
            pulse_timer: None,
            frame_loop: None,
        })
    }

    /// Starts the pulses and the animation loop.
    ///
    /// Does nothing if the effect is already running.
    pub fn start(&mut self) -> Result<(), Error> {
        if self.is_running() {
            return Ok(());
        }

        self.trigger_pulse();
        let pulse_timer = self.scheduler.set_interval(self.options.get_pulse_interval(), {
            let state = Rc::clone(&self.state);
            Box::new(move |now| {
                state.borrow_mut().compositor.trigger_pulse(now);
            })
        })?;

        let frame_loop = self.scheduler.request_frames({
            let state = Rc::clone(&self.state);
            Box::new(move |now| {
                let mut state = state.borrow_mut();
                let EffectState {
                    compositor,
                    surface,
                } = &mut *state;
                if let Err(err) = compositor.paint(now, surface) {
                    log_error(&format!("resonance: unable to paint frame: {err}"));
                }
            })
        })?;

        self.pulse_timer = Some(pulse_timer);
        self.frame_loop = Some(frame_loop);
        log_debug("resonance: effect started");
        Ok(())
    }

    /// Stops the pulses and the animation loop, drops every wave and clears
    /// the surface.
    ///
    /// Calling this method on a stopped effect only clears the surface.
    pub fn stop(&mut self) -> Result<(), Error> {
        let was_running = self.is_running();
        self.pulse_timer = None;
        self.frame_loop = None;

        let mut state = self.state.borrow_mut();
        state.compositor.clear();
        state
            .surface
            .set_background(&Background::Transparent.to_string())?;

        if was_running {
            log_debug("resonance: effect stopped");
        }
        Ok(())
    }

    /// Returns `true` if the effect is running.
    pub fn is_running(&self) -> bool {
        self.pulse_timer.is_some() || self.frame_loop.is_some()
    }

    /// Starts a new wave right away, independently of the pulse timer.
    ///
    /// Expired waves are dropped first, so waves triggered while the effect
    /// is stopped do not pile up.
    pub fn trigger_pulse(&self) {
        let now = self.scheduler.now();
        let mut state = self.state.borrow_mut();
        state.compositor.prune(now);
        state.compositor.trigger_pulse(now);
    }

    /// Returns the number of waves currently tracked.
    pub fn wave_count(&self) -> usize {
        self.state.borrow().compositor.len()
    }

    /// Returns the surface the effect is painted on.
    pub fn surface(&self) -> Ref<'_, S> {
        Ref::map(self.state.borrow(), |state| &state.surface)
    }

    /// Returns the options.
    pub fn options(&self) -> &EffectOptions {
        &self.options
    }
}

impl<S: Surface + 'static, C: Scheduler> Drop for EffectController<S, C> {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            log_error(&format!("resonance: unable to clear surface: {err}"));
        }
    }
}
