use std::{
    cell::{Cell, RefCell},
    fmt::Debug,
    rc::Rc,
    time::Duration,
};

use web_sys::{
    wasm_bindgen::{prelude::Closure, JsCast},
    Window,
};

use crate::{
    error::Error,
    utils::{get_window, log_error, now},
};

/// Source of time and callbacks driving the effect.
///
/// Callbacks receive the current time in milliseconds. Registrations are
/// released when the returned handles are dropped.
pub trait Scheduler {
    /// Handle of a repeating timer.
    type Interval: Debug;
    /// Handle of a per frame callback.
    type Frame: Debug;

    /// Returns the current time in milliseconds.
    fn now(&self) -> f64;

    /// Calls `callback` every `interval` until the handle is dropped.
    fn set_interval(
        &self,
        interval: Duration,
        callback: Box<dyn FnMut(f64)>,
    ) -> Result<Self::Interval, Error>;

    /// Calls `callback` on every display frame until the handle is dropped.
    fn request_frames(&self, callback: Box<dyn FnMut(f64)>) -> Result<Self::Frame, Error>;
}

/// Scheduler backed by `setInterval`, `requestAnimationFrame` and `Date.now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Interval = PulseTimer;
    type Frame = FrameLoop;

    fn now(&self) -> f64 {
        now()
    }

    fn set_interval(
        &self,
        interval: Duration,
        mut callback: Box<dyn FnMut(f64)>,
    ) -> Result<PulseTimer, Error> {
        PulseTimer::new(&get_window()?, interval, move || callback(now()))
    }

    fn request_frames(&self, mut callback: Box<dyn FnMut(f64)>) -> Result<FrameLoop, Error> {
        FrameLoop::new(get_window()?, move || callback(now()))
    }
}

/// Repeating `setInterval` registration, cleared on drop.
#[derive(Debug)]
pub struct PulseTimer {
    window: Window,
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl PulseTimer {
    fn new<F>(window: &Window, interval: Duration, callback: F) -> Result<Self, Error>
    where
        F: FnMut() + 'static,
    {
        let timeout = i32::try_from(interval.as_millis())
            .map_err(|_| Error::InvalidOption("pulse interval is too long"))?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        )?;
        Ok(Self {
            window: window.clone(),
            handle,
            _closure: closure,
        })
    }
}

impl Drop for PulseTimer {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

/// Self rescheduling `requestAnimationFrame` loop.
///
/// The closure holds a handle to itself to request the next frame; dropping
/// the loop cancels the pending frame and releases the closure.
#[derive(Debug)]
pub struct FrameLoop {
    window: Window,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    fn new<F>(window: Window, mut render: F) -> Result<Self, Error>
    where
        F: FnMut() + 'static,
    {
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));

        let closure = Closure::wrap(Box::new({
            let callback = Rc::clone(&callback);
            let request_id = Rc::clone(&request_id);
            let window = window.clone();
            move || {
                render();
                if let Some(next) = callback.borrow().as_ref() {
                    match request_animation_frame(&window, next) {
                        Ok(id) => request_id.set(Some(id)),
                        Err(err) => {
                            request_id.set(None);
                            log_error(&format!("resonance: unable to request frame: {err}"));
                        }
                    }
                }
            }
        }) as Box<dyn FnMut()>);

        request_id.set(Some(request_animation_frame(&window, &closure)?));
        *callback.borrow_mut() = Some(closure);

        Ok(Self {
            window,
            callback,
            request_id,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.request_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log_error(&format!(
                    "resonance: unable to cancel frame: {}",
                    Error::from(err)
                ));
            }
        }
        // breaks the reference cycle between the closure and itself
        self.callback.borrow_mut().take();
    }
}

/// Requests an animation frame.
fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, Error> {
    window
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map_err(Error::from)
}
