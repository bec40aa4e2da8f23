use std::time::Duration;

use crate::error::Error;

/// Default delay between two pulses.
pub const DEFAULT_PULSE_INTERVAL: Duration = Duration::from_millis(8470);

/// Default lifetime of a single wave.
pub const DEFAULT_WAVE_DURATION: Duration = Duration::from_millis(12000);

/// Default opacity of the whole overlay element.
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.4;

/// Default ceiling for the opacity of a single gradient layer.
pub const DEFAULT_LAYER_OPACITY_CAP: f64 = 0.6;

/// Default intensity below which a wave is not drawn.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.01;

/// Options for the ripple effect.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectOptions {
    /// Delay between two pulses.
    pulse_interval: Duration,
    /// Lifetime of a wave.
    wave_duration: Duration,
    /// Opacity applied to the overlay element.
    overlay_opacity: f64,
    /// Opacity ceiling of a single gradient layer.
    layer_opacity_cap: f64,
    /// Minimum intensity for a wave to produce a layer.
    visibility_threshold: f64,
    /// The ID of the element the overlay is appended to.
    parent_id: Option<String>,
    /// Whether to set up the background properties of the parent element.
    prepare_host: bool,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            pulse_interval: DEFAULT_PULSE_INTERVAL,
            wave_duration: DEFAULT_WAVE_DURATION,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            layer_opacity_cap: DEFAULT_LAYER_OPACITY_CAP,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            parent_id: None,
            prepare_host: true,
        }
    }
}

impl EffectOptions {
    /// Constructs a new [`EffectOptions`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delay between two pulses.
    pub fn pulse_interval(mut self, interval: Duration) -> Self {
        self.pulse_interval = interval;
        self
    }

    /// Sets the lifetime of a wave.
    pub fn wave_duration(mut self, duration: Duration) -> Self {
        self.wave_duration = duration;
        self
    }

    /// Sets the opacity of the overlay element.
    pub fn overlay_opacity(mut self, opacity: f64) -> Self {
        self.overlay_opacity = opacity;
        self
    }

    /// Sets the opacity ceiling of a single gradient layer.
    pub fn layer_opacity_cap(mut self, cap: f64) -> Self {
        self.layer_opacity_cap = cap;
        self
    }

    /// Sets the minimum intensity for a wave to be drawn.
    pub fn visibility_threshold(mut self, threshold: f64) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    /// Appends the overlay to the element with the given ID instead of the
    /// document body.
    pub fn parent_id(mut self, id: impl Into<String>) -> Self {
        self.parent_id = Some(id.into());
        self
    }

    /// Sets whether the background properties of the parent element are
    /// initialized.
    pub fn prepare_host(mut self, prepare: bool) -> Self {
        self.prepare_host = prepare;
        self
    }

    /// Returns the delay between two pulses.
    pub fn get_pulse_interval(&self) -> Duration {
        self.pulse_interval
    }

    /// Returns the lifetime of a wave.
    pub fn get_wave_duration(&self) -> Duration {
        self.wave_duration
    }

    /// Returns the lifetime of a wave in milliseconds.
    pub(crate) fn wave_duration_ms(&self) -> f64 {
        self.wave_duration.as_secs_f64() * 1000.0
    }

    /// Returns the opacity of the overlay element.
    pub fn get_overlay_opacity(&self) -> f64 {
        self.overlay_opacity
    }

    /// Returns the opacity ceiling of a single gradient layer.
    pub fn get_layer_opacity_cap(&self) -> f64 {
        self.layer_opacity_cap
    }

    /// Returns the minimum intensity for a wave to be drawn.
    pub fn get_visibility_threshold(&self) -> f64 {
        self.visibility_threshold
    }

    /// Returns the ID of the parent element, if any.
    pub fn get_parent_id(&self) -> Option<&String> {
        self.parent_id.as_ref()
    }

    /// Returns whether the background properties of the parent element are
    /// initialized.
    pub fn get_prepare_host(&self) -> bool {
        self.prepare_host
    }

    /// Checks that every option is within its valid range.
    pub fn validate(&self) -> Result<(), Error> {
        if self.pulse_interval.is_zero() {
            return Err(Error::InvalidOption("pulse interval must be non-zero"));
        }
        // `setInterval` takes a signed 32-bit delay
        if self.pulse_interval.as_millis() > i32::MAX as u128 {
            return Err(Error::InvalidOption("pulse interval is too long"));
        }
        if self.wave_duration.is_zero() {
            return Err(Error::InvalidOption("wave duration must be non-zero"));
        }
        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            return Err(Error::InvalidOption("overlay opacity must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.layer_opacity_cap) {
            return Err(Error::InvalidOption(
                "layer opacity cap must be within [0, 1]",
            ));
        }
        if !self.visibility_threshold.is_finite() || self.visibility_threshold < 0.0 {
            return Err(Error::InvalidOption(
                "visibility threshold must be a non-negative number",
            ));
        }
        Ok(())
    }
}
