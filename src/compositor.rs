use crate::{
    error::Error,
    gradient::{Background, GradientLayer},
    options::EffectOptions,
    surface::Surface,
    wave::{Wave, WaveId},
};

/// Keeps track of the active waves and composites them into a background.
///
/// Waves are stored in creation order. Expired waves are pruned on every call
/// to [`Compositor::composite_frame`].
#[derive(Debug, Clone)]
pub struct Compositor {
    /// Active waves.
    waves: Vec<Wave>,
    /// Identifier of the next wave.
    next_id: u64,
    /// Lifetime of the waves, in milliseconds.
    wave_duration: f64,
    /// Opacity ceiling of a single layer.
    layer_opacity_cap: f64,
    /// Minimum intensity for a wave to be drawn.
    visibility_threshold: f64,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(&EffectOptions::default())
    }
}

impl Compositor {
    /// Constructs a new [`Compositor`] without any wave.
    pub fn new(options: &EffectOptions) -> Self {
        Self {
            waves: Vec::new(),
            next_id: 0,
            wave_duration: options.wave_duration_ms(),
            layer_opacity_cap: options.get_layer_opacity_cap(),
            visibility_threshold: options.get_visibility_threshold(),
        }
    }

    /// Starts a new wave at `now`.
    pub fn trigger_pulse(&mut self, now: f64) -> WaveId {
        let id = WaveId(self.next_id);
        self.next_id += 1;
        self.waves.push(Wave::new(id, now, self.wave_duration));
        id
    }

    /// Drops the expired waves and builds the background for `now`.
    ///
    /// Waves that are too faint to be seen do not produce a layer but are
    /// kept until they expire.
    pub fn composite_frame(&mut self, now: f64) -> Background {
        self.prune(now);

        let layers = self
            .waves
            .iter()
            .filter_map(|wave| wave.visual_parameters(now))
            .filter(|params| params.intensity >= self.visibility_threshold)
            .map(|params| GradientLayer::new(params, self.layer_opacity_cap))
            .collect();

        Background::from_layers(layers)
    }

    /// Drops the waves that expired at `now`.
    pub fn prune(&mut self, now: f64) {
        self.waves.retain(|wave| wave.is_active(now));
    }

    /// Composites the frame for `now` and applies it to the given surface.
    pub fn paint<S: Surface + ?Sized>(&mut self, now: f64, surface: &mut S) -> Result<(), Error> {
        let background = self.composite_frame(now);
        surface.set_background(&background.to_string())
    }

    /// Returns the waves that were active during the last frame, plus the ones
    /// triggered since.
    pub fn active_waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Returns the number of tracked waves.
    pub fn len(&self) -> usize {
        self.waves.len()
    }

    /// Returns `true` if no wave is tracked.
    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    /// Drops every wave.
    pub fn clear(&mut self) {
        self.waves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_trigger_pulse() {
        let mut compositor = Compositor::default();
        let first = compositor.trigger_pulse(0.0);
        let second = compositor.trigger_pulse(10.0);
        assert_ne!(first, second);
        assert_eq!(compositor.len(), 2);
        assert_eq!(compositor.active_waves()[0].id(), first);
        assert_eq!(compositor.active_waves()[1].start_time(), 10.0);
        assert_eq!(compositor.active_waves()[1].duration(), 12000.0);
    }

    #[test]
    fn test_empty_is_transparent() {
        let mut compositor = Compositor::default();
        assert_eq!(compositor.composite_frame(0.0), Background::Transparent);
    }

    #[test]
    fn test_expired_wave_is_pruned() {
        let mut compositor = Compositor::default();
        compositor.trigger_pulse(0.0);

        compositor.composite_frame(11999.0);
        assert_eq!(compositor.len(), 1);

        let background = compositor.composite_frame(12000.0);
        assert!(compositor.is_empty());
        assert_eq!(background, Background::Transparent);
    }

    #[test]
    fn test_overlapping_waves() {
        let mut compositor = Compositor::default();
        compositor.trigger_pulse(0.0);
        compositor.trigger_pulse(8470.0);

        [8470.0, 9000.0, 10000.0, 11999.0]
            .into_iter()
            .for_each(|now| {
                compositor.composite_frame(now);
                assert_eq!(compositor.len(), 2, "at {now}");
            });

        compositor.composite_frame(12000.0);
        assert_eq!(compositor.len(), 1);
        assert_eq!(compositor.active_waves()[0].start_time(), 8470.0);
    }

    #[test]
    fn test_faint_wave_is_kept() {
        let mut compositor = Compositor::default();
        compositor.trigger_pulse(0.0);

        // intensity is zero at the very start of a wave
        let background = compositor.composite_frame(0.0);
        assert!(background.is_transparent());
        assert_eq!(compositor.len(), 1);
    }

    #[test]
    fn test_visible_wave_produces_layer() {
        let mut compositor = Compositor::default();
        compositor.trigger_pulse(0.0);
        compositor.trigger_pulse(3000.0);

        let background = compositor.composite_frame(3000.0);
        // only the first wave is past its silent start
        assert_eq!(background.layers().len(), 1);
        assert!(background.layers()[0].opacity() <= 0.6);
    }

    #[test]
    fn test_layer_opacity_cap() {
        let options = EffectOptions::new()
            .layer_opacity_cap(0.05)
            .visibility_threshold(0.0);
        let mut compositor = Compositor::new(&options);
        compositor.trigger_pulse(0.0);

        (1..120)
            .map(|step| compositor.composite_frame(step as f64 * 100.0))
            .flat_map(|background| background.layers().to_vec())
            .for_each(|layer| assert!(layer.opacity() <= 0.05));
    }

    #[test]
    fn test_prune() {
        let mut compositor = Compositor::default();
        compositor.trigger_pulse(0.0);
        compositor.trigger_pulse(5000.0);

        compositor.prune(12000.0);
        assert_eq!(compositor.len(), 1);
        compositor.prune(17000.0);
        assert!(compositor.is_empty());
    }

    #[test]
    fn test_paint() {
        let mut compositor = Compositor::default();
        let mut surface = MemorySurface::default();

        compositor.paint(0.0, &mut surface).unwrap();
        assert_eq!(surface.background(), "transparent");

        compositor.trigger_pulse(0.0);
        compositor.paint(3000.0, &mut surface).unwrap();
        assert!(surface.background().starts_with("linear-gradient(to right"));

        compositor.paint(12000.0, &mut surface).unwrap();
        assert_eq!(surface.background(), "transparent");
        assert_eq!(surface.paint_count(), 3);
    }
}
