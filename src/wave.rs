use std::f64::consts::PI;

/// Frequencies (in half-turns over the wave lifetime) and weights of the echo
/// harmonics.
const ECHOES: [(f64, f64); 4] = [(12.0, 0.2), (6.0, 0.4), (3.0, 0.6), (1.5, 0.8)];

/// Scale applied to the modulated intensity.
const INTENSITY_SCALE: f64 = 0.4;

/// Identifier of a [`Wave`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaveId(pub(crate) u64);

/// Position and intensity of a wave at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    /// How far the wave travelled from the center, from 0 to 100.
    pub position: f64,
    /// Non-negative strength of the wave.
    pub intensity: f64,
}

/// A single horizontal ripple.
///
/// A wave is active from its start time until its duration has elapsed. Times
/// are expressed in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    id: WaveId,
    start_time: f64,
    duration: f64,
}

impl Wave {
    /// Constructs a new [`Wave`].
    pub fn new(id: WaveId, start_time: f64, duration: f64) -> Self {
        Self {
            id,
            start_time,
            duration,
        }
    }

    /// Returns the identifier of the wave.
    pub fn id(&self) -> WaveId {
        self.id
    }

    /// Returns the time the wave started at.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Returns the lifetime of the wave.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the elapsed fraction of the wave lifetime.
    ///
    /// The value is not clamped: it is negative before the start time and
    /// exceeds 1 once the wave has expired.
    pub fn progress(&self, now: f64) -> f64 {
        (now - self.start_time) / self.duration
    }

    /// Returns `true` if the wave has not expired yet.
    pub fn is_active(&self, now: f64) -> bool {
        self.progress(now) < 1.0
    }

    /// Computes the position and intensity of the wave.
    ///
    /// Returns `None` once the wave has expired.
    pub fn visual_parameters(&self, now: f64) -> Option<WaveParameters> {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return None;
        }

        let base_intensity = (1.0 - progress).max(0.0);
        let echo = ECHOES
            .iter()
            .map(|(frequency, weight)| (progress * PI * frequency).sin() * weight)
            .sum::<f64>();

        Some(WaveParameters {
            position: progress * 100.0,
            intensity: (base_intensity * echo * INTENSITY_SCALE).abs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: f64 = 12000.0;

    fn wave_at(start_time: f64) -> Wave {
        Wave::new(WaveId(0), start_time, DURATION)
    }

    #[test]
    fn test_progress() {
        let wave = wave_at(1000.0);
        assert_eq!(wave.progress(1000.0), 0.0);
        assert_eq!(wave.progress(7000.0), 0.5);
        assert_eq!(wave.progress(13000.0), 1.0);
        assert_eq!(wave.progress(25000.0), 2.0);
        assert!(wave.progress(0.0) < 0.0);
    }

    #[test]
    fn test_is_active() {
        let wave = wave_at(0.0);
        assert!(wave.is_active(-500.0));
        assert!(wave.is_active(0.0));
        assert!(wave.is_active(11999.0));
        assert!(!wave.is_active(12000.0));
        assert!(!wave.is_active(50000.0));
    }

    #[test]
    fn test_fresh_wave() {
        let params = wave_at(0.0).visual_parameters(0.0).unwrap();
        assert_eq!(params.position, 0.0);
        // every harmonic is at sin(0)
        assert_eq!(params.intensity, 0.0);
    }

    #[test]
    fn test_halfway_intensity() {
        let p: f64 = 0.5;
        let echo = (p * PI * 12.0).sin() * 0.2
            + (p * PI * 6.0).sin() * 0.4
            + (p * PI * 3.0).sin() * 0.6
            + (p * PI * 1.5).sin() * 0.8;
        let expected = (0.5 * echo * 0.4).abs();

        let params = wave_at(0.0).visual_parameters(6000.0).unwrap();
        assert!((params.position - 50.0).abs() < 1e-9);
        assert!((params.intensity - expected).abs() < 1e-9);
    }

    #[test]
    fn test_expired_has_no_parameters() {
        let wave = wave_at(0.0);
        assert!(wave.visual_parameters(12000.0).is_none());
        assert!(wave.visual_parameters(12001.0).is_none());
        assert!(wave.visual_parameters(11999.0).is_some());
    }

    #[test]
    fn test_intensity_is_non_negative() {
        let wave = wave_at(0.0);
        (-1200..12000)
            .step_by(7)
            .filter_map(|now| wave.visual_parameters(now as f64))
            .for_each(|params| assert!(params.intensity >= 0.0, "{params:?}"));
    }

    #[test]
    fn test_before_start_is_active() {
        let params = wave_at(1000.0).visual_parameters(0.0).unwrap();
        assert!(params.position < 0.0);
        assert!(params.intensity >= 0.0);
    }
}
