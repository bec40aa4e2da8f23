use std::fmt;

use crate::wave::WaveParameters;

/// Offset of the center line, in percent.
const CENTER: f64 = 50.0;

/// Distance from the core line to the dark bands, in percent.
const BAND_OFFSET: f64 = 2.0;

/// Distance from the core line to the transparent edges, in percent.
const FADE_OFFSET: f64 = 8.0;

/// Color of the dark bands.
const BAND_COLOR: (u8, u8, u8) = (0, 0, 0);

/// Color of the core line.
const CORE_COLOR: (u8, u8, u8) = (15, 15, 15);

/// Opacity of the core line relative to the bands.
const CORE_OPACITY_FACTOR: f64 = 0.7;

/// Color of a gradient stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopColor {
    /// Fully transparent.
    Transparent,
    /// RGB color with an alpha channel.
    Rgba(u8, u8, u8, f64),
}

impl fmt::Display for StopColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopColor::Transparent => f.write_str("transparent"),
            StopColor::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

/// A color at a given offset of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// The color.
    pub color: StopColor,
    /// Offset in percent, always within `[0, 100]`.
    pub offset: f64,
}

impl ColorStop {
    /// Constructs a new [`ColorStop`], clamping the offset into `[0, 100]`.
    fn new(color: StopColor, offset: f64) -> Self {
        Self {
            color,
            offset: offset.clamp(0.0, 100.0),
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, self.offset)
    }
}

/// A left to right linear gradient drawing one wave.
///
/// The wave is drawn as two mirrored bands around the center line. Each band
/// is a dark stripe with a lighter core line, fading to transparent on both
/// sides.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLayer {
    stops: Vec<ColorStop>,
    opacity: f64,
}

impl GradientLayer {
    /// Builds the layer of a wave.
    ///
    /// The opacity of the bands is the wave intensity, capped at
    /// `opacity_cap`.
    pub fn new(params: WaveParameters, opacity_cap: f64) -> Self {
        let opacity = params.intensity.min(opacity_cap);
        let spread = params.position / 100.0 * CENTER;

        let mut stops = Vec::with_capacity(12);
        stops.push(ColorStop::new(StopColor::Transparent, 0.0));
        stops.extend(band(CENTER - spread, opacity));
        stops.extend(band(CENTER + spread, opacity));
        stops.push(ColorStop::new(StopColor::Transparent, 100.0));
        Self { stops, opacity }
    }

    /// Returns the color stops of the layer.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Returns the opacity of the dark bands.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

/// Returns the five stops of a band centered on `center`.
fn band(center: f64, opacity: f64) -> [ColorStop; 5] {
    let (r, g, b) = BAND_COLOR;
    let dark = StopColor::Rgba(r, g, b, opacity);
    let (r, g, b) = CORE_COLOR;
    let core = StopColor::Rgba(r, g, b, opacity * CORE_OPACITY_FACTOR);
    [
        ColorStop::new(StopColor::Transparent, center - FADE_OFFSET),
        ColorStop::new(dark, center - BAND_OFFSET),
        ColorStop::new(core, center),
        ColorStop::new(dark, center + BAND_OFFSET),
        ColorStop::new(StopColor::Transparent, center + FADE_OFFSET),
    ]
}

impl fmt::Display for GradientLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("linear-gradient(to right")?;
        for stop in &self.stops {
            write!(f, ", {stop}")?;
        }
        f.write_str(")")
    }
}

/// The background of the overlay for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Background {
    /// No visible wave.
    #[default]
    Transparent,
    /// One layer per visible wave, composited together.
    Layers(Vec<GradientLayer>),
}

impl Background {
    /// Builds a background from the given layers.
    ///
    /// An empty list of layers results in [`Background::Transparent`].
    pub fn from_layers(layers: Vec<GradientLayer>) -> Self {
        if layers.is_empty() {
            Self::Transparent
        } else {
            Self::Layers(layers)
        }
    }

    /// Returns the layers of the background.
    pub fn layers(&self) -> &[GradientLayer] {
        match self {
            Background::Transparent => &[],
            Background::Layers(layers) => layers,
        }
    }

    /// Returns `true` if nothing is drawn.
    pub fn is_transparent(&self) -> bool {
        self.layers().is_empty()
    }
}

/// Serializes the background as a CSS `background` value.
impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Transparent => f.write_str("transparent"),
            Background::Layers(layers) => {
                for (i, layer) in layers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{layer}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(position: f64, intensity: f64) -> WaveParameters {
        WaveParameters {
            position,
            intensity,
        }
    }

    #[test]
    fn test_stop_layout() {
        let layer = GradientLayer::new(params(20.0, 0.5), 0.6);
        let offsets = layer.stops().iter().map(|s| s.offset).collect::<Vec<_>>();
        assert_eq!(
            offsets,
            [0.0, 32.0, 38.0, 40.0, 42.0, 48.0, 52.0, 58.0, 60.0, 62.0, 68.0, 100.0]
        );
        assert_eq!(layer.opacity(), 0.5);
        assert_eq!(layer.stops()[2].color, StopColor::Rgba(0, 0, 0, 0.5));
        assert_eq!(layer.stops()[3].color, StopColor::Rgba(15, 15, 15, 0.35));
    }

    #[test]
    fn test_opacity_is_capped() {
        [0.61, 1.0, 7.5, f64::MAX]
            .into_iter()
            .map(|intensity| GradientLayer::new(params(50.0, intensity), 0.6))
            .for_each(|layer| assert_eq!(layer.opacity(), 0.6));
    }

    #[test]
    fn test_zero_intensity_opacity() {
        let layer = GradientLayer::new(params(30.0, 0.0), 0.6);
        assert_eq!(layer.opacity(), 0.0);
        assert_eq!(layer.stops()[2].color, StopColor::Rgba(0, 0, 0, 0.0));
    }

    #[test]
    fn test_offsets_are_clamped() {
        [-1e9, -300.0, -5.0, 0.0, 99.0, 100.0, 250.0, 1e9]
            .into_iter()
            .map(|position| GradientLayer::new(params(position, 0.3), 0.6))
            .flat_map(|layer| layer.stops().to_vec())
            .for_each(|stop| assert!((0.0..=100.0).contains(&stop.offset), "{stop:?}"));
    }

    #[test]
    fn test_layer_css() {
        let layer = GradientLayer::new(params(0.0, 0.5), 0.6);
        assert_eq!(
            layer.to_string(),
            "linear-gradient(to right, transparent 0%, \
             transparent 42%, rgba(0,0,0,0.5) 48%, rgba(15,15,15,0.35) 50%, \
             rgba(0,0,0,0.5) 52%, transparent 58%, \
             transparent 42%, rgba(0,0,0,0.5) 48%, rgba(15,15,15,0.35) 50%, \
             rgba(0,0,0,0.5) 52%, transparent 58%, \
             transparent 100%)"
        );
    }

    #[test]
    fn test_background_css() {
        assert_eq!(Background::default().to_string(), "transparent");
        assert_eq!(Background::from_layers(vec![]), Background::Transparent);

        let layer = GradientLayer::new(params(10.0, 0.2), 0.6);
        let background = Background::from_layers(vec![layer.clone(), layer.clone()]);
        assert!(!background.is_transparent());
        assert_eq!(background.to_string(), format!("{layer}, {layer}"));
    }
}
