use web_sys::{wasm_bindgen::JsCast, HtmlElement};

use crate::{
    error::Error,
    options::EffectOptions,
    utils::{get_document, get_element_by_id_or_body},
};

/// A paintable area whose background can be replaced.
pub trait Surface {
    /// Replaces the background with the given CSS `background` value.
    fn set_background(&mut self, background: &str) -> Result<(), Error>;
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn set_background(&mut self, background: &str) -> Result<(), Error> {
        (**self).set_background(background)
    }
}

/// A surface that keeps the last background in memory.
///
/// Useful for rendering the effect outside of a browser.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    background: String,
    paint_count: usize,
}

impl MemorySurface {
    /// Returns the last applied background.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Returns how many times the background was set.
    pub fn paint_count(&self) -> usize {
        self.paint_count
    }
}

impl Surface for MemorySurface {
    fn set_background(&mut self, background: &str) -> Result<(), Error> {
        self.background.clear();
        self.background.push_str(background);
        self.paint_count += 1;
        Ok(())
    }
}

/// Returns the inline style of the overlay element.
fn overlay_css(opacity: f64) -> String {
    format!(
        "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
         pointer-events: none; z-index: -1; opacity: {opacity};"
    )
}

/// Background properties applied to the element hosting the overlay.
const HOST_BACKGROUND: &[(&str, &str)] = &[
    ("background-repeat", "no-repeat"),
    ("background-size", "100% 100%"),
    ("background-position", "50% 50%"),
    ("background-attachment", "fixed"),
];

/// Full viewport `<div>` drawn behind the page content.
///
/// The element is removed from the document when the surface is dropped.
#[derive(Debug)]
pub struct OverlaySurface {
    /// Overlay element.
    element: HtmlElement,
}

impl OverlaySurface {
    /// Constructs a new [`OverlaySurface`] appended to the document body.
    pub fn new() -> Result<Self, Error> {
        Self::new_with_options(&EffectOptions::default())
    }

    /// Constructs a new [`OverlaySurface`] with the given options.
    ///
    /// The overlay is appended to the element set with
    /// [`EffectOptions::parent_id`], or to the document body.
    pub fn new_with_options(options: &EffectOptions) -> Result<Self, Error> {
        let parent = get_element_by_id_or_body(options.get_parent_id())?;

        if options.get_prepare_host() {
            if let Some(host) = parent.dyn_ref::<HtmlElement>() {
                let style = host.style();
                for (property, value) in HOST_BACKGROUND {
                    style.set_property(property, value)?;
                }
            }
        }

        let element = get_document()?
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|element| Error::JsValue(element.into()))?;
        element
            .style()
            .set_css_text(&overlay_css(options.get_overlay_opacity()));
        parent.append_child(&element)?;

        Ok(Self { element })
    }

    /// Returns the overlay element.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl Surface for OverlaySurface {
    fn set_background(&mut self, background: &str) -> Result<(), Error> {
        self.element
            .style()
            .set_property("background", background)
            .map_err(Error::from)
    }
}

impl Drop for OverlaySurface {
    fn drop(&mut self) {
        self.element.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface() {
        let mut surface = MemorySurface::default();
        assert_eq!(surface.background(), "");

        surface.set_background("transparent").unwrap();
        surface.set_background("linear-gradient(red, blue)").unwrap();
        assert_eq!(surface.background(), "linear-gradient(red, blue)");
        assert_eq!(surface.paint_count(), 2);
    }

    #[test]
    fn test_boxed_surface() {
        let mut surface: Box<dyn Surface> = Box::new(MemorySurface::default());
        assert!(surface.set_background("transparent").is_ok());
    }

    #[test]
    fn test_overlay_css() {
        let css = overlay_css(0.4);
        assert!(css.contains("opacity: 0.4;"));
        assert!(css.contains("pointer-events: none;"));
        assert!(css.contains("z-index: -1;"));
    }
}
