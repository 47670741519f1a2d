//! Display-to-canvas coordinate mapping.
//!
//! The canvas has a native pixel size (the export resolution) but is
//! rendered scaled to fit its container. Pointer events arrive in
//! display pixels and must be mapped to canvas pixels before hit
//! testing. Both spaces are top-left origin, y down; the mapping is a
//! uniform scale with no flip.

/// Maps between the rendered (display) size and the native canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayViewport {
    native_width: f64,
    native_height: f64,
    rendered_width: f64,
    rendered_height: f64,
}

impl DisplayViewport {
    /// A viewport rendered at native size (scale 1).
    pub fn native(width: f64, height: f64) -> Self {
        Self {
            native_width: width,
            native_height: height,
            rendered_width: width,
            rendered_height: height,
        }
    }

    pub fn new(
        native_width: f64,
        native_height: f64,
        rendered_width: f64,
        rendered_height: f64,
    ) -> Self {
        Self {
            native_width,
            native_height,
            rendered_width,
            rendered_height,
        }
    }

    /// Updates the rendered size after a container resize.
    pub fn set_rendered(&mut self, width: f64, height: f64) {
        self.rendered_width = width;
        self.rendered_height = height;
    }

    pub fn native_size(&self) -> (f64, f64) {
        (self.native_width, self.native_height)
    }

    /// Display pixels per canvas pixel. Aspect ratio is preserved by the
    /// renderer, so the horizontal ratio is the scale.
    pub fn scale(&self) -> f64 {
        if self.native_width <= 0.0 {
            return 1.0;
        }
        self.rendered_width / self.native_width
    }

    /// Maps a display-space point to canvas space.
    pub fn display_to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        let s = self.scale();
        if s <= 0.0 {
            return (x, y);
        }
        (x / s, y / s)
    }

    /// Maps a canvas-space point to display space.
    pub fn canvas_to_display(&self, x: f64, y: f64) -> (f64, f64) {
        let s = self.scale();
        (x * s, y * s)
    }
}
