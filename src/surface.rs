//! The display capability the renderer draws into.
//!
//! The rig does not own a window, an event loop, or a rasterizer. It owns a
//! frame's worth of 2D draw calls and hands them to whatever implements
//! [`Surface`] — an SDL canvas, a framebuffer blitter, a test recorder. The
//! trait mirrors the fill/draw/present cycle of an immediate-mode canvas:
//! drain events, clear, issue primitives, present.

use glam::Vec2;

use crate::input::SurfaceEvent;

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

    /// Scale the color channels by a shading intensity, leaving alpha alone.
    pub fn shaded(self, intensity: f32) -> Color {
        Color::rgba(
            self.r * intensity,
            self.g * intensity,
            self.b * intensity,
            self.a,
        )
    }
}

/// A per-frame 2D drawing and input capability.
///
/// Coordinates are screen pixels with the origin at the top-left corner.
/// Implementations batch or draw immediately as they like; the renderer only
/// requires that calls issued earlier end up underneath calls issued later,
/// which is what the painter's algorithm depends on.
pub trait Surface {
    /// Failure surfaced by [`Surface::present`]. A lost display is fatal to
    /// the frame loop; there is no in-crate recovery.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Drain window events accumulated since the last frame.
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;

    /// Fill the whole frame with one color.
    fn clear(&mut self, color: Color);

    /// Fill a convex polygon given in screen coordinates.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Draw a thin outline along a polygon's edges.
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color);

    /// Fill a circle of `radius` pixels at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Flip the finished frame to the screen.
    fn present(&mut self) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shading_scales_channels_but_not_alpha() {
        let base = Color::rgba(0.8, 0.4, 0.2, 0.9);
        let shaded = base.shaded(0.5);
        assert_eq!(shaded, Color::rgba(0.4, 0.2, 0.1, 0.9));
    }
}
