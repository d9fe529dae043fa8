//! Pointer input aggregation.
//!
//! The display capability (see [`crate::Surface`]) reports raw
//! [`SurfaceEvent`]s each frame; [`Input`] folds them into queryable state:
//! current pointer position, per-frame movement delta, button state, and the
//! quit signal. The windowing system that produces the events lives outside
//! this crate; backends translate their native events into [`SurfaceEvent`]s.

use std::collections::HashSet;

use glam::Vec2;

/// Pointer buttons the rig cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The drag/orbit button (left mouse button, single touch, ...).
    Primary,
    Secondary,
}

/// A raw event from the display surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent {
    /// Pointer moved to an absolute position in screen coordinates.
    PointerMoved(Vec2),
    ButtonPressed(PointerButton),
    ButtonReleased(PointerButton),
    /// The user asked the window to close.
    QuitRequested,
}

/// Tracks pointer and quit state across frames.
#[derive(Default)]
pub struct Input {
    buttons_down: HashSet<PointerButton>,
    buttons_pressed: HashSet<PointerButton>,
    buttons_released: HashSet<PointerButton>,
    pointer_position: Vec2,
    pointer_delta: Vec2,
    quit_requested: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each frame to reset per-frame state.
    ///
    /// The quit flag is sticky; once requested it stays set.
    pub fn begin_frame(&mut self) {
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.pointer_delta = Vec2::ZERO;
    }

    /// Fold one surface event into the tracked state.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::PointerMoved(position) => {
                self.pointer_delta += position - self.pointer_position;
                self.pointer_position = position;
            }
            SurfaceEvent::ButtonPressed(button) => {
                if !self.buttons_down.contains(&button) {
                    self.buttons_pressed.insert(button);
                }
                self.buttons_down.insert(button);
            }
            SurfaceEvent::ButtonReleased(button) => {
                self.buttons_down.remove(&button);
                self.buttons_released.insert(button);
            }
            SurfaceEvent::QuitRequested => {
                self.quit_requested = true;
            }
        }
    }

    /// Returns true if the button is currently held down.
    pub fn button_down(&self, button: PointerButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Returns true if the button was pressed this frame.
    pub fn button_pressed(&self, button: PointerButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Returns true if the button was released this frame.
    pub fn button_released(&self, button: PointerButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Current pointer position in screen coordinates.
    pub fn pointer_position(&self) -> Vec2 {
        self.pointer_position
    }

    /// Pointer movement accumulated this frame.
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer_delta
    }

    /// True while the primary button is held — the orbit-drag state.
    pub fn dragging(&self) -> bool {
        self.button_down(PointerButton::Primary)
    }

    /// True once the surface has asked to close.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
