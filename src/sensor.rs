//! Hand-tracking input capability.
//!
//! The tracking device itself (Leap-style controller, camera rig, a replayed
//! recording) lives outside this crate. Implementations of [`HandSensor`]
//! deliver, per poll, whichever hands are currently visible as palm and
//! fingertip positions in millimeters. The driver loop only ever consumes a
//! single fingertip per frame; everything else is available for richer
//! front-ends.

use std::time::Duration;

use crate::vec3::Vec3;

/// Which hand a tracked frame belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

/// Fingertip indices, thumb through pinky.
pub mod finger {
    pub const THUMB: usize = 0;
    pub const INDEX: usize = 1;
    pub const MIDDLE: usize = 2;
    pub const RING: usize = 3;
    pub const PINKY: usize = 4;
}

/// One tracked hand: palm position plus five fingertip positions, all in
/// millimeters in the sensor's frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hand {
    pub palm: Vec3,
    /// Tip positions indexed by the constants in [`finger`].
    pub fingertips: [Vec3; 5],
}

impl Hand {
    /// The index fingertip, the rig's probe point.
    pub fn index_tip(&self) -> Vec3 {
        self.fingertips[finger::INDEX]
    }
}

/// Everything one poll saw: at most one hand per side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandFrame {
    pub left: Option<Hand>,
    pub right: Option<Hand>,
}

impl HandFrame {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn hand(&self, side: Handedness) -> Option<&Hand> {
        match side {
            Handedness::Left => self.left.as_ref(),
            Handedness::Right => self.right.as_ref(),
        }
    }

    /// The fingertip the rig tracks this frame: the index tip of the right
    /// hand when present, otherwise of the left hand.
    pub fn tracked_tip(&self) -> Option<Vec3> {
        self.right
            .as_ref()
            .or(self.left.as_ref())
            .map(Hand::index_tip)
    }
}

/// A polling hand-tracking capability.
///
/// `poll` blocks for at most `timeout` and returns `Ok(None)` when no frame
/// arrived in time — the caller then reuses its last-known value rather than
/// waiting longer. Errors are reserved for the device becoming unusable.
pub trait HandSensor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn poll(&mut self, timeout: Duration) -> Result<Option<HandFrame>, Self::Error>;
}
