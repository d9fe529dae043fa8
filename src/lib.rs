//! # Haptos
//!
//! **Feel virtual solids with your fingertip.**
//!
//! Haptos drives a haptic proximity rig: a tracked fingertip is measured
//! against an analytic solid (sphere or cube), the signed surface distance
//! becomes an actuator intensity, and a software 3D viewport shows the
//! fingertip orbiting the shape in real time — camera drag, backface
//! culling, flat shading, and painter's-algorithm compositing, every frame.
//!
//! ## Quick Start
//!
//! ```
//! use haptos::{FrameRenderer, OrbitCamera, RendererConfig, Shape, Vec3};
//!
//! let shape = Shape::sphere(Vec3::ZERO, 90.0)?;
//! let renderer = FrameRenderer::new(RendererConfig::default());
//! let camera = OrbitCamera::new().distance(500.0);
//!
//! // One frame's draw list: culled, shaded faces plus the fingertip marker.
//! let mesh = shape.mesh(16);
//! let items = renderer.compose(&mesh, &camera, Some(Vec3::new(120.0, 40.0, 0.0)));
//! assert!(!items.is_empty());
//! # Ok::<(), haptos::ShapeError>(())
//! ```
//!
//! Wire a full rig with [`Rig::run`]: hand a [`Shape`], a [`HandSensor`],
//! and an [`Actuator`] to the driver and it runs the sensor and render loops
//! until the window asks to quit.
//!
//! ## Philosophy
//!
//! - **Capabilities at the edges** — windowing, rasterization, tracking
//!   hardware, and the serial wire are traits ([`Surface`], [`HandSensor`],
//!   [`Actuator`]); the crate owns the geometry and the pipeline between
//!   them.
//! - **Pure core, observable frames** — [`FrameRenderer::compose`] maps
//!   scene state to a plain list of [`RenderItem`]s, so every pipeline rule
//!   is unit-testable without a window.
//! - **Millimeters everywhere** — shapes, fingertips, and camera distance
//!   share the tracker's native unit.

mod actuator;
mod camera;
pub mod feedback;
mod input;
mod latest;
mod mesh;
mod renderer;
mod rig;
mod sensor;
mod shape;
mod surface;
mod vec3;

pub use actuator::{Actuator, ActuatorError, SerialActuator};
pub use camera::OrbitCamera;
pub use input::{Input, PointerButton, SurfaceEvent};
pub use latest::Latest;
pub use mesh::Mesh;
pub use renderer::{FrameRenderer, RenderItem, RenderKind, RendererConfig};
pub use rig::{Rig, RigConfig, demo_trajectory};
pub use sensor::{Hand, HandFrame, HandSensor, Handedness, finger};
pub use shape::{DEFAULT_SEGMENTS, Shape, ShapeError};
pub use surface::{Color, Surface};
pub use vec3::Vec3;

// Re-export the screen-space vector type so backends and call sites don't
// need a direct glam dependency.
pub use glam::Vec2;
