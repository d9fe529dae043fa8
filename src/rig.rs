//! The rig driver: sensor loop, feedback output, and the frame loop.
//!
//! Two loops at independent rates. A sensor thread polls the hand tracker
//! (fast, ~100 Hz), publishes the newest fingertip into a [`Latest`] slot,
//! and pushes the mapped intensity to the actuator. The render loop runs on
//! the calling thread at the configured tick rate, reading whatever fingertip
//! is current. The slot is the only shared state; the newest value always
//! wins and a stale read is fine — the next frame picks up the fresh one.
//!
//! Shutdown is cooperative: the quit signal is checked at the top of each
//! frame, and the sensor thread observes a stop flag. Per-frame state is
//! discarded at the frame boundary, so there is nothing to unwind.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::actuator::Actuator;
use crate::camera::OrbitCamera;
use crate::feedback;
use crate::input::Input;
use crate::latest::Latest;
use crate::renderer::FrameRenderer;
use crate::sensor::HandSensor;
use crate::shape::{DEFAULT_SEGMENTS, Shape};
use crate::surface::Surface;
use crate::vec3::Vec3;

/// Pacing for the sensor/actuator side of the rig.
#[derive(Clone, Copy, Debug)]
pub struct RigConfig {
    /// Longest a single sensor poll may block. On timeout the last-known
    /// fingertip stays current.
    pub sensor_timeout: Duration,
    /// Target spacing between sensor polls.
    pub sensor_interval: Duration,
    /// Tessellation quality for the rendered shape.
    pub mesh_segments: u32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            sensor_timeout: Duration::from_millis(50),
            sensor_interval: Duration::from_millis(10),
            mesh_segments: DEFAULT_SEGMENTS,
        }
    }
}

impl RigConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sensor_timeout(mut self, timeout: Duration) -> Self {
        self.sensor_timeout = timeout;
        self
    }

    pub fn sensor_interval(mut self, interval: Duration) -> Self {
        self.sensor_interval = interval;
        self
    }

    pub fn mesh_segments(mut self, segments: u32) -> Self {
        self.mesh_segments = segments;
        self
    }
}

/// One virtual solid, one hand sensor, one actuator.
///
/// # Example
/// ```no_run
/// use haptos::{
///     FrameRenderer, OrbitCamera, RendererConfig, Rig, SerialActuator, Shape, Vec3,
/// };
/// # struct Tracker;
/// # impl haptos::HandSensor for Tracker {
/// #     type Error = std::io::Error;
/// #     fn poll(&mut self, _: std::time::Duration)
/// #         -> Result<Option<haptos::HandFrame>, Self::Error> { Ok(None) }
/// # }
/// # struct Window;
/// # impl haptos::Surface for Window {
/// #     type Error = std::io::Error;
/// #     fn poll_events(&mut self) -> Vec<haptos::SurfaceEvent> { Vec::new() }
/// #     fn clear(&mut self, _: haptos::Color) {}
/// #     fn fill_polygon(&mut self, _: &[haptos::Vec2], _: haptos::Color) {}
/// #     fn stroke_polygon(&mut self, _: &[haptos::Vec2], _: haptos::Color) {}
/// #     fn fill_circle(&mut self, _: haptos::Vec2, _: f32, _: haptos::Color) {}
/// #     fn present(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # fn open_tracker() -> Tracker { Tracker }
/// # fn open_window() -> Window { Window }
///
/// fn main() -> anyhow::Result<()> {
///     let shape = Shape::sphere(Vec3::ZERO, 90.0)?;
///     let actuator = SerialActuator::open("/dev/ttyUSB0", 9600)?;
///
///     let renderer = FrameRenderer::new(RendererConfig::default());
///     let mut camera = OrbitCamera::new().distance(500.0);
///     let mut window = open_window();
///
///     Rig::new(shape, open_tracker(), actuator).run(&renderer, &mut camera, &mut window)
/// }
/// ```
pub struct Rig<Sen, Act> {
    shape: Shape,
    sensor: Sen,
    actuator: Act,
    config: RigConfig,
}

impl<Sen, Act> Rig<Sen, Act>
where
    Sen: HandSensor + Send + 'static,
    Act: Actuator + Send + 'static,
{
    pub fn new(shape: Shape, sensor: Sen, actuator: Act) -> Self {
        Self {
            shape,
            sensor,
            actuator,
            config: RigConfig::default(),
        }
    }

    pub fn config(mut self, config: RigConfig) -> Self {
        self.config = config;
        self
    }

    /// Run both loops until the surface requests quit.
    ///
    /// Transient failures — a sensor poll timing out, an actuator write
    /// failing — are logged and survived. A failing surface present is
    /// fatal and propagates.
    pub fn run<S: Surface>(
        self,
        renderer: &FrameRenderer,
        camera: &mut OrbitCamera,
        surface: &mut S,
    ) -> anyhow::Result<()> {
        let Rig { shape, sensor, actuator, config } = self;

        let mesh = shape.mesh(config.mesh_segments);
        let slot = Arc::new(Latest::new());
        let stop = Arc::new(AtomicBool::new(false));

        tracing::info!(?shape, "rig starting");

        let sensor_thread = {
            let slot = Arc::clone(&slot);
            let stop = Arc::clone(&stop);
            thread::spawn(move || sensor_loop(shape, config, sensor, actuator, &slot, &stop))
        };

        let tick = Duration::from_secs_f64(1.0 / f64::from(renderer.config().tick_rate));
        let mut input = Input::new();
        let mut next_frame = Instant::now();
        let mut result = Ok(());

        loop {
            input.begin_frame();
            for event in surface.poll_events() {
                input.handle_event(event);
            }
            if input.quit_requested() {
                break;
            }

            camera.update(input.pointer_delta(), input.dragging());

            if let Err(e) = renderer.render(&mesh, camera, slot.latest(), surface) {
                result = Err(e).context("display surface failed");
                break;
            }

            next_frame += tick;
            let now = Instant::now();
            if next_frame > now {
                thread::sleep(next_frame - now);
            } else {
                next_frame = now; // frame overran; don't try to catch up
            }
        }

        stop.store(true, Ordering::Relaxed);
        if sensor_thread.join().is_err() {
            tracing::warn!("sensor thread panicked during shutdown");
        }
        tracing::info!("rig stopped");
        result
    }
}

fn sensor_loop<Sen: HandSensor, Act: Actuator>(
    shape: Shape,
    config: RigConfig,
    mut sensor: Sen,
    mut actuator: Act,
    slot: &Latest<Vec3>,
    stop: &AtomicBool,
) {
    while !stop.load(Ordering::Relaxed) {
        let started = Instant::now();

        match sensor.poll(config.sensor_timeout) {
            Ok(Some(frame)) => {
                if let Some(tip) = frame.tracked_tip() {
                    slot.publish(tip);
                    let level = feedback::intensity(shape.signed_distance(tip));
                    if let Err(e) = actuator.set_intensity(level) {
                        tracing::warn!(error = %e, "actuator update failed");
                    }
                }
            }
            // Timeout: the last-known fingertip stays current.
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "hand sensor poll failed"),
        }

        let elapsed = started.elapsed();
        if elapsed < config.sensor_interval {
            thread::sleep(config.sensor_interval - elapsed);
        }
    }
}

/// A synthetic fingertip path for running the viewport without tracking
/// hardware: a slow Lissajous orbit around the scene origin, millimeters.
pub fn demo_trajectory(elapsed: Duration) -> Vec3 {
    let t = elapsed.as_secs_f64() * 2.0;
    Vec3::new(
        170.0 * t.cos(),
        130.0 * (t * 1.2).sin(),
        170.0 * t.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SurfaceEvent;
    use crate::renderer::RendererConfig;
    use crate::surface::Color;
    use glam::Vec2;
    use std::convert::Infallible;
    use std::sync::Mutex;

    struct FixedSensor {
        frame: crate::sensor::HandFrame,
    }

    impl HandSensor for FixedSensor {
        type Error = Infallible;

        fn poll(&mut self, _timeout: Duration) -> Result<Option<crate::sensor::HandFrame>, Infallible> {
            Ok(Some(self.frame))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingActuator {
        levels: Arc<Mutex<Vec<u8>>>,
    }

    impl Actuator for RecordingActuator {
        type Error = Infallible;

        fn set_intensity(&mut self, level: u8) -> Result<(), Infallible> {
            self.levels.lock().unwrap().push(level);
            Ok(())
        }
    }

    struct FailingActuator;

    impl Actuator for FailingActuator {
        type Error = std::io::Error;

        fn set_intensity(&mut self, _level: u8) -> Result<(), std::io::Error> {
            Err(std::io::Error::other("wire unplugged"))
        }
    }

    /// Surface that requests quit after a fixed number of frames.
    struct CountdownSurface {
        frames_left: u32,
        presents: u32,
    }

    impl CountdownSurface {
        fn new(frames: u32) -> Self {
            Self { frames_left: frames, presents: 0 }
        }
    }

    impl Surface for CountdownSurface {
        type Error = Infallible;

        fn poll_events(&mut self) -> Vec<SurfaceEvent> {
            if self.frames_left == 0 {
                vec![SurfaceEvent::QuitRequested]
            } else {
                self.frames_left -= 1;
                Vec::new()
            }
        }

        fn clear(&mut self, _color: Color) {}
        fn fill_polygon(&mut self, _points: &[Vec2], _color: Color) {}
        fn stroke_polygon(&mut self, _points: &[Vec2], _color: Color) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}

        fn present(&mut self) -> Result<(), Infallible> {
            self.presents += 1;
            Ok(())
        }
    }

    fn tracked_frame(tip: Vec3) -> crate::sensor::HandFrame {
        crate::sensor::HandFrame {
            left: None,
            right: Some(crate::sensor::Hand { palm: tip, fingertips: [tip; 5] }),
        }
    }

    fn fast_config() -> RigConfig {
        RigConfig::new()
            .sensor_timeout(Duration::from_millis(1))
            .sensor_interval(Duration::from_millis(1))
    }

    #[test]
    fn runs_until_quit_and_drives_the_actuator() {
        let shape = Shape::sphere(Vec3::ZERO, 90.0).unwrap();
        // Fingertip 10 mm outside the sphere: intensity 128 - 4*10 = 88.
        let sensor = FixedSensor { frame: tracked_frame(Vec3::new(100.0, 0.0, 0.0)) };
        let actuator = RecordingActuator::default();
        let levels = Arc::clone(&actuator.levels);

        let renderer = FrameRenderer::new(RendererConfig::new().tick_rate(1000));
        let mut camera = OrbitCamera::new();
        let mut surface = CountdownSurface::new(50);

        Rig::new(shape, sensor, actuator)
            .config(fast_config())
            .run(&renderer, &mut camera, &mut surface)
            .unwrap();

        assert_eq!(surface.presents, 50);
        let levels = levels.lock().unwrap();
        assert!(!levels.is_empty(), "sensor loop never reached the actuator");
        assert!(levels.iter().all(|&l| l == 88));
    }

    #[test]
    fn quit_before_first_frame_draws_nothing() {
        let shape = Shape::cube(Vec3::ZERO, 80.0).unwrap();
        let sensor = FixedSensor { frame: crate::sensor::HandFrame::default() };
        let actuator = RecordingActuator::default();

        let renderer = FrameRenderer::new(RendererConfig::new().tick_rate(1000));
        let mut camera = OrbitCamera::new();
        let mut surface = CountdownSurface::new(0);

        Rig::new(shape, sensor, actuator)
            .config(fast_config())
            .run(&renderer, &mut camera, &mut surface)
            .unwrap();

        assert_eq!(surface.presents, 0);
    }

    #[test]
    fn actuator_failures_do_not_kill_the_loop() {
        let shape = Shape::sphere(Vec3::ZERO, 90.0).unwrap();
        let sensor = FixedSensor { frame: tracked_frame(Vec3::ZERO) };

        let renderer = FrameRenderer::new(RendererConfig::new().tick_rate(1000));
        let mut camera = OrbitCamera::new();
        let mut surface = CountdownSurface::new(20);

        let result = Rig::new(shape, sensor, FailingActuator)
            .config(fast_config())
            .run(&renderer, &mut camera, &mut surface);

        assert!(result.is_ok());
        assert_eq!(surface.presents, 20);
    }

    #[test]
    fn demo_trajectory_starts_on_the_x_axis() {
        let p = demo_trajectory(Duration::ZERO);
        assert_eq!(p, Vec3::new(170.0, 0.0, 0.0));
        // And moves.
        assert_ne!(demo_trajectory(Duration::from_millis(500)), p);
    }
}
