//! Demo driver for the walkthrough core.
//!
//! By default this replays a scripted visit through a walled gallery and
//! logs the camera as it goes. With the `viewer` feature it opens a window
//! instead: walk with WASD, drag to look, arrow keys fly between waypoints,
//! and the window title tracks the pose.
//!
//! ```text
//! RUST_LOG=debug artvistas-walk [options.toml] [tour.toml]
//! ```

use std::path::Path;
use std::rc::Rc;

use artvistas_nav::camera::Pose;
use artvistas_nav::scene::{Mesh, SceneGeometry, SceneNode, SceneProvider};
use artvistas_nav::{Options, Tour};
use glam::Vec3;

/// Box-walled gallery with a plinth in the entrance hall and a display wall
/// in the classical wing.
fn gallery() -> Rc<dyn SceneProvider> {
    let wall = |name: &str, a: Vec3, b: Vec3| {
        SceneNode::with_mesh(name, Mesh::cuboid(a, b))
    };
    Rc::new(SceneGeometry::new(vec![
        SceneNode::group(
            "shell",
            vec![
                wall("north", Vec3::new(-8.0, 0.0, -8.2), Vec3::new(8.0, 4.0, -8.0)),
                wall("south", Vec3::new(-8.0, 0.0, 8.0), Vec3::new(8.0, 4.0, 8.2)),
                wall("west", Vec3::new(-8.2, 0.0, -8.0), Vec3::new(-8.0, 4.0, 8.0)),
                wall("east", Vec3::new(8.0, 0.0, -8.0), Vec3::new(8.2, 4.0, 8.0)),
            ],
        ),
        SceneNode::group(
            "exhibits",
            vec![
                wall("plinth", Vec3::new(-0.5, 0.0, -1.5), Vec3::new(0.5, 1.8, -0.5)),
                wall(
                    "classical_display",
                    Vec3::new(-7.0, 0.0, -6.2),
                    Vec3::new(-1.0, 3.0, -6.0),
                ),
            ],
        ),
    ]))
}

fn load_options(path: Option<&str>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    Options::load(Path::new(path)).unwrap_or_else(|e| {
        log::warn!("Falling back to default options: {e}");
        Options::default()
    })
}

fn load_tour(path: Option<&str>) -> Tour {
    let Some(path) = path else {
        return Tour::default_museum();
    };
    Tour::load(Path::new(path)).unwrap_or_else(|e| {
        log::warn!("Falling back to the default tour: {e}");
        Tour::default_museum()
    })
}

fn describe(pose: &Pose) -> String {
    let p = pose.position;
    let f = pose.facing();
    format!(
        "at ({:.2}, {:.2}, {:.2}) facing ({:.2}, {:.2}, {:.2})",
        p.x, p.y, p.z, f.x, f.y, f.z
    )
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();
    let options = load_options(args.get(1).map(String::as_str));
    let tour = load_tour(args.get(2).map(String::as_str));

    let scene = gallery();

    #[cfg(feature = "viewer")]
    viewer::run(options, tour, scene);

    #[cfg(not(feature = "viewer"))]
    headless::run(options, tour, &scene);
}

#[cfg(not(feature = "viewer"))]
mod headless {
    use std::rc::Rc;

    use artvistas_nav::camera::OrbitCamera;
    use artvistas_nav::scene::SceneProvider;
    use artvistas_nav::{InputEvent, Options, Tour, Walkthrough};
    use glam::Vec2;

    use super::describe;

    const FRAME_DT: f32 = 1.0 / 60.0;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.to_owned(),
            pressed,
        }
    }

    /// One step of the scripted visit: events to send, then frames to run.
    struct Step {
        label: &'static str,
        events: Vec<InputEvent>,
        frames: usize,
    }

    fn script() -> Vec<Step> {
        vec![
            Step {
                label: "walk toward the plinth",
                events: vec![key("KeyW", true)],
                frames: 60,
            },
            Step {
                label: "sidestep right",
                events: vec![key("KeyW", false), key("KeyD", true)],
                frames: 15,
            },
            Step {
                label: "look around",
                events: vec![
                    key("KeyD", false),
                    InputEvent::PointerDown { x: 640.0, y: 400.0 },
                    InputEvent::PointerMove { x: 700.0, y: 390.0 },
                    InputEvent::PointerUp,
                ],
                frames: 30,
            },
            Step {
                label: "fly to the next waypoint",
                events: vec![key("ArrowRight", true), key("ArrowRight", false)],
                frames: 20,
            },
            Step {
                label: "change of mind mid-flight",
                events: vec![key("ArrowRight", true), key("ArrowRight", false)],
                frames: 120,
            },
            Step {
                label: "walk into the display wall",
                events: vec![key("KeyW", true)],
                frames: 60,
            },
            Step {
                label: "switch to a phone-sized viewport",
                events: vec![
                    key("KeyW", false),
                    InputEvent::Resize {
                        width: 390.0,
                        height: 844.0,
                    },
                    InputEvent::PointerDown { x: 80.0, y: 764.0 },
                    InputEvent::PointerMove { x: 60.0, y: 784.0 },
                ],
                frames: 20,
            },
        ]
    }

    fn run_script(walk: &mut Walkthrough) {
        for step in script() {
            log::info!("== {}", step.label);
            for event in &step.events {
                walk.handle_event(event);
            }
            let mut blocked_frames = 0;
            for _ in 0..step.frames {
                let report = walk.frame(FRAME_DT);
                if report.blocked_forward || report.blocked_strafe {
                    blocked_frames += 1;
                }
            }
            log::info!(
                "   {} ({} mode, waypoint '{}'{})",
                describe(&walk.pose()),
                walk.mode(),
                walk.current_waypoint().name,
                if blocked_frames > 0 {
                    format!(", blocked for {blocked_frames} frames")
                } else {
                    String::new()
                }
            );
        }
        log::info!(
            "Visit over; hint {}",
            if walk.hint_visible() { "still shown" } else { "hidden" }
        );
    }

    pub(super) fn run(options: Options, tour: Tour, scene: &Rc<dyn SceneProvider>) {
        let viewport = Vec2::new(1280.0, 800.0);
        let mut walk = Walkthrough::new(options, tour, viewport);
        let orbit = OrbitCamera::new(
            &walk.options().camera,
            walk.pose(),
            viewport.x / viewport.y,
        );
        walk.attach_orbit(Box::new(orbit));
        log::info!("Loading gallery...");
        walk.scene_loaded(scene);
        log::info!("{}", walk.controls_hint().replace('\n', "; "));
        run_script(&mut walk);
    }
}

#[cfg(feature = "viewer")]
mod viewer {
    use std::rc::Rc;

    use artvistas_nav::camera::OrbitCamera;
    use artvistas_nav::input::WinitTranslator;
    use artvistas_nav::scene::SceneProvider;
    use artvistas_nav::util::frame_timing::FrameClock;
    use artvistas_nav::{Options, Tour, Walkthrough};
    use glam::Vec2;
    use winit::application::ApplicationHandler;
    use winit::event::WindowEvent;
    use winit::event_loop::{ActiveEventLoop, EventLoop};
    use winit::window::{Window, WindowId};

    use super::describe;

    struct WalkApp {
        window: Option<Window>,
        walk: Option<Walkthrough>,
        translator: WinitTranslator,
        clock: FrameClock,
        options: Option<Options>,
        tour: Option<Tour>,
        scene: Rc<dyn SceneProvider>,
    }

    impl ApplicationHandler for WalkApp {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_some() {
                return;
            }
            let attrs = Window::default_attributes().with_title("ArtVistas");
            let window = match event_loop.create_window(attrs) {
                Ok(window) => window,
                Err(e) => {
                    log::error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };
            let scale = window.scale_factor();
            let size = window.inner_size().to_logical::<f32>(scale);
            let viewport = Vec2::new(size.width, size.height);

            let options = self.options.take().unwrap_or_default();
            let tour = self.tour.take().unwrap_or_default();
            let mut walk = Walkthrough::new(options, tour, viewport);
            let orbit = OrbitCamera::new(
                &walk.options().camera,
                walk.pose(),
                viewport.x / viewport.y.max(1.0),
            );
            walk.attach_orbit(Box::new(orbit));
            walk.scene_loaded(&self.scene);

            self.translator = WinitTranslator::new(scale);
            self.clock = FrameClock::new();
            window.request_redraw();
            self.window = Some(window);
            self.walk = Some(walk);
        }

        fn window_event(
            &mut self,
            event_loop: &ActiveEventLoop,
            _id: WindowId,
            event: WindowEvent,
        ) {
            let (Some(window), Some(walk)) = (&self.window, &mut self.walk)
            else {
                return;
            };
            match event {
                WindowEvent::CloseRequested => event_loop.exit(),
                WindowEvent::RedrawRequested => {
                    let dt = self.clock.tick();
                    let _ = walk.frame(dt);
                    window.set_title(&format!(
                        "ArtVistas - {} - {} ({:.0} fps)",
                        walk.current_waypoint().name,
                        describe(&walk.pose()),
                        self.clock.fps()
                    ));
                    window.request_redraw();
                }
                other => {
                    if let Some(input) = self.translator.translate(&other) {
                        walk.handle_event(&input);
                    }
                }
            }
        }
    }

    pub(super) fn run(options: Options, tour: Tour, scene: Rc<dyn SceneProvider>) {
        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                log::error!("Failed to create event loop: {e}");
                return;
            }
        };
        let mut app = WalkApp {
            window: None,
            walk: None,
            translator: WinitTranslator::default(),
            clock: FrameClock::new(),
            options: Some(options),
            tour: Some(tour),
            scene,
        };
        if let Err(e) = event_loop.run_app(&mut app) {
            log::error!("Event loop error: {e}");
        }
    }
}
