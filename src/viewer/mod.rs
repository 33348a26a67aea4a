//! The viewer: owns all mutable state (scene, camera, pointer,
//! interaction, markers) and drives one update per frame.
//!
//! The render collaborator feeds raw events into
//! [`Viewer::handle_event`], calls [`Viewer::tick`] once per frame, and
//! paints from the returned [`FrameState`] plus the retained
//! [`Scene`](crate::scene::Scene) geometry.

/// Viewer command enum.
pub mod command;

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use command::ViewerCommand;

use crate::camera::CameraController;
use crate::input::{InputEvent, InputProcessor, PointerTracker};
use crate::nodes::{
    load_markers, Marker, MarkerId, NodeLoader, NodeRecord, NodeSource,
};
use crate::options::Options;
use crate::picking::{pick, InteractionState, PickRay, VisualState};
use crate::scene::Scene;

/// Per-marker draw data for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDraw {
    /// Marker identity.
    pub id: MarkerId,
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Visual state this frame.
    pub state: VisualState,
    /// Resolved color for that state.
    pub color: [f32; 3],
}

/// Snapshot handed to the render collaborator each tick.
#[derive(Debug, Clone)]
pub struct FrameState {
    /// Combined view-projection matrix.
    pub view_projection: Mat4,
    /// Camera eye position.
    pub eye: Vec3,
    /// Background clear color.
    pub background: [f32; 3],
    /// Per-marker draw data, in marker order.
    pub markers: Vec<MarkerDraw>,
}

/// Owns all viewer state and the per-frame update.
pub struct Viewer {
    options: Options,
    scene: Scene,
    camera: CameraController,
    pointer: PointerTracker,
    processor: InputProcessor,
    interaction: InteractionState,
    markers: Vec<Marker>,
    loader: Option<NodeLoader>,
    rng: StdRng,
}

impl Viewer {
    /// Create a viewer with the reference frame in place and no markers.
    #[must_use]
    pub fn new(options: Options, width: u32, height: u32) -> Self {
        Self::with_seed(options, width, height, rand::random())
    }

    /// Create a viewer with a deterministic RNG seed for the missing
    /// coordinate fallback.
    #[must_use]
    pub fn with_seed(
        options: Options,
        width: u32,
        height: u32,
        seed: u64,
    ) -> Self {
        let scene =
            Scene::with_reference_frame(&options.scene, &options.colors);
        let camera = CameraController::new(&options.camera, width, height);
        Self {
            scene,
            camera,
            pointer: PointerTracker::new(width, height),
            processor: InputProcessor::new(),
            interaction: InteractionState::new(),
            markers: Vec::new(),
            loader: None,
            rng: StdRng::seed_from_u64(seed),
            options,
        }
    }

    /// Start the one-time background node fetch. The scene keeps
    /// rendering with zero markers until the fetch resolves.
    pub fn start_loading<S>(&mut self, source: S)
    where
        S: NodeSource + Send + 'static,
    {
        self.loader = Some(NodeLoader::spawn(source));
    }

    /// Load markers synchronously from raw records (also called by
    /// [`tick`](Self::tick) when the background fetch resolves).
    pub fn ingest_records(&mut self, records: &[NodeRecord]) {
        let markers = load_markers(
            records,
            self.options.nodes.coordinate_range,
            &mut self.rng,
        );
        log::info!("loaded {} markers", markers.len());
        self.scene
            .add_markers(&markers, self.options.nodes.marker_radius);
        self.markers.extend_from_slice(&markers);
    }

    /// Feed one raw input event through the processor and execute the
    /// resulting commands.
    pub fn handle_event(&mut self, event: InputEvent) {
        if let InputEvent::CursorMoved { x, y } = event {
            self.pointer.set_position(x, y);
        }
        let commands = self
            .processor
            .handle_event(event, self.interaction.hovered());
        for command in commands {
            self.execute(command);
        }
    }

    /// Execute a single viewer command.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::RotateCamera { delta } => {
                self.camera.rotate(delta);
            }
            ViewerCommand::PanCamera { delta } => self.camera.pan(delta),
            ViewerCommand::Zoom { delta } => self.camera.zoom(delta),
            ViewerCommand::Resize { width, height } => {
                self.camera.resize(width, height);
                self.pointer.set_viewport(width, height);
            }
            ViewerCommand::ToggleSelect { id } => {
                // Stale command against a removed marker is a no-op
                if self.markers.iter().any(|m| m.id == id) {
                    let selected = self.interaction.toggle_select(id);
                    log::debug!(
                        "marker {id:?} {}",
                        if selected { "selected" } else { "deselected" }
                    );
                    self.scene.force_dirty();
                }
            }
            ViewerCommand::ClearSelection => {
                if self.interaction.clear_selection() {
                    self.scene.force_dirty();
                }
            }
            ViewerCommand::RecenterCamera => self.camera.recenter(),
            ViewerCommand::FitToMarkers => {
                let positions: Vec<Vec3> =
                    self.markers.iter().map(|m| m.position).collect();
                self.camera.fit_to_positions(&positions);
            }
        }
    }

    /// One update tick: ingest a resolved fetch, re-run the hit test
    /// from the cached pointer (the camera may have moved under a
    /// stationary cursor), update the hover target, and snapshot the
    /// frame.
    pub fn tick(&mut self) -> FrameState {
        if let Some(records) =
            self.loader.as_mut().and_then(NodeLoader::poll)
        {
            self.ingest_records(&records);
            self.loader = None;
        }

        let hit = self.pointer.ndc().and_then(|ndc| {
            let ray = PickRay::from_camera(&self.camera.camera, ndc);
            pick(&ray, &self.markers, self.options.nodes.pick_radius)
        });
        if hit != self.interaction.hovered() {
            self.interaction.set_hover(hit);
            self.scene.force_dirty();
        }

        self.frame_state()
    }

    fn frame_state(&self) -> FrameState {
        let markers = self
            .scene
            .markers()
            .iter()
            .map(|sphere| {
                let state = self.interaction.state_of(sphere.id);
                MarkerDraw {
                    id: sphere.id,
                    center: sphere.center,
                    radius: sphere.radius,
                    state,
                    color: self.options.colors.marker_color(state),
                }
            })
            .collect();
        FrameState {
            view_projection: self.camera.camera.view_projection(),
            eye: self.camera.camera.eye,
            background: self.options.colors.background,
            markers,
        }
    }

    /// The retained scene geometry.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access (for the collaborator's dirty bookkeeping).
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The loaded markers.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Whether the one-time background fetch is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    /// The currently hovered marker, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<MarkerId> {
        self.interaction.hovered()
    }

    /// A marker's visual state this frame.
    #[must_use]
    pub fn marker_state(&self, id: MarkerId) -> VisualState {
        self.interaction.state_of(id)
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NodeviewError;
    use crate::input::MouseButton;

    fn record(x: f32, y: f32, z: f32) -> NodeRecord {
        NodeRecord {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    fn viewer_with_markers(positions: &[Vec3]) -> Viewer {
        let mut viewer = Viewer::with_seed(Options::default(), 800, 600, 1);
        let records: Vec<NodeRecord> = positions
            .iter()
            .map(|p| record(p.x, p.y, p.z))
            .collect();
        viewer.ingest_records(&records);
        viewer
    }

    /// Screen-pixel position a world point projects to.
    fn screen_of(viewer: &Viewer, point: Vec3) -> (f32, f32) {
        let clip = viewer
            .camera()
            .camera
            .view_projection()
            .project_point3(point);
        (
            (clip.x + 1.0) / 2.0 * 800.0,
            (1.0 - clip.y) / 2.0 * 600.0,
        )
    }

    fn move_to(viewer: &mut Viewer, point: Vec3) {
        let (x, y) = screen_of(viewer, point);
        viewer.handle_event(InputEvent::CursorMoved { x, y });
    }

    fn click(viewer: &mut Viewer) {
        viewer.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        viewer.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
    }

    #[test]
    fn hover_follows_pointer_over_markers() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 0.0, 0.0);
        let mut viewer = viewer_with_markers(&[a, b]);

        move_to(&mut viewer, a);
        let _ = viewer.tick();
        assert_eq!(viewer.hovered(), Some(MarkerId(0)));

        move_to(&mut viewer, b);
        let _ = viewer.tick();
        assert_eq!(viewer.hovered(), Some(MarkerId(1)));

        // Off both markers
        viewer.handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 });
        let _ = viewer.tick();
        assert_eq!(viewer.hovered(), None);
    }

    #[test]
    fn click_hover_click_sequence_through_raw_events() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 0.0, 0.0);
        let mut viewer = viewer_with_markers(&[a, b]);
        let (ida, idb) = (MarkerId(0), MarkerId(1));

        // Click A: unselected -> selected
        move_to(&mut viewer, a);
        let _ = viewer.tick();
        click(&mut viewer);
        assert_eq!(viewer.marker_state(ida), VisualState::HoveredSelected);

        // Hover B while A stays selected
        move_to(&mut viewer, b);
        let _ = viewer.tick();
        assert_eq!(viewer.marker_state(ida), VisualState::Selected);
        assert_eq!(viewer.marker_state(idb), VisualState::Hovered);

        // Click B
        click(&mut viewer);
        assert_eq!(viewer.marker_state(idb), VisualState::HoveredSelected);

        // Pointer off both markers
        viewer.handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 });
        let _ = viewer.tick();
        assert_eq!(viewer.marker_state(ida), VisualState::Selected);
        assert_eq!(viewer.marker_state(idb), VisualState::Selected);
    }

    #[test]
    fn double_click_restores_selection_status() {
        let a = Vec3::ZERO;
        let mut viewer = viewer_with_markers(&[a]);

        move_to(&mut viewer, a);
        let _ = viewer.tick();
        click(&mut viewer);
        click(&mut viewer);
        assert_eq!(
            viewer.marker_state(MarkerId(0)),
            VisualState::Hovered
        );
    }

    #[test]
    fn camera_orbit_changes_hit_under_stationary_pointer() {
        let b = Vec3::new(2.0, 0.0, 0.0);
        let mut viewer = viewer_with_markers(&[b]);

        move_to(&mut viewer, b);
        let _ = viewer.tick();
        assert_eq!(viewer.hovered(), Some(MarkerId(0)));

        // Orbit without moving the pointer; the same screen point no
        // longer lines up with the marker.
        viewer.execute(ViewerCommand::RotateCamera {
            delta: glam::Vec2::new(120.0, 40.0),
        });
        let _ = viewer.tick();
        assert_eq!(viewer.hovered(), None);
    }

    #[test]
    fn frame_state_carries_marker_colors() {
        let a = Vec3::ZERO;
        let mut viewer = viewer_with_markers(&[a]);
        move_to(&mut viewer, a);
        let frame = viewer.tick();
        assert_eq!(frame.markers.len(), 1);
        assert_eq!(frame.markers[0].state, VisualState::Hovered);
        assert_eq!(
            frame.markers[0].color,
            viewer.options().colors.marker_hovered
        );
        assert_eq!(frame.background, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn stale_toggle_against_missing_marker_is_noop() {
        let mut viewer = viewer_with_markers(&[Vec3::ZERO]);
        viewer.execute(ViewerCommand::ToggleSelect { id: MarkerId(99) });
        assert_eq!(
            viewer.marker_state(MarkerId(99)),
            VisualState::Default
        );
    }

    #[test]
    fn clear_selection_leaves_hover_alone() {
        let a = Vec3::ZERO;
        let mut viewer = viewer_with_markers(&[a]);
        move_to(&mut viewer, a);
        let _ = viewer.tick();
        click(&mut viewer);
        viewer.execute(ViewerCommand::ClearSelection);
        assert_eq!(viewer.marker_state(MarkerId(0)), VisualState::Hovered);
    }

    struct FailingSource;

    impl NodeSource for FailingSource {
        fn fetch_nodes(&self) -> Result<Vec<NodeRecord>, NodeviewError> {
            Err(NodeviewError::Fetch("connection refused".into()))
        }
    }

    #[test]
    fn failed_fetch_leaves_reference_frame_intact() {
        let mut viewer = Viewer::with_seed(Options::default(), 800, 600, 1);
        viewer.start_loading(FailingSource);

        // Tick until the fetch resolves; rendering was never gated on it
        for _ in 0..1000 {
            let _ = viewer.tick();
            if !viewer.is_loading() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        }

        assert!(viewer.markers().is_empty());
        assert_eq!(viewer.scene().line_sets().len(), 4);
        assert_eq!(viewer.scene().meshes().len(), 1);
    }

    #[test]
    fn background_fetch_populates_markers() {
        struct FixedSource;
        impl NodeSource for FixedSource {
            fn fetch_nodes(
                &self,
            ) -> Result<Vec<NodeRecord>, NodeviewError> {
                Ok(vec![record(1.0, 2.0, 3.0), NodeRecord::default()])
            }
        }

        let mut viewer = Viewer::with_seed(Options::default(), 800, 600, 1);
        viewer.start_loading(FixedSource);
        for _ in 0..1000 {
            let _ = viewer.tick();
            if !viewer.is_loading() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        }

        assert_eq!(viewer.markers().len(), 2);
        assert_eq!(
            viewer.markers()[0].position,
            Vec3::new(1.0, 2.0, 3.0)
        );
        let p = viewer.markers()[1].position;
        for c in [p.x, p.y, p.z] {
            assert!((-5.0..=5.0).contains(&c));
        }
        assert_eq!(viewer.scene().markers().len(), 2);
    }
}
