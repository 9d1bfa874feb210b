//! Polyline construction state machine.
//!
//! A polyline is built one click at a time. While a session is active the
//! transient shape always ends with exactly one preview point that follows the
//! pointer; every point before it is a committed vertex.
//!
//! | State      | Event           | Guard               | Target     |
//! |------------|-----------------|---------------------|------------|
//! | Idle       | PointerDown     |                     | OnePoint   |
//! | OnePoint   | PointerDown     |                     | ManyPoints |
//! | OnePoint   | PointerMove     |                     | OnePoint   |
//! | OnePoint   | Cancel          |                     | Idle       |
//! | ManyPoints | PointerDown     | below point cap     | ManyPoints |
//! | ManyPoints | PointerDown     | cap reached         | Idle (finalize) |
//! | ManyPoints | PointerMove     |                     | ManyPoints |
//! | ManyPoints | Cancel          |                     | Idle       |
//! | ManyPoints | Commit          |                     | Idle (finalize) |
//! | ManyPoints | RemoveLastPoint | more than 3 stored  | ManyPoints |
//! | ManyPoints | RemoveLastPoint | 3 stored            | OnePoint   |
//!
//! Any other combination leaves the machine untouched.

use crate::draw::{Color, Point, Polyline, ShapeId};
use log::{debug, warn};
use std::mem;

/// Default cap on the number of vertices in one polyline.
pub const DEFAULT_MAX_POINTS: usize = 10;

/// Events that drive polyline construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawEvent {
    /// Primary click at a canvas position
    PointerDown(Point),
    /// Pointer moved to a canvas position
    PointerMove(Point),
    /// Abandon the polyline (Escape)
    Cancel,
    /// Finish the polyline (Enter)
    Commit,
    /// Drop the most recent vertex (Backspace)
    RemoveLastPoint,
}

/// Current construction state. The transient polyline only exists while drawing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawingState {
    /// No polyline in progress
    #[default]
    Idle,
    /// One vertex placed; the shape holds that vertex and the preview point
    OnePoint { shape: Polyline },
    /// Two or more vertices placed, plus the preview point
    ManyPoints { shape: Polyline },
}

impl DrawingState {
    /// Short state name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::OnePoint { .. } => "one-point",
            Self::ManyPoints { .. } => "many-points",
        }
    }

    /// The transient polyline, if a session is active.
    pub fn shape(&self) -> Option<&Polyline> {
        match self {
            Self::Idle => None,
            Self::OnePoint { shape } | Self::ManyPoints { shape } => Some(shape),
        }
    }
}

/// Stroke settings applied to polylines created by the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Color while the polyline is being drawn
    pub preview_color: Color,
    /// Color locked in when the polyline is finished
    pub color: Color,
    /// Stroke width in pixels
    pub thickness: f64,
}

/// Outcome of feeding one event to the machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transition {
    /// Whether the event matched a row of the transition table
    pub handled: bool,
    /// The working layer changed and should be repainted
    pub working_changed: bool,
    /// A polyline was finished and is ready to be committed
    pub finished: Option<Polyline>,
}

impl Transition {
    fn ignored() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            handled: true,
            working_changed: true,
            finished: None,
        }
    }

    fn finished(shape: Option<Polyline>) -> Self {
        Self {
            handled: true,
            working_changed: true,
            finished: shape,
        }
    }
}

// ============================================================================
// Guards
// ============================================================================

/// True when the next click still fits under the vertex cap.
fn below_point_cap(shape: &Polyline, max_points: usize) -> bool {
    shape.point_count() < max_points
}

/// True when removing a vertex leaves at least two committed vertices.
fn keeps_many_points(shape: &Polyline) -> bool {
    shape.point_count() > 3
}

// ============================================================================
// Actions
// ============================================================================

/// Moves the preview point to the pointer.
fn set_last_point(shape: &mut Polyline, at: Point) {
    if let Some(last) = shape.points_mut().last_mut() {
        *last = at;
    }
}

/// Commits the preview point at the click position and starts a new preview.
fn add_point(shape: &mut Polyline, at: Point) {
    set_last_point(shape, at);
    shape.points_mut().push(at);
}

/// Drops the most recent committed vertex, keeping the preview point.
fn remove_last_point(shape: &mut Polyline) {
    let points = shape.points_mut();
    if points.len() >= 2 {
        let index = points.len() - 2;
        points.remove(index);
    }
}

/// Strips the preview point and locks in the final stroke color.
fn finalize(mut shape: Polyline, color: Color) -> Option<Polyline> {
    shape.points_mut().pop();
    debug_assert!(
        shape.point_count() >= 2,
        "finalized polyline needs two vertices"
    );
    if shape.point_count() < 2 {
        warn!(
            "Dropping polyline {} with {} vertex",
            shape.id(),
            shape.point_count()
        );
        return None;
    }
    shape.set_color(color);
    Some(shape)
}

/// Click-by-click polyline builder.
#[derive(Debug, Clone)]
pub struct PolylineMachine {
    state: DrawingState,
    style: StrokeStyle,
    max_points: usize,
    pointer: Option<Point>,
    next_id: u64,
}

impl PolylineMachine {
    /// Creates an idle machine. `max_points` is raised to 3 if lower.
    pub fn new(style: StrokeStyle, max_points: usize) -> Self {
        Self {
            state: DrawingState::Idle,
            style,
            max_points: max_points.max(3),
            pointer: None,
            next_id: 1,
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DrawingState::Idle)
    }

    /// The in-progress polyline, preview point included.
    pub fn shape(&self) -> Option<&Polyline> {
        self.state.shape()
    }

    /// Last known pointer position.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Feeds one event through the transition table.
    pub fn handle(&mut self, event: DrawEvent) -> Transition {
        if let DrawEvent::PointerDown(at) | DrawEvent::PointerMove(at) = event {
            self.pointer = Some(at);
        }

        let from = self.state.name();
        let (next, transition) = match (mem::take(&mut self.state), event) {
            (DrawingState::Idle, DrawEvent::PointerDown(at)) => {
                let shape = Polyline::start(
                    self.allocate_id(),
                    at,
                    self.style.preview_color,
                    self.style.thickness,
                );
                (DrawingState::OnePoint { shape }, Transition::changed())
            }

            (DrawingState::OnePoint { mut shape }, DrawEvent::PointerDown(at)) => {
                add_point(&mut shape, at);
                (DrawingState::ManyPoints { shape }, Transition::changed())
            }
            (DrawingState::OnePoint { mut shape }, DrawEvent::PointerMove(at)) => {
                set_last_point(&mut shape, at);
                (DrawingState::OnePoint { shape }, Transition::changed())
            }
            (DrawingState::OnePoint { shape }, DrawEvent::Cancel) => {
                debug!("Abandoned polyline {}", shape.id());
                (DrawingState::Idle, Transition::changed())
            }

            (DrawingState::ManyPoints { mut shape }, DrawEvent::PointerDown(at)) => {
                if below_point_cap(&shape, self.max_points) {
                    add_point(&mut shape, at);
                    (DrawingState::ManyPoints { shape }, Transition::changed())
                } else {
                    add_point(&mut shape, at);
                    debug!(
                        "Polyline {} reached {} vertices; finishing",
                        shape.id(),
                        self.max_points
                    );
                    let finished = finalize(shape, self.style.color);
                    (DrawingState::Idle, Transition::finished(finished))
                }
            }
            (DrawingState::ManyPoints { mut shape }, DrawEvent::PointerMove(at)) => {
                set_last_point(&mut shape, at);
                (DrawingState::ManyPoints { shape }, Transition::changed())
            }
            (DrawingState::ManyPoints { shape }, DrawEvent::Cancel) => {
                debug!("Abandoned polyline {}", shape.id());
                (DrawingState::Idle, Transition::changed())
            }
            (DrawingState::ManyPoints { shape }, DrawEvent::Commit) => {
                let finished = finalize(shape, self.style.color);
                (DrawingState::Idle, Transition::finished(finished))
            }
            (DrawingState::ManyPoints { mut shape }, DrawEvent::RemoveLastPoint) => {
                if keeps_many_points(&shape) {
                    remove_last_point(&mut shape);
                    (DrawingState::ManyPoints { shape }, Transition::changed())
                } else {
                    remove_last_point(&mut shape);
                    (DrawingState::OnePoint { shape }, Transition::changed())
                }
            }

            (state, _) => (state, Transition::ignored()),
        };
        self.state = next;

        if transition.handled {
            debug!("{from} --{event:?}--> {}", self.state.name());
        }
        transition
    }

    fn allocate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED};

    fn machine(max_points: usize) -> PolylineMachine {
        PolylineMachine::new(
            StrokeStyle {
                preview_color: RED,
                color: BLACK,
                thickness: 2.0,
            },
            max_points,
        )
    }

    fn down(x: i32, y: i32) -> DrawEvent {
        DrawEvent::PointerDown(Point::new(x, y))
    }

    fn points(machine: &PolylineMachine) -> Vec<(i32, i32)> {
        machine
            .shape()
            .map(|shape| shape.points().iter().map(|p| (p.x, p.y)).collect())
            .unwrap_or_default()
    }

    #[test]
    fn first_click_creates_degenerate_segment() {
        let mut machine = machine(10);
        let transition = machine.handle(down(10, 10));

        assert!(transition.handled);
        assert!(matches!(machine.state(), DrawingState::OnePoint { .. }));
        assert_eq!(points(&machine), vec![(10, 10), (10, 10)]);
        assert_eq!(machine.shape().unwrap().color(), RED);
    }

    #[test]
    fn second_click_commits_vertex_and_adds_preview() {
        let mut machine = machine(10);
        machine.handle(down(10, 10));
        machine.handle(down(50, 50));

        assert!(matches!(machine.state(), DrawingState::ManyPoints { .. }));
        assert_eq!(points(&machine), vec![(10, 10), (50, 50), (50, 50)]);
    }

    #[test]
    fn pointer_move_only_updates_preview() {
        let mut machine = machine(10);
        machine.handle(down(10, 10));
        machine.handle(DrawEvent::PointerMove(Point::new(20, 25)));
        assert_eq!(points(&machine), vec![(10, 10), (20, 25)]);

        machine.handle(down(30, 30));
        machine.handle(DrawEvent::PointerMove(Point::new(40, 45)));
        assert_eq!(points(&machine), vec![(10, 10), (30, 30), (40, 45)]);
        assert_eq!(machine.pointer(), Some(Point::new(40, 45)));
    }

    #[test]
    fn commit_strips_preview_and_sets_final_color() {
        let mut machine = machine(10);
        machine.handle(down(10, 10));
        machine.handle(down(50, 50));
        machine.handle(DrawEvent::PointerMove(Point::new(80, 5)));

        let shape = machine
            .handle(DrawEvent::Commit)
            .finished
            .expect("commit finishes the polyline");

        assert!(machine.is_idle());
        assert_eq!(shape.points(), &[Point::new(10, 10), Point::new(50, 50)]);
        assert_eq!(shape.color(), BLACK);
    }

    #[test]
    fn commit_in_one_point_is_ignored() {
        let mut machine = machine(10);
        machine.handle(down(10, 10));
        let transition = machine.handle(DrawEvent::Commit);

        assert!(!transition.handled);
        assert!(transition.finished.is_none());
        assert!(matches!(machine.state(), DrawingState::OnePoint { .. }));
    }

    #[test]
    fn reaching_cap_auto_finalizes_with_exact_vertex_count() {
        let max = 10;
        let mut machine = machine(max);

        for i in 0..(max as i32 - 1) {
            let transition = machine.handle(down(i * 10, i));
            assert!(transition.finished.is_none(), "click {} finished early", i + 1);
        }
        assert_eq!(machine.shape().unwrap().point_count(), max);

        let shape = machine
            .handle(down(999, 999))
            .finished
            .expect("cap click finishes the polyline");

        assert!(machine.is_idle());
        assert_eq!(shape.point_count(), max);
        assert_eq!(shape.points().last(), Some(&Point::new(999, 999)));
    }

    #[test]
    fn remove_last_point_keeps_preview_and_walks_down_to_one_point() {
        let mut machine = machine(10);
        for (x, y) in [(0, 0), (10, 0), (20, 0), (30, 0)] {
            machine.handle(down(x, y));
        }
        machine.handle(DrawEvent::PointerMove(Point::new(35, 5)));
        assert_eq!(points(&machine).len(), 5);

        machine.handle(DrawEvent::RemoveLastPoint);
        assert!(matches!(machine.state(), DrawingState::ManyPoints { .. }));
        assert_eq!(points(&machine), vec![(0, 0), (10, 0), (20, 0), (35, 5)]);

        machine.handle(DrawEvent::RemoveLastPoint);
        assert!(matches!(machine.state(), DrawingState::ManyPoints { .. }));
        assert_eq!(points(&machine), vec![(0, 0), (10, 0), (35, 5)]);

        machine.handle(DrawEvent::RemoveLastPoint);
        assert!(matches!(machine.state(), DrawingState::OnePoint { .. }));
        assert_eq!(points(&machine), vec![(0, 0), (35, 5)]);

        let transition = machine.handle(DrawEvent::RemoveLastPoint);
        assert!(!transition.handled);
        assert_eq!(points(&machine), vec![(0, 0), (35, 5)]);
    }

    #[test]
    fn cancel_discards_from_either_drawing_state() {
        let mut machine = machine(10);
        machine.handle(down(1, 1));
        assert!(machine.handle(DrawEvent::Cancel).finished.is_none());
        assert!(machine.is_idle());

        machine.handle(down(1, 1));
        machine.handle(down(2, 2));
        assert!(machine.handle(DrawEvent::Cancel).finished.is_none());
        assert!(machine.is_idle());
        assert!(machine.shape().is_none());
    }

    #[test]
    fn idle_ignores_everything_but_clicks() {
        let mut machine = machine(10);
        for event in [
            DrawEvent::PointerMove(Point::new(3, 3)),
            DrawEvent::Cancel,
            DrawEvent::Commit,
            DrawEvent::RemoveLastPoint,
        ] {
            assert!(!machine.handle(event).handled);
            assert!(machine.is_idle());
        }
    }

    #[test]
    fn each_session_gets_a_fresh_id() {
        let mut machine = machine(10);
        machine.handle(down(0, 0));
        let first = machine.shape().unwrap().id();
        machine.handle(DrawEvent::Cancel);
        machine.handle(down(0, 0));
        assert_ne!(machine.shape().unwrap().id(), first);
    }

    #[test]
    fn max_points_has_floor_of_three() {
        assert_eq!(machine(1).max_points(), 3);
    }
}
