use crate::draw::Point;
use crate::input::{events::MouseButton, machine::DrawEvent};

use super::InputState;

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Canvas-relative X coordinate
    /// * `y` - Canvas-relative Y coordinate
    ///
    /// # Behavior
    /// - Left click: places a vertex (starting a polyline when idle)
    /// - Right click: abandons the polyline in progress
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => self.dispatch(DrawEvent::PointerDown(Point::new(x, y))),
            MouseButton::Right => self.dispatch(DrawEvent::Cancel),
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion.
    ///
    /// While a polyline is in progress its preview point follows the pointer.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.dispatch(DrawEvent::PointerMove(Point::new(x, y)));
    }
}
