use egui::{Pos2, Response};

/// The pointer surface of the canvas: one continuous gesture spans a Down,
/// any number of Moves, and an Up. Implemented by the canvas, invoked by the
/// windowing layer; the canvas never sees toolkit event types.
pub trait PointerHandler {
    fn on_pointer_down(&mut self, pos: Pos2);
    fn on_pointer_move(&mut self, pos: Pos2);
    fn on_pointer_up(&mut self);
}

/// A pointer event in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Move(Pos2),
    Up,
}

/// Translates this frame's drag interaction on the canvas response into
/// pointer events, converting screen positions to canvas-local coordinates.
pub fn pointer_events(response: &Response) -> Vec<PointerEvent> {
    let mut events = Vec::new();

    if let Some(pos) = response.interact_pointer_pos() {
        let local = (pos - response.rect.min).to_pos2();
        if response.drag_started() {
            events.push(PointerEvent::Down(local));
        } else if response.dragged() {
            events.push(PointerEvent::Move(local));
        }
    }
    if response.drag_stopped() {
        events.push(PointerEvent::Up);
    }

    events
}

/// Feeds a batch of events into a handler in order.
pub fn dispatch(events: &[PointerEvent], handler: &mut impl PointerHandler) {
    for event in events {
        match *event {
            PointerEvent::Down(pos) => handler.on_pointer_down(pos),
            PointerEvent::Move(pos) => handler.on_pointer_move(pos),
            PointerEvent::Up => handler.on_pointer_up(),
        }
    }
}
