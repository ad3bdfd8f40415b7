//! Scripted gesture driver.
//!
//! A robot walks one pointer sequence through a [`ScriptedPointerSource`]
//! with explicit timestamps: down on the node scope, then move/up/cancel
//! on the window scope, mirroring how a platform integration routes the
//! tail of a gesture. Every emit returns the event so tests can inspect
//! consumption.

use crate::source::ScriptedPointerSource;
use glissade_core::{
    ListenTarget, NodeId, Point, PointerButtons, PointerEvent, PointerEventKind, PointerType,
};

pub struct PointerRobot<'a> {
    source: &'a ScriptedPointerSource,
    node: NodeId,
    position: Point,
    time_ms: i64,
    contacts: u32,
    pointer_type: PointerType,
    buttons: PointerButtons,
}

impl<'a> PointerRobot<'a> {
    pub fn new(source: &'a ScriptedPointerSource, node: NodeId) -> Self {
        Self {
            source,
            node,
            position: Point::ZERO,
            time_ms: 0,
            contacts: 1,
            pointer_type: PointerType::Touch,
            buttons: PointerButtons::NONE,
        }
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Moves the virtual clock forward.
    pub fn advance(&mut self, ms: i64) -> &mut Self {
        self.time_ms += ms;
        self
    }

    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    /// Sets the active contact count reported on subsequent events.
    pub fn set_contacts(&mut self, contacts: u32) -> &mut Self {
        self.contacts = contacts;
        self
    }

    /// Presses at `(x, y)`, dispatched on the node scope.
    pub fn down_at(&mut self, x: f32, y: f32) -> PointerEvent {
        self.position = Point::new(x, y);
        let event = self.event(PointerEventKind::Down);
        self.source.emit(ListenTarget::Node(self.node), &event);
        event
    }

    /// Moves to `(x, y)`, dispatched on the window scope.
    pub fn move_to(&mut self, x: f32, y: f32) -> PointerEvent {
        self.position = Point::new(x, y);
        let event = self.event(PointerEventKind::Move);
        self.source.emit(ListenTarget::Window, &event);
        event
    }

    /// Releases at the current position.
    pub fn up(&mut self) -> PointerEvent {
        let event = self.event(PointerEventKind::Up);
        self.source.emit(ListenTarget::Window, &event);
        event
    }

    /// Releases at `(x, y)` without an intervening move event.
    pub fn up_at(&mut self, x: f32, y: f32) -> PointerEvent {
        self.position = Point::new(x, y);
        self.up()
    }

    /// Cancels the sequence at the current position.
    pub fn cancel(&mut self) -> PointerEvent {
        let event = self.event(PointerEventKind::Cancel);
        self.source.emit(ListenTarget::Window, &event);
        event
    }

    fn event(&self, kind: PointerEventKind) -> PointerEvent {
        PointerEvent::new(kind, self.position)
            .with_target(self.node)
            .with_pointer_type(self.pointer_type)
            .with_buttons(self.buttons)
            .with_contacts(self.contacts)
            .with_time_ms(self.time_ms)
    }
}
