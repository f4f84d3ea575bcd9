use sdl2::event::Event;
use sdl2::EventPump;

/// Input the application reacts to
///
/// Raw SDL2 events are translated into this enum once, at the edge of the
/// frame loop, so modes can be driven by tests without an event pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Any mouse button went down at (x, y)
    PointerPress { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    /// Window close or other quit request
    Quit,
    /// Anything else; ignored by every mode
    Other,
}

impl From<Event> for InputEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Quit { .. } => InputEvent::Quit,
            Event::MouseButtonDown { x, y, .. } => InputEvent::PointerPress { x, y },
            Event::MouseMotion { x, y, .. } => InputEvent::PointerMove { x, y },
            _ => InputEvent::Other,
        }
    }
}

/// Drains every pending event in arrival order
pub fn poll_events(event_pump: &mut EventPump) -> Vec<InputEvent> {
    event_pump.poll_iter().map(InputEvent::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::mouse::{MouseButton, MouseState};

    #[test]
    fn test_translate_quit() {
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(InputEvent::from(event), InputEvent::Quit);
    }

    #[test]
    fn test_translate_any_button_press() {
        for mouse_btn in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
            let event = Event::MouseButtonDown {
                timestamp: 0,
                window_id: 1,
                which: 0,
                mouse_btn,
                clicks: 1,
                x: 120,
                y: 110,
            };
            assert_eq!(InputEvent::from(event), InputEvent::PointerPress { x: 120, y: 110 });
        }
    }

    #[test]
    fn test_translate_motion() {
        let event = Event::MouseMotion {
            timestamp: 0,
            window_id: 1,
            which: 0,
            mousestate: MouseState::from_sdl_state(0),
            x: 7,
            y: 9,
            xrel: 1,
            yrel: 1,
        };
        assert_eq!(InputEvent::from(event), InputEvent::PointerMove { x: 7, y: 9 });
    }

    #[test]
    fn test_unrecognized_events_are_other() {
        let event = Event::MouseButtonUp {
            timestamp: 0,
            window_id: 1,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 0,
            y: 0,
        };
        assert_eq!(InputEvent::from(event), InputEvent::Other);
        assert_eq!(InputEvent::from(Event::AppTerminating { timestamp: 0 }), InputEvent::Other);
    }
}
