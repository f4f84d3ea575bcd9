//! Application Loop
//!
//! Every frame runs the same fixed sequence:
//! 1. Clear the window to the background color
//! 2. Render the current mode at the current pointer position
//! 3. Feed every pending event, in arrival order, to the current mode
//! 4. Present the frame and wait out the rest of the frame budget
//!
//! [`App`] holds the mode and loop state and performs steps 1-3 against any
//! [`Surface`], so the whole sequence can be driven by tests. [`run`] wires it
//! to an SDL2 window.

use crate::error::AppError;
use crate::frame_limiter::FrameLimiter;
use crate::input::{self, InputEvent};
use crate::mode::{Mode, Transition};
use crate::settings::Settings;
use crate::surface::Surface;
use sdl2::pixels::Color;
use sdl2::rect::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Absorbing: once terminated the app ignores further events
    Terminated,
}

pub struct App {
    mode: Mode,
    state: LoopState,
    background: Color,
}

impl App {
    /// Starts in the main menu
    pub fn new(background: Color) -> Self {
        App {
            mode: Mode::default(),
            state: LoopState::Running,
            background,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Applies a batch of events in order
    ///
    /// A quit request or an exit transition terminates immediately; events
    /// after it in the same batch are dropped.
    pub fn step(&mut self, events: &[InputEvent]) -> LoopState {
        for event in events {
            if self.state == LoopState::Terminated {
                break;
            }

            if *event == InputEvent::Quit {
                tracing::info!("Quit requested");
                self.state = LoopState::Terminated;
                break;
            }

            match self.mode.handle_event(event) {
                Transition::Stay => {}
                Transition::Switch(next) => {
                    tracing::info!(from = self.mode.name(), to = next.name(), "Switching mode");
                    self.mode = next;
                }
                Transition::Exit => {
                    tracing::info!(mode = self.mode.name(), "Exit selected");
                    self.state = LoopState::Terminated;
                }
            }
        }

        self.state
    }

    /// Runs one frame: clear, render, then poll and apply events
    ///
    /// `poll` is only called after rendering. The frame is presented only if
    /// the app is still running afterwards.
    pub fn frame<S, P>(
        &mut self,
        surface: &mut S,
        pointer: Point,
        poll: P,
    ) -> Result<LoopState, AppError>
    where
        S: Surface,
        P: FnOnce() -> Vec<InputEvent>,
    {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        surface.clear(self.background);
        self.mode
            .render(surface, pointer)
            .map_err(AppError::Render)?;

        let events = poll();
        let state = self.step(&events);

        if state == LoopState::Running {
            surface.present();
        }

        Ok(state)
    }
}

/// Opens the window and runs frames until the app terminates
pub fn run(settings: &Settings) -> Result<(), AppError> {
    let sdl_context = sdl2::init().map_err(AppError::Init)?;
    let video_subsystem = sdl_context.video().map_err(AppError::Init)?;

    let window = video_subsystem
        .window(&settings.window_title, settings.window_width, settings.window_height)
        .position_centered()
        .build()
        .map_err(|e| AppError::init(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| AppError::init(e.to_string()))?;

    let mut event_pump = sdl_context.event_pump().map_err(AppError::Init)?;

    tracing::info!(
        title = %settings.window_title,
        width = settings.window_width,
        height = settings.window_height,
        fps = settings.frames_per_second,
        "Window created"
    );

    let mut app = App::new(settings.background());
    let mut limiter = FrameLimiter::new(settings.frame_budget());

    while app.state() == LoopState::Running {
        let mouse = event_pump.mouse_state();
        let pointer = Point::new(mouse.x(), mouse.y());

        let state = app.frame(&mut canvas, pointer, || input::poll_events(&mut event_pump))?;
        if state == LoopState::Running {
            limiter.wait();
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}
