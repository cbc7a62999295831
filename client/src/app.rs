//! Desktop game loop driven by winit

use std::sync::Arc;
use std::time::Instant;

use game_core::{Config, Events, GameRng, GameState};
use miette::{Context, IntoDiagnostic, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::config::ClientConfig;
use crate::input::Keyboard;
use crate::renderer::Renderer;

pub struct App {
    config: Config,
    client_config: ClientConfig,
    game: GameState,
    keyboard: Keyboard,
    renderer: Option<Renderer>,
    last_tick: Instant,
    error: Option<miette::Report>,
}

impl App {
    pub fn new(config: Config, client_config: ClientConfig, rng: GameRng) -> Self {
        let game = GameState::new(&config, rng);
        Self {
            config,
            client_config,
            game,
            keyboard: Keyboard::new(),
            renderer: None,
            last_tick: Instant::now(),
            error: None,
        }
    }

    /// Initialization error that stopped the event loop, if any
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn create_renderer(&self, event_loop: &ActiveEventLoop) -> Result<Renderer> {
        let attributes = Window::default_attributes()
            .with_title(self.client_config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.screen_width,
                self.config.screen_height,
            ))
            .with_resizable(false);
        let window = event_loop
            .create_window(attributes)
            .into_diagnostic()
            .wrap_err("Error setting up window")?;
        log::info!(
            "Window created: {}x{}",
            self.config.screen_width,
            self.config.screen_height
        );

        pollster::block_on(Renderer::new(Arc::new(window), &self.config))
            .wrap_err("Error setting up renderer")
    }

    /// Advance the game by the wall-clock time since the last frame, then draw it
    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        let input = self.keyboard.input_state();
        self.game.step(&self.config, &input, dt);
        for message in event_messages(&self.game.events, self.game.time.now) {
            log::debug!("{message}");
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        if self.game.events.score_changed {
            renderer.window().set_title(self.game.title());
        }

        if let Err(err) = renderer.draw(&self.game, &self.config, &self.client_config) {
            log::error!("Error drawing frame: {err}");
        }
    }
}

/// Describe what happened this frame, stamped with game time
fn event_messages(events: &Events, now: f32) -> Vec<String> {
    let mut messages = Vec::new();
    if events.served {
        messages.push(format!("[{now:.2}s] Ball served"));
    }
    if events.ball_hit_wall {
        messages.push(format!("[{now:.2}s] Ball hit wall"));
    }
    if events.ball_hit_paddle {
        messages.push(format!("[{now:.2}s] Ball hit paddle"));
    }
    if let Some(scorer) = events.scored {
        messages.push(format!("[{now:.2}s] Player {} scored", scorer.index()));
    }
    messages
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        match self.create_renderer(event_loop) {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                self.last_tick = Instant::now();
            }
            Err(err) => {
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = &self.renderer {
            renderer.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => self.keyboard.release_all(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    self.keyboard
                        .handle_key(key_code, event.state == ElementState::Pressed);
                }
            }

            WindowEvent::RedrawRequested => self.tick(),

            _ => {}
        }
    }
}
