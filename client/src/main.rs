//! Two-player desktop Pong
//!
//! W/S move the left paddle, the arrow keys move the right one and Space
//! serves. Exits with status 1 if the window or GPU cannot be set up.

mod app;
mod camera;
mod config;
mod input;
mod mesh;
mod renderer;

use std::process::ExitCode;

use game_core::{Config, GameRng};
use miette::{Context, IntoDiagnostic, Result};
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;
use crate::config::ClientConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let event_loop = EventLoop::new()
        .into_diagnostic()
        .wrap_err("Error setting up event loop for window")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(
        Config::new(),
        ClientConfig::default(),
        GameRng::from_entropy(),
    );
    event_loop
        .run_app(&mut app)
        .into_diagnostic()
        .wrap_err("Error running event loop")?;

    // Window and GPU resources are released when `app` drops
    let result = app.into_result();
    log::info!("Shut down");
    result
}
