//! JellyBrew launcher
//!
//! Application shell: owns the SDL contexts, the window, the shared canvas
//! and the event pump, and delegates everything per-frame to the active
//! screen. The title menu is the only screen implemented; the shell itself
//! has no branching logic beyond event dispatch.

use log::info;
use sdl2::event::{Event, WindowEvent};
use std::time::{Duration, Instant};

mod gui;
mod screen;
mod screens;
mod text;

use screen::{AppAction, Screen};
use screens::TitleScreen;

const WINDOW_TITLE: &str = "JellyBrew";

// Initial window size; the layout and font scale are calibrated against it
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

const TARGET_FPS: u32 = 60;

fn main() -> Result<(), String> {
    env_logger::init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // The title menu is the initial screen; a missing background asset
    // aborts startup here.
    let mut screen: Box<dyn Screen + '_> = Box::new(TitleScreen::new(
        &texture_creator,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
    )?);
    screen.show();

    info!("{} started ({}x{})", WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut last_frame = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::SizeChanged(width, height) => {
                        screen.resize(width.max(1) as u32, height.max(1) as u32);
                    }
                    WindowEvent::Minimized => screen.pause(),
                    WindowEvent::Restored => screen.resume(),
                    _ => {}
                },
                _ => {
                    if screen.handle_event(&event) == Some(AppAction::Quit) {
                        break 'running;
                    }
                }
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        screen.render(&mut canvas, delta)?;
        canvas.present();

        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / TARGET_FPS));
    }

    screen.hide();
    info!("{} shutting down", WINDOW_TITLE);

    Ok(())
}
