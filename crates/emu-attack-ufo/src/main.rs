//! Attack UFO emulator binary.
//!
//! Runs the board on a worker thread behind a winit window and pixels
//! framebuffer, or headless for screenshots and state dumps.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use emu_attack_ufo::{
    AttackUfo, DipSwitches, MachineConfig, MachineRunner, MachineType, Pacing, RomSet, capture,
    keyboard_map,
};
use emu_core::Observable;
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "attack-ufo")]
#[command(version)]
#[command(about = "Cycle-accurate Attack UFO arcade emulator")]
struct Cli {
    /// Directory holding 1.rom to 8.rom [default: roms/ next to the binary]
    #[arg(long)]
    rom_dir: Option<PathBuf>,

    /// Use PAL timing (default NTSC)
    #[arg(long)]
    pal: bool,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Save a PNG of the last frame (headless)
    #[arg(long)]
    screenshot: Option<PathBuf>,

    /// Lives DIP switch setting
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=3))]
    lives: u8,

    /// Set the bonus-life DIP switch
    #[arg(long)]
    bonus_life: bool,

    /// Window scale factor
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    scale: u32,

    /// Show the raster unrotated instead of as the upright cabinet monitor
    #[arg(long)]
    no_rotate: bool,

    /// Print CPU, VIC and PIA state after a headless run
    #[arg(long)]
    dump_state: bool,
}

impl Cli {
    fn machine_type(&self) -> MachineType {
        if self.pal {
            MachineType::Pal
        } else {
            MachineType::Ntsc
        }
    }
}

// ---------------------------------------------------------------------------
// Headless mode
// ---------------------------------------------------------------------------

const DUMP_PATHS: &[&str] = &[
    "cpu.pc",
    "cpu.a",
    "cpu.x",
    "cpu.y",
    "cpu.s",
    "cpu.p",
    "vic.raster.line",
    "vic.regs",
    "vic.memory.video",
    "vic.memory.char",
    "pia.a.ddr",
    "pia.a.control",
    "pia.b.ddr",
    "pia.b.control",
    "joystick.dip",
    "machine.cycles",
    "machine.frames",
];

fn run_headless(cli: &Cli, mut machine: AttackUfo) {
    machine.set_paused(false);
    let mut last_frame = None;
    for n in 0..cli.frames {
        // Only the final frame needs pixels.
        let skip = cli.screenshot.is_none() || n + 1 < cli.frames;
        machine.run_until_frame(skip);
        if !skip {
            last_frame = machine.take_ready_frame();
        }
    }

    if let Some(ref path) = cli.screenshot {
        let Some(frame) = last_frame else {
            eprintln!("No frame rendered; nothing to save");
            process::exit(1);
        };
        if let Err(e) = capture::save_screenshot(&frame, machine.machine_type(), !cli.no_rotate, path)
        {
            eprintln!("Screenshot error: {e}");
            process::exit(1);
        }
        eprintln!("Screenshot saved to {}", path.display());
    }

    if cli.dump_state {
        for path in DUMP_PATHS {
            if let Some(value) = machine.query(path) {
                println!("{path:<18} {value}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Windowed mode (winit + pixels)
// ---------------------------------------------------------------------------

struct App {
    runner: MachineRunner,
    rotate: bool,
    scale: u32,
    width: u32,
    height: u32,
    window: Option<&'static Window>,
    pixels: Option<Pixels<'static>>,
}

impl App {
    fn new(runner: MachineRunner, rotate: bool, scale: u32) -> Self {
        let machine_type = runner.machine_type();
        let (w, h) = (
            u32::from(machine_type.visible_width()),
            u32::from(machine_type.visible_height()),
        );
        let (width, height) = if rotate { (h, w) } else { (w, h) };
        Self {
            runner,
            rotate,
            scale,
            width,
            height,
            window: None,
            pixels: None,
        }
    }

    fn update_pixels(&mut self) {
        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };
        let Some(frame) = self.runner.frames().take_ready() else {
            return;
        };
        let (image, _, _) = capture::display_image(&frame, self.runner.machine_type(), self.rotate);
        capture::argb_to_rgba(&image, pixels.frame_mut());
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let size =
            winit::dpi::LogicalSize::new(self.width * self.scale, self.height * self.scale);
        let attrs = WindowAttributes::default()
            .with_title(format!("Attack UFO ({})", self.runner.machine_type().name()))
            .with_inner_size(size)
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window: &'static Window = Box::leak(Box::new(window));
                let inner = window.inner_size();
                let surface = SurfaceTexture::new(inner.width, inner.height, window);
                let pixels = match Pixels::new(self.width, self.height, surface) {
                    Ok(pixels) => pixels,
                    Err(e) => {
                        eprintln!("Failed to create pixels surface: {e}");
                        event_loop.exit();
                        return;
                    }
                };
                self.pixels = Some(pixels);
                self.window = Some(window);
                self.runner.resume();
            }
            Err(e) => {
                eprintln!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Focused(focused) => self.runner.set_paused(!focused),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    if keycode == KeyCode::Escape && pressed {
                        event_loop.exit();
                        return;
                    }
                    if let Some(button) = keyboard_map::map_keycode(keycode) {
                        self.runner.joystick().set(button, pressed);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = keyboard_map::map_mouse_button(button) {
                    self.runner
                        .joystick()
                        .set(button, state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                self.update_pixels();
                if let Some(pixels) = self.pixels.as_ref()
                    && let Err(e) = pixels.render()
                {
                    eprintln!("Render error: {e}");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window {
            window.request_redraw();
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Find the roms/ directory relative to the executable or current directory.
fn find_roms_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        // Walk up from target/debug or target/release to the workspace root.
        let mut dir = exe.parent().map(Path::to_path_buf);
        for _ in 0..5 {
            if let Some(ref d) = dir {
                let roms = d.join("roms");
                if roms.is_dir() {
                    return roms;
                }
                dir = d.parent().map(Path::to_path_buf);
            }
        }
    }
    PathBuf::from("roms")
}

fn make_machine(cli: &Cli) -> AttackUfo {
    let rom_dir = cli.rom_dir.clone().unwrap_or_else(find_roms_dir);
    let roms = match RomSet::load(&rom_dir) {
        Ok(roms) => roms,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            eprintln!("Place the eight Attack UFO ROM images (1024 bytes each) in");
            eprintln!("{} as 1.rom to 8.rom, or pass --rom-dir.", rom_dir.display());
            process::exit(1);
        }
    };

    let config = MachineConfig::new(roms)
        .with_machine_type(cli.machine_type())
        .with_dip_switches(DipSwitches {
            lives: cli.lives,
            bonus_life: cli.bonus_life,
        });

    match AttackUfo::new(&config) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("Failed to build machine: {e}");
            process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let machine = make_machine(&cli);

    if cli.headless {
        run_headless(&cli, machine);
        return;
    }

    let runner = match MachineRunner::spawn(machine, Pacing::RealTime) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    let mut app = App::new(runner, !cli.no_rotate, cli.scale);

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            eprintln!("Failed to create event loop: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = event_loop.run_app(&mut app) {
        eprintln!("Event loop error: {e}");
        process::exit(1);
    }
}
