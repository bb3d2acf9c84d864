use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};

use skyward::constants::TICK_INTERVAL_MS;
use skyward::game::{self, GameInput, GameWorld};
use skyward::input::map_key;
use skyward::settings::{Settings, SETTINGS_FILE};
use skyward::sound::{self, sound_for_event, SoundPlayer};
use skyward::sprites::SpriteSet;
use skyward::ui;

fn main() -> io::Result<()> {
    // Handle CLI arguments before touching the terminal
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("skyward {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - Terminal Arcade Game\n");
                println!("Usage: skyward [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!();
                println!("Keys: Space/Up to jump, F to restart after a crash, Q/Esc to quit.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    env_logger::init();

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let sprites = SpriteSet::load(&settings.assets_dir);
    let mut sound_player = sound::create_player(&settings);

    let mut rng = rand::thread_rng();
    let mut world = game::new_game(settings.top_pipe_height, &mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game_loop(
        &mut terminal,
        &mut world,
        &sprites,
        sound_player.as_mut(),
        &mut rng,
    );

    // Restore the terminal on every exit path, including loop errors
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// Drive the fixed-tick loop: draw, poll input until the next tick is due,
/// step the simulation, then forward the tick's events to the sound player.
/// A keypress is always applied fully between ticks, never inside one.
fn run_game_loop<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    world: &mut GameWorld,
    sprites: &SpriteSet,
    sound_player: &mut dyn SoundPlayer,
    rng: &mut R,
) -> io::Result<()> {
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();
    let mut events = Vec::new();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, world, sprites))?;

        // Block on input at most until the next tick deadline
        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event) {
                    GameInput::Quit => return Ok(()),
                    input => events.extend(game::process_input(world, input, rng)),
                }
            }
        }

        // Simulation tick every 10ms
        if last_tick.elapsed() >= tick_interval {
            events.extend(game::process_tick(world, rng));
            last_tick = Instant::now();
        }

        for event in events.drain(..) {
            if let Some(kind) = sound_for_event(event) {
                sound_player.play(kind);
            }
        }
    }
}
