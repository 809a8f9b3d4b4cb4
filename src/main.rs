mod ui;

use arcade::core::config::ArcadeConfig;
use arcade::core::constants::{CONFIG_FILE_NAME, FRAME_POLL_MS, LOG_FILE_NAME};
use arcade::input::{handle_key, InputResult};
use arcade::site::Site;
use arcade::utils::build_info;
use arcade::utils::persistence::data_path;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Parsed command line.
#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    print_config: bool,
}

fn print_help() {
    println!("Elektrosila Arcade - three terminal mini-games\n");
    println!("Usage: arcade [options]\n");
    println!("Options:");
    println!("  --config <path>  Load game rules from a JSON file");
    println!("  --print-config   Print the effective configuration and exit");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn parse_args() -> CliArgs {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => parsed.config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--config needs a path");
                    std::process::exit(1);
                }
            },
            "--print-config" => parsed.print_config = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'arcade --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    parsed
}

/// Send log output to ~/.arcade/arcade.log; the terminal belongs to the UI.
fn init_logging() {
    let file = match data_path(LOG_FILE_NAME).and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
    }) {
        Ok(file) => file,
        // No log file, no logging.
        Err(_) => return,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn load_config(args: &CliArgs) -> ArcadeConfig {
    if let Some(path) = &args.config_path {
        return match ArcadeConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
    }
    match data_path(CONFIG_FILE_NAME) {
        Ok(path) => ArcadeConfig::load_or_default(&path),
        Err(e) => {
            log::warn!("no config directory ({}), using defaults", e);
            ArcadeConfig::default()
        }
    }
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    site: &mut Site,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, site))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_key(key, site, &mut rng) == InputResult::Quit
                {
                    return Ok(());
                }
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        site.tick(dt_ms, &mut rng);
    }
}

fn main() -> io::Result<()> {
    let args = parse_args();
    init_logging();

    let config = load_config(&args);
    if args.print_config {
        match config.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Could not serialize config: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    log::info!("starting {}", build_info::version_line());
    let mut site = Site::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut site);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("exiting");
    result
}
