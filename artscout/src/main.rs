//! Artwork discovery TUI.
//!
//! Fetches random artworks from The Met collection API, shows one at a
//! time, and lets you ban attributes (artist, date, culture, department)
//! to filter future discoveries. A side panel keeps the last 20 viewed.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a text-only smoke test against the live API:
//!
//! ```bash
//! cargo run -p artscout -- --headless --count 5
//! ```

mod app;
mod events;
mod headless;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use artscout_core::CandidatePool;
use met_client::MetClient;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--headless") {
        let count = headless::parse_count_from_args(&args);
        return headless::run_headless(count).await;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(MetClient::new(), CandidatePool::default());
    let result = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<MetClient>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        // Run a pending discover cycle. The await happens here on the
        // single UI task, so cycles are serialized by construction; a
        // "Discovering..." frame is drawn before the network wait.
        if app.take_discover_request() {
            app.set_status("Discovering...");
            terminal.draw(|f| render(f, &app))?;
            app.run_discover().await;
            terminal.draw(|f| render(f, &app))?;
        }

        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                return Ok(());
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("artscout - discover artworks from The Met collection");
    println!();
    println!("USAGE:");
    println!("  artscout [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run discover cycles without the TUI");
    println!("  --count <N>      Number of cycles in headless mode (default: 3)");
    println!();
    println!("KEYS (TUI mode):");
    println!("  d / Space        Discover a new artwork");
    println!("  Tab / Shift-Tab  Cycle panel focus");
    println!("  j/k or arrows    Move selection in the focused panel");
    println!("  Enter            Toggle ban / remove ban / view from history");
    println!("  ?                Help overlay");
    println!("  q / Ctrl-C       Quit");
}
