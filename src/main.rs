// sortty: stepwise sorting visualizer for the terminal

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use sortty::sequence::SequenceBuffer;
use sortty::session::SessionController;
use sortty::ui::App;

/// Number of elements when none is given on the command line
const DEFAULT_LEN: usize = 50;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let len = match args.get(1) {
        None => DEFAULT_LEN,
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");
                eprintln!("Error: invalid element count '{}'", arg);
                eprintln!();
                eprintln!("Usage: {} [elements]", program_name);
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {}          # sort {} elements", program_name, DEFAULT_LEN);
                eprintln!("  {} 100      # sort 100 elements", program_name);
                std::process::exit(1);
            }
        },
    };

    // Build the session around a fresh random permutation of 1..=len
    let buffer = SequenceBuffer::with_permutation(len);
    let controller = SessionController::new(buffer);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
