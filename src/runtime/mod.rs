use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{Session, ThreadPicker, ViewState};
use crate::audio::{AudioOutput, NullOutput, RodioOutput};
use crate::cli::Args;
use crate::library::{DiskLibrary, LibrarySource};

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (mut settings, warning) = settings::load_settings(args.config.clone());
    args.apply(&mut settings);

    if args.print_config {
        println!("{}", settings.to_toml()?);
        return Ok(());
    }

    let _log_guard = logging::init(&settings.logging);
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let library = DiskLibrary::new(settings.library.clone());
    let rows = if args.rescan {
        library.rescan()
    } else {
        library.load()
    };
    tracing::info!(
        tracks = rows.len(),
        dir = %library.assets_dir.display(),
        "library loaded"
    );

    let mut picker = ThreadPicker;
    let mut session = Session::new(rows);
    startup::apply_playback_defaults(&mut session, &settings, &library, &mut picker);
    startup::enqueue_paths(&mut session, &args.enqueue, &library, &mut picker);

    let mut output: Box<dyn AudioOutput> = match RodioOutput::open() {
        Ok(output) => Box::new(output),
        Err(e) => {
            tracing::warn!("audio output unavailable, running silent: {e}");
            Box::new(NullOutput::default())
        }
    };

    let mut view = ViewState::default();
    startup::load_initial(&session, output.as_mut(), &mut view);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        let mut ctx = event_loop::Context {
            settings: &settings,
            library: &library,
            output: output.as_mut(),
            picker: &mut picker,
        };
        event_loop::run(&mut terminal, &mut session, &mut view, &mut ctx, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        tracing::error!("event loop failed: {e}");
    }
    run_result
}
