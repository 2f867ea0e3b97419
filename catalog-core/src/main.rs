//! src/main.rs
//! Local services marketplace browser (terminal UI)

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::time::Instant;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use catalog_core::{
    Logger,
    config::Config,
    controller::{ControllerOptions, EventLoop, FilterController, LoopEvent},
    model::{AppState, Catalog, DynPrefsStore},
    storage::{FilePrefsStore, NoopPrefsStore},
    view::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    setup_panic_handler();

    let (config, config_err) = match Config::load().await {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let _log_guard: Option<WorkerGuard> = init_logging(&config);
    if let Some(e) = config_err {
        warn!("Failed to load config, using defaults: {}", e);
    }

    let app = App::new(&config).context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

fn init_logging(config: &Config) -> Option<WorkerGuard> {
    let dir = match config.log_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            return None;
        }
    };
    match Logger::init_tracing(&config.logging, &dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    }
}

struct App {
    terminal: AppTerminal,
    event_loop: EventLoop,
    state: AppState,
    ui_renderer: UIRenderer,
    needs_redraw: bool,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        info!("Starting marketplace catalog TUI");

        let catalog = match &config.catalog.file {
            Some(path) => Catalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
            None => Catalog::builtin(),
        };

        let store: DynPrefsStore = if config.storage.enabled {
            let path = config.prefs_path().context("Failed to resolve preference file")?;
            info!("Persisting filters to {}", path.display());
            Box::new(FilePrefsStore::new(path))
        } else {
            info!("Filter persistence disabled");
            Box::new(NoopPrefsStore)
        };

        let filters = FilterController::load(
            catalog,
            store,
            ControllerOptions {
                prefs_key: config.storage.prefs_key.clone(),
                timing: config.timing.clone(),
            },
        );

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        let event_loop = EventLoop::new();
        event_loop.install_signal_handler();

        info!("Application initialized successfully");

        Ok(Self {
            terminal,
            event_loop,
            state: AppState::new(filters),
            ui_renderer: UIRenderer::new(),
            needs_redraw: true,
        })
    }

    async fn run(mut self) -> Result<()> {
        info!("Starting event loop");

        loop {
            self.render()?;

            match self.event_loop.next_event(&self.state).await {
                LoopEvent::Action(action) => {
                    if !self.state.handle(action, Instant::now()) {
                        break;
                    }
                    self.needs_redraw = true;
                }
                LoopEvent::TimerDue => {
                    self.needs_redraw |= self.state.tick(Instant::now());
                }
                LoopEvent::Ignored => {}
                LoopEvent::Shutdown => break,
            }
        }

        let stats = self.ui_renderer.stats();
        info!(
            "Event loop terminated: {} frames, {} slow, {} recomputes",
            stats.frames,
            stats.slow,
            self.state.filters.recompute_count()
        );
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        if !self.needs_redraw {
            return Ok(());
        }

        let Self {
            terminal,
            state,
            ui_renderer,
            ..
        } = self;
        terminal
            .draw(|frame: &mut Frame<'_>| ui_renderer.render(frame, state))
            .context("Failed to draw terminal")?;

        self.needs_redraw = false;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
