use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use code_xray::app::{UiTheme, Viewer};
use code_xray::cli::Cli;
use code_xray::core::view::{EventResult, View};
use code_xray::kernel::services::adapters::{
    load_settings, AppMessage, AsyncRuntime, KeybindingService, OllamaClient,
};
use code_xray::kernel::services::ports::ExplainConfig;
use code_xray::kernel::{Document, ExplainOrchestrator};
use code_xray::tui::crossterm::poll_input;
use code_xray::tui::terminal_guard::{
    restore_on_panic, watch_termination, TerminalGuard, TerminationSignal,
};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<ExitCode> {
    let cli = Cli::parse();
    let Some(path) = cli.file().map(PathBuf::from) else {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "a FILE to view is required")
            .exit();
    };

    let document = match Document::open(&path) {
        Ok(document) => document,
        Err(err) => {
            println!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let _logging = logging::init();

    let settings = load_settings();
    let mut config = ExplainConfig::default();
    settings.apply_to(&mut config);
    cli.service.apply_to(&mut config);
    tracing::info!(
        file = %path.display(),
        endpoint = %config.endpoint(),
        model = %config.model,
        "starting viewer"
    );

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx)?;
    let orchestrator = ExplainOrchestrator::new(Arc::new(OllamaClient::new(config.clone())), runtime);

    let mut keybindings = KeybindingService::with_defaults();
    keybindings.apply_rules(&settings.keybindings);
    let mut theme = UiTheme::default();
    theme.adapt_to_terminal_capabilities();

    let mut viewer = Viewer::new(document, orchestrator, settings.viewer_config())
        .with_model(config.model.clone())
        .with_keybindings(keybindings)
        .with_theme(theme);

    let guard = TerminalGuard::new()?;
    restore_on_panic(guard.restorer());

    let (signal_tx, signal_rx) = mpsc::channel();
    if let Err(err) = watch_termination(guard.restorer(), signal_tx) {
        tracing::warn!(error = %err, "failed to install signal handlers");
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let outcome = run(&mut terminal, &mut viewer, &rx, &signal_rx);

    drop(terminal);
    drop(guard);

    match outcome? {
        Some(signal) => {
            tracing::info!(?signal, "terminated by signal");
            Ok(ExitCode::from(signal.exit_code()))
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    viewer: &mut Viewer,
    messages: &Receiver<AppMessage>,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                viewer.render(frame, area);
            })?;
            dirty = false;
        }

        if let Ok(signal) = signals.try_recv() {
            return Ok(Some(signal));
        }

        if let Some(event) = poll_input(POLL_INTERVAL)? {
            match viewer.handle_input(&event) {
                EventResult::Quit => return Ok(None),
                EventResult::Consumed => dirty = true,
                EventResult::Ignored => {}
            }
        }

        while let Ok(message) = messages.try_recv() {
            dirty |= viewer.handle_message(message);
        }
    }
}
