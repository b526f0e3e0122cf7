use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    clock::SystemClock,
    config::CountdownConfig,
    countdown_app::{AppOptions, CountdownApp},
    event::EventHandler,
    locale::Locale,
    logging::{init_logging, LoggingConfig},
    result::{CountdownError, Result},
    time::Timestamp,
    tui::Tui,
    ui::StatefulWidgets,
};

pub struct AppComponents {
    pub app: CountdownApp<SystemClock>,
    pub tui: Tui,
    pub widget_states: StatefulWidgets,
    pub _log_guard: Option<WorkerGuard>,
}

/// Everything needed to start the countdown, after the command line and
/// the config file have been merged.
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub target: Timestamp,
    pub locale: Locale,
    pub options: AppOptions,
    pub config: CountdownConfig,
}

pub fn initialize_app(settings: LaunchSettings) -> Result<AppComponents> {
    color_eyre::install()
        .map_err(|e| CountdownError::GeneralError(format!("failed to install color_eyre: {e}").into()))?;

    let log_guard = initialize_logging(&settings.config)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        target_ms = settings.target,
        locale = ?settings.locale,
        "countdown starting up"
    );

    let event_handler = EventHandler::new(settings.config.tick_rate());
    let sender = event_handler.sender();

    let tui = initialize_terminal(event_handler)?;
    let app = CountdownApp::new(
        sender,
        settings.target,
        SystemClock,
        settings.locale,
        settings.options,
    );

    Ok(AppComponents {
        app,
        tui,
        widget_states: StatefulWidgets::new(),
        _log_guard: log_guard,
    })
}

fn initialize_logging(config: &CountdownConfig) -> Result<Option<WorkerGuard>> {
    let logging_config = LoggingConfig::from_env().with_app_config(config);
    init_logging(logging_config)
}

fn initialize_terminal(event_handler: EventHandler) -> Result<Tui> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let terminal = Terminal::new(backend)
        .map_err(|_| CountdownError::Terminal("failed to initialize terminal".into()))?;
    let mut tui = Tui::new(terminal, event_handler);
    tui.enter()?;
    Ok(tui)
}
