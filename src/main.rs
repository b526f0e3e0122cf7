use std::{path::PathBuf, process::exit};

use clap::Parser;
use compact_str::ToCompactString;
use countdown_tui::{
    app_init::{initialize_app, AppComponents, LaunchSettings},
    clock::{Clock, SystemClock},
    config::{default_config_path, load_config},
    countdown_app::AppOptions,
    locale::Locale,
    rendering::render_main_ui,
    result::{CountdownError, Result},
    target::{parse_duration, parse_target},
    time::Timestamp,
};

/// A terminal countdown to a fixed point in time
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// When the countdown ends: epoch milliseconds, an RFC 3339 datetime,
    /// or a local "YYYY-MM-DD HH:MM[:SS]".
    #[arg(value_name = "TARGET", required_unless_present_any = ["duration", "print_config_path"])]
    target: Option<String>,
    /// Count down for a duration instead, e.g. "90s", "25m" or "1h30m".
    #[arg(long = "in", value_name = "DURATION", conflicts_with = "target")]
    duration: Option<String>,
    /// Language of the end-date caption, e.g. "de" or "en-US".
    #[arg(short, long, value_name = "TAG")]
    locale: Option<String>,
    /// Ring the terminal bell when the countdown finishes.
    #[arg(long)]
    bell: bool,
    /// Alternate path to the configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print the path to the configuration file and exit.
    #[arg(short, long)]
    print_config_path: bool,
}

impl Args {
    fn target(&self, now: Timestamp) -> Result<Timestamp> {
        match (&self.duration, &self.target) {
            (Some(duration), _) => {
                let millis = i64::try_from(parse_duration(duration)?.as_millis())
                    .map_err(|_| CountdownError::InvalidDuration(duration.to_compact_string()))?;
                Ok(now.saturating_add(millis))
            },
            (None, Some(target)) => parse_target(target),
            (None, None) => Err(CountdownError::InvalidTarget("no target given".into())),
        }
    }

    fn locale(&self, config_locale: Locale) -> Result<Locale> {
        match &self.locale {
            Some(tag) => tag.parse(),
            None => Ok(config_locale),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(default_config_path);

    if args.print_config_path {
        println!("{}", config_path.display());
        exit(0);
    }

    let config = load_config(&config_path)?;
    let settings = LaunchSettings {
        target: args.target(SystemClock.now_millis())?,
        locale: args.locale(config.resolve_locale())?,
        options: AppOptions { exit_on_timeout: config.exit_on_timeout, bell: args.bell },
        config,
    };

    let AppComponents { mut app, mut tui, mut widget_states, _log_guard } =
        initialize_app(settings)?;

    while app.is_running() {
        tui.receive_events(|event| {
            widget_states.apply(&event);
            app.apply(event, &mut widget_states);
        })?;
        tui.draw(|f| render_main_ui(f, &app, &mut widget_states))?;
    }

    tui.exit()?;
    tracing::info!("countdown shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_target() {
        let args = Args::parse_from(["countdown", "--in", "1h30m"]);
        assert_eq!(args.target(1_000).unwrap(), 1_000 + 5_400_000);
    }

    #[test]
    fn test_absolute_target_and_locale() {
        let args = Args::parse_from(["countdown", "2026-10-19T14:05:00Z", "-l", "de"]);
        assert_eq!(args.target(0).unwrap(), 1_792_418_700_000);
        assert_eq!(args.locale(Locale::English).unwrap(), Locale::German);
    }

    #[test]
    fn test_config_locale_when_flag_missing() {
        let args = Args::parse_from(["countdown", "0"]);
        assert_eq!(args.locale(Locale::German).unwrap(), Locale::German);
    }

    #[test]
    fn test_target_and_duration_conflict() {
        assert!(Args::try_parse_from(["countdown", "0", "--in", "5m"]).is_err());
        assert!(Args::try_parse_from(["countdown"]).is_err());
        assert!(Args::try_parse_from(["countdown", "-p"]).is_ok());
    }
}
