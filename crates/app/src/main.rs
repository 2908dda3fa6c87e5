use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock};
use sheets::SheetsConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSheetId { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSheetId { raw } => write!(f, "invalid --sheet-id value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(DesktopLinkOpener)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--sheet-id <id>] [--offline]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --sheet-id <id>  Google spreadsheet holding the Students/Groups/Challenges tabs");
    eprintln!("  --offline        Skip the spreadsheet and use the built-in demo data");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SYNCHRONY_SHEET_ID, SYNCHRONY_SHEETS_BASE_URL, SYNCHRONY_HTTP_TIMEOUT_SECS,");
    eprintln!("  SYNCHRONY_OFFLINE, RUST_LOG");
}

#[derive(Debug)]
struct Args {
    sheets: SheetsConfig,
    offline: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut sheets = SheetsConfig::from_env();
        let mut offline = std::env::var("SYNCHRONY_OFFLINE")
            .ok()
            .is_some_and(|value| is_truthy(&value));

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sheet-id" => {
                    let value = require_value(args, "--sheet-id")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSheetId { raw: value });
                    }
                    sheets = sheets.with_sheet_id(value.trim());
                }
                "--offline" => offline = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { sheets, offline }))
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
    {
        eprintln!("tracing already initialised: {err}");
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let Some(parsed) = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    init_tracing();

    let clock = Clock::default();
    let services = if parsed.offline {
        info!("running offline with demo data");
        AppServices::offline(clock)
    } else {
        info!(sheet_id = %parsed.sheets.sheet_id, "reading study data from spreadsheet");
        AppServices::google(&parsed.sheets, clock)?
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Synchrony • Collaborative Learning")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Args>, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&["--sheet-id", " abc ", "--offline"]).unwrap().unwrap();
        assert_eq!(args.sheets.sheet_id, "abc");
        assert!(args.offline);
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn bad_args_are_reported() {
        assert!(matches!(
            parse(&["--sheet-id"]),
            Err(ArgsError::MissingValue { flag: "--sheet-id" })
        ));
        assert!(matches!(
            parse(&["--sheet-id", "  "]),
            Err(ArgsError::InvalidSheetId { .. })
        ));
        assert!(matches!(
            parse(&["--verbose"]),
            Err(ArgsError::UnknownArg(arg)) if arg == "--verbose"
        ));
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy(" TRUE "));
        assert!(is_truthy("1"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
