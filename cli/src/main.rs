use clap::Parser;
mod commands;
mod error;
use commands::cli;
use error::CliError;
use kitbag_core::config::{KitbagConfig, LoggingConfig};
use std::io::Write;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(level) = args.log_level.as_deref() {
        cfg.logging.level = level.to_string();
    }
    init_tracing(&cfg.logging).map_err(CliError::Command)?;

    dispatch(args.command, &cfg).await
}

fn load_config(path: Option<&str>) -> Result<KitbagConfig, CliError> {
    let res = match path {
        Some(p) => kitbag_core::config::load_from_path(std::path::Path::new(p)),
        None => kitbag_core::config::load_default(),
    };
    res.map_err(|e| CliError::Config(e.to_string()))
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 1: comparison false (returned as a normal exit code, not as an error)
    // 2: bad input
    // 11: config error
    // 20: IO / network error
    match e {
        CliError::Config(_) => 11,
        CliError::Input { .. } => 2,
        CliError::Queue(_) => 2,
        CliError::Http(_) => 20,
        CliError::Io(_) => 20,
        CliError::Command(_) => 20,
    }
}

async fn dispatch(cmd: cli::Commands, cfg: &KitbagConfig) -> Result<i32, CliError> {
    let stdout = std::io::stdout();
    match cmd {
        cli::Commands::Case(case_args) => {
            writeln!(stdout.lock(), "{}", commands::case::convert(&case_args))?;
            Ok(0)
        }
        cli::Commands::Rand(rand_args) => {
            writeln!(
                stdout.lock(),
                "{}",
                kitbag_core::util::rand_string(rand_args.n)
            )?;
            Ok(0)
        }
        cli::Commands::Json(json_args) => {
            let res = commands::json::evaluate(&json_args);
            writeln!(stdout.lock(), "{res}")?;
            Ok(if res { 0 } else { 1 })
        }
        cli::Commands::Window(window_args) => {
            let capacity = window_args
                .capacity
                .unwrap_or(cfg.queue.default_capacity);
            let stdin = std::io::stdin();
            commands::window::run(stdin.lock(), stdout.lock(), capacity)?;
            Ok(0)
        }
        cli::Commands::Get(get_args) => {
            let body = commands::http::get(&cfg.http, &get_args).await?;
            let mut out = stdout.lock();
            out.write_all(&body)?;
            out.flush()?;
            Ok(0)
        }
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("kitbag"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("kitbag.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
