//! Project Builder - two-track project questionnaire
//!
//! Runs the wizard as an interactive terminal UI, or replays a JSON
//! script of wizard events and prints where the session ended.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use project_builder::labels::{final_body, final_title, step_title, summary_text};
use project_builder::{
    AppConfig, Cli, OutputFormat, ReplayReport, ReplayScript, TuiApp, init_locale, replay,
};
use std::path::{Path, PathBuf};
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize i18n for this binary
rust_i18n::i18n!("locales", fallback = "nl");

// CLI Output Module
mod cli_output {
    //! CLI 输出美化模块
    //!
    //! 为回放结果提供统一的颜色和格式样式。

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;
    use unicode_width::UnicodeWidthStr;

    /// CLI 主题颜色
    pub struct CliTheme;

    impl CliTheme {
        /// 成功颜色（绿色）
        pub const SUCCESS: Color = Color::Green;
        /// 提示颜色（暗灰色）
        pub const HINT: Color = Color::DarkGrey;
        /// 强调颜色（青色）
        pub const ACCENT: Color = Color::Cyan;
        /// 错误颜色（红色）
        pub const ERROR: Color = Color::Red;
    }

    /// 打印分隔线
    pub fn print_separator() {
        let _ = stdout().execute(Print(format!("{}\n", "─".repeat(60))));
    }

    /// 打印居中的标题
    pub fn print_title(title: &str) {
        let padding = 60usize.saturating_sub(title.width()) / 2;
        let left_pad = " ".repeat(padding.saturating_sub(1));
        let _ = stdout().execute(Print(format!(
            "{}{} {} {}\n",
            left_pad,
            "╔".bold(),
            title.bold(),
            "╗".bold(),
        )));
    }

    /// 打印键值对
    pub fn print_key_value(key: &str, value: &str, value_color: Option<Color>) {
        let key_styled = style(key).with(CliTheme::HINT);
        let value_styled = match value_color {
            Some(color) => style(value).with(color),
            None => style(value).bold(),
        };
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(key_styled));
        let _ = stdout().execute(Print(": "));
        let _ = stdout().execute(Print(value_styled));
        let _ = stdout().execute(Print("\n"));
    }

    /// 打印列表行
    pub fn print_item(text: &str) {
        let _ = stdout().execute(Print(style("  • ").with(CliTheme::ACCENT)));
        let _ = stdout().execute(Print(format!("{}\n", text)));
    }

    /// 打印错误消息
    pub fn print_error(msg: &str) {
        let _ = stdout().execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印日志文件路径
    pub fn print_log_path(label: &str, path: &str) {
        let _ = stdout().execute(Print("\n"));
        let _ = stdout().execute(Print(style(format!("  {label}: ")).with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", path)));
    }

    /// 打印空行
    pub fn print_blank() {
        let _ = stdout().execute(Print("\n"));
    }
}

/// Convenience macro for translation
macro_rules! t {
    ($key:expr) => {
        rust_i18n::t!($key)
    };
    ($key:expr, $($tt:tt)*) => {
        rust_i18n::t!($key, $($tt)*)
    };
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.sample_config {
        print!("{}", AppConfig::sample_config());
        return Ok(());
    }

    let exe_dir = get_executable_dir()?;
    let config = load_config(&cli, &exe_dir)?;

    if cli.is_interactive() {
        run_interactive_mode(&cli, &config, &exe_dir)
    } else {
        run_replay_mode(&cli, &config, &exe_dir)
    }
}

/// Run the wizard as a Ratatui TUI
fn run_interactive_mode(cli: &Cli, config: &AppConfig, exe_dir: &Path) -> Result<()> {
    let log_path = get_log_path(exe_dir, cli, "Interactive");

    // The terminal belongs to the UI, so log to the file only
    let _guard = setup_file_only_logging(&log_path, config.verbose)?;
    let locale = init_locale(config.locale.as_deref());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        locale, "Project Builder starting in interactive mode"
    );

    let mut app = TuiApp::new(config, locale)?;
    app.set_log_path(log_path.clone());
    if let Some(track) = cli.track {
        app.start_track(track);
    }

    let result = app.run()?;
    info!(
        final_step = ?result.final_step,
        final_message = ?result.final_message,
        log_file = %log_path.display(),
        "Interactive session complete"
    );

    Ok(())
}

/// Replay a scripted session and print the report
fn run_replay_mode(cli: &Cli, config: &AppConfig, exe_dir: &Path) -> Result<()> {
    let log_path = get_log_path(exe_dir, cli, "Replay");
    let _guard = setup_logging(cli, &log_path)?;

    let Some(ref script_path) = cli.replay else {
        anyhow::bail!("no replay script given");
    };

    let script = ReplayScript::load(script_path)?;
    // The script's own locale only applies when none was configured
    let locale = init_locale(config.locale.as_deref().or(script.locale.as_deref()));

    info!(
        version = env!("CARGO_PKG_VERSION"),
        script = %script_path.display(),
        locale,
        "Project Builder replaying script"
    );

    let report = match replay(&script, config.timing()) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Replay failed");
            cli_output::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report, locale, &log_path),
    }

    info!(log_file = %log_path.display(), "Replay complete");
    Ok(())
}

/// Print a localized replay report
fn print_report(report: &ReplayReport, locale: &str, log_path: &Path) {
    use cli_output::*;

    print_separator();
    print_title(&t!("replay_complete", locale = locale));
    print_separator();
    print_blank();

    print_key_value(
        &t!("replay_step", locale = locale),
        &step_title(report.final_step, locale),
        Some(CliTheme::ACCENT),
    );

    if let Some(ref summary) = report.summary {
        print_blank();
        print_key_value(&t!("replay_summary", locale = locale), "", None);
        for line in summary_text(summary, locale) {
            print_item(&line);
        }
    }

    if let Some(message) = report.final_message {
        print_blank();
        print_key_value(
            &t!("replay_final", locale = locale),
            &final_title(message, locale),
            Some(CliTheme::SUCCESS),
        );
        print_item(&final_body(message, locale));
    }

    print_separator();
    print_log_path(&t!("log_file", locale = locale), &log_path.display().to_string());
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Determine the log file path based on config file or timestamp
fn get_log_path(exe_dir: &Path, cli: &Cli, mode: &str) -> PathBuf {
    let log_dir = exe_dir.join("Log");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    match cli.config_name() {
        Some(config_name) => log_dir
            .join(&config_name)
            .join(format!("{}_{}.log", config_name, timestamp)),
        None => log_dir.join(format!("{}_{}.log", mode, timestamp)),
    }
}

/// Resolve config path - supports shorthand syntax
fn resolve_config_path(exe_dir: &Path, config_path: &Path) -> PathBuf {
    if config_path.exists() {
        return config_path.to_path_buf();
    }

    let with_extension = if config_path.extension().is_none() {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    if with_extension.exists() {
        return with_extension;
    }

    let filename = config_path.file_name().unwrap_or(config_path.as_os_str());
    let mut in_config_dir = exe_dir.join("Config").join(filename);
    if in_config_dir.extension().is_none() {
        in_config_dir = in_config_dir.with_extension("toml");
    }

    if in_config_dir.exists() {
        return in_config_dir;
    }

    config_path.to_path_buf()
}

/// Load configuration from file or CLI arguments
fn load_config(cli: &Cli, exe_dir: &Path) -> Result<AppConfig> {
    let config = match cli.config {
        Some(ref config_path) => {
            let resolved_path = resolve_config_path(exe_dir, config_path);
            let file_config = AppConfig::load_from_file(&resolved_path)?;
            cli.merge_with_config(file_config)
        }
        None => cli.to_config(),
    };

    Ok(config)
}

/// Setup logging for replay mode (file + console)
fn setup_logging(cli: &Cli, log_path: &Path) -> Result<WorkerGuard> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (non_blocking, guard) = tracing_appender::non_blocking(open_log_file(log_path)?);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(guard)
}

/// Setup logging for interactive mode (file only, no console)
fn setup_file_only_logging(log_path: &Path, verbose: bool) -> Result<WorkerGuard> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (non_blocking, guard) = tracing_appender::non_blocking(open_log_file(log_path)?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}

fn open_log_file(log_path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?)
}
