use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use summarize::config;
use summarize::{JsonLibrary, summarize as show_summary};

/// Summarize library statistics
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Summarize music library statistics grouped by a field"
)]
struct Args {
    /// Library query selecting the items to summarize
    query: Vec<String>,

    /// Field to group by [default: genre]
    #[arg(short = 'g', long = "group-by")]
    group_by: Option<String>,

    /// Stats to display, separated by spaces [default: count]
    #[arg(short = 's', long = "stats")]
    stats: Option<String>,

    /// Sort ascending instead of descending
    #[arg(short = 'R', long = "not-reverse")]
    not_reverse: bool,

    /// JSON library file (if not provided, reads from config or stdin)
    #[arg(short = 'l', long = "library")]
    library: Option<PathBuf>,
}

const LOG_ENV: &str = "SUMMARIZE_LOG";

fn main() -> Result<()> {
    init_logging();

    color_eyre::install()?;

    // Load config early so its defaults sit under the CLI flags
    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }
    let config = config_result.config;

    let args = Args::parse();

    let library_path = args.library.or_else(|| config.library.path.clone());
    let library = JsonLibrary::load(library_path.as_deref())?;

    let options = config.summary_options(
        args.query.join(" "),
        args.group_by,
        args.stats,
        args.not_reverse,
    );
    log::debug!("Summary options: {:?}", options);

    show_summary(&library, &options, &config.table)?;

    Ok(())
}

/// Logs go to stderr so stdout carries only the table
fn init_logging() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
