use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cfbrowse::app::App;
use cfbrowse::config::Config;
use cfbrowse::logging;
use cfbrowse::remote::client::CodeforcesClient;
use cfbrowse::ui::screen::TerminalScreen;

#[derive(Parser)]
#[command(name = "cfbrowse", version, about = "Terminal browser for Codeforces problems by topic")]
struct Cli {
    #[arg(long, help = "Codeforces handle whose solved problems are marked")]
    handle: Option<String>,

    #[arg(long, help = "Problems per page")]
    page_size: Option<usize>,

    #[arg(short, long, help = "Config file (default: <config dir>/cfbrowse/config.toml)")]
    config: Option<PathBuf>,

    #[arg(long, help = "Log file")]
    log_file: Option<PathBuf>,

    #[arg(long, help = "Write the effective config to the config file and exit")]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    if let Some(handle) = cli.handle {
        config.handle = handle;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file.to_string_lossy().to_string();
    }
    config.normalize();

    if cli.init_config {
        match &cli.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        return Ok(());
    }

    if let Err(err) = logging::init(&PathBuf::from(&config.log_file)) {
        eprintln!("Logging disabled: {err}");
    }

    let client = CodeforcesClient::new(&config.api_base_url, config.request_timeout())?;
    let app = App::new(config);

    let results = {
        let mut input = io::stdin().lock();
        let mut out = io::stdout();
        app.collect(&client, &mut input, &mut out)?
    };

    let mut screen = TerminalScreen::new().context("failed to enter raw mode")?;
    let result = app.browse(&mut screen, &results);
    drop(screen);
    println!();
    result
}
