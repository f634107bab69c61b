use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

mod console;
mod menu;
mod session;
mod settings;
mod store;

use console::Console;
use settings::Settings;
use store::{DEFAULT_SAVE_FILE, ProgressStore};

#[derive(Parser, Debug)]
#[command(version, about = "Battle Boats: sink the computer's fleet before it sinks yours", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where game progress is kept between runs
    #[arg(short = 'f', long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Seconds to wait after showing the instructions
    #[arg(long, default_value_t = 10)]
    instructions_pause: u64,

    /// Seconds to wait after reporting there is nothing to resume
    #[arg(long, default_value_t = 5)]
    no_data_pause: u64,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            instructions_pause: Duration::from_secs(self.instructions_pause),
            no_data_pause: Duration::from_secs(self.no_data_pause),
        }
    }
}

fn init_logging(filter: log::LevelFilter) -> anyhow::Result<()> {
    use tracing_subscriber::filter::LevelFilter;

    let level = match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };

    // the default tracing-log bridge forwards `log` records to this subscriber
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Error initializing logger: {err}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter())?;

    let seed = match args.seed {
        Some(seed) => seed,
        None => SmallRng::from_os_rng().random(),
    };
    log::debug!("seed: {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let store = ProgressStore::new(&args.save_file);
    let settings = args.settings();
    log::debug!("progress file: {}", store.path().display());

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    menu::run_menu(&mut console, &store, &mut rng, &settings)?;

    log::debug!("quit");
    Ok(())
}
