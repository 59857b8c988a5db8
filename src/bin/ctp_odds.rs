use std::env;
use std::error::Error;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use pinseeker::mc::DEFAULT_TRIALS;
use pinseeker::model::compute_odds;
use pinseeker::print;
use pinseeker::profile::{read_roster, PlayerProfile};

const FIELD_SIZE: RangeInclusive<usize> = 2..=6;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the player roster from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// inline player in the form name:tier:drive:rounds; may be repeated
    #[clap(short = 'p', long = "player")]
    players: Vec<PlayerProfile>,

    /// number of contests to simulate
    #[clap(short = 't', long, default_value_t = DEFAULT_TRIALS)]
    trials: u64,

    /// seed for a reproducible run
    #[clap(short = 's', long)]
    seed: Option<u64>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.file.is_none() && self.players.is_empty()
            || self.file.is_some() && !self.players.is_empty()
        {
            bail!("either the -f or the -p flag must be specified");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let players = read_players(&args)?;
    let start_time = Instant::now();
    let rows = compute_odds(&players, args.trials, args.seed)?;
    let elapsed = start_time.elapsed();
    info!(
        "priced {} players over {} trials in {:.3}s",
        players.len(),
        args.trials,
        elapsed.as_millis() as f64 / 1_000.
    );

    let table = print::tabulate(&rows);
    info!("closest-to-the-pin odds:\n{}", Console::default().render(&table));
    Ok(())
}

fn read_players(args: &Args) -> anyhow::Result<Vec<PlayerProfile>> {
    let players = match &args.file {
        Some(path) => read_roster(path)?,
        None => args.players.clone(),
    };
    if !FIELD_SIZE.contains(&players.len()) {
        bail!(
            "the field must hold between {} and {} players; got {}",
            FIELD_SIZE.start(),
            FIELD_SIZE.end(),
            players.len()
        );
    }
    Ok(players)
}
