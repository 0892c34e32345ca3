use anyhow::{anyhow, bail, Context};
use broadside::{init_logging, Game, GameConfig, MatchOutcome, PlayerKind, Seat};
use clap::{Args, Parser, Subcommand};
use log::{warn, LevelFilter};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BoardArgs {
    #[arg(long, default_value_t = 10)]
    rows: usize,
    #[arg(long, default_value_t = 10)]
    cols: usize,
    /// Roster entry as LENGTH:SYMBOL:NAME; repeat for each ship. Defaults to
    /// the classic five ships.
    #[arg(long = "ship", value_name = "LENGTH:SYMBOL:NAME")]
    ships: Vec<String>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single match, showing the boards as it goes.
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
        p1: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
        p2: PlayerKind,
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Play many AI matches and report how often each side wins.
    Bench {
        #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
        p1: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
        p2: PlayerKind,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[command(flatten)]
        board: BoardArgs,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Info);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { p1, p2, board } => {
            let config = build_config(&board)?;
            let mut seeds = seed_rng(board.seed);
            let mut player1 = p1.create("Player 1", &config, SmallRng::from_rng(&mut seeds));
            let mut player2 = p2.create("Player 2", &config, SmallRng::from_rng(&mut seeds));
            let game = Game::new(config).show_boards(true);
            match game.play(player1.as_mut(), player2.as_mut()) {
                MatchOutcome::Won { winner, rounds } => {
                    let name = match winner {
                        Seat::One => player1.name(),
                        Seat::Two => player2.name(),
                    };
                    println!("{} wins after {} shots!", name, rounds);
                }
                MatchOutcome::SetupFailed { seat } => {
                    println!("{:?} could not place its ships; the match was aborted.", seat);
                }
                MatchOutcome::NoShips => println!("The roster is empty; nothing to play."),
            }
        }
        Commands::Bench { p1, p2, games, board } => {
            if p1 == PlayerKind::Human || p2 == PlayerKind::Human {
                bail!("bench only runs AI players");
            }
            let config = build_config(&board)?;
            let mut seeds = seed_rng(board.seed);
            let game = Game::new(config.clone());
            let (mut wins1, mut wins2, mut aborted, mut shots) = (0usize, 0usize, 0usize, 0usize);
            for _ in 0..games {
                let mut player1 = p1.create("Player 1", &config, SmallRng::from_rng(&mut seeds));
                let mut player2 = p2.create("Player 2", &config, SmallRng::from_rng(&mut seeds));
                match game.play(player1.as_mut(), player2.as_mut()) {
                    MatchOutcome::Won { winner: Seat::One, rounds } => {
                        wins1 += 1;
                        shots += rounds;
                    }
                    MatchOutcome::Won { winner: Seat::Two, rounds } => {
                        wins2 += 1;
                        shots += rounds;
                    }
                    MatchOutcome::SetupFailed { .. } | MatchOutcome::NoShips => aborted += 1,
                }
            }
            let finished = wins1 + wins2;
            println!("Player 1 ({}) won {} of {} games", p1, wins1, games);
            println!("Player 2 ({}) won {} of {} games", p2, wins2, games);
            if aborted > 0 {
                println!("{} games were aborted during setup", aborted);
            }
            if finished > 0 {
                println!("average match length: {:.1} shots", shots as f64 / finished as f64);
            }
        }
    }
    Ok(())
}

fn seed_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::seed_from_u64(rand::rng().random()),
    }
}

/// Board dimensions are fatal when wrong; bad roster entries are reported and
/// skipped.
fn build_config(args: &BoardArgs) -> anyhow::Result<GameConfig> {
    let mut config = GameConfig::new(args.rows, args.cols).context("invalid board size")?;
    let ships = if args.ships.is_empty() {
        GameConfig::standard()
            .ships()
            .iter()
            .map(|s| (s.length(), s.symbol(), s.name().to_owned()))
            .collect()
    } else {
        args.ships
            .iter()
            .map(|s| parse_ship(s))
            .collect::<anyhow::Result<Vec<_>>>()?
    };
    for (length, symbol, name) in ships {
        if let Err(e) = config.add_ship(length, symbol, name.as_str()) {
            warn!("skipping {}: {}", name, e);
        }
    }
    Ok(config)
}

fn parse_ship(entry: &str) -> anyhow::Result<(usize, char, String)> {
    let mut parts = entry.splitn(3, ':');
    let length = parts
        .next()
        .ok_or_else(|| anyhow!("missing ship length in {:?}", entry))?
        .trim()
        .parse::<usize>()
        .with_context(|| format!("bad ship length in {:?}", entry))?;
    let mut symbol_part = parts
        .next()
        .ok_or_else(|| anyhow!("missing ship symbol in {:?}", entry))?
        .chars();
    let symbol = match (symbol_part.next(), symbol_part.next()) {
        (Some(c), None) => c,
        _ => bail!("ship symbol must be a single character in {:?}", entry),
    };
    let name = parts.next().unwrap_or("ship").trim().to_owned();
    Ok((length, symbol, name))
}
