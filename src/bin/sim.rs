use broadside::{init_logging, Board, Game, GameConfig, MatchOutcome, PlayerKind, Seat};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        eprintln!("Usage: {} <seed1> <seed2> [p1 tier] [p2 tier]", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let kind1 = tier_arg(args.get(3), PlayerKind::Good)?;
    let kind2 = tier_arg(args.get(4), PlayerKind::Mediocre)?;
    if kind1 == PlayerKind::Human || kind2 == PlayerKind::Human {
        anyhow::bail!("sim only runs AI players");
    }

    let config = GameConfig::standard();
    let mut p1 = kind1.create("player1", &config, SmallRng::seed_from_u64(seed1));
    let mut p2 = kind2.create("player2", &config, SmallRng::seed_from_u64(seed2));

    let mut shots = [0usize; 2];
    let mut hits = [0usize; 2];
    let game = Game::new(config.clone());
    let mut b1 = Board::new(&config);
    let mut b2 = Board::new(&config);
    let outcome = game.play_on(p1.as_mut(), p2.as_mut(), &mut b1, &mut b2, |shot| {
        let i = match shot.attacker {
            Seat::One => 0,
            Seat::Two => 1,
        };
        shots[i] += 1;
        if shot.result.is_hit() {
            hits[i] += 1;
        }
    });

    let winner = match outcome.winner() {
        Some(Seat::One) => Some("player1"),
        Some(Seat::Two) => Some("player2"),
        None => None,
    };
    let rounds = match outcome {
        MatchOutcome::Won { rounds, .. } => rounds,
        _ => 0,
    };

    let result = json!({
        "player1": {"tier": kind1.to_string(), "shots": shots[0], "hits": hits[0]},
        "player2": {"tier": kind2.to_string(), "shots": shots[1], "hits": hits[1]},
        "rounds": rounds,
        "outcome": outcome,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn tier_arg(arg: Option<&String>, default: PlayerKind) -> anyhow::Result<PlayerKind> {
    match arg {
        Some(s) => s.parse().map_err(anyhow::Error::msg),
        None => Ok(default),
    }
}
