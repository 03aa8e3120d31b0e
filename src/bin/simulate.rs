use std::time::Instant;

use diceball::config::EventTable;
use diceball::constants::{DEFAULT_EVENT_SYMBOLS, DEFAULT_STRIKE_WEIGHT, INNINGS_PER_GAME};
use diceball::env_config::init_rayon_threads;
use diceball::simulation::{
    aggregate_run_statistics, sample_games_from_pool, save_runs, save_statistics,
    simulate_games_batch, simulate_innings_batch, summarize, SimulationResult,
};

struct Args {
    num_innings: usize,
    num_games: usize,
    seed: u64,
    events: String,
    strike_weight: u32,
    from_pool: bool,
    output: Option<String>,
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let mut args = Args {
        num_innings: 100_000,
        num_games: 10_000,
        seed: 42,
        events: DEFAULT_EVENT_SYMBOLS.to_string(),
        strike_weight: DEFAULT_STRIKE_WEIGHT,
        from_pool: false,
        output: None,
    };

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--innings" => {
                i += 1;
                if i < argv.len() {
                    args.num_innings = argv[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --innings value: {}", argv[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--games" => {
                i += 1;
                if i < argv.len() {
                    args.num_games = argv[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --games value: {}", argv[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < argv.len() {
                    args.seed = argv[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", argv[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--events" => {
                i += 1;
                if i < argv.len() {
                    args.events = argv[i].clone();
                }
            }
            "--strike-weight" => {
                i += 1;
                if i < argv.len() {
                    args.strike_weight = argv[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --strike-weight value: {}", argv[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--from-pool" => {
                args.from_pool = true;
            }
            "--output" => {
                i += 1;
                if i < argv.len() {
                    args.output = Some(argv[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: diceball-simulate [--innings N] [--games N] [--seed S] \
                     [--events SYMBOLS] [--strike-weight W] [--from-pool] [--output DIR]"
                );
                println!();
                println!("Options:");
                println!("  --innings N        Innings to simulate (default: 100000)");
                println!("  --games N          Games to simulate (default: 10000)");
                println!("  --seed S           RNG seed (default: 42)");
                println!("  --events SYMBOLS   Event pool string (default: {DEFAULT_EVENT_SYMBOLS})");
                println!("                     s=single d=double t=triple h=home run e=error");
                println!("                     w=walk o=out at first f=fly out u=foul out p=double play");
                println!("  --strike-weight W  Strike weight (default: {DEFAULT_STRIKE_WEIGHT})");
                println!("  --from-pool        Sample game innings from the simulated pool");
                println!("  --output DIR       Write run files and statistics to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!(
                    "Usage: diceball-simulate [--innings N] [--games N] [--seed S] \
                     [--events SYMBOLS] [--strike-weight W] [--from-pool] [--output DIR]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if args.num_innings == 0 || args.num_games == 0 {
        eprintln!("Error: --innings and --games must be positive");
        std::process::exit(1);
    }

    args
}

fn main() {
    let args = parse_args();
    let num_threads = init_rayon_threads();

    let table = EventTable::from_symbols(&args.events, args.strike_weight).unwrap_or_else(|e| {
        eprintln!("Invalid event table: {e}");
        std::process::exit(1);
    });

    println!(
        "Dice Baseball Simulation ({} innings, {} games)",
        args.num_innings, args.num_games
    );
    println!("  Threads:      {num_threads}");
    println!("  Seed:         {}", args.seed);
    println!(
        "  Event pool:   {} symbols + strike weight {} (n = {})",
        table.pool_weight(),
        table.strike_weight(),
        table.total_weight()
    );
    println!("  P(strikeout): {:.5}", table.p_strikeout());
    println!();

    // Innings
    let t0 = Instant::now();
    let inning_runs =
        simulate_innings_batch(&table, args.num_innings, args.seed).unwrap_or_else(|e| {
            eprintln!("Inning simulation failed: {e}");
            std::process::exit(1);
        });
    let innings_elapsed = t0.elapsed();

    let per_inning_us = innings_elapsed.as_secs_f64() * 1e6 / args.num_innings as f64;
    let inning_mean =
        inning_runs.iter().map(|&r| r as f64).sum::<f64>() / args.num_innings as f64;
    println!("Innings:");
    println!(
        "  Elapsed:     {:.1} ms ({:.2} \u{00b5}s/inning)",
        innings_elapsed.as_secs_f64() * 1000.0,
        per_inning_us
    );
    println!("  Mean runs:   {inning_mean:.4}");
    println!();

    // Games: fresh simulation, or resampled from the inning pool.
    // Seed offset keeps game streams disjoint from the inning pool's.
    let game_seed = args.seed.wrapping_add(args.num_innings as u64);
    let result: SimulationResult = if args.from_pool {
        let t1 = Instant::now();
        let scores = sample_games_from_pool(&inning_runs, args.num_games, game_seed)
            .unwrap_or_else(|e| {
                eprintln!("Pool sampling failed: {e}");
                std::process::exit(1);
            });
        summarize(scores, t1.elapsed())
    } else {
        simulate_games_batch(&table, args.num_games, game_seed).unwrap_or_else(|e| {
            eprintln!("Game simulation failed: {e}");
            std::process::exit(1);
        })
    };

    let per_game_us = result.elapsed.as_secs_f64() * 1e6 / args.num_games as f64;
    let throughput = args.num_games as f64 / result.elapsed.as_secs_f64();
    println!(
        "Games{}:",
        if args.from_pool { " (from pool)" } else { "" }
    );
    println!(
        "  Elapsed:     {:.1} ms ({:.2} \u{00b5}s/game, {:.0} games/sec)",
        result.elapsed.as_secs_f64() * 1000.0,
        per_game_us,
        throughput
    );
    println!();
    println!("Results:");
    println!("  Mean runs:   {:.3}", result.mean);
    println!(
        "  ({}x inning mean: {:.3})",
        INNINGS_PER_GAME,
        INNINGS_PER_GAME as f64 * inning_mean
    );
    println!("  Std dev:     {:.2}", result.std_dev);
    println!("  Min:         {}", result.min);
    println!("  Max:         {}", result.max);
    println!("  Median:      {}", result.median);

    if let Some(ref output_dir) = args.output {
        println!();

        let innings_path = format!("{output_dir}/inning_runs.bin");
        save_runs(&inning_runs, args.seed, &innings_path).unwrap_or_else(|e| {
            eprintln!("Failed to write {innings_path}: {e}");
            std::process::exit(1);
        });
        println!("  Inning runs: {innings_path}");

        let games_path = format!("{output_dir}/game_runs.bin");
        save_runs(&result.runs, game_seed, &games_path).unwrap_or_else(|e| {
            eprintln!("Failed to write {games_path}: {e}");
            std::process::exit(1);
        });
        println!("  Game runs:   {games_path}");

        let stats = aggregate_run_statistics(&inning_runs, &result.runs, args.seed);
        let stats_path = format!("{output_dir}/run_statistics.json");
        save_statistics(&stats, &stats_path);
        println!("  Statistics:  {stats_path}");
    }
}
