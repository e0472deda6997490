//! Gate Runner headless demo
//!
//! Runs a session at real-time speed with the autopilot at the controls,
//! printing ASCII frames to stdout and reporting the final score to the local
//! leaderboard.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use gate_runner::renderer::{AsciiRenderer, Renderer};
use gate_runner::sim::{GamePhase, autopilot};
use gate_runner::reporter::LogReporter;
use gate_runner::{Game, LeaderboardReporter, ScoreDispatcher, ScoreReporter, Settings};

#[derive(Debug, Parser)]
#[command(name = "gate-runner", about = "Headless gate runner demo")]
struct Args {
    /// Settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the run seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the username attached to the score
    #[arg(long)]
    username: Option<String>,
    /// Stop after this many ticks even if still alive
    #[arg(long, default_value_t = 60 * 60)]
    max_ticks: u64,
    /// Print a frame every N ticks (0 = final frame only)
    #[arg(long, default_value_t = 30)]
    frame_every: u64,
    /// Run as fast as possible instead of in real time
    #[arg(long)]
    fast: bool,
    /// Only log the final score instead of keeping a local leaderboard
    #[arg(long)]
    no_leaderboard: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(username) = args.username {
        settings.username = username;
    }

    let seed = settings.resolve_seed();
    log::info!("Gate Runner starting with seed {}", seed);

    let leaderboard = (!args.no_leaderboard).then(|| Arc::new(LeaderboardReporter::new()));
    let reporter: Arc<dyn ScoreReporter> = match &leaderboard {
        Some(leaderboard) => leaderboard.clone(),
        None => Arc::new(LogReporter),
    };
    let dispatcher = ScoreDispatcher::spawn(reporter);
    let mut game = Game::new(settings.tuning.clone(), seed, settings.username.clone())
        .with_dispatcher(dispatcher);
    let mut renderer = AsciiRenderer::default();

    game.start();
    let tick_dt = game.clock().tick_dt();
    let mut last = Instant::now();
    let mut last_frame_tick = u64::MAX;

    loop {
        if autopilot::wants_jump(game.session()) {
            game.jump();
        }

        if args.fast {
            game.step();
        } else {
            let now = Instant::now();
            game.update(now.duration_since(last).as_secs_f32());
            last = now;
        }

        let tick = game.session().tick_count;
        if args.frame_every > 0 && tick.is_multiple_of(args.frame_every) && tick != last_frame_tick {
            last_frame_tick = tick;
            print!("{}", renderer.render(&game.snapshot()));
        }

        if game.phase() == GamePhase::Over || tick >= args.max_ticks {
            break;
        }
        if !args.fast {
            thread::sleep(Duration::from_secs_f32(tick_dt / 2.0));
        }
    }

    print!("{}", renderer.render(&game.snapshot()));
    match game.last_game_over() {
        Some(over) => println!(
            "Game over after {} ticks: score {} ({:?})",
            over.ticks, over.score, over.cause
        ),
        None => println!(
            "Stopped after {} ticks: score {}",
            game.session().tick_count,
            game.session().score
        ),
    }

    game.shutdown();
    if let Some(best) = leaderboard.and_then(|l| l.scores().top_score()) {
        println!("Best score this session: {}", best);
    }
}
