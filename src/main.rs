use std::fs::File;

use anyhow::Result;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::WriteLogger;

use term_snake::config::{Config, USAGE};
use term_snake::game::Screen;
use term_snake::term::{in_session, TermKeys, TermScreen};
use term_snake::{Arena, Game, Outcome, Runner};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    if let Some(path) = &config.log_file {
        let level = if config.debug { LevelFilter::Debug } else { LevelFilter::Info };
        WriteLogger::init(level, simplelog::Config::default(), File::create(path)?)?;
    }

    let screen = TermScreen::new(config.color)?;
    let (max_row, max_col) = screen.dimensions();
    let arena = Arena::new(max_row, max_col).with_border(i32::from(config.border));

    let mut runner = Runner::new(screen, TermKeys).debug(config.debug);
    let result = in_session(&mut runner, |runner| run(&config, arena, runner));

    let outcome = result?;
    info!("finished: {:?}", outcome);
    match outcome {
        Outcome::GameOver { score } | Outcome::Won { score } | Outcome::Quit { score } => {
            println!("score: {}", score);
        }
    }
    Ok(())
}

fn run(config: &Config, arena: Arena, runner: &mut Runner<TermScreen, TermKeys>) -> Result<Outcome> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(arena, i32::from(config.food_margin), rng)?;
    runner.play(&mut game)
}
