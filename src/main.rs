//! Gauntlet - Entry Point
//!
//! Sets up logging and settings, then runs the main menu until the player
//! exits.

use std::fs::OpenOptions;
use std::io::{BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gauntlet::data::Settings;
use gauntlet::ui::{screens, Console, ConsoleDriver, MenuChoice};
use gauntlet::{create_unit, Run};

fn main() -> Result<()> {
    // Log to a file so output never mixes with the game text
    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("gauntlet.log")
    {
        Ok(log_file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();
        }
        Err(e) => eprintln!("Warning: logging disabled, cannot open gauntlet.log: {}", e),
    }

    log::info!("Starting Gauntlet v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("{}; using default settings", e);
        Settings::default()
    });

    let mut rng = match settings.seed {
        Some(seed) => {
            log::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut driver = ConsoleDriver::new(Console::stdio(&settings));
    let result = screens::intro(driver.console())
        .map_err(anyhow::Error::from)
        .and_then(|()| run_menu(&mut driver, &mut rng));

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Gauntlet shut down cleanly");
    result
}

/// Main menu loop
fn run_menu<R: BufRead, W: Write>(driver: &mut ConsoleDriver<R, W>, rng: &mut StdRng) -> Result<()> {
    loop {
        match screens::main_menu(driver.console())? {
            MenuChoice::NewGame => {
                let Some(name) = screens::ask_name(driver.console())? else {
                    break;
                };
                let Some(class) = screens::choose_class(driver.console(), &name)? else {
                    break;
                };

                let console = driver.console();
                console.clear()?;
                screens::print_logo(console)?;
                console.animate("\nPreparing for battle...\n")?;
                console.pause(1000);

                let outcome = Run::new(create_unit(class, name)).play(driver, rng)?;
                log::info!(
                    "Run finished: {} stages cleared, victory: {}",
                    outcome.stages_cleared(),
                    outcome.is_victory()
                );

                screens::show_summary(driver.console(), &outcome)?;
                driver
                    .console()
                    .wait_for_enter("\nPress Enter to return to main menu...")?;
            }
            MenuChoice::HowToPlay => screens::how_to_play(driver.console())?,
            MenuChoice::Exit => break,
        }
    }

    screens::farewell(driver.console())?;
    Ok(())
}
