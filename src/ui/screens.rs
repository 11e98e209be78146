//! Out-of-battle screens: menus, class selection and the run summary

use std::io::{self, BufRead, Write};

use crossterm::style::Color;

use crate::entities::HeroClass;
use crate::game::RunOutcome;

use super::console::Console;
use super::widgets::status_line;

const LOGO: &str = r"
   ____    _   _   _ _   _ _____ _     _____ _____
  / ___|  / \ | | | | \ | |_   _| |   | ____|_   _|
 | |  _  / _ \| | | |  \| | | | | |   |  _|   | |
 | |_| |/ ___ \ |_| | |\  | | | | |___| |___  | |
  \____/_/   \_\___/|_| \_| |_| |_____|_____| |_|
";

const DEFAULT_NAME: &str = "Hero";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    HowToPlay,
    Exit,
}

pub fn print_logo<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.styled_line(LOGO, Color::Magenta)
}

/// Start-up splash. Pauses are skipped when text animation is off.
pub fn intro<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.clear()?;
    console.animate("\nInitializing the Gauntlet...\n")?;
    console.pause(800);
    console.clear()?;
    print_logo(console)?;
    console.animate("\nA text-based boss rush\n\n")?;
    console.pause(2000);
    Ok(())
}

/// End of input counts as choosing to exit
pub fn main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<MenuChoice> {
    console.clear()?;
    print_logo(console)?;
    console.animate("\nWelcome to the Gauntlet, a turn-based boss rush!\n\n")?;
    console.println("1. Start New Game\n2. How to Play\n3. Exit")?;
    let choice = match console.choose("Choose (1-3): ", 1, 3)? {
        Some(1) => MenuChoice::NewGame,
        Some(2) => MenuChoice::HowToPlay,
        _ => MenuChoice::Exit,
    };
    Ok(choice)
}

pub fn how_to_play<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.clear()?;
    print_logo(console)?;
    console.styled_line("HOW TO PLAY:", Color::Yellow)?;
    for line in [
        "- Choose your class: Warrior, Archer, or Mage",
        "- Battle five bosses in turn-based combat",
        "- Use basic attacks or powerful skills (skills consume MP)",
        "- Drink potions to recover HP or MP; it does not cost your turn",
        "- Win by defeating all 5 bosses!",
    ] {
        console.println(line)?;
    }
    console.styled_line("\nKEY SYSTEMS:", Color::Yellow)?;
    for line in [
        "- A coin flip decides who acts first in each battle",
        "- After each win pick an upgrade: Heal, MP, ATK or DEF",
        "- Then pick 1 of 3 random items; equipment bonuses are permanent",
        "- Poison, Bleed, Stun, Strength Up and Weakness change the odds",
    ] {
        console.println(line)?;
    }
    console.styled_line("\nGOOD LUCK, HERO!", Color::Green)?;
    console.wait_for_enter("\nPress Enter to return to main menu...")
}

/// Hero name from input; blank input gives a default name
pub fn ask_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<String>> {
    console.clear()?;
    print_logo(console)?;
    console.animate("\nEnter your hero's name: ")?;
    let name = console.read_line()?.map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    });
    Ok(name)
}

pub fn choose_class<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: &str,
) -> io::Result<Option<HeroClass>> {
    console.println(&format!("\nSelect a class for {}:", name))?;
    for (i, class) in HeroClass::ALL.iter().enumerate() {
        console.println(&format!("{}. {} ({})", i + 1, class.name(), class.tagline()))?;
    }
    let choice = console.choose("Choose (1-3): ", 1, HeroClass::ALL.len())?;
    Ok(choice.and_then(|c| HeroClass::ALL.get(c - 1).copied()))
}

pub fn show_summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: &RunOutcome,
) -> io::Result<()> {
    match outcome {
        RunOutcome::Victory { .. } => {
            console.styled_line("\n=== CONGRATULATIONS! ===", Color::Green)?;
            console.styled_line("You defeated all bosses and conquered the gauntlet!", Color::Yellow)?;
        }
        RunOutcome::Defeat { stage, .. } => {
            console.styled_line(&format!("\nYour journey ended in stage {}.", stage), Color::Red)?;
        }
    }
    console.println("\n=== FINAL STATUS ===")?;
    console.segments(&status_line(outcome.hero()))?;
    console.println(&format!("\nBosses defeated: {}", outcome.stages_cleared()))
}

pub fn farewell<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.clear()?;
    print_logo(console)?;
    console.animate("\nThanks for playing the Gauntlet!\n")?;
    console.animate("May your adventures continue...\n")
}
