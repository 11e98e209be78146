//! Terminal implementation of [`Driver`]
//!
//! Presents the battle to a human and turns their menu choices into engine
//! actions. Holds no gameplay state beyond the stage number for headers.

use std::io::{self, BufRead, Write};

use crossterm::style::Color;

use crate::entities::Unit;
use crate::game::{
    Action, BattleOutcome, CoinFace, CoinToss, Driver, Resolution, TurnReport,
};
use crate::items::{Item, Potion};
use crate::progression::{SkillSlot, Upgrade};

use super::console::Console;
use super::widgets::{health_bar, item_menu, potion_menu, skill_menu, stage_header, status_line};

const TURN_PAUSE_MS: u64 = 700;
const BAR_WIDTH: usize = 20;

pub struct ConsoleDriver<R, W> {
    console: Console<R, W>,
    stage: u32,
}

/// Log terminal failures instead of aborting the run
fn warn_on_error(result: io::Result<()>, what: &str) {
    if let Err(e) = result {
        log::warn!("Failed to {}: {}", what, e);
    }
}

impl<R: BufRead, W: Write> ConsoleDriver<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self { console, stage: 0 }
    }

    pub fn console(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Number prompt that falls back to `default` when input ends or fails
    fn pick(&mut self, prompt: &str, min: usize, max: usize, default: usize) -> usize {
        match self.console.choose(prompt, min, max) {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                log::warn!("Input closed at '{}', choosing {}", prompt.trim(), default);
                default
            }
            Err(e) => {
                log::warn!("Failed to read input: {}, choosing {}", e, default);
                default
            }
        }
    }

    fn show_battle(&mut self, hero: &Unit, boss: &Unit) -> io::Result<()> {
        self.console.clear()?;
        self.console.println(&stage_header(self.stage))?;
        self.console.println("\n=== YOUR STATUS ===")?;
        self.console.segments(&status_line(hero))?;
        self.console
            .styled_line(&format!("\n{}", health_bar(hero.health_pool(), BAR_WIDTH)), Color::Green)?;
        self.console.println("\n=== ENEMY STATUS ===")?;
        self.console.segments(&status_line(boss))?;
        self.console
            .styled_line(&format!("\n{}", health_bar(boss.health_pool(), BAR_WIDTH)), Color::Red)?;
        self.console.println("")
    }

    fn show_events(&mut self, events: &[String]) -> io::Result<()> {
        for event in events {
            if event.starts_with("===") {
                self.console.styled_line(&format!("\n{}", event), Color::Cyan)?;
            } else if event.contains("stunned") {
                self.console.styled_line(&format!("> {}", event), Color::Magenta)?;
            } else {
                self.console.println(&format!("> {}", event))?;
            }
        }
        Ok(())
    }

    fn choose_skill(&mut self, hero: &Unit) -> io::Result<Option<SkillSlot>> {
        self.console.println("\n=== SKILLS MENU ===")?;
        for line in skill_menu(hero.skills()) {
            self.console.println(&line)?;
        }
        self.console.println("0. Back")?;
        let choice = self.pick("Choose skill (0-3): ", 0, 3, 0);
        Ok(choice.checked_sub(1).and_then(SkillSlot::from_index))
    }

    fn choose_potion(&mut self, hero: &Unit) -> io::Result<Option<usize>> {
        self.console.println("\n=== INVENTORY ===")?;
        if hero.equipment().is_empty() && hero.potions().is_empty() {
            self.console.println("Inventory is empty.")?;
            self.console.wait_for_enter("\nPress Enter to continue...")?;
            return Ok(None);
        }
        if !hero.equipment().is_empty() {
            self.console.println("Equipment:")?;
            for item in hero.equipment() {
                self.console.println(&format!("- {}", item.display_info()))?;
            }
        }
        if hero.potions().is_empty() {
            self.console.wait_for_enter("\nPress Enter to continue...")?;
            return Ok(None);
        }

        self.console.println("\nPotions:")?;
        for line in potion_menu(hero.potions()) {
            self.console.styled_line(&line, Color::Blue)?;
        }
        let max = hero.potions().len();
        let choice = self.pick("\nEnter potion number to use (0 to cancel): ", 0, max, 0);
        Ok(choice.checked_sub(1))
    }

    fn prompt_action(&mut self, hero: &Unit, boss: &Unit) -> io::Result<Action> {
        loop {
            self.show_battle(hero, boss)?;
            self.console.styled_line("=== YOUR TURN ===", Color::Cyan)?;
            self.console.println("1. Attack\n2. Use Skills\n3. Inventory\n4. Pass")?;
            let action = match self.console.choose("Enter your choice: ", 1, 4)? {
                None => {
                    log::warn!("Input closed during battle, passing the turn");
                    Some(Action::Pass)
                }
                Some(1) => Some(Action::Attack),
                Some(2) => self.choose_skill(hero)?.map(Action::Skill),
                Some(3) => self.choose_potion(hero)?.map(Action::UsePotion),
                Some(_) => Some(Action::Pass),
            };
            if let Some(action) = action {
                return Ok(action);
            }
        }
    }

    fn announce_stage(&mut self, boss: &Unit) -> io::Result<()> {
        self.console.styled_line("\n--- ENEMY APPEARED ---", Color::Red)?;
        self.console.segments(&status_line(boss))?;
        self.console.println("")
    }

    fn announce_toss(&mut self, toss: &CoinToss) -> io::Result<()> {
        self.console.animate("\nFlipping coin...\n")?;
        self.console.pause(1000);
        self.console.println(&format!("Result: {}!", toss.result.name()))?;
        if toss.hero_won() {
            self.console.styled_line("You won the coin flip! You go first!", Color::Green)?;
        } else {
            self.console.styled_line("You lost the coin flip! Enemy goes first!", Color::Red)?;
        }
        self.console.pause(1500);
        Ok(())
    }

    fn announce_result(&mut self, stage: u32, outcome: BattleOutcome, hero: &Unit, boss: &Unit) -> io::Result<()> {
        self.show_battle(hero, boss)?;
        match outcome {
            BattleOutcome::BossDefeated => self
                .console
                .styled_line(&format!("You defeated {}!", boss.name()), Color::Green),
            BattleOutcome::HeroDefeated => self
                .console
                .styled_line(&format!("You were defeated in stage {}!", stage), Color::Red),
        }
    }

    fn draw_upgrade_menu(&mut self, hero: &Unit) -> io::Result<()> {
        self.console.segments(&status_line(hero))?;
        self.console.styled_line("\n\n=== STAGE COMPLETE! CHOOSE UPGRADE ===", Color::Yellow)?;
        for (i, upgrade) in Upgrade::ALL.iter().enumerate() {
            self.console.println(&format!("{}. {}", i + 1, upgrade.label()))?;
        }
        Ok(())
    }

    fn draw_item_menu(&mut self, offer: &[Item]) -> io::Result<()> {
        self.console.styled_line("\n=== ITEM SELECTION ===", Color::Yellow)?;
        self.console
            .println(&format!("Choose 1 item from the following {} options:", offer.len()))?;
        for line in item_menu(offer) {
            self.console.println(&line)?;
        }
        Ok(())
    }

    fn announce_loot(&mut self, potions: &[Potion], events: &[String]) -> io::Result<()> {
        self.console.println(&format!("\nThe boss dropped {} potion(s):", potions.len()))?;
        for potion in potions {
            self.console.styled_line(&format!("- {}", potion.display_info()), Color::Blue)?;
        }
        self.show_events(events)
    }
}

impl<R: BufRead, W: Write> Driver for ConsoleDriver<R, W> {
    fn call_coin(&mut self, _stage: u32) -> CoinFace {
        warn_on_error(
            self.console
                .println("\n=== COIN FLIP TO DETERMINE TURN ORDER ===\nChoose: 1. Heads  2. Tails"),
            "draw coin prompt",
        );
        match self.pick("Your choice: ", 1, 2, 1) {
            2 => CoinFace::Tails,
            _ => CoinFace::Heads,
        }
    }

    fn choose_action(&mut self, hero: &Unit, boss: &Unit) -> Action {
        match self.prompt_action(hero, boss) {
            Ok(action) => action,
            Err(e) => {
                log::warn!("Failed to draw action menu: {}, passing the turn", e);
                Action::Pass
            }
        }
    }

    fn choose_upgrade(&mut self, hero: &Unit) -> Upgrade {
        let result = self.draw_upgrade_menu(hero);
        warn_on_error(result, "draw upgrade menu");
        let choice = self.pick("Choose (1-4): ", 1, Upgrade::ALL.len(), 1);
        Upgrade::ALL[choice - 1]
    }

    fn choose_item(&mut self, _hero: &Unit, offer: &[Item]) -> usize {
        if offer.is_empty() {
            return 0;
        }
        let result = self.draw_item_menu(offer);
        warn_on_error(result, "draw item menu");
        let prompt = format!("Choose item (1-{}): ", offer.len());
        self.pick(&prompt, 1, offer.len(), 1) - 1
    }

    fn stage_started(&mut self, stage: u32, _hero: &Unit, boss: &Unit) {
        self.stage = stage;
        let result = self.announce_stage(boss);
        warn_on_error(result, "announce stage");
    }

    fn coin_tossed(&mut self, toss: &CoinToss) {
        let result = self.announce_toss(toss);
        warn_on_error(result, "announce coin toss");
    }

    fn turn_resolved(&mut self, report: &TurnReport, _hero: &Unit, _boss: &Unit) {
        let result = self.show_events(&report.events);
        warn_on_error(result, "show turn events");
        if matches!(report.resolution, Resolution::SkillFellBack { .. }) {
            log::debug!("Skill fell back to a basic attack in round {}", report.round);
        }
        self.console.pause(TURN_PAUSE_MS);
    }

    fn battle_finished(&mut self, stage: u32, outcome: BattleOutcome, hero: &Unit, boss: &Unit) {
        let result = self.announce_result(stage, outcome, hero, boss);
        warn_on_error(result, "announce battle result");
    }

    fn loot_received(&mut self, _hero: &Unit, potions: &[Potion], events: &[String]) {
        let result = self.announce_loot(potions, events);
        warn_on_error(result, "announce loot");
    }

    fn rewards_claimed(&mut self, _hero: &Unit, _upgrade: Upgrade, _item: &Item, events: &[String]) {
        let result = self.show_events(events);
        warn_on_error(result, "show rewards");
        self.console.pause(2000);
    }
}
