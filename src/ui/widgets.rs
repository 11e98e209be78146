//! Text widgets
//!
//! Pure formatting for status lines, headers and menus. Nothing here
//! touches the terminal; [`super::Console`] prints the segments.

use crossterm::style::Color;

use crate::combat::Pool;
use crate::entities::Unit;
use crate::items::{Item, Potion};
use crate::progression::SkillTable;

/// A run of text with an optional color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub color: Option<Color>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), color: None }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self { text: text.into(), color: Some(color) }
    }
}

/// Concatenate segments without colors
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// "Name - HP: a/b, MP: c/d, ATK: e, DEF: f [Status: Poison(2)]"
pub fn status_line(unit: &Unit) -> Vec<Segment> {
    let name_color = if unit.archetype().is_boss() { Some(Color::Red) } else { None };
    let mut segments = vec![
        Segment { text: unit.name().to_string(), color: name_color },
        Segment::plain(" - HP: "),
        Segment::colored(format!("{}/{}", unit.health(), unit.max_health()), Color::Red),
        Segment::plain(", MP: "),
        Segment::colored(format!("{}/{}", unit.mana(), unit.max_mana()), Color::Blue),
        Segment::plain(", ATK: "),
        Segment::colored(unit.attack_power().to_string(), Color::Yellow),
        Segment::plain(", DEF: "),
        Segment::colored(unit.defense().to_string(), Color::Blue),
    ];

    if !unit.statuses().is_empty() {
        segments.push(Segment::plain(" [Status:"));
        for (kind, duration) in unit.statuses().iter() {
            let (r, g, b) = kind.color();
            segments.push(Segment::colored(
                format!(" {}({})", kind.name(), duration),
                Color::Rgb { r, g, b },
            ));
        }
        segments.push(Segment::plain("]"));
    }
    segments
}

/// A fixed-width bar such as `[######----]`
pub fn health_bar(pool: &Pool, width: usize) -> String {
    let filled = ((pool.percentage() * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn stage_header(stage: u32) -> String {
    let title = format!("| STAGE {} BATTLE", stage);
    let rule = "=".repeat(40);
    format!("{rule}\n{title:<39}|\n{rule}")
}

pub fn skill_menu(skills: &SkillTable) -> Vec<String> {
    skills
        .iter()
        .map(|(slot, skill)| {
            format!(
                "{}. {} (Cost: {} MP) - {}",
                slot.index() + 1,
                skill.name,
                skill.cost,
                skill.describe()
            )
        })
        .collect()
}

pub fn potion_menu(potions: &[Potion]) -> Vec<String> {
    potions
        .iter()
        .enumerate()
        .map(|(i, potion)| format!("{}. {}", i + 1, potion.display_info()))
        .collect()
}

pub fn item_menu(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.display_info()))
        .collect()
}
