//! Raw character definitions as they are stored on disk.
//!
//! Field names follow the stored JSON verbatim. Decoding is the one place a
//! shape mismatch turns into [`EngineError::MalformedDefinition`]; nothing
//! downstream re-checks types.

use serde::{Deserialize, Serialize};

use crate::Ability;
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    pub name: String,
    pub level: u32,
    pub classes: Vec<ClassEntry>,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    pub stats: StatBlock,
    #[serde(default)]
    pub defenses: Vec<DefenseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub name: String,
    pub class_level: u32,
    pub hit_dice_value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    pub modifier: ModifierEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierEntry {
    pub affected_object: String,
    pub affected_value: String,
    pub value: i32,
}

/// Base ability scores. Every ability is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl StatBlock {
    pub fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

/// One `{defense, type}` pair. Both stay strings here; unknown vocabulary is
/// dropped during the build rather than rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseEntry {
    pub defense: String,
    #[serde(rename = "type")]
    pub damage_type: String,
}

impl CharacterDefinition {
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        serde_json::from_str(text).map_err(|e| EngineError::MalformedDefinition(e.to_string()))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, EngineError> {
        serde_json::from_value(value).map_err(|e| EngineError::MalformedDefinition(e.to_string()))
    }
}
