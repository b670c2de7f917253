use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::damage::{DamageType, ResistanceKind, effective_damage};
use crate::error::{Action, EngineError, non_negative};
use crate::life::HitPoints;
use crate::Ability;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLevel {
    pub name: String,
    pub levels: u32,
    pub hit_die_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModifier {
    /// Which part of the character is touched, e.g. `stats`.
    pub affected_object: String,
    /// Key inside that object, e.g. `constitution`.
    pub affected_key: String,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub modifier: ItemModifier,
}

/// A fully derived character. Only the hit point pools change after the build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub classes: Vec<ClassLevel>,
    pub items: Vec<Item>,
    pub(crate) resistances: IndexMap<DamageType, ResistanceKind>,
    pub(crate) ability_scores: IndexMap<Ability, i32>,
    pub(crate) ability_modifiers: IndexMap<Ability, i32>,
    #[serde(flatten)]
    pub(crate) hit_points: HitPoints,
}

/// What a call to [`Character::take_damage`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageOutcome {
    pub damage_type: DamageType,
    pub raw: i32,
    pub effective: i32,
    pub absorbed_by_temp: i32,
    pub dealt_to_current: i32,
    pub dropped_to_zero: bool,
}

impl Character {
    pub fn hit_points(&self) -> &HitPoints {
        &self.hit_points
    }

    pub fn max_hp(&self) -> i32 {
        self.hit_points.max()
    }

    pub fn temp_hp(&self) -> i32 {
        self.hit_points.temp()
    }

    pub fn current_hp(&self) -> i32 {
        self.hit_points.current()
    }

    /// Post-item scores for all six abilities.
    pub fn ability_scores(&self) -> &IndexMap<Ability, i32> {
        &self.ability_scores
    }

    /// Modifiers for all six abilities.
    pub fn ability_modifiers(&self) -> &IndexMap<Ability, i32> {
        &self.ability_modifiers
    }

    pub fn resistances(&self) -> &IndexMap<DamageType, ResistanceKind> {
        &self.resistances
    }

    pub fn ability_score(&self, ability: Ability) -> i32 {
        self.ability_scores.get(&ability).copied().unwrap_or_default()
    }

    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        self.ability_modifiers.get(&ability).copied().unwrap_or_default()
    }

    pub fn resistance_to(&self, damage_type: DamageType) -> Option<ResistanceKind> {
        self.resistances.get(&damage_type).copied()
    }

    /// Heal up to max HP. Returns the HP actually restored.
    pub fn heal(&mut self, amount: i32) -> Result<i32, EngineError> {
        let amount = non_negative(Action::Heal, amount)?;
        let before = self.hit_points.current();
        let restored = self.hit_points.heal(amount.unsigned_abs());
        debug!(
            "[HEAL][{}] +{} HP ({} → {})",
            self.name,
            restored,
            before,
            self.hit_points.current()
        );
        Ok(restored)
    }

    /// Grant temporary HP; the larger of the old and new pool is kept.
    pub fn add_temp_hp(&mut self, amount: i32) -> Result<i32, EngineError> {
        let amount = non_negative(Action::TempHp, amount)?;
        let before = self.hit_points.temp();
        let after = self.hit_points.add_temp(amount.unsigned_abs());
        debug!("[TEMP][{}] offered {} ({} → {})", self.name, amount, before, after);
        Ok(after)
    }

    pub fn take_damage(
        &mut self,
        damage_type: DamageType,
        amount: i32,
    ) -> Result<DamageOutcome, EngineError> {
        let amount = non_negative(Action::Damage, amount)?;
        let resistance = self.resistance_to(damage_type);
        let effective = effective_damage(amount, resistance);
        let before = self.hit_points.current();
        let split = self.hit_points.absorb(effective.unsigned_abs());
        let outcome = DamageOutcome {
            damage_type,
            raw: amount,
            effective,
            absorbed_by_temp: split.by_temp,
            dealt_to_current: split.by_current,
            dropped_to_zero: before > 0 && self.hit_points.is_down(),
        };
        debug!(
            "[DMG][{}] {} {} ({:?}) → {} effective; temp −{}, hp {} → {}",
            self.name,
            amount,
            damage_type,
            resistance,
            effective,
            split.by_temp,
            before,
            self.hit_points.current()
        );
        Ok(outcome)
    }

    /// Boundary form of [`Character::take_damage`] taking the damage type by name.
    /// Both inputs are checked before anything changes.
    pub fn take_damage_named(
        &mut self,
        damage_type: &str,
        amount: i32,
    ) -> Result<DamageOutcome, EngineError> {
        let damage_type = DamageType::parse(damage_type)
            .ok_or_else(|| EngineError::UnrecognizedDamageType(damage_type.to_string()))?;
        self.take_damage(damage_type, amount)
    }
}
