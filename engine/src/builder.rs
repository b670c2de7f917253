//! Turns a raw [`CharacterDefinition`] into a derived [`Character`].
//!
//! The only impurity is the hit point roll: every build draws fresh hit dice,
//! so building the same definition twice usually yields two different maxima.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::character::{Character, ClassLevel, Item, ItemModifier};
use crate::damage::{DamageType, ResistanceKind};
use crate::definition::{CharacterDefinition, ClassEntry, DefenseEntry};
use crate::error::EngineError;
use crate::life::HitPoints;
use crate::{Ability, Dice, ability_mod};

/// Item modifiers with this `affectedObject` adjust ability scores.
pub const STATS_OBJECT: &str = "stats";

pub struct CharacterBuilder;

impl CharacterBuilder {
    /// Build with real dice.
    pub fn build(def: &CharacterDefinition, dice: &mut Dice) -> Result<Character, EngineError> {
        Self::build_with(def, |sides| dice.roll_die(sides))
    }

    /// Build with a caller-supplied hit die roller (`sides -> 1..=sides`).
    pub fn build_with(
        def: &CharacterDefinition,
        mut roll: impl FnMut(u32) -> u32,
    ) -> Result<Character, EngineError> {
        for class in &def.classes {
            validate_class(class)?;
        }

        let classes: Vec<ClassLevel> = def
            .classes
            .iter()
            .map(|c| ClassLevel {
                name: c.name.clone(),
                levels: c.class_level,
                hit_die_size: c.hit_dice_value,
            })
            .collect();

        let items: Vec<Item> = def
            .items
            .iter()
            .map(|i| Item {
                name: i.name.clone(),
                modifier: ItemModifier {
                    affected_object: i.modifier.affected_object.clone(),
                    affected_key: i.modifier.affected_value.clone(),
                    amount: i.modifier.value,
                },
            })
            .collect();

        let ability_scores = Ability::ALL
            .into_iter()
            .map(|a| Ok((a, ability_score(def.stats.score(a), &items, a)?)))
            .collect::<Result<IndexMap<Ability, i32>, EngineError>>()?;
        let ability_modifiers: IndexMap<Ability, i32> = ability_scores
            .iter()
            .map(|(&a, &score)| (a, ability_mod(score)))
            .collect();

        let resistances = resistance_table(&def.name, &def.defenses);

        let con_mod = ability_modifiers[&Ability::Constitution];
        let max_hp = roll_max_hp(&def.name, &classes, con_mod, &mut roll);

        debug!(
            "[BUILD][{}] level {} max HP {} (CON {:+}), {} resistances",
            def.name,
            def.level,
            max_hp,
            con_mod,
            resistances.len()
        );

        Ok(Character {
            name: def.name.clone(),
            level: def.level,
            classes,
            items,
            resistances,
            ability_scores,
            ability_modifiers,
            hit_points: HitPoints::new(max_hp),
        })
    }

    /// Decode and build in one step.
    pub fn from_json(text: &str, dice: &mut Dice) -> Result<Character, EngineError> {
        let def = CharacterDefinition::from_json(text)?;
        Self::build(&def, dice)
    }
}

fn validate_class(class: &ClassEntry) -> Result<(), EngineError> {
    if class.class_level == 0 {
        return Err(EngineError::MalformedDefinition(format!(
            "class '{}' has classLevel 0",
            class.name
        )));
    }
    if class.hit_dice_value == 0 {
        return Err(EngineError::MalformedDefinition(format!(
            "class '{}' has hitDiceValue 0",
            class.name
        )));
    }
    Ok(())
}

/// Sum of every `stats` modifier aimed at `ability`. Summed wide so item
/// order never decides whether the total overflows.
pub fn item_bonus(items: &[Item], ability: Ability) -> i64 {
    items
        .iter()
        .filter(|i| i.modifier.affected_object == STATS_OBJECT)
        .filter(|i| i.modifier.affected_key == ability.name())
        .map(|i| i64::from(i.modifier.amount))
        .sum()
}

fn ability_score(base: i32, items: &[Item], ability: Ability) -> Result<i32, EngineError> {
    let total = i64::from(base) + item_bonus(items, ability);
    i32::try_from(total).map_err(|_| {
        EngineError::MalformedDefinition(format!(
            "{} score {} is out of range after item modifiers",
            ability.name(),
            total
        ))
    })
}

/// Parse defenses, dropping entries outside the vocabulary. A repeated damage
/// type keeps the last entry.
pub fn resistance_table(
    name: &str,
    defenses: &[DefenseEntry],
) -> IndexMap<DamageType, ResistanceKind> {
    let mut table = IndexMap::new();
    for d in defenses {
        match (
            ResistanceKind::parse(&d.defense),
            DamageType::parse(&d.damage_type),
        ) {
            (Some(kind), Some(dtype)) => {
                if let Some(prev) = table.insert(dtype, kind) {
                    debug!("[BUILD][{}] {} {:?} replaces {:?}", name, dtype, kind, prev);
                }
            }
            _ => warn!(
                "[BUILD][{}] skipping defense '{}' vs '{}'",
                name, d.defense, d.damage_type
            ),
        }
    }
    table
}

fn roll_max_hp(
    name: &str,
    classes: &[ClassLevel],
    con_mod: i32,
    roll: &mut impl FnMut(u32) -> u32,
) -> i32 {
    let mut total = 0i32;
    for class in classes {
        let mut class_hp = 0i32;
        for _ in 0..class.levels {
            let die = i32::try_from(roll(class.hit_die_size)).unwrap_or(i32::MAX);
            class_hp = class_hp.saturating_add(die).saturating_add(con_mod);
        }
        debug!(
            "[HP][{}] {} {}d{} {:+}/level → {}",
            name, class.name, class.levels, class.hit_die_size, con_mod, class_hp
        );
        total = total.saturating_add(class_hp);
    }
    total.max(0)
}
