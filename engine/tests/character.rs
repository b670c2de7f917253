use hp_engine::{
    Action, Character, CharacterBuilder, CharacterDefinition, DamageType, EngineError,
};
use serde_json::json;

/// Level 2 fighter, every die rolls 5, CON 10 → 10 max HP.
/// Resists slashing, immune to fire, vulnerable to cold.
fn tester() -> Character {
    let def = CharacterDefinition::from_value(json!({
        "name": "Tester",
        "level": 2,
        "classes": [{ "name": "fighter", "classLevel": 2, "hitDiceValue": 10 }],
        "stats": {
            "strength": 10, "dexterity": 10, "constitution": 10,
            "intelligence": 10, "wisdom": 10, "charisma": 10
        },
        "defenses": [
            { "defense": "resistance", "type": "slashing" },
            { "defense": "immunity", "type": "fire" },
            { "defense": "vulnerable", "type": "cold" }
        ]
    }))
    .unwrap();
    CharacterBuilder::build_with(&def, |_| 5).unwrap()
}

fn hp(c: &Character) -> (i32, i32) {
    (c.current_hp(), c.temp_hp())
}

#[test]
fn heal_caps_at_max() {
    let mut c = tester();
    c.take_damage(DamageType::Force, 6).unwrap();
    assert_eq!(c.heal(2).unwrap(), 2);
    assert_eq!(c.current_hp(), 6);
    assert_eq!(c.heal(50).unwrap(), 4);
    assert_eq!(c.current_hp(), 10);
    assert_eq!(c.heal(0).unwrap(), 0);
}

#[test]
fn heal_leaves_temp_alone() {
    let mut c = tester();
    c.add_temp_hp(4).unwrap();
    c.heal(3).unwrap();
    assert_eq!(c.temp_hp(), 4);
}

#[test]
fn temp_hp_keeps_the_larger_pool() {
    let mut c = tester();
    assert_eq!(c.add_temp_hp(5).unwrap(), 5);
    assert_eq!(c.add_temp_hp(3).unwrap(), 5);
    assert_eq!(c.add_temp_hp(8).unwrap(), 8);
    assert_eq!(c.temp_hp(), 8);
}

#[test]
fn temp_absorbs_first() {
    let mut c = tester();
    c.add_temp_hp(5).unwrap();
    let out = c.take_damage(DamageType::Force, 8).unwrap();
    assert_eq!(hp(&c), (7, 0));
    assert_eq!(out.absorbed_by_temp, 5);
    assert_eq!(out.dealt_to_current, 3);
    assert!(!out.dropped_to_zero);
}

#[test]
fn fire_immunity_changes_nothing() {
    let mut c = tester();
    c.add_temp_hp(2).unwrap();
    let out = c.take_damage(DamageType::Fire, 40).unwrap();
    assert_eq!(out.effective, 0);
    assert_eq!(hp(&c), (10, 2));
}

#[test]
fn resistance_halves_but_never_to_zero() {
    let mut c = tester();
    assert_eq!(c.take_damage(DamageType::Slashing, 1).unwrap().effective, 1);
    assert_eq!(c.take_damage(DamageType::Slashing, 2).unwrap().effective, 1);
    assert_eq!(c.take_damage(DamageType::Slashing, 3).unwrap().effective, 1);
    assert_eq!(c.take_damage(DamageType::Slashing, 0).unwrap().effective, 0);
    assert_eq!(c.current_hp(), 7);
}

#[test]
fn vulnerability_doubles() {
    let mut c = tester();
    let out = c.take_damage(DamageType::Cold, 4).unwrap();
    assert_eq!(out.effective, 8);
    assert_eq!(c.current_hp(), 2);
}

#[test]
fn overkill_clamps_at_zero() {
    let mut c = tester();
    c.add_temp_hp(3).unwrap();
    let out = c.take_damage(DamageType::Cold, 50).unwrap();
    assert_eq!(hp(&c), (0, 0));
    assert!(out.dropped_to_zero);
    let again = c.take_damage(DamageType::Piercing, 5).unwrap();
    assert!(!again.dropped_to_zero);
    assert_eq!(c.current_hp(), 0);
}

#[test]
fn damage_by_name_is_case_insensitive() {
    let mut c = tester();
    let out = c.take_damage_named("SLASHING", 6).unwrap();
    assert_eq!(out.damage_type, DamageType::Slashing);
    assert_eq!(c.current_hp(), 7);
}

#[test]
fn unknown_damage_type_is_rejected_untouched() {
    let mut c = tester();
    let before = c.clone();
    let err = c.take_damage_named("frost", 5).unwrap_err();
    assert_eq!(err, EngineError::UnrecognizedDamageType("frost".into()));
    assert_eq!(c, before);
}

#[test]
fn negative_amounts_are_rejected_untouched() {
    let mut c = tester();
    c.take_damage(DamageType::Force, 4).unwrap();
    c.add_temp_hp(2).unwrap();
    let before = c.clone();

    assert_eq!(
        c.heal(-1).unwrap_err(),
        EngineError::InvalidAmount { action: Action::Heal, amount: -1 }
    );
    assert_eq!(
        c.add_temp_hp(-3).unwrap_err(),
        EngineError::InvalidAmount { action: Action::TempHp, amount: -3 }
    );
    assert_eq!(
        c.take_damage(DamageType::Acid, -7).unwrap_err(),
        EngineError::InvalidAmount { action: Action::Damage, amount: -7 }
    );
    assert!(c.take_damage_named("acid", -7).is_err());
    assert_eq!(c, before);
}

#[test]
fn read_model_uses_camel_case() {
    let c = tester();
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["maxHp"], 10);
    assert_eq!(v["currentHp"], 10);
    assert_eq!(v["tempHp"], 0);
    assert_eq!(v["abilityModifiers"]["constitution"], 0);
    assert_eq!(v["resistances"]["cold"], "vulnerable");
}
