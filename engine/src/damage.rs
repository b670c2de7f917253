use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    Bludgeoning,
    Piercing,
    Slashing,
    MagicalBludgeoning,
    MagicalPiercing,
    MagicalSlashing,
    Fire,
    Cold,
    Lightning,
    Thunder,
    Force,
    Acid,
    Poison,
    Radiant,
    Necrotic,
    Psychic,
}

impl DamageType {
    pub const ALL: [DamageType; 16] = [
        DamageType::Bludgeoning,
        DamageType::Piercing,
        DamageType::Slashing,
        DamageType::MagicalBludgeoning,
        DamageType::MagicalPiercing,
        DamageType::MagicalSlashing,
        DamageType::Fire,
        DamageType::Cold,
        DamageType::Lightning,
        DamageType::Thunder,
        DamageType::Force,
        DamageType::Acid,
        DamageType::Poison,
        DamageType::Radiant,
        DamageType::Necrotic,
        DamageType::Psychic,
    ];

    pub fn name(self) -> &'static str {
        use DamageType::*;
        match self {
            Bludgeoning => "bludgeoning",
            Piercing => "piercing",
            Slashing => "slashing",
            MagicalBludgeoning => "magicalbludgeoning",
            MagicalPiercing => "magicalpiercing",
            MagicalSlashing => "magicalslashing",
            Fire => "fire",
            Cold => "cold",
            Lightning => "lightning",
            Thunder => "thunder",
            Force => "force",
            Acid => "acid",
            Poison => "poison",
            Radiant => "radiant",
            Necrotic => "necrotic",
            Psychic => "psychic",
        }
    }

    /// Case-insensitive lookup shared by definition loading and the damage boundary.
    /// `None` means the name is outside the vocabulary.
    pub fn parse(s: &str) -> Option<DamageType> {
        Self::ALL
            .into_iter()
            .find(|dt| dt.name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResistanceKind {
    Resistance,
    Immunity,
    Vulnerable,
}

impl ResistanceKind {
    pub fn parse(s: &str) -> Option<ResistanceKind> {
        match s.to_lowercase().as_str() {
            "resistance" => Some(ResistanceKind::Resistance),
            "immunity" => Some(ResistanceKind::Immunity),
            "vulnerable" => Some(ResistanceKind::Vulnerable),
            _ => None,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ResistanceKind::Immunity => 0.0,
            ResistanceKind::Resistance => 0.5,
            ResistanceKind::Vulnerable => 2.0,
        }
    }
}

/// Scale raw damage by an optional resistance.
///
/// Anything strictly between 0 and 1 rounds up to 1 so a resistance never
/// erases nonzero damage; everything else rounds down.
pub fn effective_damage(amount: i32, resistance: Option<ResistanceKind>) -> i32 {
    let multiplier = resistance.map_or(1.0, ResistanceKind::multiplier);
    let scaled = f64::from(amount) * multiplier;
    if scaled > 0.0 && scaled < 1.0 {
        1
    } else {
        // `as` saturates, so doubling i32::MAX stays in range.
        scaled.floor() as i32
    }
}
