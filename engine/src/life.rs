use serde::Serialize;

/// Hit point pools. `current` stays in `0..=max` and `temp` never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPoints {
    max_hp: i32,
    temp_hp: i32,
    current_hp: i32,
}

/// How a chunk of damage was split across the pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absorbed {
    pub by_temp: i32,
    pub by_current: i32,
}

impl HitPoints {
    /// Full pools with no temporary HP. Negative maxima clamp to 0.
    pub fn new(max_hp: i32) -> Self {
        let max_hp = max_hp.max(0);
        Self {
            max_hp,
            temp_hp: 0,
            current_hp: max_hp,
        }
    }

    pub fn max(&self) -> i32 {
        self.max_hp
    }

    pub fn temp(&self) -> i32 {
        self.temp_hp
    }

    pub fn current(&self) -> i32 {
        self.current_hp
    }

    pub fn is_down(&self) -> bool {
        self.current_hp == 0
    }

    /// Restore up to `amount`, never past max. Returns HP actually restored.
    pub fn heal(&mut self, amount: u32) -> i32 {
        let before = self.current_hp;
        self.current_hp = self
            .current_hp
            .saturating_add(clamp_i32(amount))
            .min(self.max_hp);
        self.current_hp - before
    }

    /// Temporary HP does not stack: keep whichever pool is larger.
    pub fn add_temp(&mut self, amount: u32) -> i32 {
        self.temp_hp = self.temp_hp.max(clamp_i32(amount));
        self.temp_hp
    }

    /// Take already-scaled damage, temporary HP first.
    pub fn absorb(&mut self, damage: u32) -> Absorbed {
        let damage = clamp_i32(damage);
        if damage == 0 {
            return Absorbed::default();
        }
        if self.temp_hp >= damage {
            self.temp_hp -= damage;
            return Absorbed {
                by_temp: damage,
                by_current: 0,
            };
        }
        let by_temp = self.temp_hp;
        let remainder = damage - by_temp;
        self.temp_hp = 0;
        let before = self.current_hp;
        self.current_hp = (self.current_hp - remainder).max(0);
        Absorbed {
            by_temp,
            by_current: before - self.current_hp,
        }
    }
}

fn clamp_i32(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}
