/// Rule constants and spawn defaults for an encounter.
///
/// The associated constants are fixed rules. The fields are runtime-tunable
/// defaults applied when units are spawned from content data
/// (see [`Unit::with_config`](crate::Unit::with_config)).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Hit points a freshly spawned unit starts with.
    pub max_hit_points: i32,
    /// Attack reach in path cost (1 = melee).
    pub attack_range: u32,
    /// Maximum path cost per move; `None` is unlimited.
    pub movement_range: Option<u32>,
    /// Largest climbable single-step elevation change; `None` is unlimited.
    pub max_height_difference: Option<u32>,
}

impl GameConfig {
    // ===== fixed rules =====
    pub const MAX_HIT_POINTS: i32 = 10;
    /// Damage dealt by every attack.
    pub const ATTACK_DAMAGE: i32 = 3;
    pub const DEFAULT_ATTACK_RANGE: u32 = 1;

    pub fn new() -> Self {
        Self {
            max_hit_points: Self::MAX_HIT_POINTS,
            attack_range: Self::DEFAULT_ATTACK_RANGE,
            movement_range: None,
            max_height_difference: None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
