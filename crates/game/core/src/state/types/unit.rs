use super::{Facing, Position, Position3};
use crate::action::Action;
use crate::config::GameConfig;

/// Mutable combatant taking part in a battle.
///
/// Identity is the unit's slot in its [`Roster`](super::Roster); two units
/// with equal fields are still different units. Range limits are fixed at
/// construction, while position, facing, hit points, the acted flag and the
/// pending action change over the encounter.
///
/// # Invariants
///
/// - Hit points only decrease through [`Unit::take_damage`], so every loss of
///   health leaves a matching reaction (`TakeDamage` or `Defeat`) pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    label: String,
    team: String,
    hit_points: i32,
    movement_range: Option<u32>,
    max_height_difference: Option<u32>,
    attack_range: u32,

    pub position: Position3,
    pub facing: Facing,
    /// Whether the unit has used its turn in the current round.
    pub has_acted: bool,
    /// Action chosen for the unit, waiting to be completed.
    pub current_action: Option<Action>,
}

impl Unit {
    /// Creates an unaffiliated melee unit with unlimited movement.
    pub fn new(label: impl Into<String>, position: Position3) -> Self {
        Self {
            label: label.into(),
            team: String::new(),
            hit_points: GameConfig::MAX_HIT_POINTS,
            movement_range: None,
            max_height_difference: None,
            attack_range: GameConfig::DEFAULT_ATTACK_RANGE,
            position,
            facing: Facing::default(),
            has_acted: false,
            current_action: None,
        }
    }

    /// Creates a unit whose stats come from the runtime configuration.
    pub fn with_config(label: impl Into<String>, position: Position3, config: &GameConfig) -> Self {
        Self {
            hit_points: config.max_hit_points,
            movement_range: config.movement_range,
            max_height_difference: config.max_height_difference,
            attack_range: config.attack_range,
            ..Self::new(label, position)
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    pub fn with_movement_range(mut self, range: u32) -> Self {
        self.movement_range = Some(range);
        self
    }

    pub fn with_max_height_difference(mut self, difference: u32) -> Self {
        self.max_height_difference = Some(difference);
        self
    }

    pub fn with_attack_range(mut self, range: u32) -> Self {
        self.attack_range = range;
        self
    }

    pub fn with_hit_points(mut self, hit_points: i32) -> Self {
        self.hit_points = hit_points;
        self
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    /// Sprite identifier, also used as the display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Team name; empty for unaffiliated units.
    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    /// Maximum path cost per move; `None` is unlimited.
    pub fn movement_range(&self) -> Option<u32> {
        self.movement_range
    }

    /// Largest single-step elevation change the unit can climb; `None` is unlimited.
    pub fn max_height_difference(&self) -> Option<u32> {
        self.max_height_difference
    }

    /// Attack reach in path cost; 1 is melee.
    pub fn attack_range(&self) -> u32 {
        self.attack_range
    }

    pub fn is_active(&self) -> bool {
        self.hit_points > 0
    }

    /// Whether the unit stands on the given tile (elevation ignored).
    pub fn occupies(&self, tile: Position) -> bool {
        self.position.xy() == tile
    }

    /// Applies damage and queues the matching reaction.
    pub fn take_damage(&mut self, amount: i32) {
        self.hit_points = self.hit_points.saturating_sub(amount);
        self.current_action = Some(if self.hit_points <= 0 {
            Action::Defeat
        } else {
            Action::TakeDamage
        });
        tracing::debug!(
            unit = %self.label,
            amount,
            hit_points = self.hit_points,
            "unit took damage"
        );
    }

    /// Copy used by presentation layers for non-authoritative "stunt" doubles.
    ///
    /// Carries over everything except the acted flag, which starts cleared.
    pub fn duplicate(&self) -> Self {
        Self {
            has_acted: false,
            ..self.clone()
        }
    }
}
