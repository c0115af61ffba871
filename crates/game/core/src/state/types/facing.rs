use super::Position;

/// Cardinal orientation of a unit on the isometric board.
///
/// The four facings sit on the diagonals of the screen (45°, 135°, 225°,
/// 315°), which correspond to the +x, +y, -x and -y grid axes respectively.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Facing {
    #[default]
    #[strum(serialize = "degrees_45")]
    Degrees45,
    #[strum(serialize = "degrees_135")]
    Degrees135,
    #[strum(serialize = "degrees_225")]
    Degrees225,
    #[strum(serialize = "degrees_315")]
    Degrees315,
}

impl Facing {
    /// All facings in counter-clockwise order starting at the default.
    pub const ALL: [Facing; 4] = [
        Facing::Degrees45,
        Facing::Degrees135,
        Facing::Degrees225,
        Facing::Degrees315,
    ];

    pub const fn degrees(self) -> u16 {
        match self {
            Facing::Degrees45 => 45,
            Facing::Degrees135 => 135,
            Facing::Degrees225 => 225,
            Facing::Degrees315 => 315,
        }
    }

    /// Unit grid vector this facing looks along.
    pub const fn direction(self) -> Position {
        match self {
            Facing::Degrees45 => Position::new(1, 0),
            Facing::Degrees135 => Position::new(0, 1),
            Facing::Degrees225 => Position::new(-1, 0),
            Facing::Degrees315 => Position::new(0, -1),
        }
    }

    const fn index(self) -> usize {
        match self {
            Facing::Degrees45 => 0,
            Facing::Degrees135 => 1,
            Facing::Degrees225 => 2,
            Facing::Degrees315 => 3,
        }
    }

    const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    pub const fn rotated_clockwise(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub const fn rotated_counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn opposite(self) -> Self {
        self.rotated_clockwise().rotated_clockwise()
    }

    /// Re-expresses a facing given relative to [`Facing::Degrees45`] in the
    /// frame of `reference` (e.g. a rotated camera).
    pub const fn with_reference(self, reference: Facing) -> Self {
        Self::from_index(self.index() + reference.index())
    }

    /// Nearest facing for an arbitrary grid vector.
    ///
    /// Picks the facing whose direction has the largest dot product with
    /// `direction`; ties resolve to the earlier entry of [`Facing::ALL`].
    /// Returns `None` for the zero vector, which has no direction.
    pub fn from_direction(direction: Position) -> Option<Self> {
        if direction.is_zero() {
            return None;
        }

        let mut best = Facing::Degrees45;
        let mut best_score = best.direction().dot(direction);
        for facing in &Self::ALL[1..] {
            let score = facing.direction().dot(direction);
            if score > best_score {
                best = *facing;
                best_score = score;
            }
        }
        Some(best)
    }
}
