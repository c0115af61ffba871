use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Handle to a unit tracked by a [`Roster`](super::Roster).
///
/// Units are never removed from a roster during an encounter (defeated units
/// stay in place and are merely inactive), so a handle remains valid for the
/// whole battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl UnitId {
    /// Index of the unit inside its roster.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four axis-aligned neighbours, in +x, -x, +y, -y order.
    ///
    /// No map membership filtering happens here. Coordinates wrap at the
    /// `i32` limits, which never lands on a map tile.
    pub const fn neighbors(self) -> [Position; 4] {
        [
            Position::new(self.x.wrapping_add(1), self.y),
            Position::new(self.x.wrapping_sub(1), self.y),
            Position::new(self.x, self.y.wrapping_add(1)),
            Position::new(self.x, self.y.wrapping_sub(1)),
        ]
    }

    pub const fn dot(self, other: Position) -> i32 {
        self.x * other.x + self.y * other.y
    }

    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Position {
    type Output = Position;
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<Position> for i32 {
    type Output = Position;
    fn mul(self, rhs: Position) -> Position {
        Position::new(self * rhs.x, self * rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Tile coordinate lifted to 3D, where `z` is the tile elevation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position3 {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Ground-level coordinate (`z = 0`).
    pub const fn flat(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    /// Drops the elevation.
    pub const fn xy(self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl Add for Position3 {
    type Output = Position3;
    fn add(self, rhs: Position3) -> Position3 {
        Position3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position3 {
    type Output = Position3;
    fn sub(self, rhs: Position3) -> Position3 {
        Position3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Position3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
