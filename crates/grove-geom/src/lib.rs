//! Integer grid coordinates and axis directions shared by the engine crates.
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A cell address in the voxel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    pub const ZERO: Coord = Coord { x: 0, y: 0, z: 0 };
    pub const UP: Coord = Coord { x: 0, y: 1, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn offset(self, dir: Dir) -> Coord {
        self + dir.delta()
    }

    #[inline]
    pub fn above(self) -> Coord {
        self.offset(Dir::Up)
    }

    #[inline]
    pub fn below(self) -> Coord {
        self.offset(Dir::Down)
    }

    /// `self + rhs`, or `None` if any axis leaves the `i32` range.
    #[inline]
    pub fn checked_add(self, rhs: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
            self.z.checked_add(rhs.z)?,
        ))
    }

    #[inline]
    pub fn checked_sub(self, rhs: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.x.checked_sub(rhs.x)?,
            self.y.checked_sub(rhs.y)?,
            self.z.checked_sub(rhs.z)?,
        ))
    }

    /// Neighbour in `dir`, or `None` at the edge of the coordinate space.
    #[inline]
    pub fn checked_offset(self, dir: Dir) -> Option<Coord> {
        self.checked_add(dir.delta())
    }

    /// Chunk key for the given chunk dimensions (floor division, so negative
    /// coordinates land in negative chunks).
    #[inline]
    pub fn chunk_key(self, sx: i32, sy: i32, sz: i32) -> (i32, i32, i32) {
        (
            self.x.div_euclid(sx),
            self.y.div_euclid(sy),
            self.z.div_euclid(sz),
        )
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Coord {
    type Output = Coord;
    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Coord {
    type Output = Coord;
    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Coord {
    #[inline]
    fn sub_assign(&mut self, rhs: Coord) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

/// The six axis directions, in face order (+Y, -Y, +X, -X, +Z, -Z).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Dir {
    Up = 0,
    Down = 1,
    East = 2,
    West = 3,
    South = 4,
    North = 5,
}

impl Dir {
    pub const ALL: [Dir; 6] = [
        Dir::Up,
        Dir::Down,
        Dir::East,
        Dir::West,
        Dir::South,
        Dir::North,
    ];
    pub const HORIZONTAL: [Dir; 4] = [Dir::East, Dir::West, Dir::South, Dir::North];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Dir::Up => Coord::new(0, 1, 0),
            Dir::Down => Coord::new(0, -1, 0),
            Dir::East => Coord::new(1, 0, 0),
            Dir::West => Coord::new(-1, 0, 0),
            Dir::South => Coord::new(0, 0, 1),
            Dir::North => Coord::new(0, 0, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::East => Dir::West,
            Dir::West => Dir::East,
            Dir::South => Dir::North,
            Dir::North => Dir::South,
        }
    }
}
