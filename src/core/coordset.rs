// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::Coordinate;
use std::fmt;
use std::iter::FromIterator;
use std::ops;

/// A set of on-board coordinates. The implementation of CoordSet is designed to mirror
/// [`std::collections::HashSet`], but stores each of the 64 squares as a single bit. Two sets compare equal when they
/// contain the same coordinates, regardless of the order in which they were inserted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CoordSet(u64);

impl CoordSet {
    /// Creates a new, empty CoordSet.
    pub const fn empty() -> CoordSet {
        CoordSet(0)
    }

    /// Tests whether or not the given coordinate is contained within this CoordSet. Off-board coordinates are never
    /// contained.
    pub const fn contains(&self, coord: Coordinate) -> bool {
        coord.is_inside() && self.0 & (1u64 << coord.index()) != 0
    }

    /// Inserts a coordinate into the set. Off-board coordinates are ignored.
    pub fn insert(&mut self, coord: Coordinate) {
        if coord.is_inside() {
            self.0 |= 1u64 << coord.index();
        }
    }

    pub fn remove(&mut self, coord: Coordinate) {
        if coord.is_inside() {
            self.0 &= !(1u64 << coord.index());
        }
    }

    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn or(self, other: CoordSet) -> CoordSet {
        CoordSet(self.0 | other.0)
    }

    pub const fn and(self, other: CoordSet) -> CoordSet {
        CoordSet(self.0 & other.0)
    }

    pub fn iter(&self) -> CoordSetIterator {
        CoordSetIterator(self.0)
    }
}

impl ops::BitOr for CoordSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl ops::BitOrAssign for CoordSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAnd for CoordSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl IntoIterator for CoordSet {
    type Item = Coordinate;
    type IntoIter = CoordSetIterator;

    fn into_iter(self) -> Self::IntoIter {
        CoordSetIterator(self.0)
    }
}

impl FromIterator<Coordinate> for CoordSet {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        let mut set = CoordSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Coordinate> for CoordSet {
    fn extend<T: IntoIterator<Item = Coordinate>>(&mut self, iter: T) {
        for coord in iter {
            self.insert(coord);
        }
    }
}

impl fmt::Display for CoordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8).rev() {
            for x in 0..8 {
                if self.contains(Coordinate::new(x, y)) {
                    write!(f, " 1 ")?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", y + 1)?;
        }

        writeln!(f, "{}", "---".repeat(8))?;
        for x in 0..8u8 {
            write!(f, " {} ", (b'a' + x) as char)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

/// An iterator over coordinates stored in a [`CoordSet`], in rank-major order starting at a1.
pub struct CoordSetIterator(u64);

impl Iterator for CoordSetIterator {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let next = self.0.trailing_zeros();
            self.0 &= self.0 - 1;
            Some(Coordinate::from_index(next))
        }
    }
}
