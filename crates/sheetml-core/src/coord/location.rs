//! Locations: an address or an area

use std::fmt;

use super::{Address, Area};
use crate::error::{Error, Result};

/// Either a single cell or a rectangle
///
/// Two locations are equal only when they are of the same kind and cover the
/// same coordinates; `Address(2, 3)` never equals the one-cell `Area(2, 3, 2, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    /// A single cell
    Address(Address),
    /// A rectangle of cells
    Area(Area),
}

/// The concrete kind of a [`Location`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Address,
    Area,
}

impl LocationKind {
    /// Lower-case name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            LocationKind::Address => "address",
            LocationKind::Area => "area",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Location {
    /// The kind of this location
    pub fn kind(&self) -> LocationKind {
        match self {
            Location::Address(_) => LocationKind::Address,
            Location::Area(_) => LocationKind::Area,
        }
    }

    /// Absolute R1C1 reference
    pub fn absolute_ref(&self) -> String {
        match self {
            Location::Address(addr) => addr.absolute_ref(),
            Location::Area(area) => area.absolute_ref(),
        }
    }

    /// Reference written relative to `origin`
    pub fn relative_ref(&self, origin: &Address) -> String {
        match self {
            Location::Address(addr) => origin.relative_to(addr.row, addr.column),
            Location::Area(area) => area.relative_ref(origin),
        }
    }

    /// Sort `members` row-major, render each one and join them with commas.
    ///
    /// Fails with [`Error::KindMismatch`] on the first member that is not of
    /// the `expected` kind.
    pub(crate) fn join_refs<F>(
        expected: LocationKind,
        members: &[Location],
        render: F,
    ) -> Result<String>
    where
        F: Fn(&Location) -> String,
    {
        let mut sorted = Vec::with_capacity(members.len());
        for member in members {
            if member.kind() != expected {
                return Err(Error::KindMismatch {
                    expected: expected.name(),
                    found: member.kind().name(),
                });
            }
            sorted.push(*member);
        }
        sorted.sort();

        Ok(sorted.iter().map(render).collect::<Vec<_>>().join(","))
    }
}

impl From<Address> for Location {
    fn from(addr: Address) -> Self {
        Location::Address(addr)
    }
}

impl From<Area> for Location {
    fn from(area: Area) -> Self {
        Location::Area(area)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.absolute_ref())
    }
}
