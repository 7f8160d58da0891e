//! Role hierarchy.
//!
//! Every role carries a numeric rank and authorization is a single comparison:
//! an actor may act for `required` when `rank(actor) >= rank(required)`.
//! The ranks live only in [`ROLE_HIERARCHY`]: adding a role means adding one variant and
//! its row in the table.

use crate::error::DomainError;
use changelog_derive::api_model;
use std::cmp::Ordering;
use strum::EnumCount;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// An identity tier controlling what a user may do within the product.
///
/// Variants are declared from the highest rank to the lowest, in [`ROLE_HIERARCHY`] order.
#[api_model(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    ProductAdmin,
    Editor,
}

/// Rank table, highest first. Row `i` describes the `i`-th declared variant.
pub const ROLE_HIERARCHY: [(Role, u16); Role::COUNT] =
    [(Role::SuperAdmin, 100), (Role::ProductAdmin, 50), (Role::Editor, 10)];

const _: () = {
    let mut i = 0;
    while i < Role::COUNT {
        assert!(ROLE_HIERARCHY[i].0 as usize == i, "ROLE_HIERARCHY rows must follow declaration order");
        assert!(i == 0 || ROLE_HIERARCHY[i - 1].1 > ROLE_HIERARCHY[i].1, "ROLE_HIERARCHY must be sorted by rank");
        i += 1;
    }
};

impl Role {
    /// All roles ordered from the highest rank to the lowest.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self::SuperAdmin; Self::COUNT];
        let mut i = 0;
        while i < Self::COUNT {
            all[i] = ROLE_HIERARCHY[i].0;
            i += 1;
        }
        all
    };

    /// Numeric rank of the role.
    #[must_use]
    pub const fn rank(self) -> u16 {
        ROLE_HIERARCHY[self as usize].1
    }

    /// Returns `true` when `self` ranks at least as high as `required`.
    #[must_use]
    pub const fn has_permission(self, required: Self) -> bool {
        self.rank() >= required.rank()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Parses an upper-snake role name such as `PRODUCT_ADMIN`.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownRole`] for names outside the hierarchy.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        value
            .parse()
            .map_err(|_| DomainError::UnknownRole { role: value.to_owned().into(), context: None })
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
