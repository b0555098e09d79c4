use serde::{Deserialize, Serialize};
use std::ops::{BitOr, Not};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// The kind of geometry a collider belongs to.
///
/// Occlusion and segment lookups are filtered by a [`CategoryMask`]
/// over these categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ground,
    Road,
    Building,
    Vegetation,
    Prop,
}

impl Category {
    #[inline]
    const fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// A set of [`Category`] values, stored as a bitmask.
///
/// ```rust
/// use shadepath::{Category, CategoryMask};
///
/// let occluders = CategoryMask::ALL.without(Category::Ground).without(Category::Road);
/// assert!(occluders.contains(Category::Building));
/// assert!(!occluders.contains(Category::Road));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMask(u32);

impl CategoryMask {
    pub const NONE: CategoryMask = CategoryMask(0);
    pub const ALL: CategoryMask = CategoryMask((1 << Category::COUNT) - 1);

    /// The mask used by segment lookups, containing only roads.
    pub const ROADS: CategoryMask = CategoryMask(Category::Road.bit());

    /// Everything which can cast a shadow onto a road: all
    /// categories other than the ground and the road itself.
    pub const OCCLUDERS: CategoryMask =
        CategoryMask(Self::ALL.0 & !(Category::Ground.bit() | Category::Road.bit()));

    pub fn of(categories: impl IntoIterator<Item = Category>) -> Self {
        categories.into_iter().fold(Self::NONE, |mask, c| mask.with(c))
    }

    #[inline]
    pub const fn with(self, category: Category) -> Self {
        CategoryMask(self.0 | category.bit())
    }

    #[inline]
    pub const fn without(self, category: Category) -> Self {
        CategoryMask(self.0 & !category.bit())
    }

    #[inline]
    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 & Self::ALL.0 == 0
    }

    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::iter().filter(move |c| self.contains(*c))
    }
}

impl Default for CategoryMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Category> for CategoryMask {
    fn from(value: Category) -> Self {
        CategoryMask(value.bit())
    }
}

impl BitOr for CategoryMask {
    type Output = CategoryMask;

    fn bitor(self, rhs: CategoryMask) -> Self::Output {
        CategoryMask(self.0 | rhs.0)
    }
}

impl Not for CategoryMask {
    type Output = CategoryMask;

    fn not(self) -> Self::Output {
        CategoryMask(!self.0 & Self::ALL.0)
    }
}
