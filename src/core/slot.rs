//! Slot identification and per-slot data storage.
//!
//! ## Slot
//!
//! One of exactly three fixed logical positions a shell can occupy.
//! Ordering is significant: `Left < Center < Right` matches the
//! left-to-right x-ordering of the rest layout, and swap kinematics use
//! it to tell the left member of a moving pair from the right one.
//!
//! ## SlotMap
//!
//! Per-slot data storage backed by a fixed `[T; 3]` array for O(1)
//! access without map overhead. The slot set is closed, so there is no
//! missing-key case.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the three fixed shell positions.
///
/// The discriminants are the left-to-right slot ordinals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Slot {
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Slot {
    /// All slots in left-to-right order.
    pub const ALL: [Slot; 3] = [Slot::Left, Slot::Center, Slot::Right];

    /// Get the slot's 0-based ordinal (array index).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Build a slot from its ordinal.
    ///
    /// Returns `None` for ordinals outside `0..3`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Slot::Left),
            1 => Some(Slot::Center),
            2 => Some(Slot::Right),
            _ => None,
        }
    }

    /// Iterate over all slots in left-to-right order.
    pub fn all() -> impl Iterator<Item = Slot> {
        Self::ALL.into_iter()
    }

    /// The two slots other than this one, in left-to-right order.
    ///
    /// Used to pick the moving pair once a swap's held-out slot is
    /// chosen: the pair is always `others().0` (left member) and
    /// `others().1` (right member).
    #[must_use]
    pub const fn others(self) -> (Slot, Slot) {
        match self {
            Slot::Left => (Slot::Center, Slot::Right),
            Slot::Center => (Slot::Left, Slot::Right),
            Slot::Right => (Slot::Left, Slot::Center),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Slot::Left => "Left",
            Slot::Center => "Center",
            Slot::Right => "Right",
        };
        write!(f, "{}", name)
    }
}

/// Per-slot data storage with O(1) access.
///
/// Backed by a `[T; 3]` with one entry per slot, indexed by `Slot`.
///
/// ## Example
///
/// ```
/// use shell_game::core::{Slot, SlotMap};
///
/// let mut heights: SlotMap<i32> = SlotMap::with_value(0);
/// heights[Slot::Center] = 40;
///
/// assert_eq!(heights[Slot::Left], 0);
/// assert_eq!(heights[Slot::Center], 40);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotMap<T> {
    data: [T; 3],
}

impl<T> SlotMap<T> {
    /// Create a new SlotMap with values from a factory function.
    ///
    /// The factory receives the `Slot` for each entry.
    pub fn new(factory: impl Fn(Slot) -> T) -> Self {
        Self {
            data: [
                factory(Slot::Left),
                factory(Slot::Center),
                factory(Slot::Right),
            ],
        }
    }

    /// Create a new SlotMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a slot's data.
    #[must_use]
    pub fn get(&self, slot: Slot) -> &T {
        &self.data[slot.index()]
    }

    /// Get a mutable reference to a slot's data.
    pub fn get_mut(&mut self, slot: Slot) -> &mut T {
        &mut self.data[slot.index()]
    }

    /// Iterate over (Slot, &T) pairs in left-to-right order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        Slot::ALL.iter().copied().zip(self.data.iter())
    }

    /// Map each entry to a new value, preserving slot association.
    pub fn map<U>(&self, f: impl Fn(Slot, &T) -> U) -> SlotMap<U> {
        SlotMap::new(|slot| f(slot, self.get(slot)))
    }
}

impl<T: Default> Default for SlotMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Slot> for SlotMap<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &Self::Output {
        self.get(slot)
    }
}

impl<T> IndexMut<Slot> for SlotMap<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut Self::Output {
        self.get_mut(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_ordering() {
        assert!(Slot::Left < Slot::Center);
        assert!(Slot::Center < Slot::Right);

        assert_eq!(Slot::Left.index(), 0);
        assert_eq!(Slot::Center.index(), 1);
        assert_eq!(Slot::Right.index(), 2);
    }

    #[test]
    fn test_slot_from_index() {
        for slot in Slot::all() {
            assert_eq!(Slot::from_index(slot.index()), Some(slot));
        }
        assert_eq!(Slot::from_index(3), None);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(format!("{}", Slot::Left), "Left");
        assert_eq!(format!("{}", Slot::Center), "Center");
        assert_eq!(format!("{}", Slot::Right), "Right");
    }

    #[test]
    fn test_slot_others() {
        // The pair is always returned left member first.
        assert_eq!(Slot::Left.others(), (Slot::Center, Slot::Right));
        assert_eq!(Slot::Center.others(), (Slot::Left, Slot::Right));
        assert_eq!(Slot::Right.others(), (Slot::Left, Slot::Center));

        for slot in Slot::all() {
            let (a, b) = slot.others();
            assert_ne!(a, slot);
            assert_ne!(b, slot);
            assert!(a < b);
        }
    }

    #[test]
    fn test_slot_map_new() {
        let map: SlotMap<usize> = SlotMap::new(|s| s.index() * 10);

        assert_eq!(map[Slot::Left], 0);
        assert_eq!(map[Slot::Center], 10);
        assert_eq!(map[Slot::Right], 20);
    }

    #[test]
    fn test_slot_map_mutation() {
        let mut map: SlotMap<i32> = SlotMap::with_value(0);

        map[Slot::Center] = 5;
        assert_eq!(map[Slot::Left], 0);
        assert_eq!(map[Slot::Center], 5);
    }

    #[test]
    fn test_slot_map_iter_order() {
        let map: SlotMap<usize> = SlotMap::new(|s| s.index());
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (Slot::Left, &0));
        assert_eq!(pairs[1], (Slot::Center, &1));
        assert_eq!(pairs[2], (Slot::Right, &2));
    }

    #[test]
    fn test_slot_map_map() {
        let map: SlotMap<i32> = SlotMap::new(|s| s.index() as i32);
        let doubled = map.map(|_, v| v * 2);

        assert_eq!(doubled[Slot::Right], 4);
    }

    #[test]
    fn test_slot_map_serialization() {
        let map: SlotMap<i32> = SlotMap::new(|s| s.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SlotMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
