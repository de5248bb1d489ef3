//! Wrap-around index math and the five-slot visible window.

use super::types::Slot;

/// Move `current` by `delta` positions inside a ring of `len` items.
///
/// Any delta is accepted; it is reduced modulo `len` first. A `len` of zero
/// yields zero instead of dividing by it.
pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len_i = len as isize;
    let current = (current % len) as isize;
    (current + delta.rem_euclid(len_i)).rem_euclid(len_i) as usize
}

/// Signed distance of the shortest path from `from` to `to` around a ring of
/// `len` items. When both directions are equally long (even `len`, opposite
/// side of the ring) the forward path wins.
pub fn shortest_delta(from: usize, to: usize, len: usize) -> isize {
    if len == 0 {
        return 0;
    }
    let len_i = len as isize;
    let forward = (to as isize - from as isize).rem_euclid(len_i);
    let backward = forward - len_i;
    if forward <= -backward { forward } else { backward }
}

/// Indices of the five addressable positions around the centered item.
///
/// Derived from `current_index` and the item count on demand; never stored.
/// With fewer than five items some slots point at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    pub far_left: usize,
    pub left: usize,
    pub center: usize,
    pub right: usize,
    pub far_right: usize,
}

impl VisibleWindow {
    /// Window centered on `current` for a ring of `len` items, or `None`
    /// when there is nothing to show.
    pub fn around(current: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let at = |slot: Slot| wrap_index(current, slot.offset(), len);
        Some(Self {
            far_left: at(Slot::FarLeft),
            left: at(Slot::Left),
            center: at(Slot::Center),
            right: at(Slot::Right),
            far_right: at(Slot::FarRight),
        })
    }

    pub fn index(&self, slot: Slot) -> usize {
        match slot {
            Slot::FarLeft => self.far_left,
            Slot::Left => self.left,
            Slot::Center => self.center,
            Slot::Right => self.right,
            Slot::FarRight => self.far_right,
        }
    }

    /// `(slot, index)` pairs from left to right.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, usize)> + '_ {
        Slot::ALL.into_iter().map(|slot| (slot, self.index(slot)))
    }
}
