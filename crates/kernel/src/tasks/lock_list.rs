// Copyright (C) 2026 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use std::sync::Arc;

use hearth_common::{Location, LockId};

/// The locations a command has found it needs to lock, in acquisition order.
///
/// Within one command the list only grows: there is no way to take a location back out. Each
/// addition bumps `generation`, so comparing generations before and after a round says whether
/// that round asked for anything new.
#[derive(Debug)]
pub struct LockList {
    locations: Vec<Arc<Location>>,
    generation: u64,
}

impl LockList {
    pub fn new(anchor: Arc<Location>) -> Self {
        Self {
            locations: vec![anchor],
            generation: 0,
        }
    }

    /// Add a location, keeping the list sorted by lock id. Returns false if it was already there.
    pub fn add(&mut self, location: &Arc<Location>) -> bool {
        let lock_id = location.lock_id();
        match self
            .locations
            .binary_search_by_key(&lock_id, |l| l.lock_id())
        {
            Ok(_) => false,
            Err(position) => {
                self.locations.insert(position, location.clone());
                self.generation += 1;
                debug_assert!(
                    self.locations
                        .windows(2)
                        .all(|pair| pair[0].lock_id() < pair[1].lock_id())
                );
                true
            }
        }
    }

    pub fn contains(&self, lock_id: LockId) -> bool {
        self.locations
            .binary_search_by_key(&lock_id, |l| l.lock_id())
            .is_ok()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// A copy of the list to acquire from, leaving the list itself free to grow while the locks
    /// are held.
    pub fn snapshot(&self) -> Vec<Arc<Location>> {
        self.locations.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hearth_common::{Location, LocationId};

    use crate::tasks::lock_list::LockList;

    #[test]
    fn test_sorted_and_deduplicated() {
        let first = Arc::new(Location::new(LocationId(1), "First", ""));
        let second = Arc::new(Location::new(LocationId(2), "Second", ""));
        let third = Arc::new(Location::new(LocationId(3), "Third", ""));

        let mut locks = LockList::new(third.clone());
        assert!(locks.add(&first));
        assert!(!locks.add(&third));
        assert!(locks.add(&second));
        assert!(!locks.add(&first));

        let order: Vec<_> = locks.snapshot().iter().map(|l| l.id()).collect();
        assert_eq!(order, vec![LocationId(1), LocationId(2), LocationId(3)]);
        assert!(locks.contains(second.lock_id()));
        assert_eq!(locks.len(), 3);
    }

    #[test]
    fn test_generation_only_moves_on_growth() {
        let here = Arc::new(Location::new(LocationId(1), "Here", ""));
        let there = Arc::new(Location::new(LocationId(2), "There", ""));
        let mut locks = LockList::new(here.clone());
        assert_eq!(locks.generation(), 0);
        locks.add(&here);
        assert_eq!(locks.generation(), 0);
        locks.add(&there);
        assert_eq!(locks.generation(), 1);
    }
}
