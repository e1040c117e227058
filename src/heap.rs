//! Indexed binary min-heap with O(log n) `decrease_key`
//!
//! The heap stores `(vertex, distance)` entries in a dense array and keeps a
//! position table mapping every vertex handle to the slot its entry currently
//! occupies. The table is what makes `decrease_key` and `contains` cheap:
//! the entry for any vertex is found in O(1) and then sifted up in O(log n).
//!
//! Every slot move goes through `swap_slots`, which updates
//! the array and both position-table entries together.
//!
//! Extraction is lazy: the minimum is swapped to the end of the live region
//! and the logical size shrinks, leaving the entry parked past `len()`. A
//! vertex is contained exactly when its position is below the logical size.
//!
//! # Ordering
//!
//! Entries are ordered by `(distance, vertex)`, so among equal distances the
//! lowest handle is extracted first. The order is total, which makes the
//! extraction sequence a function of the heap's contents alone.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `from_entries` | O(n)       |
//! | `extract_min`  | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `contains`     | O(1)       |
//! | `peek`         | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_dijkstra::heap::{IndexedMinHeap, INFINITY};
//!
//! let mut heap = IndexedMinHeap::from_distances(&[INFINITY, 0, INFINITY]);
//! heap.decrease_key(2, 7).unwrap();
//!
//! assert_eq!(heap.extract_min(), Ok((1, 0)));
//! assert_eq!(heap.extract_min(), Ok((2, 7)));
//! assert!(!heap.contains(2));
//! assert!(heap.contains(0));
//! ```

use crate::error::{GraphError, Result, VertexKey};
use crate::graph::VertexId;

/// Shortest-path distance. Sums of [`Weight`](crate::graph::Weight)s fit comfortably.
pub type Distance = u64;

/// Sentinel for "no path found yet".
pub const INFINITY: Distance = Distance::MAX;

/// Position-table marker for handles that were never inserted.
const ABSENT: usize = usize::MAX;

/// A vertex and its current tentative distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    vertex: VertexId,
    distance: Distance,
}

impl HeapEntry {
    #[inline]
    fn key(&self) -> (Distance, VertexId) {
        (self.distance, self.vertex)
    }
}

/// Binary min-heap over vertex handles with a position table
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    /// Slots `0..size` form the heap; slots `size..` hold extracted entries
    entries: Vec<HeapEntry>,
    /// Vertex handle → slot in `entries`, or `ABSENT`
    positions: Vec<usize>,
    /// Number of entries still awaiting extraction
    size: usize,
}

impl IndexedMinHeap {
    /// Builds a heap containing each `(vertex, distance)` pair, for handles
    /// in `[0, vertex_count)`.
    ///
    /// The position table is sized to `vertex_count`; handles left out of
    /// `entries` are simply never contained.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if a handle is not below `vertex_count`
    /// - [`GraphError::DuplicateVertex`] if a handle appears twice
    pub fn from_entries<I>(vertex_count: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, Distance)>,
    {
        let entries: Vec<HeapEntry> = entries
            .into_iter()
            .map(|(vertex, distance)| HeapEntry { vertex, distance })
            .collect();

        let mut positions = vec![ABSENT; vertex_count];
        for (slot, entry) in entries.iter().enumerate() {
            if entry.vertex >= vertex_count {
                return Err(GraphError::InvalidVertex {
                    vertex: entry.vertex,
                    vertex_count,
                });
            }
            if positions[entry.vertex] != ABSENT {
                return Err(GraphError::DuplicateVertex(entry.vertex));
            }
            positions[entry.vertex] = slot;
        }

        let mut heap = IndexedMinHeap {
            size: entries.len(),
            entries,
            positions,
        };
        heap.heapify();
        Ok(heap)
    }

    /// Builds a heap over handles `0..distances.len()`, keyed by `distances[v]`.
    pub fn from_distances(distances: &[Distance]) -> Self {
        let mut heap = IndexedMinHeap {
            entries: distances
                .iter()
                .enumerate()
                .map(|(vertex, &distance)| HeapEntry { vertex, distance })
                .collect(),
            positions: (0..distances.len()).collect(),
            size: distances.len(),
        };
        heap.heapify();
        heap
    }

    /// Returns true if no entries await extraction
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of entries awaiting extraction
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if `vertex` was inserted and has not been extracted yet.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.positions
            .get(vertex)
            .is_some_and(|&slot| slot < self.size)
    }

    /// Returns the current key of a contained vertex.
    pub fn distance_of(&self, vertex: VertexId) -> Option<Distance> {
        if self.contains(vertex) {
            Some(self.entries[self.positions[vertex]].distance)
        } else {
            None
        }
    }

    /// Returns the minimum entry without removing it.
    pub fn peek(&self) -> Option<(VertexId, Distance)> {
        if self.is_empty() {
            None
        } else {
            let root = self.entries[0];
            Some((root.vertex, root.distance))
        }
    }

    /// Removes and returns the entry with the smallest distance.
    ///
    /// Ties go to the lowest vertex handle.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyHeap`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<(VertexId, Distance)> {
        if self.is_empty() {
            return Err(GraphError::EmptyHeap);
        }

        let min = self.entries[0];
        self.size -= 1;
        self.swap_slots(0, self.size);
        if self.size > 0 {
            self.sift_down(0);
        }

        Ok((min.vertex, min.distance))
    }

    /// Lowers the key of a contained vertex to `new_distance`.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if `vertex` is not contained
    /// - [`GraphError::InvalidDecrease`] if `new_distance` is not strictly
    ///   less than the current key
    pub fn decrease_key(&mut self, vertex: VertexId, new_distance: Distance) -> Result<()> {
        if !self.contains(vertex) {
            return Err(GraphError::UnknownVertex(VertexKey::Handle(vertex)));
        }

        let slot = self.positions[vertex];
        let current = self.entries[slot].distance;
        if new_distance >= current {
            return Err(GraphError::InvalidDecrease {
                vertex,
                current,
                requested: new_distance,
            });
        }

        self.entries[slot].distance = new_distance;
        self.sift_up(slot);
        Ok(())
    }

    /// Checks the structural invariants of the heap.
    ///
    /// Verifies that the position table and entry array agree for every
    /// inserted vertex (live or parked) and that heap order holds over the
    /// live region.
    pub fn verify_invariants(&self) -> bool {
        if self.size > self.entries.len() {
            return false;
        }

        for (slot, entry) in self.entries.iter().enumerate() {
            if self.positions.get(entry.vertex) != Some(&slot) {
                return false;
            }
        }

        let placed = self.positions.iter().filter(|&&slot| slot != ABSENT).count();
        if placed != self.entries.len() {
            return false;
        }

        (1..self.size).all(|child| {
            let parent = (child - 1) / 2;
            self.entries[parent].key() <= self.entries[child].key()
        })
    }

    /// Establishes heap order over the live region bottom-up
    fn heapify(&mut self) {
        for slot in (0..self.size / 2).rev() {
            self.sift_down(slot);
        }
    }

    /// Move the entry at `slot` up until its parent is smaller
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].key() < self.entries[parent].key() {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Move the entry at `slot` down until both children are larger
    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < self.size && self.entries[left].key() < self.entries[smallest].key() {
                smallest = left;
            }
            if right < self.size && self.entries[right].key() < self.entries[smallest].key() {
                smallest = right;
            }

            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    /// Swap two slots and record both entries' new positions
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].vertex] = a;
        self.positions[self.entries[b].vertex] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(heap: &mut IndexedMinHeap) -> Vec<(VertexId, Distance)> {
        let mut out = Vec::new();
        while !heap.is_empty() {
            out.push(heap.extract_min().unwrap());
            assert!(heap.verify_invariants());
        }
        out
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = IndexedMinHeap::from_distances(&[5, 3, 8, 1]);
        assert_eq!(heap.len(), 4);
        assert!(heap.verify_invariants());
        assert_eq!(heap.peek(), Some((3, 1)));

        assert_eq!(drain(&mut heap), vec![(3, 1), (1, 3), (0, 5), (2, 8)]);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn test_extract_from_empty_fails() {
        let mut heap = IndexedMinHeap::from_distances(&[]);
        assert_eq!(heap.extract_min(), Err(GraphError::EmptyHeap));

        let mut heap = IndexedMinHeap::from_distances(&[4]);
        assert_eq!(heap.extract_min(), Ok((0, 4)));
        assert_eq!(heap.extract_min(), Err(GraphError::EmptyHeap));
    }

    #[test]
    fn test_ties_go_to_lowest_handle() {
        let mut heap = IndexedMinHeap::from_distances(&[2, 1, 2, 1, 2]);
        assert_eq!(
            drain(&mut heap),
            vec![(1, 1), (3, 1), (0, 2), (2, 2), (4, 2)]
        );

        let mut heap = IndexedMinHeap::from_distances(&[INFINITY; 4]);
        let order: Vec<_> = drain(&mut heap).into_iter().map(|(v, _)| v).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_decrease_key_moves_to_front() {
        let mut heap = IndexedMinHeap::from_distances(&[10, 20, 30, 40, 50]);
        heap.decrease_key(4, 5).unwrap();
        assert!(heap.verify_invariants());
        assert_eq!(heap.peek(), Some((4, 5)));
        assert_eq!(heap.distance_of(4), Some(5));

        heap.decrease_key(2, 15).unwrap();
        assert_eq!(
            drain(&mut heap),
            vec![(4, 5), (0, 10), (2, 15), (1, 20), (3, 40)]
        );
    }

    #[test]
    fn test_decrease_key_rejects_non_decrease() {
        let mut heap = IndexedMinHeap::from_distances(&[10, 20]);
        assert_eq!(
            heap.decrease_key(1, 20),
            Err(GraphError::InvalidDecrease {
                vertex: 1,
                current: 20,
                requested: 20
            })
        );
        assert_eq!(
            heap.decrease_key(1, 25),
            Err(GraphError::InvalidDecrease {
                vertex: 1,
                current: 20,
                requested: 25
            })
        );
        assert_eq!(heap.distance_of(1), Some(20));
    }

    #[test]
    fn test_decrease_key_requires_membership() {
        let mut heap = IndexedMinHeap::from_distances(&[1, 2]);
        assert_eq!(heap.extract_min(), Ok((0, 1)));

        assert_eq!(
            heap.decrease_key(0, 0),
            Err(GraphError::UnknownVertex(VertexKey::Handle(0)))
        );
        assert_eq!(
            heap.decrease_key(7, 0),
            Err(GraphError::UnknownVertex(VertexKey::Handle(7)))
        );
    }

    #[test]
    fn test_contains_tracks_extraction() {
        let mut heap = IndexedMinHeap::from_distances(&[3, 1, 2]);
        assert!((0..3).all(|v| heap.contains(v)));
        assert!(!heap.contains(3));

        assert_eq!(heap.extract_min(), Ok((1, 1)));
        assert!(!heap.contains(1));
        assert!(heap.contains(0));
        assert!(heap.contains(2));
        assert_eq!(heap.distance_of(1), None);
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_from_entries_sparse_handles() {
        let mut heap = IndexedMinHeap::from_entries(8, [(7, 3), (2, 9), (4, 1)]).unwrap();
        assert!(heap.verify_invariants());
        assert!(heap.contains(7));
        assert!(!heap.contains(3));
        assert!(!heap.contains(100));

        heap.decrease_key(2, 0).unwrap();
        assert_eq!(drain(&mut heap), vec![(2, 0), (4, 1), (7, 3)]);
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        assert_eq!(
            IndexedMinHeap::from_entries(2, [(0, 1), (1, 2), (0, 3)]).unwrap_err(),
            GraphError::DuplicateVertex(0)
        );
    }

    #[test]
    fn test_from_entries_rejects_out_of_range_handles() {
        assert_eq!(
            IndexedMinHeap::from_entries(4, [(0, 1), (4, 2)]).unwrap_err(),
            GraphError::InvalidVertex {
                vertex: 4,
                vertex_count: 4
            }
        );
        assert_eq!(
            IndexedMinHeap::from_entries(4, [(usize::MAX, 1)]).unwrap_err(),
            GraphError::InvalidVertex {
                vertex: usize::MAX,
                vertex_count: 4
            }
        );
        assert_eq!(
            IndexedMinHeap::from_entries(16, [(1 << 40, 1)]).unwrap_err(),
            GraphError::InvalidVertex {
                vertex: 1 << 40,
                vertex_count: 16
            }
        );

        let empty = IndexedMinHeap::from_entries(0, []).unwrap();
        assert!(empty.is_empty());
        assert!(empty.verify_invariants());
    }

    #[test]
    fn test_decrease_from_infinity() {
        let mut heap = IndexedMinHeap::from_distances(&[INFINITY, INFINITY, 0]);
        heap.decrease_key(0, INFINITY - 1).unwrap();
        heap.decrease_key(1, 4).unwrap();
        assert_eq!(drain(&mut heap), vec![(2, 0), (1, 4), (0, INFINITY - 1)]);
    }

    #[test]
    fn test_interleaved_operations_keep_invariants() {
        let distances: Vec<Distance> = (0..64).map(|i| 1000 + (i * 37 % 64)).collect();
        let mut heap = IndexedMinHeap::from_distances(&distances);

        let mut last = 0;
        for round in 0..32u64 {
            let target = ((round * 13) % 64) as VertexId;
            if heap.contains(target) {
                let current = heap.distance_of(target).unwrap();
                let lowered = current.saturating_sub(500 + round).max(last);
                if lowered < current {
                    heap.decrease_key(target, lowered).unwrap();
                }
            }
            assert!(heap.verify_invariants());

            let (_, distance) = heap.extract_min().unwrap();
            assert!(distance >= last);
            last = distance;
            assert!(heap.verify_invariants());
        }
        assert_eq!(heap.len(), 32);
    }
}
