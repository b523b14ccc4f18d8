use crate::error::HeapError;
use tracing::{debug, trace};

/// Max-heap where every node has up to `d` children.
///
/// The branching factor is fixed at construction and must be at least 2.
/// Any factor is accepted, not only powers of two.
#[derive(Debug, Clone)]
pub struct DWayHeap<T: Ord> {
    d: usize,
    data: Vec<T>,
}

impl<T: Ord> DWayHeap<T> {
    /// Creates an empty heap, or fails with [`HeapError::InvalidBranchingFactor`]
    /// when `branching_factor` is below 2.
    pub fn new(branching_factor: usize) -> Result<Self, HeapError> {
        Self::with_capacity(branching_factor, 0)
    }

    /// Like [`DWayHeap::new`], pre-allocating room for `cap` elements.
    ///
    /// `cap` is a hint: if the allocation cannot be made the heap starts
    /// with no reserved storage and grows on demand.
    pub fn with_capacity(branching_factor: usize, cap: usize) -> Result<Self, HeapError> {
        if branching_factor < 2 {
            debug!(branching_factor, "rejected heap construction");
            return Err(HeapError::InvalidBranchingFactor(branching_factor));
        }
        let mut data = Vec::new();
        if let Err(err) = data.try_reserve(cap) {
            debug!(cap, %err, "capacity hint not reserved");
        }
        debug!(branching_factor, cap, "heap constructed");
        Ok(DWayHeap {
            d: branching_factor,
            data,
        })
    }

    fn parent(&self, i: usize) -> usize {
        (i - 1) / self.d
    }

    fn bubble_up(&mut self, mut i: usize) {
        while i > 0 {
            let pi = self.parent(i);
            if self.data[i] <= self.data[pi] {
                break;
            }
            self.data.swap(i, pi);
            i = pi;
        }
    }

    // Index of the largest child of `i`, leftmost on ties. 0 means `i` is a leaf.
    fn highest_priority_child(&self, i: usize) -> usize {
        let first = self.d.saturating_mul(i).saturating_add(1);
        let end = first.saturating_add(self.d).min(self.data.len());
        let mut ret = 0;
        for ci in first..end {
            if ret == 0 || self.data[ci] > self.data[ret] {
                ret = ci;
            }
        }
        ret
    }

    fn bubble_down(&mut self, mut i: usize) {
        let mut ci = self.highest_priority_child(i);
        while ci > 0 {
            if self.data[ci] <= self.data[i] {
                break;
            }
            self.data.swap(i, ci);
            i = ci;
            ci = self.highest_priority_child(i);
        }
    }

    pub fn insert(&mut self, val: T) {
        self.data.push(val);
        self.bubble_up(self.data.len() - 1)
    }

    /// Removes and returns the largest element.
    ///
    /// Returns [`HeapError::Empty`] without touching the heap when there is
    /// nothing to pop.
    pub fn pop_max(&mut self) -> Result<T, HeapError> {
        if self.data.len() <= 1 {
            return self.data.pop().ok_or_else(|| {
                trace!("pop_max on empty heap");
                HeapError::Empty
            });
        }
        let ret = self.data.swap_remove(0);
        self.bubble_down(0);
        Ok(ret)
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn branching_factor(&self) -> usize {
        self.d
    }
}
