use thiserror::Error;

/// Array-backed binary min-heap, zero-based.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapErr {
    #[error("index {0} out of range for heap of size {1}")]
    KeyError(usize, usize),
    #[error("extract from empty heap")]
    HeapUnderflow,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn build(source: Vec<T>) -> Result<Self, HeapErr> {
        let mut heap = MinHeap { elements: source };
        let n = heap.heap_size();
        for i in (0..n / 2).rev() {
            heap.min_heapify(i)?;
        }
        Ok(heap)
    }

    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size()).all(|i| self.elements[Self::parent(i)] <= self.elements[i])
    }

    /// Restores the heap property below `i`.
    pub fn min_heapify(&mut self, i: usize) -> Result<(), HeapErr> {
        if i >= self.heap_size() {
            return Err(HeapErr::KeyError(i, self.heap_size()));
        }
        self.sift_down(i);
        Ok(())
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap_size();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < n && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < n && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[i] >= self.elements[p] {
                return;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let last = self.heap_size() - 1;
        self.sift_up(last);
        debug_assert!(self.valid_min_heap());
    }

    pub fn extract_min(&mut self) -> Result<T, HeapErr> {
        if self.elements.is_empty() {
            return Err(HeapErr::HeapUnderflow);
        }
        let result = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.min_heapify(0)?;
        }
        Ok(result)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_extracts_in_order() {
        let mut heap = MinHeap::build(vec![9, 3, 7, 1, 8, 2, 6]).unwrap();
        assert!(heap.valid_min_heap());
        heap.insert(0);
        heap.insert(5);

        let mut out = Vec::new();
        while let Ok(v) = heap.extract_min() {
            out.push(v);
        }
        assert_eq!(out, vec![0, 1, 2, 3, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_tuple_keys_break_ties_by_second_field() {
        let mut heap = MinHeap::build(vec![(0u64, 4u8), (0, 2), (1, 0), (0, 9)]).unwrap();
        assert_eq!(heap.extract_min(), Ok((0, 2)));
        assert_eq!(heap.extract_min(), Ok((0, 4)));
        assert_eq!(heap.extract_min(), Ok((0, 9)));
        assert_eq!(heap.extract_min(), Ok((1, 0)));
    }

    #[test]
    fn test_underflow() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert_eq!(heap.extract_min(), Err(HeapErr::HeapUnderflow));
        assert_eq!(heap.min_heapify(0), Err(HeapErr::KeyError(0, 0)));
    }
}
