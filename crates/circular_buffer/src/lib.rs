use std::collections::VecDeque;

/// A fixed-capacity buffer which drops its oldest value when a new one
/// is pushed over capacity. Newest value sits at the front.
#[derive(Clone, Debug)]
pub struct CircularBuffer<T> {
    capacity: usize,
    buffer: VecDeque<T>,
}

impl<T> CircularBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_back();
        }
        self.buffer.push_front(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest value first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Most recently pushed value.
    pub fn first(&self) -> Option<&T> {
        self.buffer.front()
    }

    /// Oldest value still held.
    pub fn last(&self) -> Option<&T> {
        self.buffer.back()
    }

    pub fn nth_from_front(&self, n: usize) -> Option<&T> {
        self.buffer.get(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_at_most_capacity_values() {
        let mut buffer = CircularBuffer::new(3);
        for i in 0..5 {
            buffer.push(i);
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.first(), Some(&4));
        assert_eq!(buffer.last(), Some(&2));
    }

    #[test]
    fn iterates_newest_first() {
        let mut buffer = CircularBuffer::new(4);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        let collected: Vec<i32> = buffer.iter().copied().collect();
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buffer = CircularBuffer::new(2);
        buffer.push(1);
        buffer.push(2);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.first(), None);
    }
}
