use std::collections::{linked_list, vec_deque, LinkedList, VecDeque};
use std::fmt::{Debug, Formatter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::core::config::{Backing, QueueConfig};
use crate::core::shuffle::random_removal;

/// Build a queue from a list of elements. The first one is dequeued first.
///
/// ```
/// let mut queue = ShuffleQueueMini::queue![-1, 0];
/// assert_eq!(queue.dequeue(), Some(-1));
/// ```
#[macro_export]
macro_rules! queue {
    () => {
        $crate::core::queue::Queue::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::core::queue::Queue::from_elements([$($element),+])
    };
}

/// Element storage, picked once at construction
#[derive(Clone)]
enum Storage<E> {
    Array(VecDeque<E>),
    List(LinkedList<E>),
}

impl<E> Storage<E> {
    fn new(backing: Backing) -> Self {
        match backing {
            Backing::Array => Storage::Array(VecDeque::new()),
            Backing::List => Storage::List(LinkedList::new()),
        }
    }

    fn push(&mut self, element: E) {
        match self {
            Storage::Array(items) => items.push_back(element),
            Storage::List(items) => items.push_back(element),
        }
    }

    fn pop(&mut self) -> Option<E> {
        match self {
            Storage::Array(items) => items.pop_front(),
            Storage::List(items) => items.pop_front(),
        }
    }

    fn front(&self) -> Option<&E> {
        match self {
            Storage::Array(items) => items.front(),
            Storage::List(items) => items.front(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Storage::Array(items) => items.len(),
            Storage::List(items) => items.len(),
        }
    }

    fn clear(&mut self) {
        match self {
            Storage::Array(items) => items.clear(),
            Storage::List(items) => items.clear(),
        }
    }

    /// Move every element out, head first, leaving the storage empty
    fn take_all(&mut self) -> Vec<E> {
        match self {
            Storage::Array(items) => items.drain(..).collect(),
            Storage::List(items) => std::mem::take(items).into_iter().collect(),
        }
    }

    fn backing(&self) -> Backing {
        match self {
            Storage::Array(_) => Backing::Array,
            Storage::List(_) => Backing::List,
        }
    }
}

/// First-in-first-out queue with an optional random shuffle.
///
/// The queue is not synchronized. Sharing one between threads is the
/// caller's job, e.g. behind an `Arc<Mutex<Queue<E>>>`.
#[derive(Clone)]
pub struct Queue<E> {
    items: Storage<E>,
    rng: Option<StdRng>,
}

impl<E> Queue<E> {
    /// Create a new, empty queue on the default backing
    pub fn new() -> Self {
        Self::with_config(&QueueConfig::default())
    }

    pub fn with_backing(backing: Backing) -> Self {
        Self::with_config(&QueueConfig::new(backing))
    }

    /// Create an empty queue from `config`. A `shuffle_seed` makes
    /// [`Queue::shuffle`] reproducible.
    pub fn with_config(config: &QueueConfig) -> Self {
        Self {
            items: Storage::new(config.backing),
            rng: config.shuffle_seed.map(StdRng::seed_from_u64),
        }
    }

    /// Create a queue holding `elements`, enqueued in iteration order
    pub fn from_elements<I: IntoIterator<Item = E>>(elements: I) -> Self {
        let mut queue = Self::new();
        queue.enqueue_all(elements);
        queue
    }

    /// Add an element at the tail
    pub fn enqueue(&mut self, element: E) {
        let len_before = self.items.len();
        self.items.push(element);
        // --post operation assertion
        debug_assert_eq!(self.items.len(), len_before + 1, "Queue length should grow by 1");
    }

    /// Add every element at the tail, keeping their order
    pub fn enqueue_all<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        for element in elements {
            self.enqueue(element);
        }
    }

    /// Remove and return the head, `None` when empty
    pub fn dequeue(&mut self) -> Option<E> {
        let len_before = self.items.len();
        let result = self.items.pop();
        // -- post op assertion: queue size decreases if dequeue succeeded
        match result {
            Some(_) => debug_assert_eq!(self.items.len(), len_before - 1, "Queue length should decrease by 1"),
            None => debug_assert_eq!(len_before, 0, "Only an empty queue yields nothing"),
        }
        result
    }

    /// Borrow the head without removing it
    pub fn peek(&self) -> Option<&E> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.iter().any(|item| item == element)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        debug_assert!(self.is_empty(), "Queue must be empty after clear");
    }

    /// Copy of the contents, head first. Changing it never touches the queue.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, E> {
        match &self.items {
            Storage::Array(items) => Iter::Array(items.iter()),
            Storage::List(items) => Iter::List(items.iter()),
        }
    }

    pub fn backing(&self) -> Backing {
        self.items.backing()
    }

    /// Shuffle once
    pub fn shuffle(&mut self) {
        self.shuffle_times(1);
    }

    /// Shuffle `iterations` times with the queue's seeded rng, or the
    /// thread rng when no seed was configured. Zero iterations is a no-op.
    pub fn shuffle_times(&mut self, iterations: usize) {
        match self.rng.take() {
            Some(mut rng) => {
                self.shuffle_with(iterations, &mut rng);
                self.rng = Some(rng);
            }
            None => self.shuffle_with(iterations, &mut rand::thread_rng()),
        }
    }

    /// Shuffle `iterations` times drawing from `rng`.
    ///
    /// Each pass empties the queue into a snapshot and re-enqueues a
    /// uniformly random remaining element until the snapshot is used up.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, iterations: usize, rng: &mut R) {
        let len_before = self.len();
        for _ in 0..iterations {
            let snapshot = self.items.take_all();
            let items = &mut self.items;
            random_removal(snapshot, &mut *rng, |element| items.push(element));
        }
        debug_assert_eq!(self.len(), len_before, "Shuffle must not change the queue length");
    }
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Debug> Debug for Queue<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Equal when both hold the same elements in the same order, whatever the backing
impl<E: PartialEq> PartialEq for Queue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for Queue<E> {}

impl<E> FromIterator<E> for Queue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<E> Extend<E> for Queue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

/// Borrowing iterator over a queue, head to tail
pub enum Iter<'a, E> {
    Array(vec_deque::Iter<'a, E>),
    List(linked_list::Iter<'a, E>),
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Array(inner) => inner.next(),
            Iter::List(inner) => inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Array(inner) => inner.size_hint(),
            Iter::List(inner) => inner.size_hint(),
        }
    }
}

/// Owning iterator, yields elements in dequeue order
pub enum IntoIter<E> {
    Array(vec_deque::IntoIter<E>),
    List(linked_list::IntoIter<E>),
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        match self {
            IntoIter::Array(inner) => inner.next(),
            IntoIter::List(inner) => inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            IntoIter::Array(inner) => inner.size_hint(),
            IntoIter::List(inner) => inner.size_hint(),
        }
    }
}

impl<E> IntoIterator for Queue<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> IntoIter<E> {
        match self.items {
            Storage::Array(items) => IntoIter::Array(items.into_iter()),
            Storage::List(items) => IntoIter::List(items.into_iter()),
        }
    }
}

impl<'a, E> IntoIterator for &'a Queue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

/// Serialized as a plain sequence, head first
impl<E: Serialize> Serialize for Queue<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for Queue<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<E>::deserialize(deserializer)?;
        Ok(Self::from_elements(elements))
    }
}
