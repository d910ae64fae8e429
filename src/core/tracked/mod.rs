pub use crate::core::{
    queue::Queue,
    log::{LogEntry, Logger, Op},
    config::QueueConfig,
};
use rand::Rng;

/// Queue that journals every mutating operation
#[derive(Clone, Debug)]
pub struct TrackedQueue<T> {
    queue: Queue<T>,
    logger: Logger<T>,
}

impl<T: Clone> TrackedQueue<T> {
    pub fn new() -> Self {
        Self::from_queue(Queue::new())
    }

    pub fn with_config(config: &QueueConfig) -> Self {
        Self::from_queue(Queue::with_config(config))
    }

    /// Start tracking an existing queue. Its current contents are not logged.
    pub fn from_queue(queue: Queue<T>) -> Self {
        Self { queue, logger: Logger::new() }
    }

    /// Enqueue with logging
    pub fn enqueue(&mut self, item: T) {
        self.queue.enqueue(item.clone());
        self.logger.log(Op::Enqueue, Some(item), self.queue.len());
    }

    pub fn enqueue_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.enqueue(item);
        }
    }

    /// Dequeue an item. An empty dequeue is still logged, with no item.
    pub fn dequeue(&mut self) -> Option<T> {
        let item = self.queue.dequeue();
        self.logger.log(Op::Dequeue, item.clone(), self.queue.len());
        item
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.logger.log(Op::Clear, None, 0);
    }

    /// Shuffle `iterations` times. Logged as one entry.
    pub fn shuffle_times(&mut self, iterations: usize) {
        self.queue.shuffle_times(iterations);
        self.logger.log(Op::Shuffle, None, self.queue.len());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, iterations: usize, rng: &mut R) {
        self.queue.shuffle_with(iterations, rng);
        self.logger.log(Op::Shuffle, None, self.queue.len());
    }

    /// Read-only access for queries, which are not logged
    pub fn queue(&self) -> &Queue<T> {
        &self.queue
    }

    /// Expose logs
    pub fn logs(&self) -> &[LogEntry<T>] {
        self.logger.entries()
    }

    pub fn into_parts(self) -> (Queue<T>, Vec<LogEntry<T>>) {
        (self.queue, self.logger.into_entries())
    }
}

impl<T: Clone> Default for TrackedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
