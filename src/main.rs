use std::io;
use ShuffleQueueMini::core::config::QueueConfig;
use ShuffleQueueMini::core::log::write_logs;
use ShuffleQueueMini::core::tracked::TrackedQueue;

fn main() {
    let mut queue = TrackedQueue::<i32>::with_config(&QueueConfig::default());
    queue.enqueue_all([-1, 0]);
    queue.enqueue_all([1, 2]);
    queue.enqueue(3);

    // Drain in FIFO order, one extra dequeue to show the empty case
    for _ in 0..6 {
        println!("dequeued {:?}", queue.dequeue());
    }

    queue.enqueue_all(1..=5);
    queue.shuffle_times(1);
    println!("shuffled {:?}", queue.queue().to_vec());

    // Print the journal as NDJSON
    write_logs(queue.logs(), io::stdout().lock()).expect("Failed to write logs");
}
