use ShuffleQueueMini::core::config::Backing;
use ShuffleQueueMini::core::queue::Queue;
use ShuffleQueueMini::queue;

const BACKINGS: [Backing; 2] = [Backing::Array, Backing::List];

#[test]
fn test_dequeues_in_insertion_order() {
    let mut queue: Queue<i32> = queue![-1, 0];
    queue.enqueue_all([1, 2]);
    queue.enqueue(3);

    assert_eq!(queue.dequeue(), Some(-1));
    assert_eq!(queue.dequeue(), Some(0));
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_fifo_law_holds_on_every_backing() {
    for backing in BACKINGS {
        let mut queue = Queue::with_backing(backing);
        queue.enqueue_all(0..100);
        let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(drained, (0..100).collect::<Vec<_>>(), "backing {:?}", backing);
        assert!(queue.is_empty());
    }
}

#[test]
fn test_new_queue_is_empty_then_peeks_head() {
    let mut queue = Queue::new();
    assert!(queue.is_empty());

    queue.enqueue("a");
    assert!(!queue.is_empty());
    assert_eq!(queue.peek(), Some(&"a"));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_empty_queue_yields_nothing() {
    for backing in BACKINGS {
        let mut queue: Queue<String> = Queue::with_backing(backing);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.len(), 0);
    }
}

#[test]
fn test_peek_leaves_queue_untouched() {
    let queue = queue!['x', 'y', 'z'];
    assert_eq!(queue.peek(), Some(&'x'));
    assert_eq!(queue.peek(), Some(&'x'));
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.to_vec(), vec!['x', 'y', 'z']);
}

#[test]
fn test_contains_tracks_membership() {
    for backing in BACKINGS {
        let mut queue = Queue::with_backing(backing);
        assert!(!queue.contains(&7));

        queue.enqueue(7);
        queue.enqueue(8);
        assert!(queue.contains(&7));
        assert!(queue.contains(&8));

        queue.dequeue();
        assert!(!queue.contains(&7));
        assert!(queue.contains(&8));
    }
}

#[test]
fn test_duplicates_and_absent_values_are_kept() {
    let mut queue: Queue<Option<u8>> = Queue::new();
    queue.enqueue_all([None, Some(1), None]);
    assert_eq!(queue.len(), 3);
    assert!(queue.contains(&None));
    assert_eq!(queue.dequeue(), Some(None));
    assert_eq!(queue.dequeue(), Some(Some(1)));
    assert_eq!(queue.dequeue(), Some(None));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_clear_empties_queue() {
    for backing in BACKINGS {
        let mut queue = Queue::with_backing(backing);
        queue.enqueue_all(["a", "b", "c"]);
        queue.clear();
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert!(queue.to_vec().is_empty());

        // still usable afterwards
        queue.enqueue("d");
        assert_eq!(queue.dequeue(), Some("d"));
    }
}

#[test]
fn test_to_vec_is_head_first_copy() {
    let queue = Queue::from_elements(vec![String::from("old"), String::from("new")]);
    let mut snapshot = queue.to_vec();
    assert_eq!(snapshot, vec!["old", "new"]);

    snapshot.clear();
    snapshot.push(String::from("intruder"));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek().map(String::as_str), Some("old"));
    assert!(!queue.contains(&String::from("intruder")));
}

#[test]
fn test_backing_is_not_observable_through_contents() {
    let mut array = Queue::with_backing(Backing::Array);
    let mut list = Queue::with_backing(Backing::List);
    for value in [3, 1, 4, 1, 5] {
        array.enqueue(value);
        list.enqueue(value);
    }
    array.dequeue();
    list.dequeue();

    assert_eq!(array.backing(), Backing::Array);
    assert_eq!(list.backing(), Backing::List);
    assert_eq!(array, list);
    assert_eq!(array.to_vec(), list.to_vec());
}

#[test]
fn test_iterators_walk_head_to_tail() {
    let mut queue: Queue<u32> = (1..=4).collect();
    queue.extend([5, 6]);

    let borrowed: Vec<u32> = queue.iter().copied().collect();
    assert_eq!(borrowed, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(queue.iter().size_hint(), (6, Some(6)));

    let owned: Vec<u32> = queue.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_debug_lists_elements() {
    let queue = queue![1, 2];
    assert_eq!(format!("{:?}", queue), "[1, 2]");
    let empty: Queue<i32> = queue![];
    assert_eq!(format!("{:?}", empty), "[]");
}

#[test]
fn test_serializes_as_sequence() {
    let mut queue = Queue::with_backing(Backing::List);
    queue.enqueue_all(["a", "b", "c"]);
    queue.dequeue();

    let json = serde_json::to_string(&queue).unwrap();
    assert_eq!(json, r#"["b","c"]"#);

    let mut restored: Queue<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.backing(), Backing::Array);
    assert_eq!(restored.dequeue().as_deref(), Some("b"));
    assert_eq!(restored.dequeue().as_deref(), Some("c"));
    assert_eq!(restored.dequeue(), None);
}
