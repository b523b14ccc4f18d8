//! The heap has no locking of its own; these tests share one instance
//! between threads behind a caller-owned mutex.

use crossbeam_utils::thread;
use dary_max_heap::{DWayHeap, HeapError};
use parking_lot::Mutex;

#[test]
fn concurrent_pushes_behind_mutex() {
    let threads = 8;
    let per_thread = 500;
    let pq = Mutex::new(DWayHeap::with_capacity(4, threads * per_thread).unwrap());

    thread::scope(|s| {
        for t in 0..threads {
            let pq = &pq;
            s.spawn(move |_| {
                for i in 0..per_thread {
                    pq.lock().insert(t * per_thread + i);
                }
            });
        }
    })
    .unwrap();

    let mut pq = pq.into_inner();
    assert_eq!(pq.len(), threads * per_thread);
    for expected in (0..threads * per_thread).rev() {
        assert_eq!(pq.pop_max(), Ok(expected));
    }
    assert_eq!(pq.pop_max(), Err(HeapError::Empty));
}

#[test]
fn concurrent_push_and_pop_behind_mutex() {
    let n = 2000;
    let pq = Mutex::new(DWayHeap::new(3).unwrap());
    let popped = Mutex::new(Vec::new());

    thread::scope(|s| {
        s.spawn(|_| {
            for i in 0..n {
                pq.lock().insert(i);
            }
        });
        s.spawn(|_| {
            let mut got = 0;
            while got < n {
                if let Ok(v) = pq.lock().pop_max() {
                    popped.lock().push(v);
                    got += 1;
                }
            }
        });
    })
    .unwrap();

    let mut popped = popped.into_inner();
    popped.sort_unstable();
    assert_eq!(popped, (0..n).collect::<Vec<_>>());
    assert!(pq.lock().is_empty());
}
