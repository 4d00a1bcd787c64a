//! Integration tests for signals and thread affinity.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lattice_rows_core::{BindingError, ErrorKind, Signal, ThreadAffinity};

#[test]
fn slots_run_in_connection_order() {
    let signal = Signal::<usize>::new();
    let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order = order.clone();
        signal.connect(move |count| order.lock().push((tag, *count)));
    }

    signal.emit(4);
    assert_eq!(
        *order.lock(),
        vec![("first", 4), ("second", 4), ("third", 4)]
    );
}

#[test]
fn scoped_connection_survives_only_its_scope() {
    let signal = Signal::<usize>::new();
    let total = Arc::new(AtomicUsize::new(0));

    {
        let total = total.clone();
        let _guard = signal.connect_scoped(move |&n| {
            total.fetch_add(n, Ordering::SeqCst);
        });
        assert_eq!(signal.connection_count(), 1);
        signal.emit(5);
    }

    signal.emit(6);
    assert_eq!(total.load(Ordering::SeqCst), 5);
    assert_eq!(signal.connection_count(), 0);
}

#[test]
fn signal_can_be_shared_across_threads() {
    let signal = Arc::new(Signal::<usize>::new());
    let hits = Arc::new(AtomicUsize::new(0));

    let hits_clone = hits.clone();
    signal.connect(move |_| {
        hits_clone.fetch_add(1, Ordering::SeqCst);
    });

    let remote = signal.clone();
    std::thread::spawn(move || remote.emit(1)).join().unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn affinity_travels_with_copies() {
    let affinity = ThreadAffinity::current();
    let copied = affinity;

    let off_thread = std::thread::spawn(move || copied.is_same_thread())
        .join()
        .unwrap();
    assert!(!off_thread);
    assert!(affinity.is_same_thread());
}

#[test]
fn error_kinds_cover_all_variants() {
    let errors = [
        BindingError::RowFactoryUnset,
        BindingError::HostViewUnset,
        BindingError::section_out_of_range(1, 1),
        BindingError::row_out_of_range(3, 2),
    ];
    let kinds: Vec<ErrorKind> = errors.iter().map(BindingError::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::Configuration,
            ErrorKind::Configuration,
            ErrorKind::Index,
            ErrorKind::Index,
        ]
    );
}
