// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lineutils_test_utils::test_data::{person_alice, person_bob, person_charlie};
use lineutils_test_utils::{advance_and_settle, CallRecorder};
use lineutils_time::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::time::pause;

#[tokio::test]
async fn test_leading_invokes_synchronously_with_first_args() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder
        .callback()
        .debounce_with_options(Duration::from_millis(100), DebounceOptions::leading_edge());

    // Act: five calls within 50ms
    debounced.call(1);

    // Assert: no await between call and check
    assert_eq!(recorder.calls(), vec![1]);

    for i in 2..=5 {
        advance_and_settle(10).await;
        debounced.call(i);
    }
    assert_eq!(recorder.calls(), vec![1]);
}

#[tokio::test]
async fn test_leading_does_not_fire_on_trailing_edge() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder
        .callback()
        .debounce_with_options(Duration::from_millis(100), DebounceOptions::leading_edge());

    // Act
    debounced.call(person_alice());
    debounced.call(person_bob());
    advance_and_settle(500).await;

    // Assert
    assert_eq!(recorder.calls(), vec![person_alice()]);
    assert!(!debounced.is_pending());
}

#[tokio::test]
async fn test_leading_new_burst_after_quiet_period() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder
        .callback()
        .debounce_with_options(Duration::from_millis(100), DebounceOptions::leading_edge());

    // Act
    debounced.call(person_alice());
    advance_and_settle(150).await;
    debounced.call(person_bob());

    // Assert
    assert_eq!(recorder.calls(), vec![person_alice(), person_bob()]);
}

#[tokio::test]
async fn test_leading_burst_extends_while_calls_keep_arriving() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder
        .callback()
        .debounce_with_options(Duration::from_millis(100), DebounceOptions::leading_edge());

    // Act: each call lands 60ms after the previous one, well past the first timer's expiry
    debounced.call(person_alice());
    for _ in 0..4 {
        advance_and_settle(60).await;
        debounced.call(person_bob());
    }
    advance_and_settle(150).await;
    debounced.call(person_charlie());

    // Assert
    assert_eq!(recorder.calls(), vec![person_alice(), person_charlie()]);
}

#[tokio::test]
async fn test_leading_target_may_reenter_wrapper() {
    // Arrange
    pause();
    let invocations = Arc::new(AtomicUsize::new(0));
    let slot: Arc<OnceLock<Debounced<u32>>> = Arc::new(OnceLock::new());

    let counter = Arc::clone(&invocations);
    let reentry = Arc::clone(&slot);
    let debounced = (move |n: u32| {
        counter.fetch_add(1, Ordering::SeqCst);
        if let Some(wrapper) = reentry.get() {
            wrapper.call(n + 1);
        }
    })
    .debounce_with_options(Duration::from_millis(100), DebounceOptions::leading_edge());
    slot.set(debounced.clone()).expect("slot set once");

    // Act
    debounced.call(1);
    advance_and_settle(150).await;

    // Assert: the re-entrant call lands inside the burst and is absorbed
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
    assert!(!debounced.is_pending());
}
