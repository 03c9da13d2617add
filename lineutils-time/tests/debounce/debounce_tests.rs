// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lineutils_test_utils::test_data::{person_alice, person_bob, person_charlie};
use lineutils_test_utils::{advance_and_settle, settle, CallRecorder, TestData};
use lineutils_time::prelude::*;
use std::time::Duration;
use tokio::time::{pause, Instant};

#[tokio::test]
async fn test_debounce_emits_after_quiet_period() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounce(Duration::from_millis(500));

    // Act & Assert
    debounced.call(person_alice());
    settle().await;
    assert_eq!(recorder.count(), 0);

    advance_and_settle(100).await;
    assert_eq!(recorder.count(), 0);

    advance_and_settle(300).await;
    assert_eq!(recorder.count(), 0);

    advance_and_settle(150).await;
    assert_eq!(recorder.calls(), vec![person_alice()]);
}

#[tokio::test]
async fn test_debounce_burst_invokes_once_with_last_args() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounce(Duration::from_millis(100));

    // Act: five calls within 50ms, the last one at t=40
    for i in 1..=5 {
        debounced.call(i);
        advance_and_settle(10).await;
    }

    // Assert
    assert_eq!(recorder.count(), 0);

    advance_and_settle(80).await;
    assert_eq!(recorder.count(), 0);

    advance_and_settle(20).await;
    assert_eq!(recorder.calls(), vec![5]);
    assert_eq!(recorder.last(), Some(5));

    advance_and_settle(500).await;
    assert_eq!(recorder.calls(), vec![5]);
}

#[tokio::test]
async fn test_debounce_resets_on_new_value() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounce(Duration::from_millis(500));

    // Act & Assert
    debounced.call(person_alice());
    advance_and_settle(300).await;

    debounced.call(person_bob());
    advance_and_settle(300).await;
    assert_eq!(recorder.count(), 0);

    advance_and_settle(250).await;
    assert_eq!(recorder.calls(), vec![person_bob()]);
}

#[tokio::test]
async fn test_debounce_bursts_separated_by_gap_fire_separately() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounce(Duration::from_millis(100));

    // Act
    debounced.call(person_alice());
    advance_and_settle(150).await;
    debounced.call(person_bob());
    advance_and_settle(150).await;

    // Assert
    assert_eq!(recorder.calls(), vec![person_alice(), person_bob()]);
    assert_eq!(recorder.last(), Some(person_bob()));
}

#[tokio::test]
async fn test_debounce_pending_state_transitions() {
    // Arrange
    pause();
    let recorder = CallRecorder::<TestData>::new();
    let debounced = recorder.callback().debounce(Duration::from_millis(100));

    // Idle
    assert!(!debounced.is_pending());
    assert!(debounced.last_call_at().is_none());

    // Idle -> Pending
    debounced.call(person_alice());
    assert!(debounced.is_pending());
    assert_eq!(debounced.last_call_at(), Some(Instant::now()));

    // Pending -> Pending
    advance_and_settle(50).await;
    debounced.call(person_charlie());
    assert!(debounced.is_pending());
    assert_eq!(debounced.last_call_at(), Some(Instant::now()));

    // Pending -> Idle
    advance_and_settle(150).await;
    assert!(!debounced.is_pending());
    assert_eq!(recorder.calls(), vec![person_charlie()]);
}

#[tokio::test]
async fn test_debounce_clones_share_one_timer() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounce(Duration::from_millis(100));
    let clone = debounced.clone();

    // Act
    debounced.call(1);
    advance_and_settle(50).await;
    clone.call(2);
    advance_and_settle(150).await;

    // Assert
    assert_eq!(recorder.calls(), vec![2]);
}

#[tokio::test]
async fn test_debounce_callback_forwards_to_wrapper() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounce(Duration::from_millis(100));
    let on_event = debounced.callback();

    // Act
    on_event("a");
    on_event("b");
    advance_and_settle(150).await;

    // Assert
    assert_eq!(recorder.calls(), vec!["b"]);
}

#[tokio::test]
async fn test_debounce_pending_call_survives_wrapper_drop() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounce(Duration::from_millis(100));

    // Act
    debounced.call(person_alice());
    drop(debounced);
    advance_and_settle(150).await;

    // Assert
    assert_eq!(recorder.calls(), vec![person_alice()]);
}

#[tokio::test]
async fn test_debounce_zero_wait_fires_on_next_tick() {
    // Arrange
    pause();
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounce(Duration::ZERO);

    // Act
    debounced.call(1);
    debounced.call(2);
    assert_eq!(recorder.count(), 0);
    advance_and_settle(1).await;

    // Assert
    assert_eq!(recorder.calls(), vec![2]);
}

#[tokio::test]
async fn test_debounce_reports_configuration() {
    let debounced = (|_: u8| {}).debounce(Duration::from_millis(250));

    assert_eq!(debounced.wait(), Duration::from_millis(250));
    assert_eq!(debounced.options(), DebounceOptions::trailing_edge());
}
