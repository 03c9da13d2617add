// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::smol::helpers::{sleep_ms, SETTLED_MS, WAIT};
use lineutils_runtime::impls::smol::SmolRuntime;
use lineutils_test_utils::test_data::{person_alice, person_bob};
use lineutils_test_utils::CallRecorder;
use lineutils_time::prelude::*;

#[test]
fn test_debounce_smol_trailing_fires_once_with_last_args() {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::new();
        let debounced: Debounced<u32, SmolRuntime> = Debounced::new(recorder.callback(), WAIT);

        // Act
        for i in 1..=5 {
            debounced.call(i);
            sleep_ms(10).await;
        }

        // Assert
        assert_eq!(recorder.count(), 0);
        assert!(debounced.is_pending());

        sleep_ms(SETTLED_MS).await;
        assert_eq!(recorder.calls(), vec![5]);
        assert_eq!(recorder.last(), Some(5));
        assert!(!debounced.is_pending());
    });
}

#[test]
fn test_debounce_smol_leading_fires_on_first_call_only() {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::new();
        let debounced = recorder
            .callback()
            .debounce_with_options(WAIT, DebounceOptions::leading_edge());

        // Act
        debounced.call(1);
        assert_eq!(recorder.calls(), vec![1]);

        for i in 2..=5 {
            sleep_ms(10).await;
            debounced.call(i);
        }
        sleep_ms(SETTLED_MS).await;

        // Assert: nothing on the trailing edge, a new burst fires again
        assert_eq!(recorder.calls(), vec![1]);
        debounced.call(9);
        assert_eq!(recorder.calls(), vec![1, 9]);
    });
}

#[test]
fn test_debounce_smol_separate_bursts_fire_separately() {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::new();
        let debounced = recorder.callback().debounce(WAIT);

        // Act
        debounced.call(person_alice());
        sleep_ms(SETTLED_MS).await;
        debounced.call(person_bob());
        sleep_ms(SETTLED_MS).await;

        // Assert
        assert_eq!(recorder.calls(), vec![person_alice(), person_bob()]);
    });
}
