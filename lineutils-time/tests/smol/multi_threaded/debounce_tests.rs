// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::smol::helpers::{sleep_ms, SETTLED_MS, WAIT};
use lineutils_test_utils::CallRecorder;
use lineutils_time::prelude::*;
use std::thread;

#[test]
fn test_debounce_smol_calls_from_many_threads_collapse() {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::new();
        let debounced = recorder.callback().debounce(WAIT);

        // Act
        thread::scope(|scope| {
            for i in 0..4_u32 {
                let debounced = debounced.clone();
                scope.spawn(move || debounced.call(i));
            }
        });
        sleep_ms(SETTLED_MS).await;

        // Assert: exactly one of the burst's arguments wins
        let calls = recorder.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0] < 4);
        assert!(!debounced.is_pending());
    });
}
