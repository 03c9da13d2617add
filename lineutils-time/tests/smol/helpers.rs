// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Wait time used by every smol test; real clocks need slack around it.
pub const WAIT: Duration = Duration::from_millis(100);

/// Comfortably past one quiet period.
pub const SETTLED_MS: u64 = 250;

pub async fn sleep_ms(ms: u64) {
    smol::Timer::after(Duration::from_millis(ms)).await;
}
