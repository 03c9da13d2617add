// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Records the arguments of every invocation of the callbacks it hands out.
#[derive(Debug)]
pub struct CallRecorder<A> {
    calls: Arc<Mutex<Vec<A>>>,
}

impl<A> CallRecorder<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback appending its argument to this recorder.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static
    where
        A: Send + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |args| calls.lock().push(args)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    #[must_use]
    pub fn calls(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.calls.lock().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<A>
    where
        A: Clone,
    {
        self.calls.lock().last().cloned()
    }
}

impl<A> Default for CallRecorder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for CallRecorder<A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}
