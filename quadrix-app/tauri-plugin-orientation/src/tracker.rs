use std::collections::HashMap;
use std::fmt::Display;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tauri::async_runtime::{self, JoinHandle};
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use crate::debouncer::OrientationDebouncer;
use crate::error::{Error, Result};
use crate::models::{DeviceOrientation, TrackingHandle};

/// Samples buffered between the sensor callback and the tracking task.
const SAMPLE_BUFFER: usize = 32;

/// Feeds raw angles into a tracker. Cloneable, cheap to hand to a sensor callback.
#[derive(Debug, Clone)]
pub struct SampleSender(mpsc::Sender<i32>);

impl SampleSender {
    /// Queue an angle. Dropped when the tracker is behind or stopped.
    pub fn push(&self, angle: i32) {
        if let Err(e) = self.0.try_send(angle) {
            trace!("Dropping orientation sample {}: {}", angle, e);
        }
    }
}

/// A running orientation tracker: one debouncer fed by one sample stream.
pub struct OrientationTracker {
    handle: TrackingHandle,
    samples: SampleSender,
    /// Held while emitting, so `stop` cannot return mid-emission.
    running: Arc<Mutex<bool>>,
    task: JoinHandle<()>,
}

impl OrientationTracker {
    /// Spawn the tracking loop.
    ///
    /// `emit` is called for each orientation change. A failed emission is
    /// logged and tracking continues.
    pub fn spawn<F, E>(handle: TrackingHandle, emit: F) -> Self
    where
        F: Fn(DeviceOrientation) -> std::result::Result<(), E> + Send + 'static,
        E: Display,
    {
        let (tx, mut rx) = mpsc::channel::<i32>(SAMPLE_BUFFER);
        let running = Arc::new(Mutex::new(true));
        let task_running = running.clone();

        debug!("Starting orientation tracker {}", handle);

        let task = async_runtime::spawn(async move {
            let mut debouncer = OrientationDebouncer::new();

            while let Some(angle) = rx.recv().await {
                let Some(orientation) = debouncer.observe(angle) else {
                    continue;
                };

                let alive = lock_flag(&task_running);
                if !*alive {
                    break;
                }
                debug!("Orientation changed to {} ({} degrees)", orientation, angle);
                if let Err(e) = emit(orientation) {
                    warn!("Failed to emit orientation change: {}", e);
                }
            }

            debug!("Orientation tracker {} stopped", handle);
        });

        Self {
            handle,
            samples: SampleSender(tx),
            running,
            task,
        }
    }

    pub fn handle(&self) -> TrackingHandle {
        self.handle
    }

    /// Sender for the sensor side.
    pub fn sample_sender(&self) -> SampleSender {
        self.samples.clone()
    }

    /// Halt the loop. Waits for an emission in progress; no change is emitted
    /// once this returns, even for samples already queued.
    pub fn stop(self) {
        *lock_flag(&self.running) = false;
        self.task.abort();
    }
}

fn lock_flag(flag: &Mutex<bool>) -> MutexGuard<'_, bool> {
    flag.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Live trackers keyed by handle.
#[derive(Default)]
pub struct TrackerRegistry {
    next_id: AtomicU32,
    active: Mutex<HashMap<TrackingHandle, OrientationTracker>>,
}

impl TrackerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a handle for a tracker about to start.
    pub fn next_handle(&self) -> TrackingHandle {
        TrackingHandle(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn insert(&self, tracker: OrientationTracker) {
        self.lock().insert(tracker.handle(), tracker);
    }

    /// Take ownership of a tracker so it can be stopped.
    pub fn remove(&self, handle: TrackingHandle) -> Result<OrientationTracker> {
        self.lock().remove(&handle).ok_or(Error::NotStarted(handle))
    }

    /// Sender feeding the tracker behind `handle`.
    pub fn sample_sender(&self, handle: TrackingHandle) -> Result<SampleSender> {
        self.lock()
            .get(&handle)
            .map(OrientationTracker::sample_sender)
            .ok_or(Error::NotStarted(handle))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TrackingHandle, OrientationTracker>> {
        self.active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use DeviceOrientation::*;

    fn recording_tracker(
        handle: TrackingHandle,
    ) -> (OrientationTracker, mpsc::UnboundedReceiver<DeviceOrientation>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let tracker = OrientationTracker::spawn(handle, move |orientation| {
            events_tx.send(orientation).map_err(|e| e.to_string())
        });
        (tracker, events_rx)
    }

    #[tokio::test]
    async fn test_tracker_emits_debounced_changes() {
        let (tracker, mut events) = recording_tracker(TrackingHandle(1));
        let samples = tracker.sample_sender();

        for angle in [10, 15, 260, 265, 270, 5] {
            samples.push(angle);
        }

        assert_eq!(events.recv().await, Some(Portrait));
        assert_eq!(events.recv().await, Some(LandscapeLeft));
        assert_eq!(events.recv().await, Some(Portrait));

        // Stopping drops the emitter, closing the event stream.
        tracker.stop();
        assert_eq!(events.recv().await, None);
    }

    #[tokio::test]
    async fn test_stop_halts_emissions() {
        let (tracker, mut events) = recording_tracker(TrackingHandle(2));
        let samples = tracker.sample_sender();

        samples.push(0);
        assert_eq!(events.recv().await, Some(Portrait));

        tracker.stop();
        samples.push(270);
        samples.push(90);

        assert_eq!(events.recv().await, None);
    }

    #[tokio::test]
    async fn test_stop_waits_for_emission_in_progress() {
        let (entered_tx, mut entered) = mpsc::unbounded_channel();
        let emitted = Arc::new(AtomicU32::new(0));
        let counter = emitted.clone();
        let tracker = OrientationTracker::spawn(TrackingHandle(4), move |_| {
            let _ = entered_tx.send(());
            std::thread::sleep(Duration::from_millis(100));
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<(), String>(())
        });
        let samples = tracker.sample_sender();

        samples.push(0);
        entered.recv().await.unwrap();
        tracker.stop();
        assert_eq!(emitted.load(Ordering::SeqCst), 1);

        samples.push(270);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(emitted.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_emission_failure_keeps_tracking() {
        let (events_tx, mut events) = mpsc::unbounded_channel();
        let tracker = OrientationTracker::spawn(TrackingHandle(3), move |orientation| {
            if orientation == Portrait {
                return Err("bridge not ready");
            }
            events_tx.send(orientation).map_err(|_| "receiver dropped")
        });
        let samples = tracker.sample_sender();

        samples.push(0);
        samples.push(80);

        let received = tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .expect("tracker should keep running after a failed emission");
        assert_eq!(received, Some(LandscapeRight));

        tracker.stop();
    }

    #[test]
    fn test_registry_stop_unknown_handle() {
        let registry = TrackerRegistry::new();
        let result = registry.remove(TrackingHandle(99));
        assert!(matches!(result, Err(Error::NotStarted(TrackingHandle(99)))));
    }

    #[tokio::test]
    async fn test_registry_handles_are_independent() {
        let registry = TrackerRegistry::new();
        let first = registry.next_handle();
        let second = registry.next_handle();
        assert_ne!(first, second);

        let (tracker_a, _events_a) = recording_tracker(first);
        let (tracker_b, mut events_b) = recording_tracker(second);
        let samples_b = tracker_b.sample_sender();
        registry.insert(tracker_a);
        registry.insert(tracker_b);
        assert_eq!(registry.len(), 2);

        registry.remove(first).unwrap().stop();
        assert!(matches!(registry.remove(first), Err(Error::NotStarted(_))));

        samples_b.push(100);
        assert_eq!(events_b.recv().await, Some(LandscapeRight));

        registry.remove(second).unwrap().stop();
        assert!(registry.is_empty());
    }
}
