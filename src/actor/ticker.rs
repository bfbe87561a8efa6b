//! Ticker Actor: free-running repaint signal.
//!
//! Keeps the elapsed-time statistic moving between draws when the draw
//! interval is long. Ticks carry no state and never mutate the simulation.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A repaint request sent at regular intervals.
#[derive(Debug, Clone, Copy)]
pub struct Repaint {
    /// Sequence number (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Ticker actor that generates regular repaint events.
pub struct TickerActor {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    tick_rx: Receiver<Repaint>,
}

impl TickerActor {
    /// Spawn a ticker firing every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(interval: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Small buffer: a slow receiver should skip repaints, not queue them.
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("lottery-repaint".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_clone, interval);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        })
    }

    /// The repaint receiver, for use in `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Repaint> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(tick_tx: &Sender<Repaint>, shutdown: &AtomicBool, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        while !shutdown.load(Ordering::Relaxed) {
            let now = Instant::now();
            if now >= next_tick {
                let _ = tick_tx.try_send(Repaint {
                    frame,
                    elapsed: now - start,
                });

                frame += 1;
                next_tick += interval;

                // Behind schedule: skip ahead rather than burst.
                if next_tick < now {
                    next_tick = now + interval;
                }
            } else {
                // Short naps keep shutdown responsive.
                thread::sleep((next_tick - now).min(Duration::from_millis(5)));
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
