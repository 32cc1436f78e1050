use std::{
    sync::{
        mpsc::{self, Sender, TryRecvError},
        Arc, RwLock,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, error, info};

use crate::session::Session;

pub mod nature;

pub type TickerGenerator = Box<dyn FnOnce() -> Box<dyn Ticker> + Send>;

/// Runs a [`Ticker`] on its own thread: tick, then sleep for the delay, then check for a stop
/// request before the next tick. The sleep starts after the tick, so the time spent ticking
/// adds to the delay.
pub struct TickerHost {
    stop_sender: Sender<()>,
    delay_sender: Sender<Duration>,
    handle: JoinHandle<()>,
}

impl TickerHost {
    pub fn start(
        session_arc: Arc<RwLock<Session>>,
        mut delay: Duration,
        ticker_generator: TickerGenerator,
    ) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel::<()>();
        let (delay_sender, delay_receiver) = mpsc::channel::<Duration>();

        let handle = thread::spawn(move || {
            let mut ticker = ticker_generator();

            // A dropped host counts as a stop request.
            while let Err(TryRecvError::Empty) = stop_receiver.try_recv() {
                let mut session = session_arc.write().expect("Session lock poisoned");
                ticker.tick(&mut session);
                drop(session);

                if let Some(new_delay) = delay_receiver.try_iter().last() {
                    debug!("Ticker delay now {}ms", new_delay.as_millis());
                    delay = new_delay;
                }

                spin_sleep::sleep(delay);
            }

            debug!("Ticker thread exiting");
        });

        info!("Ticker started");
        Self {
            stop_sender,
            delay_sender,
            handle,
        }
    }

    /// Requests a stop. A tick already in progress finishes; no further tick starts.
    pub fn stop(self) {
        // The thread may have already exited on its own, nothing to tell it then.
        let _ = self.stop_sender.send(());
        info!("Ticker stopped");
    }

    /// Like [`TickerHost::stop`], but waits for the thread to wind down.
    pub fn stop_and_join(self) {
        let _ = self.stop_sender.send(());
        if self.handle.join().is_err() {
            error!("Ticker thread panicked");
        }
    }

    pub fn set_delay(&self, delay: Duration) {
        let _ = self.delay_sender.send(delay);
    }
}

pub trait Ticker {
    fn tick(&mut self, session: &mut Session);
}
