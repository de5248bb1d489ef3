//! Tokio host loop for a [`CarouselNavigator`].
//!
//! The spawned task owns the navigator exclusively. Inputs arrive over an
//! mpsc channel and are answered on a oneshot; the task sleeps until the
//! navigator's next deadline in between; snapshots are published on a watch
//! channel for the rendering layer. Shutting down (or dropping the handle)
//! ends the task, which unmounts the navigator and drops its pending sleep.

use std::time::Instant;

use folio_config::{CarouselConfig, ConfigGuardRailError};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time;

use crate::carousel::{
    CarouselInput, CarouselNavigator, CarouselSnapshot, InputOutcome,
};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("carousel driver has shut down")]
    Closed,
    #[error("carousel driver task failed")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug)]
enum Command {
    Input {
        input: CarouselInput,
        reply: oneshot::Sender<InputOutcome>,
    },
    Unmount,
}

/// Handle to a running carousel task.
#[derive(Debug)]
pub struct CarouselHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<CarouselSnapshot>,
    task: JoinHandle<()>,
}

impl CarouselHandle {
    /// Mount a navigator over `items` and start driving it on the current
    /// tokio runtime.
    pub fn spawn<T>(
        items: Vec<T>,
        config: CarouselConfig,
        reduced_motion: bool,
    ) -> Result<Self, ConfigGuardRailError>
    where
        T: Send + 'static,
    {
        let navigator =
            CarouselNavigator::mount(items, config, reduced_motion, now())?;
        let (commands, inbox) = mpsc::unbounded_channel();
        let (publisher, snapshots) = watch::channel(navigator.snapshot());
        let task = tokio::spawn(run(navigator, inbox, publisher));

        Ok(Self {
            commands,
            snapshots,
            task,
        })
    }

    /// Deliver one host event and wait for the carousel's verdict.
    pub async fn dispatch(
        &self,
        input: CarouselInput,
    ) -> Result<InputOutcome, DriverError> {
        let (reply, outcome) = oneshot::channel();
        self.commands
            .send(Command::Input { input, reply })
            .map_err(|_| DriverError::Closed)?;
        outcome.await.map_err(|_| DriverError::Closed)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        *self.snapshots.borrow()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshots.clone()
    }

    /// Unmount the carousel and wait for its task to finish. Returns the
    /// final state.
    pub async fn shutdown(self) -> Result<CarouselSnapshot, DriverError> {
        let Self {
            commands,
            snapshots,
            task,
        } = self;
        let _ = commands.send(Command::Unmount);
        drop(commands);
        task.await?;
        Ok(*snapshots.borrow())
    }
}

async fn run<T>(
    mut navigator: CarouselNavigator<T>,
    mut inbox: mpsc::UnboundedReceiver<Command>,
    publisher: watch::Sender<CarouselSnapshot>,
) {
    loop {
        let deadline = navigator.next_deadline();

        tokio::select! {
            command = inbox.recv() => match command {
                Some(Command::Input { input, reply }) => {
                    let at = now();
                    // Timers that came due while the event was in flight
                    // fire first so ordering matches wall time.
                    navigator.poll_timers(at);
                    let outcome = navigator.handle(input, at);
                    publish(&publisher, navigator.snapshot());
                    if reply.send(outcome).is_err() {
                        log::trace!("carousel input {:?} reply dropped", input);
                    }
                }
                Some(Command::Unmount) | None => break,
            },
            _ = sleep_until(deadline) => {
                let fired = navigator.poll_timers(now());
                if !fired.is_empty() {
                    log::trace!("carousel auto-advanced {} step(s)", fired.len());
                }
                publish(&publisher, navigator.snapshot());
            }
        }
    }

    navigator.unmount();
    publish(&publisher, navigator.snapshot());
    log::debug!("carousel driver stopped");
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            time::sleep_until(time::Instant::from_std(deadline)).await
        }
        None => std::future::pending().await,
    }
}

fn publish(publisher: &watch::Sender<CarouselSnapshot>, next: CarouselSnapshot) {
    publisher.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}

/// Read through tokio's clock so paused-time tests see the same instants.
fn now() -> Instant {
    time::Instant::now().into_std()
}
