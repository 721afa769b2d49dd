//! Background emulation thread.
//!
//! The runner owns the machine on a dedicated thread and steps it one
//! frame at a time. The presentation side keeps a [`FrameReader`] and a
//! [`Joystick`]; it never touches the machine directly. Pause and stop
//! are flags under one mutex with a condvar to wake a paused worker.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use mos_vic_6560::FrameReader;

use crate::config::MachineType;
use crate::error::MachineError;
use crate::input::Joystick;
use crate::machine::AttackUfo;

/// How the worker spaces frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// One frame per frame period of the emulated board.
    RealTime,
    /// As fast as the host allows.
    Unthrottled,
}

#[derive(Debug)]
struct RunState {
    paused: bool,
    stop: bool,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<RunState>,
    wake: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, RunState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to a machine running on its own thread.
#[derive(Debug)]
pub struct MachineRunner {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<AttackUfo>>,
    frames: FrameReader,
    joystick: Joystick,
    machine_type: MachineType,
}

impl MachineRunner {
    /// Move `machine` onto a new thread. The runner starts paused.
    pub fn spawn(machine: AttackUfo, pacing: Pacing) -> Result<Self, MachineError> {
        let shared = Arc::new(Shared {
            state: Mutex::new(RunState {
                paused: true,
                stop: false,
            }),
            wake: Condvar::new(),
        });
        let frames = machine.frames();
        let joystick = machine.joystick();
        let machine_type = machine.machine_type();

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("attack-ufo".into())
            .spawn(move || run(machine, &worker_shared, pacing))?;
        log::debug!("emulation thread started ({pacing:?})");

        Ok(Self {
            shared,
            worker: Some(worker),
            frames,
            joystick,
            machine_type,
        })
    }

    /// Stop stepping after the current frame. Chip state is kept.
    pub fn pause(&self) {
        self.shared.lock().paused = true;
        log::debug!("runner paused");
    }

    pub fn resume(&self) {
        self.shared.lock().paused = false;
        self.shared.wake.notify_all();
        log::debug!("runner resumed");
    }

    pub fn set_paused(&self, paused: bool) {
        if paused {
            self.pause();
        } else {
            self.resume();
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.shared.lock().paused
    }

    #[must_use]
    pub fn frames(&self) -> &FrameReader {
        &self.frames
    }

    #[must_use]
    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    #[must_use]
    pub fn machine_type(&self) -> MachineType {
        self.machine_type
    }

    /// Stop the thread and take the machine back, paused.
    pub fn stop(mut self) -> Result<AttackUfo, MachineError> {
        self.shutdown().ok_or(MachineError::WorkerPanicked)
    }

    fn shutdown(&mut self) -> Option<AttackUfo> {
        let worker = self.worker.take()?;
        self.shared.lock().stop = true;
        self.shared.wake.notify_all();
        let machine = worker.join().ok();
        log::debug!("emulation thread stopped");
        machine
    }
}

impl Drop for MachineRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(mut machine: AttackUfo, shared: &Shared, pacing: Pacing) -> AttackUfo {
    let frame_duration = machine.machine_type().frame_duration();
    let mut deadline = Instant::now();

    loop {
        {
            let mut state = shared.lock();
            if state.paused && !state.stop {
                machine.set_paused(true);
                while state.paused && !state.stop {
                    state = shared
                        .wake
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
                deadline = Instant::now();
            }
            if state.stop {
                break;
            }
        }

        machine.set_paused(false);
        machine.run_until_frame(false);

        if pacing == Pacing::RealTime {
            deadline += frame_duration;
            wait_until(deadline);
            // Fell behind (host stall): don't try to catch up.
            let now = Instant::now();
            if now > deadline + frame_duration {
                deadline = now;
            }
        }
    }

    machine.set_paused(true);
    machine
}

/// Sleep most of the way to `deadline`, then spin the last millisecond.
fn wait_until(deadline: Instant) {
    let now = Instant::now();
    if now >= deadline {
        return;
    }
    let remaining = deadline - now;
    if remaining > Duration::from_micros(1500) {
        thread::sleep(remaining - Duration::from_micros(1000));
    }
    while Instant::now() < deadline {
        std::hint::spin_loop();
    }
}
