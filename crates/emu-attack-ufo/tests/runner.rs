//! Background runner lifecycle.

mod common;

use std::thread;
use std::time::{Duration, Instant};

use emu_attack_ufo::{Button, MachineRunner, MachineType, Pacing};

fn wait_for_frames(runner: &MachineRunner, count: u64) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while runner.frames().frames_completed() < count {
        assert!(Instant::now() < deadline, "runner produced no frames");
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn runner_starts_paused() {
    let runner = MachineRunner::spawn(common::machine(MachineType::Ntsc), Pacing::Unthrottled)
        .expect("spawn");
    assert!(runner.is_paused());
    thread::sleep(Duration::from_millis(50));
    assert_eq!(runner.frames().frames_completed(), 0);
    let machine = runner.stop().expect("worker exits cleanly");
    assert_eq!(machine.frame_count(), 0);
    assert!(machine.is_paused());
}

#[test]
fn runner_produces_frames_and_stops() {
    let runner = MachineRunner::spawn(common::machine(MachineType::Ntsc), Pacing::Unthrottled)
        .expect("spawn");
    runner.resume();
    wait_for_frames(&runner, 3);
    let frame = runner.frames().take_ready().expect("a frame is ready");
    assert_eq!(frame.len(), 260 * 261);

    let machine = runner.stop().expect("worker exits cleanly");
    assert!(machine.frame_count() >= 3);
    assert!(machine.is_paused());
}

#[test]
fn pause_holds_and_resume_continues() {
    let runner = MachineRunner::spawn(common::machine(MachineType::Pal), Pacing::Unthrottled)
        .expect("spawn");
    runner.resume();
    wait_for_frames(&runner, 1);

    runner.pause();
    // Let the frame in flight finish.
    thread::sleep(Duration::from_millis(200));
    let held = runner.frames().frames_completed();
    thread::sleep(Duration::from_millis(100));
    assert_eq!(runner.frames().frames_completed(), held);

    runner.resume();
    wait_for_frames(&runner, held + 2);
    let machine = runner.stop().expect("worker exits cleanly");
    assert!(machine.frame_count() >= held + 2);
}

#[test]
fn joystick_handle_is_shared_with_worker() {
    let runner = MachineRunner::spawn(common::machine(MachineType::Ntsc), Pacing::Unthrottled)
        .expect("spawn");
    runner.joystick().press(Button::Coin);
    let machine = runner.stop().expect("worker exits cleanly");
    assert!(machine.joystick().is_pressed(Button::Coin));
}

#[test]
fn real_time_pacing_tracks_frame_rate() {
    let runner = MachineRunner::spawn(common::machine(MachineType::Ntsc), Pacing::RealTime)
        .expect("spawn");
    let start = Instant::now();
    runner.resume();
    wait_for_frames(&runner, 6);
    // Six frames at 60 Hz can't finish in much under 80 ms.
    assert!(start.elapsed() >= Duration::from_millis(80));
    drop(runner);
}
