use launch_countdown::countdown::config::DEFAULT_REDIRECT_URL;
use launch_countdown::countdown::{Countdown, CountdownPhase};
use launch_countdown::physic_engine::config::PhysicConfig;
use launch_countdown::physic_engine::physic_engine_launch::PhysicEngineTestHelpers;
use launch_countdown::physic_engine::{LaunchPhysicEngine, PhysicEngine};
use launch_countdown::FrameScheduler;
mod helpers;
use helpers::{
    call_log, calls_with_prefix, CallLog, DummyNarrator, DummyNavigator, RecordingNarrator,
    RecordingNavigator,
};

type TestScheduler = FrameScheduler<LaunchPhysicEngine, RecordingNarrator, RecordingNavigator>;

fn physic() -> LaunchPhysicEngine {
    LaunchPhysicEngine::with_seed(&PhysicConfig::default(), 800.0, 600.0, 42)
}

fn recording_scheduler(log: &CallLog) -> TestScheduler {
    FrameScheduler::new(
        physic(),
        Countdown::default(),
        RecordingNarrator::new(log.clone()),
        RecordingNavigator::new(log.clone()),
    )
}

#[test]
fn test_full_show_end_to_end() {
    let log = call_log();
    let mut scheduler = recording_scheduler(&log);

    assert!(scheduler.start());
    assert_eq!(*log.borrow(), vec!["narrator.speak:10"]);

    for _ in 0..10 {
        scheduler.advance(1.0);
    }
    assert_eq!(scheduler.countdown().display_value(), "0");
    assert_eq!(scheduler.phase(), CountdownPhase::Redirecting);
    assert!(calls_with_prefix(&log, "navigator.").is_empty());

    let report = scheduler.advance(1.5);
    assert!(report.redirected());
    assert_eq!(
        calls_with_prefix(&log, "navigator."),
        vec![format!("navigator.navigate:{}", DEFAULT_REDIRECT_URL)]
    );
    assert_eq!(scheduler.redirect_count(), 1);

    // Plus rien ne se passe ensuite
    for _ in 0..5 {
        assert!(!scheduler.advance(1.0).redirected());
    }
    assert_eq!(scheduler.countdown().counter(), 0);
    assert_eq!(scheduler.redirect_count(), 1);
    assert_eq!(calls_with_prefix(&log, "navigator.").len(), 1);
}

#[test]
fn test_narration_sequence() {
    let log = call_log();
    let mut scheduler = recording_scheduler(&log);
    scheduler.start();
    scheduler.advance(12.0);

    let spoken = calls_with_prefix(&log, "narrator.speak:");
    let mut expected: Vec<String> = (2..=10)
        .rev()
        .map(|n| format!("narrator.speak:{}", n))
        .collect();
    expected.push("narrator.speak:One... Ignition starting.".into());
    expected.push("narrator.speak:Launch!".into());
    assert_eq!(spoken, expected);

    // L'annulation arrive après "Launch!" : elle ne le supprime pas
    let calls = log.borrow();
    let launch = calls
        .iter()
        .position(|c| c == "narrator.speak:Launch!")
        .expect("Launch! must be spoken");
    let cancel = calls
        .iter()
        .position(|c| c == "narrator.cancel")
        .expect("narration is cancelled at zero");
    assert!(launch < cancel);
}

#[test]
fn test_rocket_follows_countdown() {
    let log = call_log();
    let mut scheduler = recording_scheduler(&log);
    scheduler.start();

    for _ in 0..9 {
        scheduler.advance(1.0);
    }
    // Compteur à 1 : fusée visible mais pas encore partie
    let rocket = scheduler.physic_engine().rocket();
    assert!(rocket.visible && rocket.shaking);
    assert!(!rocket.launching);

    scheduler.advance(1.0);
    let rocket = scheduler.physic_engine().rocket();
    assert!(rocket.fire);
    assert!(rocket.launching);
    // Décollage à 1.0 puis paliers cumulés 0.18 + 0.4 + 1.5 au tick 0
    assert!(rocket.speed >= 1.0 + 2.08 - 1e-4, "speed: {}", rocket.speed);
}

#[test]
fn test_step_size_does_not_change_the_flight() {
    let coarse_log = call_log();
    let mut coarse = recording_scheduler(&coarse_log);
    coarse.start();
    for _ in 0..10 {
        coarse.advance(1.0);
    }
    coarse.advance(0.5);

    let fine_log = call_log();
    let mut fine = recording_scheduler(&fine_log);
    fine.start();
    for _ in 0..630 {
        fine.advance(1.0 / 60.0);
    }

    let (a, b) = (coarse.physic_engine().rocket(), fine.physic_engine().rocket());
    assert!((a.speed - b.speed).abs() < 1e-4);
    // Décollage à 9.9 s : ~6 frames à 1.0 puis ~30 frames à 3.08
    assert!(a.altitude() > 90.0 && a.altitude() < 110.0, "altitude: {}", a.altitude());
    // Au plus une frame d'écart aux frontières de frames
    assert!(
        (a.y - b.y).abs() < 2.0 * a.speed,
        "coarse y {} vs fine y {}",
        a.y,
        b.y
    );
    assert_eq!(*coarse_log.borrow(), *fine_log.borrow());
}

#[test]
fn test_ticks_trigger_flash() {
    let log = call_log();
    let mut scheduler = recording_scheduler(&log);
    scheduler.start();

    scheduler.advance(0.99);
    assert_eq!(scheduler.physic_engine().effects().flash_alpha(), 0.0);

    // Juste après le premier tick, le flash est encore visible
    let report = scheduler.advance(0.02);
    assert_eq!(report.events.len(), 1);
    assert!(scheduler.physic_engine().effects().flash_alpha() > 0.0);
}

#[test]
fn test_start_only_once() {
    let log = call_log();
    let mut scheduler = recording_scheduler(&log);
    assert!(scheduler.start());
    scheduler.advance(2.0);
    assert!(!scheduler.start());
    assert_eq!(scheduler.countdown().counter(), 8);
    assert_eq!(calls_with_prefix(&log, "narrator.speak:10").len(), 1);
}

#[test]
fn test_idle_show_keeps_animating() {
    let mut scheduler = FrameScheduler::new(
        physic(),
        Countdown::default(),
        DummyNarrator,
        DummyNavigator,
    );
    let report = scheduler.advance(1.0);
    assert!(report.events.is_empty());
    assert_eq!(report.update.frames, 60);
    assert_eq!(scheduler.phase(), CountdownPhase::Idle);
    assert_eq!(scheduler.countdown().counter(), 10);
}

#[test]
fn test_navigation_failure_is_not_fatal() {
    let log = call_log();
    let mut scheduler = FrameScheduler::new(
        physic(),
        Countdown::default(),
        RecordingNarrator::new(log.clone()),
        RecordingNavigator::failing(log.clone()),
    );
    scheduler.start();
    scheduler.advance(12.0);

    assert_eq!(scheduler.redirect_count(), 1);
    assert!(scheduler.is_running());
    scheduler.advance(1.0);
    assert_eq!(calls_with_prefix(&log, "navigator.").len(), 1);
}

#[test]
fn test_stop_freezes_everything() {
    let log = call_log();
    let mut scheduler = recording_scheduler(&log);
    scheduler.start();
    scheduler.advance(3.0);
    scheduler.stop();

    let elapsed = scheduler.elapsed();
    let particles = scheduler.physic_engine().particles_count();
    let report = scheduler.advance(5.0);

    assert!(report.events.is_empty());
    assert_eq!(report.update.frames, 0);
    assert_eq!(scheduler.elapsed(), elapsed);
    assert_eq!(scheduler.countdown().counter(), 7);
    assert_eq!(scheduler.physic_engine().particles_count(), particles);
}

#[test]
fn test_close_releases_narrator() {
    let log = call_log();
    let mut scheduler = recording_scheduler(&log);
    scheduler.start();
    scheduler.close();

    assert!(!scheduler.is_running());
    assert_eq!(log.borrow().last().map(String::as_str), Some("narrator.close"));
}
