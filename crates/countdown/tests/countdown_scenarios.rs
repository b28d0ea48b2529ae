use std::{sync::Arc, time::Duration};

use countdown::{
    CountdownController, CountdownError, CountdownOutcome, DisplayText, MemorySurface,
    SurfaceUpdate,
};
use shared::{
    domain::CountdownSeconds,
    protocol::{CountdownEvent, EventEnvelope},
};
use tokio::sync::broadcast;

const REJECTION: &str = "Please enter a number between 1 and 60";

fn controller() -> (Arc<CountdownController>, Arc<MemorySurface>) {
    let surface = Arc::new(MemorySurface::new());
    (CountdownController::new(surface.clone()), surface)
}

fn drain(events: &mut broadcast::Receiver<EventEnvelope>) -> Vec<CountdownEvent> {
    let mut drained = Vec::new();
    while let Ok(envelope) = events.try_recv() {
        drained.push(envelope.event);
    }
    drained
}

#[tokio::test(start_paused = true)]
async fn five_second_countdown_renders_each_second_then_completes() {
    let (controller, surface) = controller();

    let handle = controller.trigger("5").await.expect("start");
    assert!(!surface.trigger_enabled().await);
    assert_eq!(handle.join().await.expect("join"), CountdownOutcome::Completed);

    assert_eq!(
        surface.updates().await,
        vec![
            SurfaceUpdate::Trigger { enabled: false },
            SurfaceUpdate::Display(DisplayText::Remaining(5)),
            SurfaceUpdate::Display(DisplayText::Remaining(4)),
            SurfaceUpdate::Display(DisplayText::Remaining(3)),
            SurfaceUpdate::Display(DisplayText::Remaining(2)),
            SurfaceUpdate::Display(DisplayText::Remaining(1)),
            SurfaceUpdate::Display(DisplayText::Complete),
            SurfaceUpdate::Trigger { enabled: true },
        ]
    );
    assert_eq!(
        surface.display_history().await,
        vec!["5", "4", "3", "2", "1", "Countdown complete!"]
    );
}

#[tokio::test(start_paused = true)]
async fn out_of_range_and_non_numeric_input_never_starts() {
    for raw in ["0", "61", "abc", "", "-3", "0.9", ".5", "sixty"] {
        let (controller, surface) = controller();

        let err = controller
            .trigger(raw)
            .await
            .err()
            .expect("input should be rejected");
        assert!(
            matches!(err, CountdownError::InvalidDuration { ref input, .. } if input == raw),
            "unexpected error for {raw:?}: {err}"
        );
        assert_eq!(err.to_string(), REJECTION);

        assert_eq!(surface.display_history().await, vec![REJECTION]);
        assert!(surface.trigger_enabled().await);
        assert!(!controller.is_running().await);
    }
}

#[tokio::test(start_paused = true)]
async fn leading_digits_set_the_duration() {
    for (raw, seconds) in [("2.5", 2u8), ("5abc", 5), ("3 seconds", 3), (" 60.9 ", 60)] {
        let (controller, surface) = controller();

        let handle = controller.trigger(raw).await.expect("start");
        assert_eq!(handle.join().await.expect("join"), CountdownOutcome::Completed);

        let mut expected: Vec<String> = (1..=seconds).rev().map(|s| s.to_string()).collect();
        expected.push("Countdown complete!".to_string());
        assert_eq!(surface.display_history().await, expected, "input {raw:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn single_second_countdown_completes_without_waiting() {
    let (controller, surface) = controller();

    let handle = controller.trigger("1").await.expect("start");
    handle.join().await.expect("join");

    assert_eq!(
        surface.display_history().await,
        vec!["1", "Countdown complete!"]
    );
    let displays: Vec<_> = surface
        .timed_updates()
        .await
        .into_iter()
        .filter(|(_, update)| matches!(update, SurfaceUpdate::Display(_)))
        .collect();
    assert_eq!(displays[0].0, displays[1].0);
}

#[tokio::test(start_paused = true)]
async fn every_valid_duration_renders_exactly_n_ticks() {
    for n in 1..=60u8 {
        let (controller, surface) = controller();
        let seconds = CountdownSeconds::new(n.into()).expect("valid");
        controller
            .start(seconds)
            .await
            .expect("start")
            .join()
            .await
            .expect("join");

        let mut expected: Vec<String> = (1..=n).rev().map(|s| s.to_string()).collect();
        expected.push("Countdown complete!".to_string());
        assert_eq!(surface.display_history().await, expected, "duration {n}");
    }
}

#[tokio::test(start_paused = true)]
async fn steps_are_spaced_at_least_one_tick_apart() {
    let (controller, surface) = controller();
    controller
        .trigger("6")
        .await
        .expect("start")
        .join()
        .await
        .expect("join");

    let ticks: Vec<_> = surface
        .timed_updates()
        .await
        .into_iter()
        .filter(|(_, update)| matches!(update, SurfaceUpdate::Display(DisplayText::Remaining(_))))
        .map(|(at, _)| at)
        .collect();
    assert_eq!(ticks.len(), 6);
    for pair in ticks.windows(2) {
        assert!(pair[1] - pair[0] >= Duration::from_secs(1));
    }
}

#[tokio::test(start_paused = true)]
async fn custom_tick_controls_spacing() {
    let surface = Arc::new(MemorySurface::new());
    let controller = CountdownController::with_tick(surface.clone(), Duration::from_millis(250));
    let started = tokio::time::Instant::now();

    controller
        .trigger("3")
        .await
        .expect("start")
        .join()
        .await
        .expect("join");

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn independent_controllers_do_not_interfere() {
    let (first, first_surface) = controller();
    let (second, second_surface) = controller();

    let a = first.trigger("3").await.expect("first");
    let b = second.trigger("2").await.expect("second");
    assert_ne!(a.run_id(), b.run_id());

    a.join().await.expect("join first");
    b.join().await.expect("join second");

    assert_eq!(
        first_surface.display_history().await,
        vec!["3", "2", "1", "Countdown complete!"]
    );
    assert_eq!(
        second_surface.display_history().await,
        vec!["2", "1", "Countdown complete!"]
    );
}

#[tokio::test(start_paused = true)]
async fn event_stream_mirrors_surface_updates() {
    let (controller, _surface) = controller();
    let mut events = controller.subscribe_events();

    let handle = controller.trigger("2").await.expect("start");
    let run_id = handle.run_id();
    handle.join().await.expect("join");

    assert_eq!(
        drain(&mut events),
        vec![
            CountdownEvent::TriggerChanged {
                run_id: Some(run_id),
                enabled: false
            },
            CountdownEvent::Tick {
                run_id,
                remaining: 2
            },
            CountdownEvent::Tick {
                run_id,
                remaining: 1
            },
            CountdownEvent::Completed { run_id },
            CountdownEvent::TriggerChanged {
                run_id: Some(run_id),
                enabled: true
            },
        ]
    );
}

#[tokio::test]
async fn rejection_is_published_without_run_id() {
    let (controller, _surface) = controller();
    let mut events = controller.subscribe_events();

    controller.trigger("61").await.err().expect("rejected");

    assert_eq!(
        drain(&mut events),
        vec![CountdownEvent::Rejected {
            input: "61".into(),
            message: REJECTION.into(),
        }]
    );
}
