//! End-to-end scenarios through the tracker facade.

mod common;

use common::{at, create_test_tracker};
use mastery_core::{
    Database, JourneyStatus, ToggleOutcome, ToggleTopic, TrackerBuilder, TransitionOutcome,
};
use tempfile::TempDir;

fn params(module_id: u32, topic_id: &str) -> ToggleTopic {
    ToggleTopic {
        module_id,
        topic_id: topic_id.to_string(),
    }
}

#[tokio::test]
async fn full_study_week() {
    // Journey started on a Monday, one topic completed each day Mon-Fri,
    // no pauses, checked on Friday evening.
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker
        .start_journey(&at(2026, 3, 2, 8))
        .await
        .expect("start failed");

    let topic_ids = ["w1-t1", "w1-t2", "w1-t3", "w1-t4", "w1-t5"];
    for (offset, topic_id) in topic_ids.iter().enumerate() {
        let day = 2 + offset as i8;
        let outcome = tracker
            .toggle_topic(&params(1, topic_id), &at(2026, 3, day, 19))
            .await
            .expect("toggle failed");
        assert!(matches!(outcome, ToggleOutcome::Completed(_)));
    }

    let friday_evening = at(2026, 3, 6, 21);
    let report = tracker.status(&friday_evening).await.expect("status failed");
    assert_eq!(report.streak, 5);
    assert_eq!(report.current_day, 5);
    assert_eq!(report.progress.completed_topics, 5);
    assert_eq!(report.progress.percentage, Some(17));

    let analytics = tracker
        .analytics(&friday_evening)
        .await
        .expect("analytics failed");
    assert_eq!(analytics.weekly_completion[0].completed, 5);
    assert_eq!(analytics.streak_history.len(), 31);
    assert_eq!(analytics.streak_history.last().map(|p| p.streak), Some(5));
}

#[tokio::test]
async fn pause_bridges_the_streak_across_idle_days() {
    // Active Mon-Wed with daily completions, paused Thursday, resumed the
    // following Monday with a completion that evening: the Thu-Sun gap falls
    // inside the pause window, so the chain is 3 + 1 = 4.
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker
        .start_journey(&at(2026, 3, 2, 8))
        .await
        .expect("start failed");

    for (day, topic_id) in [(2, "w1-t1"), (3, "w1-t2"), (4, "w1-t3")] {
        tracker
            .toggle_topic(&params(1, topic_id), &at(2026, 3, day, 19))
            .await
            .expect("toggle failed");
    }

    tracker
        .pause_journey(&at(2026, 3, 5, 9))
        .await
        .expect("pause failed");

    // While paused the day counter stays frozen at Thursday (day 4).
    let sunday = at(2026, 3, 8, 20);
    let report = tracker.status(&sunday).await.expect("status failed");
    assert_eq!(report.journey.status, JourneyStatus::Paused);
    assert_eq!(report.current_day, 4);
    assert_eq!(report.streak, 3);

    tracker
        .resume_journey(&at(2026, 3, 9, 9))
        .await
        .expect("resume failed");
    tracker
        .toggle_topic(&params(1, "w1-t4"), &at(2026, 3, 9, 19))
        .await
        .expect("toggle failed");

    let monday_evening = at(2026, 3, 9, 21);
    let report = tracker.status(&monday_evening).await.expect("status failed");
    assert_eq!(report.streak, 4);
    assert_eq!(report.current_day, 8);
}

#[tokio::test]
async fn double_transitions_are_rejected() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let now = at(2026, 3, 2, 8);

    let outcome = tracker.pause_journey(&now).await.expect("pause failed");
    assert!(matches!(outcome, TransitionOutcome::Rejected { .. }));

    tracker.start_journey(&now).await.expect("start failed");
    let outcome = tracker.start_journey(&now).await.expect("start failed");
    assert!(matches!(outcome, TransitionOutcome::Rejected { .. }));

    tracker.pause_journey(&now).await.expect("pause failed");
    let outcome = tracker.pause_journey(&now).await.expect("pause failed");
    assert!(matches!(outcome, TransitionOutcome::Rejected { .. }));
}

#[tokio::test]
async fn malformed_journey_document_falls_back_to_not_started() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    {
        let mut db = Database::new(&db_path).expect("Failed to open database");
        db.put_document("journey", "{not json at all")
            .expect("Failed to store document");
    }

    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    let journey = tracker.journey().await.expect("journey failed");
    assert_eq!(journey.status, JourneyStatus::NotStarted);
    assert_eq!(journey.start_date, None);

    // The fallback also means the streak short-circuits to zero.
    let report = tracker.status(&at(2026, 3, 2, 8)).await.expect("status failed");
    assert_eq!(report.streak, 0);
}
