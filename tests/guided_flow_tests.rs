// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end guided logging flow: materialize a plan day, walk it with
//! the guided cursor, save, and see the next materialization pick up the
//! new numbers.

use trakker::models::{DayType, PlanDay, PlanExercise, WorkoutSession};
use trakker::services::{history, materialize_day, DraftSession, GuidedCursor};
use trakker::store::{MemoryStore, RecordStore};

mod common;

fn push_day() -> PlanDay {
    PlanDay {
        day_index: 0,
        day_type: DayType::Push,
        label: "Push".to_string(),
        exercises: vec![PlanExercise {
            name: "Bench Press".to_string(),
            default_sets: 2,
            default_reps: 8,
            ..PlanExercise::new()
        }],
    }
}

#[test]
fn test_full_guided_session_cycle() {
    let store = MemoryStore::new();
    store
        .upsert_session(common::session_on_day(
            "Past Push",
            1,
            vec![common::exercise("Bench Press", &[(8, 60.0), (6, 62.5)])],
        ))
        .unwrap();

    // Start today's workout from the plan day.
    let sessions = store.list_sessions();
    let exercises = materialize_day(&push_day(), &sessions);
    let mut draft = DraftSession::with_exercises("Push", exercises);

    assert_eq!(draft.cursor(), GuidedCursor { exercise: 0, set: 0 });

    // First set: take the suggestion up by 2.5 kg.
    let suggestion = draft.suggested_weight(&sessions);
    assert!(suggestion.has_history);
    assert_eq!(suggestion.weight, 60.0);
    draft.apply_suggested_weight(2.5, &sessions);
    draft.advance();

    // Second set: keep the historical weight as-is.
    draft.apply_suggested_weight(0.0, &sessions);
    draft.advance(); // end of the session, cursor stays

    assert_eq!(draft.cursor(), GuidedCursor { exercise: 0, set: 1 });

    let session = draft.into_session().unwrap();
    assert_eq!(session.exercises[0].sets[0].weight, 62.5);
    assert_eq!(session.exercises[0].sets[1].weight, 62.5);
    store.upsert_session(session).unwrap();

    // The next materialization starts from today's numbers.
    let sessions = store.list_sessions();
    let next = materialize_day(&push_day(), &sessions);
    assert_eq!(next[0].sets[0].weight, 62.5);
    assert_eq!(next[0].sets[0].reps, 8);
}

#[test]
fn test_rename_autofill_only_touches_pristine_rows() {
    let store = MemoryStore::new();
    store
        .upsert_session(common::session_on_day(
            "Arms",
            1,
            vec![common::exercise("Curl", &[(8, 60.0)])],
        ))
        .unwrap();
    let sessions = store.list_sessions();

    // A fresh row autofills on rename.
    let mut draft = DraftSession::new();
    let row = draft.exercises()[0].id;
    draft.rename_exercise(row, "Curl", &sessions);
    assert_eq!(draft.exercises()[0].sets[0].weight, 60.0);
    assert_eq!(draft.exercises()[0].sets[0].reps, 8);

    // A row with user-entered numbers survives the rename untouched.
    let mut draft = DraftSession::new();
    let row = draft.exercises()[0].id;
    let set = draft.exercises()[0].sets[0].id;
    draft.set_reps(row, set, 12);
    draft.set_weight(row, set, 40.0);
    draft.rename_exercise(row, "Curl", &sessions);
    assert_eq!(draft.exercises()[0].sets[0].reps, 12);
    assert_eq!(draft.exercises()[0].sets[0].weight, 40.0);
}

#[test]
fn test_saved_draft_becomes_the_most_recent_history() {
    let store = MemoryStore::new();
    store
        .upsert_session(common::session_on_day(
            "Old",
            1,
            vec![common::exercise("Squat", &[(5, 90.0)])],
        ))
        .unwrap();

    let draft =
        DraftSession::with_exercises("Legs", vec![common::exercise("Squat", &[(5, 95.0)])]);
    store.upsert_session(draft.into_session().unwrap()).unwrap();

    let sessions: Vec<WorkoutSession> = store.list_sessions();
    let last = history::last_sets_for_exercise(&sessions, "squat").unwrap();
    assert_eq!(last[0].weight, 95.0);
}
