//! High-level tracker operations.
//!
//! Each operation is one atomic load/mutate/save cycle against the document
//! store. Mutations save only the document they changed; queries save
//! nothing. The current instant is always injected by the caller.

use jiff::Zoned;

use super::Tracker;
use crate::{
    analytics::AnalyticsReport,
    dates::days_until,
    display::{
        Agenda, AgendaEntry, AssignOutcome, ModuleBoard, OperationStatus, ToggleOutcome,
        TransitionCommand, TransitionOutcome,
    },
    error::Result,
    models::{ExamCountdown, Journey, JourneyStatus, ProgressSummary, StatusReport},
    params::{AgendaQuery, AssignDate, ExamDate, ToggleTopic},
    store, streak,
};

impl Tracker {
    /// Flips a topic's completion flag.
    ///
    /// Gated: the flip only happens while the journey is `Active`; in any
    /// other state the store is left untouched and the outcome reports the
    /// rejection. Unknown ids are likewise a silent no-op.
    pub async fn toggle_topic(&self, params: &ToggleTopic, now: &Zoned) -> Result<ToggleOutcome> {
        let params = params.clone();
        let now = now.clone();
        self.with_db(move |db| {
            let journey = db.load_journey()?;
            if journey.status != JourneyStatus::Active {
                return Ok(ToggleOutcome::JourneyInactive(journey.status));
            }

            let mut modules = db.load_modules()?;
            let toggled = store::toggle_completion(
                &mut modules,
                params.module_id,
                &params.topic_id,
                now.timestamp(),
            )
            .cloned();

            match toggled {
                Some(topic) => {
                    db.save_modules(&modules)?;
                    if topic.completed {
                        Ok(ToggleOutcome::Completed(topic))
                    } else {
                        Ok(ToggleOutcome::Reopened(topic))
                    }
                }
                None => Ok(ToggleOutcome::TopicNotFound {
                    module_id: params.module_id,
                    topic_id: params.topic_id,
                }),
            }
        })
        .await
    }

    /// Sets a topic's planned study date. Never gated on the journey state.
    pub async fn assign_date(&self, params: &AssignDate) -> Result<AssignOutcome> {
        let params = params.clone();
        self.with_db(move |db| {
            let mut modules = db.load_modules()?;
            if !store::assign_planned_date(
                &mut modules,
                params.module_id,
                &params.topic_id,
                params.date,
            ) {
                return Ok(AssignOutcome::TopicNotFound {
                    module_id: params.module_id,
                    topic_id: params.topic_id,
                });
            }
            db.save_modules(&modules)?;
            let topic = modules
                .iter()
                .flat_map(|m| &m.topics)
                .find(|t| t.id == params.topic_id)
                .cloned();
            match topic {
                Some(topic) => Ok(AssignOutcome::Assigned {
                    topic,
                    date: params.date,
                }),
                // Unreachable after a successful assignment; kept to avoid
                // panicking on an inconsistent document.
                None => Ok(AssignOutcome::TopicNotFound {
                    module_id: params.module_id,
                    topic_id: params.topic_id,
                }),
            }
        })
        .await
    }

    /// Starts the journey (rejected unless `not-started`).
    pub async fn start_journey(&self, now: &Zoned) -> Result<TransitionOutcome> {
        self.transition(TransitionCommand::Start, now).await
    }

    /// Pauses the journey (rejected unless `active`).
    pub async fn pause_journey(&self, now: &Zoned) -> Result<TransitionOutcome> {
        self.transition(TransitionCommand::Pause, now).await
    }

    /// Resumes the journey (rejected unless `paused`).
    pub async fn resume_journey(&self, now: &Zoned) -> Result<TransitionOutcome> {
        self.transition(TransitionCommand::Resume, now).await
    }

    async fn transition(
        &self,
        command: TransitionCommand,
        now: &Zoned,
    ) -> Result<TransitionOutcome> {
        let now = now.clone();
        self.with_db(move |db| {
            let mut journey = db.load_journey()?;
            let applied = match command {
                TransitionCommand::Start => journey.start(&now),
                TransitionCommand::Pause => journey.pause(&now),
                TransitionCommand::Resume => journey.resume(&now),
            };
            if applied {
                db.save_journey(&journey)?;
                Ok(TransitionOutcome::Applied { command, journey })
            } else {
                Ok(TransitionOutcome::Rejected {
                    command,
                    status: journey.status,
                })
            }
        })
        .await
    }

    /// Sets the exam-countdown target day.
    pub async fn set_exam_date(&self, params: &ExamDate) -> Result<OperationStatus> {
        let date = params.date;
        self.with_db(move |db| {
            db.save_exam_date(date)?;
            Ok(OperationStatus::success(format!("Exam date set to {date}.")))
        })
        .await
    }

    /// Assembles the full status view: journey record, progress, streak, day
    /// counters, and exam countdown.
    pub async fn status(&self, now: &Zoned) -> Result<StatusReport> {
        let now = now.clone();
        self.with_db(move |db| {
            let journey = db.load_journey()?;
            let modules = db.load_modules()?;
            let exam = db.load_exam_date()?.map(|date| ExamCountdown {
                date,
                days_left: days_until(&now, date),
            });
            let progress = ProgressSummary::from_modules(&modules);
            let streak = streak::current_streak(&modules, &journey, &now);
            let current_day = journey.current_day(&now);
            let days_since_start = journey.days_since_start(&now);
            Ok(StatusReport {
                journey,
                progress,
                streak,
                current_day,
                days_since_start,
                exam,
            })
        })
        .await
    }

    /// The current journey record.
    pub async fn journey(&self) -> Result<Journey> {
        self.with_db(|db| db.load_journey()).await
    }

    /// The full module checklist.
    pub async fn board(&self) -> Result<ModuleBoard> {
        self.with_db(|db| Ok(ModuleBoard(db.load_modules()?))).await
    }

    /// The topics planned for a day (today when the query leaves it unset).
    pub async fn agenda(&self, params: &AgendaQuery, now: &Zoned) -> Result<Agenda> {
        let date = params.date.unwrap_or_else(|| now.date());
        self.with_db(move |db| {
            let modules = db.load_modules()?;
            let entries = store::topics_planned_for(&modules, date)
                .into_iter()
                .map(|planned| AgendaEntry {
                    module_id: planned.module_id,
                    module_title: planned.module_title.to_string(),
                    topic: planned.topic.clone(),
                })
                .collect();
            Ok(Agenda { date, entries })
        })
        .await
    }

    /// The three analytics series, recomputed from the current snapshot.
    pub async fn analytics(&self, now: &Zoned) -> Result<AnalyticsReport> {
        let now = now.clone();
        self.with_db(move |db| {
            let modules = db.load_modules()?;
            Ok(AnalyticsReport::from_snapshot(&modules, &now))
        })
        .await
    }
}
