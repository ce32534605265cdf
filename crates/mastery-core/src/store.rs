//! Pure mutations and queries over the module collection.
//!
//! These functions operate on the in-memory `modules` document; persistence
//! and the journey gate are the caller's responsibility (see
//! [`crate::tracker`]). Unknown module or topic ids leave the collection
//! untouched. Topic order within a module is never reordered.

use jiff::{civil::Date, Timestamp};

use crate::models::{StudyModule, Topic};

/// A topic paired with the module it belongs to, for day-plan listings.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedTopic<'a> {
    pub module_id: u32,
    pub module_title: &'a str,
    pub topic: &'a Topic,
}

/// Flips a topic's completion flag, stamping or clearing `completed_at`.
///
/// Returns the topic's new state, or `None` (with no mutation) when the
/// module or topic id is unknown. The journey-must-be-active gate is
/// enforced by the caller, not here.
pub fn toggle_completion<'a>(
    modules: &'a mut [StudyModule],
    module_id: u32,
    topic_id: &str,
    now: Timestamp,
) -> Option<&'a Topic> {
    let module = modules.iter_mut().find(|m| m.id == module_id)?;
    let topic = module.topic_mut(topic_id)?;
    topic.set_completed(!topic.completed, now);
    Some(topic)
}

/// Sets a topic's planned study date. Unconditional: allowed in every
/// journey state.
///
/// Returns `false` (with no mutation) when the module or topic id is
/// unknown.
pub fn assign_planned_date(
    modules: &mut [StudyModule],
    module_id: u32,
    topic_id: &str,
    date: Date,
) -> bool {
    let Some(module) = modules.iter_mut().find(|m| m.id == module_id) else {
        return false;
    };
    let Some(topic) = module.topic_mut(topic_id) else {
        return false;
    };
    topic.planned_date = Some(date);
    true
}

/// The set of distinct local calendar days on which at least one topic was
/// completed.
pub fn completion_days(
    modules: &[StudyModule],
    tz: &jiff::tz::TimeZone,
) -> std::collections::HashSet<Date> {
    modules
        .iter()
        .flat_map(|m| &m.topics)
        .filter(|t| t.completed)
        .filter_map(|t| t.completed_at)
        .map(|ts| crate::dates::day_of(ts, tz))
        .collect()
}

/// Lists every topic planned for the given day, in module/topic order.
pub fn topics_planned_for(modules: &[StudyModule], date: Date) -> Vec<PlannedTopic<'_>> {
    modules
        .iter()
        .flat_map(|m| {
            m.topics
                .iter()
                .filter(move |t| t.planned_date == Some(date))
                .map(move |topic| PlannedTopic {
                    module_id: m.id,
                    module_title: &m.title,
                    topic,
                })
        })
        .collect()
}
