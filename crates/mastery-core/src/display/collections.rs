//! Wrapper types for collections and composite views.

use std::fmt;

use jiff::civil::Date;

use crate::analytics::AnalyticsReport;
use crate::models::{ProgressSummary, StudyModule, Topic};

/// Newtype wrapper for displaying the full module checklist.
pub struct ModuleBoard(pub Vec<StudyModule>);

impl fmt::Display for ModuleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Study Modules")?;
        writeln!(f)?;
        writeln!(f, "Overall: {}", ProgressSummary::from_modules(&self.0))?;
        writeln!(f)?;
        for module in &self.0 {
            writeln!(f, "{module}")?;
        }
        Ok(())
    }
}

/// One agenda line: a topic together with its module context.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaEntry {
    pub module_id: u32,
    pub module_title: String,
    pub topic: Topic,
}

/// The topics planned for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Agenda {
    pub date: Date,
    pub entries: Vec<AgendaEntry>,
}

impl fmt::Display for Agenda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Planned for {}", self.date)?;
        writeln!(f)?;
        if self.entries.is_empty() {
            writeln!(f, "No topics planned for this day.")?;
            return Ok(());
        }
        for entry in &self.entries {
            writeln!(f, "- {} [{}]", entry.topic, entry.module_title)?;
        }
        Ok(())
    }
}

impl fmt::Display for AnalyticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Performance Analytics")?;
        writeln!(f)?;

        writeln!(f, "## Topics completed per week")?;
        writeln!(f)?;
        for weekly in &self.weekly_completion {
            writeln!(f, "- {}: {}/{}", weekly.week, weekly.completed, weekly.total)?;
        }

        writeln!(f)?;
        writeln!(f, "## Streak history (last 30 days)")?;
        writeln!(f)?;
        if self.streak_history.is_empty() {
            writeln!(f, "No completions recorded yet.")?;
        }
        for point in &self.streak_history {
            writeln!(f, "- {}: {}", point.date, point.streak)?;
        }

        writeln!(f)?;
        writeln!(f, "## Revisions per day (last 30 days)")?;
        writeln!(f)?;
        if self.revision_frequency.is_empty() {
            writeln!(f, "No completions recorded yet.")?;
        }
        for point in &self.revision_frequency {
            writeln!(f, "- {}: {}", point.date, point.revisions)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_curriculum;

    #[test]
    fn empty_agenda_mentions_it() {
        let agenda = Agenda {
            date: jiff::civil::date(2026, 3, 5),
            entries: Vec::new(),
        };
        let text = format!("{agenda}");
        assert!(text.contains("Planned for 2026-03-05"));
        assert!(text.contains("No topics planned"));
    }

    #[test]
    fn board_lists_every_module() {
        let board = ModuleBoard(default_curriculum());
        let text = format!("{board}");
        for id in 1..=6 {
            assert!(text.contains(&format!("## {id}. Week {id}")));
        }
        assert!(text.contains("Overall: 0/30 topics (0%)"));
    }
}
