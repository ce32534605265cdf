//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer. Status
//! icons: `✓` completed topic, `○` pending topic.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Journey, JourneyStatus, ProgressSummary, StatusReport, StudyModule, Topic};

impl fmt::Display for JourneyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.completed { "✓" } else { "○" };
        write!(f, "{icon} {} `{}`", self.title, self.id)?;
        if let Some(date) = self.planned_date {
            write!(f, " (planned {date})")?;
        }
        Ok(())
    }
}

impl fmt::Display for StudyModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. {} ({}/{})",
            self.id,
            self.title,
            self.completed_count(),
            self.topics.len()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        for topic in &self.topics {
            writeln!(f, "- {topic}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} topics",
            self.completed_topics, self.total_topics
        )?;
        // An empty curriculum has no meaningful percentage; show a blank
        // marker rather than NaN.
        match self.percentage {
            Some(pct) => write!(f, " ({pct}%)"),
            None => write!(f, " (-)"),
        }
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Status: {}", self.status)?;
        if let Some(start) = self.start_date {
            writeln!(f, "- Started: week of Monday {start}")?;
        }
        if self.status == JourneyStatus::Paused {
            if let Some(paused_at) = &self.paused_at {
                writeln!(f, "- Paused since: {}", LocalDateTime(paused_at))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Study Journey")?;
        writeln!(f)?;
        write!(f, "{}", self.journey)?;
        if self.journey.start_date.is_some() {
            writeln!(
                f,
                "- Day {} of the journey ({} days since start)",
                self.current_day, self.days_since_start
            )?;
        }
        writeln!(f, "- Streak: {} day(s)", self.streak)?;
        writeln!(f, "- Progress: {}", self.progress)?;
        if let Some(exam) = &self.exam {
            match exam.days_left {
                d if d > 0 => writeln!(f, "- Exam: {} ({d} days left)", exam.date)?,
                0 => writeln!(f, "- Exam: {} (today)", exam.date)?,
                _ => writeln!(f, "- Exam: {} (already passed)", exam.date)?,
            }
        }
        Ok(())
    }
}
