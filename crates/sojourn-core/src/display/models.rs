//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core
//! domain models, separated from the model definitions to maintain clean
//! separation of concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with status icons and timeline lines
//! - Context-aware display behavior for different use cases

use std::fmt;

use super::datetime::{LocalDateTime, ShortDate};
use crate::{
    models::{
        Activity, ActivityStatus, ActivityType, DayPlan, DayProgress, Plan, PlanStatus,
        PlanSummary,
    },
    schedule::{clock, total_duration, TimeSlot},
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.as_str())?;
        if let Some(destination) = &self.destination {
            writeln!(f, "- Destination: {destination}")?;
        }
        writeln!(
            f,
            "- Dates: {} to {} ({} days)",
            self.start_date,
            self.end_date,
            self.days.len()
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        for day in &self.days {
            writeln!(f)?;
            write!(f, "{}", day)?;
        }

        Ok(())
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## Day {}: {}", self.day_number, ShortDate(&self.date))?;
        if let Some(title) = &self.title {
            write!(f, " - {title}")?;
        }
        writeln!(f, " (ID: {})", self.id)?;
        writeln!(f)?;

        if let Some(notes) = &self.notes {
            writeln!(f, "{notes}")?;
            writeln!(f)?;
        }

        if self.activities.is_empty() {
            writeln!(f, "No activities planned.")?;
        } else {
            for activity in &self.activities {
                write!(f, "{}", activity)?;
            }
            writeln!(
                f,
                "\nTotal planned: {}",
                clock::format_duration(total_duration(&self.activities))
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} **{}** ({}, {})",
            clock::format_time_range(&self.start_time, self.duration),
            self.title,
            self.status.with_icon(),
            clock::format_duration(self.duration)
        )?;
        if let Some(location) = &self.location {
            write!(f, " @ {location}")?;
        }
        if self.is_break {
            write!(f, " [break]")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_activities > 0 {
            format!(
                " ({}/{})",
                self.completed_activities, self.total_activities
            )
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        if let Some(destination) = &self.destination {
            writeln!(f, "- **Destination**: {destination}")?;
        }

        writeln!(
            f,
            "- **Dates**: {} to {} ({} days)",
            self.start_date, self.end_date, self.total_days
        )?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each plan

        Ok(())
    }
}

impl fmt::Display for DayProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}/{} activities resolved ({}%)",
            self.completed, self.total, self.percentage
        )
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = clock::minutes_between(&self.start, &self.end).max(0) as u32;
        match &self.activity {
            Some(activity) => writeln!(
                f,
                "- {} - {} {}",
                self.start, self.end, activity.title
            ),
            None => writeln!(
                f,
                "- {} - {} free ({})",
                self.start,
                self.end,
                clock::format_duration(length)
            ),
        }
    }
}
