//! Deadline penalty assessment against a caller-supplied "today".

use chrono::NaiveDate;

use crate::triage::domain::IncidentDates;

use super::{Deadline, MeritConfig};

pub(crate) struct DeadlineAssessment {
    /// Zero or negative; summed across all triggered deadlines.
    pub penalty: i32,
    pub warnings: Vec<String>,
}

pub(crate) fn assess(
    deadlines: &[Deadline],
    dates: &IncidentDates,
    today: NaiveDate,
    config: &MeritConfig,
) -> DeadlineAssessment {
    let mut penalty: i32 = 0;
    let mut warnings = Vec::new();

    for deadline in deadlines {
        let days_until = (deadline.due_date - today).num_days();

        if days_until < 0 {
            penalty -= config.overdue_penalty as i32;
            warnings.push(format!(
                "{} passed {} days ago - case may be barred",
                deadline.label,
                days_until.abs()
            ));
        } else if days_until < config.urgent_window_days {
            penalty -= config.urgent_penalty as i32;
            warnings.push(format!(
                "Only {} days until {} - urgent action needed",
                days_until, deadline.label
            ));
        } else if days_until < config.warning_window_days {
            penalty -= config.warning_penalty as i32;
            warnings.push(format!(
                "{} in {} days - plan accordingly",
                deadline.label, days_until
            ));
        }
    }

    // Limitation risk runs from the earliest known incident. It widens the
    // penalty floor rather than stacking on the deadline penalties.
    if let Some(incident) = dates.first_incident.or(dates.last_incident) {
        let days_since = (today - incident).num_days();

        if days_since > config.limitation_bar_days {
            penalty = penalty.min(-(config.overdue_penalty as i32));
            warnings.push("Incident over 2 years ago - may exceed limitation period".to_string());
        } else if days_since > config.limitation_risk_days {
            penalty = penalty.min(-(config.urgent_penalty as i32));
            warnings.push("Incident over 18 months ago - check limitation period".to_string());
        }
    }

    DeadlineAssessment { penalty, warnings }
}
