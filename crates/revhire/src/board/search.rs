use serde::Deserialize;

use super::domain::Job;

/// Criteria for catalog searches. Every present field must equal the
/// corresponding job field exactly; absent fields impose no constraint.
///
/// `experience_years` is an explicit option rather than a bare integer:
/// `Some(0)` matches only jobs requiring zero years, while an absent
/// parameter leaves experience unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobFilter {
    #[serde(default, rename = "job_role")]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default, rename = "company_name")]
    pub company: Option<String>,
}

impl JobFilter {
    /// True when no criteria are present, in which case every job matches.
    pub fn is_unconstrained(&self) -> bool {
        self.role.is_none()
            && self.location.is_none()
            && self.experience_years.is_none()
            && self.company.is_none()
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.role.as_deref().map_or(true, |role| role == job.title)
            && self
                .location
                .as_deref()
                .map_or(true, |location| location == job.location)
            && self
                .experience_years
                .map_or(true, |years| years == job.experience_years)
            && self
                .company
                .as_deref()
                .map_or(true, |company| company == job.company)
    }
}
