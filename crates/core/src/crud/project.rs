//! Project list helpers: text filter, client suggestions, mission totals

use std::collections::{BTreeMap, BTreeSet};

use travelgate_common::text::{contains_ignore_case, is_blank};
use travelgate_domain::{Project, RequestId};
use tracing::warn;

use crate::sync::MissionStats;

/// Free-text criteria of the project list; blank criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub name: Option<String>,
    pub code: Option<String>,
    pub client: Option<String>,
}

/// Blank criterion, or a present value containing it.
pub(crate) fn text_matches(value: Option<&str>, criterion: Option<&str>) -> bool {
    match criterion {
        Some(needle) if !is_blank(Some(needle)) => {
            value.is_some_and(|value| contains_ignore_case(value, needle))
        }
        _ => true,
    }
}

impl ProjectFilter {
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.code, &self.client].iter().all(|c| is_blank(c.as_deref()))
    }

    pub fn matches(&self, project: &Project) -> bool {
        text_matches(project.name.as_deref(), self.name.as_deref())
            && text_matches(project.code.as_deref(), self.code.as_deref())
            && text_matches(project.client_name.as_deref(), self.client.as_deref())
    }

    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        projects.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// Distinct client names, sorted.
pub fn unique_clients(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .filter_map(|p| p.client_name.as_deref())
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Mission total per project; a failed fetch yields no totals.
pub async fn mission_counts(stats: &dyn MissionStats) -> BTreeMap<RequestId, i64> {
    stats.count_missions_by_project().await.unwrap_or_else(|err| {
        warn!(error = %err, "mission totals unavailable");
        BTreeMap::new()
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use travelgate_domain::{Result, TravelgateError};

    use super::*;

    fn project(name: &str, code: &str, client: Option<&str>) -> Project {
        Project {
            name: Some(name.into()),
            code: Some(code.into()),
            client_name: client.map(Into::into),
            ..Project::default()
        }
    }

    fn projects() -> Vec<Project> {
        vec![
            project("Atlas", "ATL", Some("ACME")),
            project("Borealis", "BOR", Some("Globex")),
            project("Cobalt", "COB", None),
            project("Delta", "DLT", Some("ACME")),
        ]
    }

    #[test]
    fn filter_matches_fragments_ignoring_case() {
        let filter = ProjectFilter { client: Some(" acm ".into()), ..ProjectFilter::default() };
        let names: Vec<_> =
            filter.apply(&projects()).into_iter().filter_map(|p| p.name).collect();
        assert_eq!(names, ["Atlas", "Delta"]);

        let filter = ProjectFilter { code: Some("o".into()), ..ProjectFilter::default() };
        assert_eq!(filter.apply(&projects()).len(), 2);
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let filter = ProjectFilter { name: Some("  ".into()), ..ProjectFilter::default() };
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&projects()).len(), 4);
    }

    #[test]
    fn clients_are_distinct_and_sorted() {
        assert_eq!(unique_clients(&projects()), ["ACME", "Globex"]);
    }

    struct Stats(Result<BTreeMap<RequestId, i64>>);

    #[async_trait]
    impl MissionStats for Stats {
        async fn count_missions_by_project(&self) -> Result<BTreeMap<RequestId, i64>> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn failed_totals_read_as_empty() {
        let ok = Stats(Ok(BTreeMap::from([(1, 3), (2, 0)])));
        assert_eq!(mission_counts(&ok).await[&1], 3);

        let failed = Stats(Err(TravelgateError::Network("down".into())));
        assert!(mission_counts(&failed).await.is_empty());
    }
}
