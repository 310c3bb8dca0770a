use serde::{Deserialize, Serialize};

use crate::domain::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::domain::{Page, Team};

/// `?offset=&limit=` query parameters
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_offset")]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_offset() -> i64 {
    DEFAULT_OFFSET
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Team summary attached to a by-team listing
#[derive(Debug, Clone, Serialize)]
pub struct TeamInfo {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Team> for TeamInfo {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().value(),
            name: team.name().to_string(),
            description: team.description().map(String::from),
        }
    }
}

/// Paginated list envelope
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub has_next: bool,
    pub has_previous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_info: Option<TeamInfo>,
}

impl<T> PageResponse<T> {
    pub fn from_page<E>(page: &Page<E>, project: impl Fn(&E) -> T) -> Self {
        Self {
            items: page.items.iter().map(project).collect(),
            total: page.total,
            offset: page.offset,
            limit: page.limit,
            has_next: page.has_next,
            has_previous: page.has_previous,
            team_info: None,
        }
    }

    pub fn with_team_info(mut self, team: &Team) -> Self {
        self.team_info = Some(TeamInfo::from(team));
        self
    }
}
