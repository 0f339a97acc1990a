use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// A flat team record as returned by the API.
///
/// `parent_team_id` references another team by id, or is absent for a root
/// team. The employee list may be missing on the wire and normalizes to
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_team_id: Option<String>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// A team with its resolved subteams.
///
/// Derived projection over the flat team list. The flat list stays the
/// source of truth; nodes are rebuilt wholesale after every mutation and
/// never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamNode {
    pub team: Team,
    pub subteams: Vec<TeamNode>,
}

impl TeamNode {
    /// Total number of teams in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.subteams.iter().map(TeamNode::node_count).sum::<usize>()
    }
}
