//! Builds the team hierarchy from the flat team list.
//!
//! The API returns teams as a flat array with parent-id references. The
//! builder resolves those references into a forest of root teams. It is a
//! pure function over the input slice: no shared references, no mutation of
//! the records it was given.

use thiserror::Error;

use crate::models::{Team, TeamNode};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A team declaring itself as its own parent can never be placed in a
    /// finite tree. The backend should never produce one; reject it rather
    /// than render forever.
    #[error("team '{name}' ({id}) declares itself as its own parent")]
    SelfParent { id: String, name: String },
}

/// Build a forest of root teams from the flat team list.
///
/// Resolution rules, applied in input order:
/// - a team with no parent id is a root;
/// - a team whose parent id matches another team in the list becomes that
///   team's child;
/// - a team whose parent id matches nothing in the list is promoted to root;
/// - a team whose parent id is its own id is rejected with `TreeError`.
///
/// Roots and children both preserve the relative order of the input list.
/// Cycles spanning multiple teams are not detected; the backend guarantees
/// an acyclic forest.
pub fn build_forest(teams: &[Team]) -> Result<Vec<TeamNode>, TreeError> {
    let index: std::collections::HashMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(position, team)| (team.id.as_str(), position))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); teams.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (position, team) in teams.iter().enumerate() {
        match team.parent_team_id.as_deref() {
            Some(parent_id) if parent_id == team.id => {
                return Err(TreeError::SelfParent {
                    id: team.id.clone(),
                    name: team.name.clone(),
                });
            }
            Some(parent_id) => match index.get(parent_id) {
                Some(&parent) => children[parent].push(position),
                // Unknown parent: promote to root rather than drop the team
                None => roots.push(position),
            },
            None => roots.push(position),
        }
    }

    Ok(roots
        .into_iter()
        .map(|position| attach(teams, &children, position))
        .collect())
}

fn attach(teams: &[Team], children: &[Vec<usize>], position: usize) -> TeamNode {
    TeamNode {
        team: teams[position].clone(),
        subteams: children[position]
            .iter()
            .map(|&child| attach(teams, children, child))
            .collect(),
    }
}
