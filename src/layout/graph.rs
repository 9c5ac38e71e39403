// src/layout/graph.rs
//! People and relationships to an unresolved node/link graph.

use serde::Serialize;

use crate::family::family_members;
use crate::model::{Person, RelationKind, Relationship};

use super::node::{LinkEnd, LinkKind, TreeLink, TreeNode};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TreeGraph {
    pub nodes: Vec<TreeNode>,
    pub links: Vec<TreeLink>,
}

impl TreeGraph {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One node per person, one link per relationship.
///
/// Generation and depth stay at 0. `root_id`, when it names a person in
/// `people`, flags that node. Child edges are flipped so the parent is always
/// the link source.
#[must_use]
pub fn build_graph(people: &[Person], relationships: &[Relationship], root_id: Option<&str>) -> TreeGraph {
    let nodes = people
        .iter()
        .map(|p| {
            let mut node = TreeNode::new(p.clone());
            node.root = root_id == Some(p.id.as_str());
            node
        })
        .collect();

    let links = relationships.iter().map(to_link).collect();
    TreeGraph { nodes, links }
}

fn to_link(rel: &Relationship) -> TreeLink {
    let (source, target, kind) = match rel.kind {
        RelationKind::Parent => (&rel.person1_id, &rel.person2_id, LinkKind::Parent),
        RelationKind::Child => (&rel.person2_id, &rel.person1_id, LinkKind::Parent),
        RelationKind::Spouse => (&rel.person1_id, &rel.person2_id, LinkKind::Spouse),
        RelationKind::Sibling => (&rel.person1_id, &rel.person2_id, LinkKind::Sibling),
        RelationKind::Partner | RelationKind::Unknown => {
            (&rel.person1_id, &rel.person2_id, LinkKind::Other)
        }
    };
    TreeLink {
        id: rel.id.clone(),
        source: LinkEnd::Id(source.clone()),
        target: LinkEnd::Id(target.clone()),
        kind,
        relation: rel.kind,
    }
}

/// People shown in the tree view: everyone, or the members of one family,
/// keyed the same way families are grouped.
#[must_use]
pub fn people_for_tree(people: &[Person], family: Option<&str>) -> Vec<Person> {
    match family.map(str::trim).filter(|f| !f.is_empty()) {
        Some(surname) => family_members(people, surname).into_iter().cloned().collect(),
        None => people.to_vec(),
    }
}
