// tests/unit_relations.rs
use lineage_core::model::{people_by_id, Person, RelationKind, Relationship};
use lineage_core::relations::{resolve_relationships, RelationIndex};
use proptest::prelude::*;

fn family() -> (Vec<Person>, Vec<Relationship>) {
    let people = vec![
        Person::new("alice", "Alice", "Smith"),
        Person::new("bob", "Bob", "Smith"),
        Person::new("carol", "Carol", "Smith"),
        Person::new("dave", "Dave", "Smith"),
    ];
    let rels = vec![
        Relationship::new("r1", "alice", RelationKind::Spouse, "bob"),
        Relationship::new("r2", "alice", RelationKind::Parent, "carol"),
        Relationship::new("r3", "carol", RelationKind::Child, "bob"),
        Relationship::new("r4", "carol", RelationKind::Sibling, "dave"),
        Relationship::new("r5", "alice", RelationKind::Spouse, "ghost"),
        Relationship::new("r6", "alice", RelationKind::Partner, "dave"),
    ];
    (people, rels)
}

fn names(rels: &[lineage_core::relations::Relative<'_>]) -> Vec<String> {
    rels.iter().map(|r| r.person.id.clone()).collect()
}

#[test]
fn test_resolve_from_parent_side() {
    let (people, rels) = family();
    let by_id = people_by_id(&people);
    let alice = resolve_relationships("alice", &rels, &by_id);
    assert_eq!(names(&alice.spouses), vec!["bob"]);
    assert_eq!(names(&alice.children), vec!["carol"]);
    assert!(alice.parents.is_empty());
    assert_eq!(alice.children[0].kind, RelationKind::Parent);
}

#[test]
fn test_resolve_from_child_side() {
    let (people, rels) = family();
    let by_id = people_by_id(&people);
    let carol = resolve_relationships("carol", &rels, &by_id);
    assert_eq!(names(&carol.parents), vec!["alice", "bob"]);
    assert_eq!(names(&carol.siblings), vec!["dave"]);
    assert!(carol.children.is_empty());
    assert!(carol.parents.iter().all(|r| r.kind == RelationKind::Child));
}

#[test]
fn test_unknown_counterpart_dropped() {
    let (people, rels) = family();
    let by_id = people_by_id(&people);
    let alice = resolve_relationships("alice", &rels, &by_id);
    assert!(alice.spouses.iter().all(|r| r.person.id != "ghost"));
    assert_eq!(alice.len(), 2);
}

#[test]
fn test_unrelated_person_is_empty() {
    let (people, rels) = family();
    let by_id = people_by_id(&people);
    assert!(resolve_relationships("nobody", &rels, &by_id).is_empty());
}

#[test]
fn test_index_matches_linear_scan() {
    let (people, rels) = family();
    let by_id = people_by_id(&people);
    let index = RelationIndex::build(&rels);
    for p in &people {
        let scanned = resolve_relationships(&p.id, &rels, &by_id);
        let indexed = index.resolve(&p.id, &rels, &by_id);
        assert_eq!(names(&scanned.spouses), names(&indexed.spouses));
        assert_eq!(names(&scanned.children), names(&indexed.children));
        assert_eq!(names(&scanned.parents), names(&indexed.parents));
        assert_eq!(names(&scanned.siblings), names(&indexed.siblings));
    }
}

#[test]
fn test_index_id_views() {
    let (_, rels) = family();
    let index = RelationIndex::build(&rels);
    assert_eq!(index.children_ids("alice", &rels), vec!["carol"]);
    assert_eq!(index.parent_ids("carol", &rels), vec!["alice", "bob"]);
    assert_eq!(index.spouse_ids("bob", &rels), vec!["alice"]);
    assert_eq!(index.sibling_ids("dave", &rels), vec!["carol"]);
    assert_eq!(index.degree("alice"), 4);
    assert_eq!(index.degree("nobody"), 0);
}

#[test]
fn test_inverse_is_involution() {
    for kind in [
        RelationKind::Parent,
        RelationKind::Child,
        RelationKind::Spouse,
        RelationKind::Sibling,
        RelationKind::Partner,
        RelationKind::Unknown,
    ] {
        assert_eq!(kind.inverse().inverse(), kind);
    }
}

#[test]
fn test_unknown_type_loads() {
    let rel: Relationship = serde_json::from_str(
        r#"{"id":"r","person1Id":"a","person2Id":"b","type":"godparent","verified":true}"#,
    )
    .unwrap();
    assert_eq!(rel.kind, RelationKind::Unknown);
    assert_eq!(rel.kind_from("b"), RelationKind::Unknown);
}

fn kind_strategy() -> impl Strategy<Value = RelationKind> {
    prop_oneof![
        Just(RelationKind::Parent),
        Just(RelationKind::Child),
        Just(RelationKind::Spouse),
        Just(RelationKind::Sibling),
    ]
}

proptest! {
    #[test]
    fn prop_inverse_consistency(kind in kind_strategy()) {
        let people = vec![Person::new("a", "A", "X"), Person::new("b", "B", "X")];
        let rels = vec![Relationship::new("r", "a", kind, "b")];
        let by_id = people_by_id(&people);

        let from_a = resolve_relationships("a", &rels, &by_id);
        let from_b = resolve_relationships("b", &rels, &by_id);
        let kind_a = [&from_a.spouses, &from_a.children, &from_a.parents, &from_a.siblings]
            .into_iter()
            .flatten()
            .map(|r| r.kind)
            .next();
        let kind_b = [&from_b.spouses, &from_b.children, &from_b.parents, &from_b.siblings]
            .into_iter()
            .flatten()
            .map(|r| r.kind)
            .next();

        prop_assert_eq!(kind_a, Some(kind));
        prop_assert_eq!(kind_b, Some(kind.inverse()));
        prop_assert_eq!(from_a.len(), 1);
        prop_assert_eq!(from_b.len(), 1);
    }
}
