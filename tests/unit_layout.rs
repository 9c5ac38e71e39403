// tests/unit_layout.rs
use lineage_core::config::LayoutConfig;
use lineage_core::layout::{
    build_graph, link_color, node_color, people_for_tree, run_layout, CanvasSize, Color, Command,
    LinkKind, Point, Transform, TreeGraph, TreeSession, Viewport,
};
use lineage_core::model::{Person, RelationKind, Relationship};

const REF_YEAR: i32 = 2024;

fn alice_bob_carol() -> (Vec<Person>, Vec<Relationship>) {
    let people = vec![
        Person::new("alice", "Alice", "Smith").born("1950"),
        Person::new("bob", "Bob", "Smith").born("1952"),
        Person::new("carol", "Carol", "Smith").born("1980"),
    ];
    let rels = vec![
        Relationship::new("r1", "alice", RelationKind::Spouse, "bob"),
        Relationship::new("r2", "alice", RelationKind::Parent, "carol"),
        Relationship::new("r3", "carol", RelationKind::Child, "bob"),
    ];
    (people, rels)
}

fn session() -> TreeSession {
    let (people, rels) = alice_bob_carol();
    let graph = build_graph(&people, &rels, Some("alice"));
    TreeSession::new(graph, &LayoutConfig::default(), 1200.0, 800.0, REF_YEAR)
}

#[test]
fn test_build_graph_scenario() {
    let (people, rels) = alice_bob_carol();
    let graph = build_graph(&people, &rels, None);
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.links.len(), 3);

    let kinds: Vec<LinkKind> = graph.links.iter().map(|l| l.kind).collect();
    assert_eq!(kinds.iter().filter(|k| **k == LinkKind::Spouse).count(), 1);
    assert_eq!(kinds.iter().filter(|k| **k == LinkKind::Parent).count(), 2);
    assert!(graph.nodes.iter().all(|n| n.x.is_none() && n.generation == 0));
}

#[test]
fn test_child_edge_points_from_parent() {
    let (people, rels) = alice_bob_carol();
    let graph = build_graph(&people, &rels, None);
    let r3 = graph.links.iter().find(|l| l.id == "r3").unwrap();
    assert_eq!(r3.source, lineage_core::layout::LinkEnd::Id("bob".into()));
    assert_eq!(r3.target, lineage_core::layout::LinkEnd::Id("carol".into()));
}

#[test]
fn test_converged_nodes_respect_collision_radius() {
    let (people, rels) = alice_bob_carol();
    let config = LayoutConfig::default();
    let mut sim = run_layout(
        build_graph(&people, &rels, None),
        CanvasSize::from_config(&config),
        &config,
    );
    sim.run(2000);
    assert!(!sim.is_running(), "simulation should settle");

    let nodes = sim.nodes();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let d = nodes[i].position().distance(nodes[j].position());
            assert!(d >= config.collide_radius, "{} and {} are {d} apart", nodes[i].id, nodes[j].id);
        }
    }
}

#[test]
fn test_layout_centers_on_canvas() {
    let (people, rels) = alice_bob_carol();
    let config = LayoutConfig::default();
    let mut sim = run_layout(build_graph(&people, &rels, None), CanvasSize::new(1000.0, 600.0), &config);
    sim.run(2000);
    let n = sim.nodes().len() as f64;
    let cx = sim.nodes().iter().map(|n| n.position().x).sum::<f64>() / n;
    let cy = sim.nodes().iter().map(|n| n.position().y).sum::<f64>() / n;
    assert!((cx - 500.0).abs() < 5.0, "cx = {cx}");
    assert!((cy - 300.0).abs() < 5.0, "cy = {cy}");
}

#[test]
fn test_empty_graph_never_runs() {
    let config = LayoutConfig::default();
    let mut sim = run_layout(TreeGraph::default(), CanvasSize::from_config(&config), &config);
    assert!(!sim.is_running());
    assert!(!sim.tick());
    sim.restart();
    assert!(!sim.is_running());
    assert!(sim.frame().nodes.is_empty());
}

#[test]
fn test_links_outside_node_set_dropped() {
    let (people, rels) = alice_bob_carol();
    let only_alice = &people[..1];
    let config = LayoutConfig::default();
    let sim = run_layout(build_graph(only_alice, &rels, None), CanvasSize::from_config(&config), &config);
    assert_eq!(sim.nodes().len(), 1);
    assert!(sim.links().is_empty());
}

#[test]
fn test_frames_stop_when_settled() {
    let (people, rels) = alice_bob_carol();
    let config = LayoutConfig::default();
    let mut sim = run_layout(build_graph(&people, &rels, None), CanvasSize::from_config(&config), &config);
    let count = sim.frames().count();
    assert!(count > 0 && count < 2000);
    assert_eq!(sim.ticks() as usize, count);
}

#[test]
fn test_drag_pins_to_pointer_until_release() {
    let mut s = session();
    for _ in 0..50 {
        s.tick();
    }

    s.apply(Command::DragStart("carol".into()));
    assert!(s.is_dragging("carol"));
    assert!((s.simulation().alpha_target() - 0.3).abs() < 1e-12);

    let pointer = Point::new(123.0, 456.0);
    s.apply(Command::Drag {
        id: "carol".into(),
        to: pointer,
    });
    for _ in 0..10 {
        s.tick();
        assert_eq!(s.simulation().node("carol").unwrap().position(), pointer);
    }

    s.apply(Command::DragEnd("carol".into()));
    assert_eq!(s.dragging().count(), 0);
    assert!(!s.simulation().node("carol").unwrap().is_pinned());
    assert_eq!(s.simulation().alpha_target(), 0.0);

    for _ in 0..20 {
        s.tick();
    }
    assert_ne!(s.simulation().node("carol").unwrap().position(), pointer);
}

#[test]
fn test_overlapping_drags_release_each_node() {
    let mut s = session();
    s.apply(Command::DragStart("alice".into()));
    s.apply(Command::DragStart("bob".into()));
    assert_eq!(s.dragging().collect::<Vec<_>>(), vec!["alice", "bob"]);

    s.apply(Command::DragEnd("alice".into()));
    assert!(!s.simulation().node("alice").unwrap().is_pinned());
    assert!(s.simulation().node("bob").unwrap().is_pinned());
    // Still dragging bob: stays warm.
    assert!((s.simulation().alpha_target() - 0.3).abs() < 1e-12);

    let pointer = Point::new(-50.0, 75.0);
    s.apply(Command::Drag {
        id: "bob".into(),
        to: pointer,
    });
    s.tick();
    assert_eq!(s.simulation().node("bob").unwrap().position(), pointer);

    s.apply(Command::DragEnd("bob".into()));
    assert!(!s.simulation().node("alice").unwrap().is_pinned());
    assert!(!s.simulation().node("bob").unwrap().is_pinned());
    assert_eq!(s.simulation().alpha_target(), 0.0);
    assert_eq!(s.dragging().count(), 0);
}

#[test]
fn test_drag_reheats_settled_simulation() {
    let mut s = session();
    s.simulation_mut().run(2000);
    assert!(!s.simulation().is_running());
    s.on_drag_start("alice");
    assert!(s.simulation().is_running());
    assert!(s.tick());
}

#[test]
fn test_explicit_pin_commands() {
    let mut s = session();
    s.apply(Command::Pin {
        id: "bob".into(),
        at: Point::new(10.0, 20.0),
    });
    s.tick();
    assert_eq!(s.simulation().node("bob").unwrap().position(), Point::new(10.0, 20.0));
    s.apply(Command::Unpin("bob".into()));
    assert!(!s.simulation().node("bob").unwrap().is_pinned());
}

#[test]
fn test_selection_and_hover() {
    let mut s = session();
    let picked = s.on_node_click("bob").map(|p| p.first_name.clone());
    assert_eq!(picked.as_deref(), Some("Bob"));
    assert_eq!(s.selected(), Some("bob"));
    assert!(s.on_node_click("nobody").is_none());
    assert_eq!(s.selected(), Some("bob"));

    s.apply(Command::ClickBackground);
    assert!(s.selected().is_none());

    s.apply(Command::Hover("alice".into()));
    assert_eq!(s.node_radius("alice"), 25.0);
    assert_eq!(s.node_radius("bob"), 20.0);
    let collide = s.simulation().params().collide_radius;
    s.apply(Command::HoverEnd);
    assert_eq!(s.node_radius("alice"), 20.0);
    assert_eq!(s.simulation().params().collide_radius, collide);
}

#[test]
fn test_scene_encoding() {
    let mut s = session();
    s.on_node_click("carol");
    let scene = s.scene();
    assert_eq!(scene.nodes.len(), 3);
    assert_eq!(scene.links.len(), 3);
    let carol = scene.nodes.iter().find(|n| n.id == "carol").unwrap();
    assert!(carol.selected);
    assert_eq!(carol.label, "Carol Smith");
    assert_eq!(carol.years, "b. 1980");
    assert_eq!(carol.fill, Color::Blue.hex());
    assert!(scene.nodes.iter().any(|n| n.id == "alice" && n.root));
    assert_eq!(scene.zoom_percent, 100);
}

#[test]
fn test_dismantle_stops_simulation() {
    let mut s = session();
    assert!(s.simulation().is_running());
    s.dismantle();
    assert!(!s.simulation().is_running());
    assert!(!s.tick());
}

#[test]
fn test_zoom_is_clamped() {
    let mut v = Viewport::new(1200.0, 800.0, 0.1, 3.0);
    v.set_transform(10.0, 0.0, 0.0);
    assert_eq!(v.transform().k, 3.0);
    v.set_transform(0.01, 0.0, 0.0);
    assert_eq!(v.transform().k, 0.1);

    let mut v = Viewport::new(1200.0, 800.0, 0.1, 3.0);
    for _ in 0..10 {
        v.zoom_in();
    }
    assert_eq!(v.zoom_percent(), 300);
    v.center();
    assert_eq!(v.transform(), Transform { k: 1.0, x: 600.0, y: 400.0 });
}

#[test]
fn test_zoom_keeps_anchor_fixed() {
    let mut v = Viewport::new(1200.0, 800.0, 0.1, 3.0);
    v.set_transform(1.0, 50.0, -20.0);
    let anchor = Point::new(300.0, 200.0);
    let world = v.to_world(anchor);
    v.scale_by(2.0, anchor);
    let back = v.to_screen(world);
    assert!((back.x - anchor.x).abs() < 1e-9 && (back.y - anchor.y).abs() < 1e-9);
}

#[test]
fn test_transform_does_not_move_nodes() {
    let mut s = session();
    s.tick();
    let before: Vec<Point> = s.simulation().nodes().iter().map(|n| n.position()).collect();
    s.apply(Command::SetTransform {
        scale: 2.0,
        translate: Point::new(100.0, 100.0),
    });
    s.apply(Command::ZoomOut);
    let after: Vec<Point> = s.simulation().nodes().iter().map(|n| n.position()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_node_colors() {
    let child = Person::new("a", "A", "X").born("2015");
    let adult = Person::new("b", "B", "X").born("1980");
    let elder = Person::new("c", "C", "X").born("1940");
    let gone = Person::new("d", "D", "X").born("2015").died("2020");
    let undated = Person::new("e", "E", "X");
    assert_eq!(node_color(&child, REF_YEAR), Color::Green);
    assert_eq!(node_color(&adult, REF_YEAR), Color::Blue);
    assert_eq!(node_color(&elder, REF_YEAR), Color::Orange);
    assert_eq!(node_color(&gone, REF_YEAR), Color::Red);
    assert_eq!(node_color(&undated, REF_YEAR), Color::Gray);
}

#[test]
fn test_link_colors() {
    assert_eq!(link_color(LinkKind::Parent), Color::Blue);
    assert_eq!(link_color(LinkKind::Spouse), Color::Red);
    assert_eq!(link_color(LinkKind::Sibling), Color::Green);
    assert_eq!(link_color(LinkKind::Other), Color::Gray);
}

#[test]
fn test_tree_scoped_to_family() {
    let mut people = alice_bob_carol().0;
    people.push(Person::new("zed", "Zed", "Jones"));
    assert_eq!(people_for_tree(&people, Some("SMITH")).len(), 3);
    assert_eq!(people_for_tree(&people, Some(" ")).len(), 4);
    assert_eq!(people_for_tree(&people, None).len(), 4);

    people.push(Person::new("anon", "Anon", ""));
    people.push(Person::new("pad", "Pat", " Smith "));
    let unknown = people_for_tree(&people, Some("unknown"));
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].id, "anon");
    assert_eq!(people_for_tree(&people, Some(" Smith ")).len(), 4);
}
