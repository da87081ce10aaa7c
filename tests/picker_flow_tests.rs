use glam::Vec3;

use cad_viewport_picker::{
    begin_pick, collect_key_intents, AppController, AppIntent, AppState, EntityKinds, EntityRef,
    Intersection, Key, NodeId, NodeKind, PickOutcome, PickRequest,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn node_of(state: &AppState, item: cad_viewport_picker::ItemId, kind: NodeKind) -> NodeId {
    state
        .scene
        .nodes_of_item(item)
        .find(|node| node.kind == kind)
        .map(|node| node.id)
        .expect("Node der gesuchten Art erwartet")
}

fn click_on(
    controller: &mut AppController,
    state: &mut AppState,
    node: NodeId,
    double: bool,
) {
    controller
        .handle_intent(
            state,
            AppIntent::ClickPickRequested {
                hits: vec![Intersection {
                    node,
                    distance: 1.0,
                    point: Vec3::ZERO,
                }],
                additive: false,
                double,
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
}

#[test]
fn test_pick_exactly_one_resolves_on_the_first_matching_click_and_restores_the_mask() {
    init_logger();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let curve = state.scene.commit_curve(0);
    let body = node_of(&state, curve, NodeKind::CurveSegments);
    let mask_before = state.layers.current();

    let rx = begin_pick(&mut state, PickRequest::exactly(EntityKinds::CURVE, 1))
        .expect("Pick-Anfrage sollte starten");
    assert_ne!(state.layers.current(), mask_before);

    click_on(&mut controller, &mut state, body, false);

    assert_eq!(
        rx.try_recv().expect("Ergebnis erwartet"),
        PickOutcome::Completed(vec![EntityRef::Curve(curve)])
    );
    assert_eq!(state.layers.current(), mask_before);
    assert!(!state.picker.is_active());
}

#[test]
fn test_mismatched_kinds_do_not_count_and_do_not_abort() {
    init_logger();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let curve = state.scene.commit_curve(0);
    let region = state.scene.commit_region();
    let curve_body = node_of(&state, curve, NodeKind::CurveSegments);
    let region_mesh = node_of(&state, region, NodeKind::RegionMesh);

    let rx = begin_pick(&mut state, PickRequest::exactly(EntityKinds::CURVE, 1))
        .expect("Pick-Anfrage sollte starten");

    // Die verengte Maske blendet Regionen bereits im Filter aus; der
    // Klick läuft trotzdem durch die volle Pipeline und zählt nicht.
    click_on(&mut controller, &mut state, region_mesh, false);
    assert!(state.picker.is_active());

    click_on(&mut controller, &mut state, curve_body, false);
    assert_eq!(
        rx.try_recv().expect("Ergebnis erwartet"),
        PickOutcome::Completed(vec![EntityRef::Curve(curve)])
    );
}

#[test]
fn test_enter_resolves_an_open_ended_pick_after_min_count() {
    init_logger();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let curve_a = state.scene.commit_curve(0);
    let curve_b = state.scene.commit_curve(0);
    let body_a = node_of(&state, curve_a, NodeKind::CurveSegments);
    let body_b = node_of(&state, curve_b, NodeKind::CurveSegments);

    let rx = begin_pick(&mut state, PickRequest::new(EntityKinds::CURVE))
        .expect("Pick-Anfrage sollte starten");

    // Enter vor Erreichen der Mindestanzahl ist ein No-op
    for intent in collect_key_intents(&[Key::Enter]) {
        controller
            .handle_intent(&mut state, intent)
            .expect("Enter sollte ohne Fehler durchlaufen");
    }
    assert!(state.picker.is_active());

    click_on(&mut controller, &mut state, body_a, false);
    click_on(&mut controller, &mut state, body_b, false);
    assert!(state.picker.is_active());

    for intent in collect_key_intents(&[Key::Enter]) {
        controller
            .handle_intent(&mut state, intent)
            .expect("Enter sollte ohne Fehler durchlaufen");
    }

    assert_eq!(
        rx.try_recv().expect("Ergebnis erwartet"),
        PickOutcome::Completed(vec![EntityRef::Curve(curve_a), EntityRef::Curve(curve_b)])
    );
}

#[test]
fn test_escape_cancels_and_the_receiver_observes_cancelled() {
    init_logger();
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mask_before = state.layers.current();

    let rx = begin_pick(&mut state, PickRequest::new(EntityKinds::CURVE))
        .expect("Pick-Anfrage sollte starten");

    for intent in collect_key_intents(&[Key::Escape]) {
        controller
            .handle_intent(&mut state, intent)
            .expect("Escape sollte ohne Fehler durchlaufen");
    }

    assert_eq!(
        rx.try_recv().expect("Ergebnis erwartet"),
        PickOutcome::Cancelled
    );
    assert_eq!(state.layers.current(), mask_before);
    assert!(!state.picker.is_active());
}

#[test]
fn test_double_click_confirms_once_min_count_is_reached() {
    init_logger();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let curve_a = state.scene.commit_curve(0);
    let curve_b = state.scene.commit_curve(0);
    let body_a = node_of(&state, curve_a, NodeKind::CurveSegments);
    let body_b = node_of(&state, curve_b, NodeKind::CurveSegments);

    let rx = begin_pick(&mut state, PickRequest::new(EntityKinds::CURVE))
        .expect("Pick-Anfrage sollte starten");

    click_on(&mut controller, &mut state, body_a, false);
    // Doppelklick pickt die zweite Kurve und bestätigt im selben Zug
    click_on(&mut controller, &mut state, body_b, true);

    assert_eq!(
        rx.try_recv().expect("Ergebnis erwartet"),
        PickOutcome::Completed(vec![EntityRef::Curve(curve_a), EntityRef::Curve(curve_b)])
    );
}

#[test]
fn test_clicking_a_face_satisfies_a_solid_pick() {
    init_logger();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let solid = state.scene.commit_solid(3, 3);
    let face = node_of(&state, solid, NodeKind::FaceMesh { index: 1 });

    let rx = begin_pick(&mut state, PickRequest::exactly(EntityKinds::SOLID, 1))
        .expect("Pick-Anfrage sollte starten");

    click_on(&mut controller, &mut state, face, false);

    assert_eq!(
        rx.try_recv().expect("Ergebnis erwartet"),
        PickOutcome::Completed(vec![EntityRef::Solid(solid)])
    );
}

#[test]
fn test_nested_picks_compose_with_lifo_mask_restoration() {
    init_logger();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let curve = state.scene.commit_curve(0);
    let solid = state.scene.commit_solid(1, 0);
    let curve_body = node_of(&state, curve, NodeKind::CurveSegments);
    let face = node_of(&state, solid, NodeKind::FaceMesh { index: 0 });
    let base_mask = state.layers.current();

    let outer_rx = begin_pick(&mut state, PickRequest::exactly(EntityKinds::CURVE, 1))
        .expect("Äußere Pick-Anfrage sollte starten");
    let outer_mask = state.layers.current();

    // Geschachtelte Sub-Anfrage eines Commands
    let inner_rx = begin_pick(&mut state, PickRequest::exactly(EntityKinds::FACE, 1))
        .expect("Innere Pick-Anfrage sollte starten");
    assert_eq!(state.picker.depth(), 2);

    click_on(&mut controller, &mut state, face, false);
    assert_eq!(
        inner_rx.try_recv().expect("Ergebnis erwartet"),
        PickOutcome::Completed(vec![EntityRef::Face(cad_viewport_picker::FaceRef {
            solid,
            index: 0
        })])
    );
    assert_eq!(state.layers.current(), outer_mask);

    click_on(&mut controller, &mut state, curve_body, false);
    assert_eq!(
        outer_rx.try_recv().expect("Ergebnis erwartet"),
        PickOutcome::Completed(vec![EntityRef::Curve(curve)])
    );
    assert_eq!(state.layers.current(), base_mask);
}

#[test]
fn test_deleting_the_item_mid_pick_drops_the_stale_entity() {
    init_logger();
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let curve = state.scene.commit_curve(0);
    let body = node_of(&state, curve, NodeKind::CurveSegments);

    let rx = begin_pick(&mut state, PickRequest::exactly(EntityKinds::CURVE, 1))
        .expect("Pick-Anfrage sollte starten");

    // Item verschwindet, bevor der Klick verarbeitet wird
    controller
        .handle_intent(&mut state, AppIntent::ItemRemovedReported { item: curve })
        .expect("Entfernen sollte ohne Fehler durchlaufen");

    click_on(&mut controller, &mut state, body, false);

    assert!(state.picker.is_active());
    assert!(rx.try_recv().is_err());
}
