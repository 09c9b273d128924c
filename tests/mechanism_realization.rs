//! Normalize-then-place integration over hand-built mechanisms.

use gearworks::engines::normalization::normalize;
use gearworks::engines::placement::place;
use gearworks::mechanism::Mechanism;
use gearworks::types::Point;
use gearworks::GearworksError;

#[test]
fn test_pruned_carrier_gear_leaves_unanchored_pivot() {
    let mut mech = Mechanism::new();
    let motor = mech.add_gear(20, 2.0);
    let near = mech.add_gear_pivot(motor, 0.0, 0.5);
    // a second gear that never meshes with the drivetrain
    let stray = mech.add_gear(10, 2.0);
    let far = mech.add_gear_pivot(stray, 0.0, 0.5);
    mech.link_pivots(near, far, 8.0);

    let removed = normalize(&mut mech);
    // the stray gear goes, but the linkage chain keeps its pivot reachable
    assert_eq!(removed, vec![stray]);
    assert!(mech.node(far).is_some());

    match place(&mech, Point::ZERO) {
        Err(GearworksError::UnanchoredPivot { pivot }) => {
            assert_eq!(pivot, mech.name(far));
        }
        other => panic!("expected UnanchoredPivot, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_infeasible_linkage_surfaces_from_decoded_geometry() {
    let mut mech = Mechanism::new();
    mech.add_gear(20, 2.0);
    let a = mech.add_free_pivot(Point::new(0.0, 0.0));
    let b = mech.add_free_pivot(Point::new(10.0, 0.0));
    mech.link_pivots(a, b, 1.0);

    match place(&mech, Point::ZERO) {
        Err(GearworksError::InfeasibleLinkage { linkage, .. }) => {
            assert_eq!(linkage, "linkage-0");
        }
        other => panic!("expected InfeasibleLinkage, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_dropping_infeasible_linkage_recovers_the_rest() {
    // caller policy: on infeasibility, remove the linkage and renormalize
    let mut mech = Mechanism::new();
    let motor = mech.add_gear(20, 2.0);
    let near = mech.add_gear_pivot(motor, 0.0, 0.5);
    let far = mech.add_free_pivot(Point::new(100.0, 0.0));
    let doomed = mech.link_pivots(near, far, 5.0).unwrap();

    assert!(matches!(
        place(&mech, Point::ZERO),
        Err(GearworksError::InfeasibleLinkage { .. })
    ));

    mech.remove_node(doomed);
    normalize(&mut mech);
    // the far pivot lost its only path to the motor
    assert!(mech.node(far).is_none());

    let layout = place(&mech, Point::ZERO).unwrap();
    assert_eq!(layout.len(), mech.len());
    assert_eq!(layout.pivot_position(near), Some(Point::new(10.0, 0.0)));
}

#[test]
fn test_layout_covers_every_surviving_node() {
    let mut mech = Mechanism::new();
    let motor = mech.add_gear(20, 2.0);
    let driven = mech.add_gear(15, 2.0);
    mech.link_gears(motor, driven, 1.0);
    let a = mech.add_gear_pivot(motor, 0.5, 0.4);
    let b = mech.add_gear_pivot(driven, 2.0, 0.9);
    mech.link_pivots(a, b, 40.0);
    mech.add_gear(30, 2.0); // stray, pruned before placement

    normalize(&mut mech);
    let layout = place(&mech, Point::new(-5.0, 2.5)).unwrap();
    assert_eq!(layout.len(), mech.len());
    for id in mech.graph().nodes() {
        assert!(layout.get(id).is_some(), "unplaced node {}", mech.name(id));
    }
}
