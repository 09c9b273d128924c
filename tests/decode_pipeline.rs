//! End-to-end decoding scenarios over hand-built genomes.
//!
//! Gene streams are written one command per line: grammar choices first,
//! then the genes the handler consumes.

use gearworks::config::DecoderConfig;
use gearworks::engines::derivation::{GearPivotSpecies, Genome};
use gearworks::engines::normalization::normalize;
use gearworks::engines::placement::place;
use gearworks::mechanism::EdgeKind;
use gearworks::types::Point;

fn species() -> GearPivotSpecies {
    GearPivotSpecies::new(DecoderConfig::default())
}

/// Two gears, a mesh, a mounted pivot on each, and one linkage between the
/// pivots. Defaults: teeth = gene % 50 + 10, length = gene % 5 + 5.
fn four_bar_genome() -> Genome {
    vec![
        0, 0, 10, // add gear: 20 teeth, pitch radius 20 (motor)
        0, 0, 0, // add gear: 10 teeth, pitch radius 10
        1, 0, 0, 0, 1, 0, // link gear to gear: gear-0 to gear-1, angle 0
        0, 2, 0, 0, u32::MAX, // add pivot on gear-0: angle 0, radius fraction 1.0
        0, 2, 1, 0, 0, // add pivot on gear-1: angle 0, radius fraction 0.0
        1, 1, 0, 0, 1, 2, // link pivot to pivot: length 7
    ]
}

#[test]
fn test_empty_genome_yields_empty_graph() {
    let mechanism = species().decode(&[]);
    assert!(mechanism.is_empty());
    assert!(mechanism.graph().is_empty());
    assert_eq!(mechanism.motor(), None);
}

#[test]
fn test_link_without_pivots_is_abandoned() {
    // two gears, then a pivot-to-pivot link with no pivots in the pool
    let genome = vec![
        0, 0, 25, // add gear
        0, 0, 30, // add gear
        1, 1, 0, 7, // link pivot to pivot: selection over empty pool
    ];
    let mechanism = species().decode(&genome);

    assert_eq!(mechanism.gears().len(), 2);
    assert!(mechanism.pivots().is_empty());
    assert!(mechanism.linkages().is_empty());
    for gear in mechanism.gears() {
        assert!(mechanism.graph().neighbors(*gear).is_empty());
    }
}

#[test]
fn test_four_bar_genome_decodes_structure() {
    let mechanism = species().decode(&four_bar_genome());

    assert_eq!(mechanism.gears().len(), 2);
    assert_eq!(mechanism.pivots().len(), 2);
    assert_eq!(mechanism.linkages().len(), 1);

    let [gear_a, gear_b] = mechanism.gears() else {
        panic!("expected two gears");
    };
    assert_eq!(
        mechanism.graph().edge(*gear_a, *gear_b),
        Some(&EdgeKind::Mesh { angle: 0.0 })
    );

    let linkage_id = mechanism.linkages()[0];
    let linkage = mechanism.node(linkage_id).unwrap().as_linkage().unwrap();
    assert_eq!(linkage.length, 7.0);
    assert_eq!(mechanism.graph().neighbors(linkage_id).len(), 2);
    assert_eq!(mechanism.name(linkage_id), "linkage-0");
}

#[test]
fn test_four_bar_genome_places_realizable_mechanism() {
    let mut mechanism = species().decode(&four_bar_genome());
    let removed = normalize(&mut mechanism);
    assert!(removed.is_empty(), "fully connected mechanism loses nothing");

    let layout = place(&mechanism, Point::ZERO).unwrap();
    let [gear_a, gear_b] = mechanism.gears() else {
        panic!("expected two gears");
    };
    let [pivot_a, pivot_b] = mechanism.pivots() else {
        panic!("expected two pivots");
    };

    assert_eq!(layout.gear_center(*gear_a), Some(Point::ZERO));
    // pitch radii 20 + 10 along angle 0
    assert_eq!(layout.gear_center(*gear_b), Some(Point::new(30.0, 0.0)));
    assert_eq!(layout.pivot_position(*pivot_a), Some(Point::new(20.0, 0.0)));
    assert_eq!(layout.pivot_position(*pivot_b), Some(Point::new(30.0, 0.0)));

    // coupler: circles of radius 7 around the pivots, greater-y candidate
    let placed = layout.linkage(mechanism.linkages()[0]).unwrap();
    let expected = Point::new(25.0, 24.0f64.sqrt());
    assert!((placed.position_b - expected).length() < 1e-9);
    assert_eq!(placed.position_a, Point::new(20.0, 0.0));
    assert!(placed.angle > 0.0);
}

#[test]
fn test_decoding_is_deterministic() {
    let genome = four_bar_genome();
    let species = species();

    let mut first = species.decode(&genome);
    let mut second = species.decode(&genome);

    let names = |mechanism: &gearworks::mechanism::Mechanism| -> Vec<String> {
        mechanism
            .graph()
            .nodes()
            .map(|id| mechanism.name(id).to_string())
            .collect()
    };
    assert_eq!(names(&first), names(&second));

    normalize(&mut first);
    normalize(&mut second);
    let layout_a = place(&first, Point::new(3.0, 4.0)).unwrap();
    let layout_b = place(&second, Point::new(3.0, 4.0)).unwrap();
    for (id, _) in layout_a.iter() {
        assert_eq!(layout_a.get(id), layout_b.get(id));
    }
}

#[test]
fn test_batch_decode_matches_sequential() {
    let species = species();
    let genomes = vec![
        four_bar_genome(),
        vec![0, 0, 25, 0, 0, 30],
        Vec::new(),
    ];

    let batch = species.decode_population(&genomes);
    assert_eq!(batch.len(), genomes.len());
    for (mechanism, genome) in batch.iter().zip(&genomes) {
        let sequential = species.decode(genome);
        assert_eq!(mechanism.len(), sequential.len());
        assert_eq!(mechanism.gears().len(), sequential.gears().len());
        let batch_names: Vec<&str> =
            mechanism.graph().nodes().map(|id| mechanism.name(id)).collect();
        let seq_names: Vec<&str> =
            sequential.graph().nodes().map(|id| sequential.name(id)).collect();
        assert_eq!(batch_names, seq_names);
    }
}
