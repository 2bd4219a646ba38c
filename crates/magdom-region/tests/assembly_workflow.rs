//! End-to-end domain assembly: the sequence the interactive tool drives.
//!
//! Mirrors a real session: define the main film, append a lead by
//! extrusion, subdivide the film into a graded chain, synthesise the
//! chain's coupling table, and merge in a second container.

use indexmap::IndexMap;
use magdom_core::{Axis, Face};
use magdom_region::{
    build_coupling_table, extrude, subdivide, Partition, RegionMap, ScaleAmount,
    SubdivideOptions, MAIN_KEY,
};
use magdom_test_utils::{strip, thin_film, CELL};

#[test]
fn assemble_graded_chain_with_lead() {
    let mut session = RegionMap::with_main(thin_film());
    session.set_cell(CELL);

    // Append a 10-cell lead past the +x face of the film.
    let lead = extrude(
        session.main().unwrap(),
        Axis::X,
        Face::Positive,
        ScaleAmount::Cells(10.0),
        CELL,
    )
    .unwrap();
    assert_eq!(lead.pmin()[0], 100e-9);
    assert_eq!(lead.pmax()[0], 120e-9);
    session.insert("lead", lead);

    // Subdivide the film into a 5-piece chain with graded coupling values.
    let subdivision = subdivide(
        session.main().unwrap(),
        Axis::X,
        &Partition::Count(5),
        (1e-5, 5e-5),
        CELL,
        &SubdivideOptions {
            name_root: "seg".into(),
            ..Default::default()
        },
    )
    .unwrap();
    let values = subdivision.values.clone();
    session.apply_subdivision(MAIN_KEY, subdivision, true);

    assert!(session.main().is_none());
    let names: Vec<&str> = session.names().collect();
    assert_eq!(names, vec!["lead", "seg0", "seg1", "seg2", "seg3", "seg4"]);

    // Pieces tile the original film.
    assert_eq!(session.get("seg0").unwrap().pmin()[0], 0.0);
    assert_eq!(session.get("seg4").unwrap().pmax()[0], 100e-9);

    // Coupling table for the chain, terminated on both ends.
    let table = build_coupling_table(&[values], 0.5e-5, 0.5e-5, 10);
    assert_eq!(table["seg0"], 1e-5);
    assert_eq!(table["seg4"], 5e-5);
    assert_eq!(table["seg1:seg2"], table["seg2:seg1"]);
    assert_eq!(table["entire:seg0"], 0.5e-5);
    assert_eq!(table["seg4:entire"], 0.5e-5);
    // 5 self entries + 4 symmetric interfaces + 2 boundary pairs.
    assert_eq!(table.len(), 5 + 2 * 4 + 4);
}

#[test]
fn rebuilding_coupling_table_drops_stale_interfaces() {
    // The table is rebuilt from scratch when the subregion set changes;
    // interface keys of removed pieces must not survive.
    let three: IndexMap<String, f64> = [("s0", 1.0), ("s1", 2.0), ("s2", 3.0)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let first = build_coupling_table(&[three], 0.0, 0.0, 6);
    assert!(first.contains_key("s1:s2"));

    let two: IndexMap<String, f64> = [("s0", 1.0), ("s1", 2.0)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let rebuilt = build_coupling_table(&[two], 0.0, 0.0, 6);
    assert!(!rebuilt.contains_key("s1:s2"));
    assert!(rebuilt.contains_key("s0:s1"));
}

#[test]
fn merging_session_with_library_regions_reports_collisions() {
    let mut session = RegionMap::with_main(thin_film());
    session.set_cell(CELL);
    session.insert("driven", strip(40e-9, 60e-9));

    let mut library = RegionMap::new();
    library.insert("driven", strip(0.0, 20e-9));
    library.insert("damping_lhs", strip(0.0, 20e-9));
    library.insert("damping_rhs", strip(80e-9, 100e-9));

    let (merged, warnings) = RegionMap::merge(&session, &library);

    // Session's driven region wins; the collision is reported, not raised.
    assert_eq!(merged.get("driven"), Some(&strip(40e-9, 60e-9)));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].name, "driven");

    // Everything else unions in; session metadata is preferred.
    assert!(merged.contains("damping_lhs"));
    assert!(merged.contains("damping_rhs"));
    assert_eq!(merged.cell(), Some(CELL));
    assert!(merged.main().is_some());
}
