//! Nearest-neighbour coupling synthesis for chain-model energy terms.

use indexmap::IndexMap;
use magdom_core::round_to;

/// Key used for the two chain-termination boundary entries.
///
/// `"entire:<first>"` couples the chain's left boundary to the first
/// subregion; `"<last>:entire"` couples the last subregion to the right
/// boundary. The name refers to the whole mesh, matching the convention
/// of the solver the table is fed to.
pub const CHAIN_BOUNDARY_KEY: &str = "entire";

/// Build a symmetric nearest-neighbour coupling table from ordered
/// per-region values.
///
/// The input maps are merged in the given order with last-wins key
/// collision (the opposite of [`RegionMap::merge`], which is first-wins —
/// here later energy-term overrides are intentional). Then, walking the
/// merged key order:
///
/// - the two left-boundary entries `"entire:first"` / `"first:entire"`
///   are set to `left_boundary`;
/// - every self entry `a` keeps its merged value;
/// - every adjacent pair `(a, b)` gets `"a:b"` and `"b:a"`, both equal to
///   the arithmetic mean of the two values, rounded to `precision`
///   decimals;
/// - the two right-boundary entries `"last:entire"` / `"entire:last"` are
///   set to `right_boundary`.
///
/// An empty input yields an empty table. The table is built once per
/// energy-term definition and rebuilt from scratch whenever the subregion
/// set changes; it is never patched incrementally, so no stale interface
/// keys can survive.
///
/// [`RegionMap::merge`]: crate::RegionMap::merge
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use magdom_region::build_coupling_table;
///
/// let values: IndexMap<String, f64> =
///     [("a".to_string(), 1.0), ("b".to_string(), 3.0)].into_iter().collect();
/// let table = build_coupling_table(&[values], 0.1, 0.2, 4);
/// assert_eq!(table["a:b"], 2.0);
/// assert_eq!(table["b:a"], 2.0);
/// assert_eq!(table["entire:a"], 0.1);
/// assert_eq!(table["b:entire"], 0.2);
/// ```
pub fn build_coupling_table(
    maps: &[IndexMap<String, f64>],
    left_boundary: f64,
    right_boundary: f64,
    precision: u32,
) -> IndexMap<String, f64> {
    let mut merged: IndexMap<String, f64> = IndexMap::new();
    for map in maps {
        for (name, value) in map {
            merged.insert(name.clone(), *value);
        }
    }
    if merged.is_empty() {
        return IndexMap::new();
    }

    let keys: Vec<&String> = merged.keys().collect();
    let first = keys[0];
    let last = keys[keys.len() - 1];

    let mut table = IndexMap::new();

    table.insert(format!("{CHAIN_BOUNDARY_KEY}:{first}"), left_boundary);
    table.insert(format!("{first}:{CHAIN_BOUNDARY_KEY}"), left_boundary);

    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        table.insert(a.clone(), merged[a]);
        let mean = round_to((merged[a] + merged[b]) / 2.0, precision as i32);
        table.insert(format!("{a}:{b}"), mean);
        table.insert(format!("{b}:{a}"), mean);
    }

    // Last self entry, then the right boundary. With a single key this
    // overwrites the left-boundary entries, matching the legacy builder.
    table.insert(last.clone(), merged[last]);
    table.insert(format!("{last}:{CHAIN_BOUNDARY_KEY}"), right_boundary);
    table.insert(format!("{CHAIN_BOUNDARY_KEY}:{last}"), right_boundary);

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    // ── Worked example ──────────────────────────────────────────

    #[test]
    fn two_region_worked_example() {
        let table = build_coupling_table(&[map(&[("a", 1.0), ("b", 3.0)])], 0.1, 0.2, 4);
        let expected = map(&[
            ("a", 1.0),
            ("b", 3.0),
            ("a:b", 2.0),
            ("b:a", 2.0),
            ("entire:a", 0.1),
            ("a:entire", 0.1),
            ("b:entire", 0.2),
            ("entire:b", 0.2),
        ]);
        assert_eq!(table.len(), expected.len());
        for (key, value) in &expected {
            assert_eq!(table.get(key), Some(value), "key {key}");
        }
    }

    #[test]
    fn chain_of_three_has_interfaces_between_neighbours_only() {
        let table =
            build_coupling_table(&[map(&[("s0", 1e-5), ("s1", 2e-5), ("s2", 4e-5)])], 0.0, 0.0, 10);
        assert_eq!(table["s0:s1"], 1.5e-5);
        assert_eq!(table["s1:s2"], 3e-5);
        assert!(!table.contains_key("s0:s2"));
        assert!(!table.contains_key("s2:s0"));
    }

    #[test]
    fn mean_is_rounded_to_precision() {
        let table = build_coupling_table(&[map(&[("a", 1.0), ("b", 2.0 / 3.0)])], 0.0, 0.0, 4);
        assert_eq!(table["a:b"], 0.8333);
    }

    // ── Merge semantics ─────────────────────────────────────────

    #[test]
    fn later_maps_overwrite_earlier() {
        let table = build_coupling_table(
            &[map(&[("a", 1.0), ("b", 1.0)]), map(&[("b", 3.0)])],
            0.1,
            0.2,
            4,
        );
        assert_eq!(table["b"], 3.0);
        assert_eq!(table["a:b"], 2.0);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(build_coupling_table(&[], 0.1, 0.2, 4).is_empty());
        assert!(build_coupling_table(&[IndexMap::new()], 0.1, 0.2, 4).is_empty());
    }

    #[test]
    fn single_region_boundary_entries_take_right_value() {
        // first == last: the legacy builder's insertion order makes the
        // right boundary win both entries.
        let table = build_coupling_table(&[map(&[("a", 1.0)])], 0.1, 0.2, 4);
        assert_eq!(table["a"], 1.0);
        assert_eq!(table["entire:a"], 0.2);
        assert_eq!(table["a:entire"], 0.2);
        assert_eq!(table.len(), 3);
    }

    proptest! {
        #[test]
        fn interface_entries_are_symmetric(
            values in prop::collection::vec(0.0f64..1e-3, 2..8),
        ) {
            let entries: IndexMap<String, f64> = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("s{i}"), *v))
                .collect();
            let table = build_coupling_table(&[entries], 0.5, 0.5, 12);
            for i in 0..values.len() - 1 {
                let ab = table[&format!("s{}:s{}", i, i + 1)];
                let ba = table[&format!("s{}:s{}", i + 1, i)];
                prop_assert_eq!(ab, ba);
            }
        }

        #[test]
        fn self_entries_preserved(
            values in prop::collection::vec(-1.0f64..1.0, 1..8),
        ) {
            let entries: IndexMap<String, f64> = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("s{i}"), *v))
                .collect();
            let table = build_coupling_table(&[entries.clone()], 0.0, 0.0, 12);
            for (name, value) in &entries {
                prop_assert_eq!(table[name], *value);
            }
        }
    }
}
