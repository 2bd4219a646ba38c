//! Insertion-ordered named-region container with a reserved domain key.

use crate::error::RegionError;
use crate::region::Region;
use crate::subdivide::Subdivision;
use indexmap::IndexMap;
use magdom_core::{CellSize, Point3};
use std::fmt;

/// Reserved key for the encompassing domain region.
pub const MAIN_KEY: &str = "main";

/// Non-fatal warning: a merge found the same name in both containers.
///
/// Collected and returned alongside the merge result so bulk merges never
/// abort; the caller decides whether to surface it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateName {
    /// The colliding region name. The first container's region was kept.
    pub name: String,
}

impl fmt::Display for DuplicateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region '{}' exists in both containers; kept the first", self.name)
    }
}

/// Named regions for one geometry session, in insertion order.
///
/// The reserved [`MAIN_KEY`] entry is the encompassing domain region; all
/// other entries are subregions and may be added or removed freely. Once
/// set, the main region anchors dimension-label and unit inference for
/// regions created later in the session via
/// [`insert_like_main`](RegionMap::insert_like_main).
///
/// An optional [`CellSize`] rides along as session metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionMap {
    regions: IndexMap<String, Region>,
    cell: Option<CellSize>,
}

impl RegionMap {
    /// Empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Container seeded with a main region.
    pub fn with_main(region: Region) -> Self {
        let mut map = Self::new();
        map.set_main(region);
        map
    }

    /// Set or replace the main region.
    pub fn set_main(&mut self, region: Region) {
        self.regions.insert(MAIN_KEY.to_string(), region);
    }

    /// The main region, if set.
    pub fn main(&self) -> Option<&Region> {
        self.regions.get(MAIN_KEY)
    }

    /// Session cell size, if set.
    pub fn cell(&self) -> Option<CellSize> {
        self.cell
    }

    /// Attach the session cell size.
    pub fn set_cell(&mut self, cell: CellSize) {
        self.cell = Some(cell);
    }

    /// Insert or replace a named region. Returns the previous region under
    /// that name, if any.
    pub fn insert(&mut self, name: impl Into<String>, region: Region) -> Option<Region> {
        self.regions.insert(name.into(), region)
    }

    /// Insert a region built from corners with labels and units inherited
    /// from the main region.
    ///
    /// Fails with [`RegionError::MissingMain`] if no main region is set.
    pub fn insert_like_main(
        &mut self,
        name: impl Into<String>,
        pmin: Point3,
        pmax: Point3,
    ) -> Result<&Region, RegionError> {
        let main = self.main().ok_or(RegionError::MissingMain)?;
        let region = Region::like(main, pmin, pmax)?;
        let name = name.into();
        self.regions.insert(name.clone(), region);
        Ok(&self.regions[&name])
    }

    /// Look up a region by name.
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.get(name)
    }

    /// Look up a region by name, inserting the result of `make` if absent.
    ///
    /// The explicit replacement for implicit create-on-access containers:
    /// callers that want lazily created entries say so at the call site.
    pub fn get_or_insert_with(
        &mut self,
        name: impl Into<String>,
        make: impl FnOnce() -> Region,
    ) -> &Region {
        self.regions.entry(name.into()).or_insert_with(make)
    }

    /// Remove a region by name, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Region> {
        self.regions.shift_remove(name)
    }

    /// Whether a region with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    /// Number of entries, including the main region if set.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the container has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// All entries in insertion order, main included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Region)> {
        self.regions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Subregion entries only (everything except [`MAIN_KEY`]), in
    /// insertion order.
    pub fn subregions(&self) -> impl Iterator<Item = (&str, &Region)> {
        self.iter().filter(|(k, _)| *k != MAIN_KEY)
    }

    /// Region names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Commit a subdivision's pieces, optionally removing the parent.
    ///
    /// Pieces are inserted in position order after the existing entries.
    /// The parent (which may be the main region — subdividing the whole
    /// domain into a chain is the legacy flow) is removed only when
    /// `remove_parent` is set, and only after all pieces are in.
    pub fn apply_subdivision(
        &mut self,
        parent: &str,
        subdivision: Subdivision,
        remove_parent: bool,
    ) {
        for (name, region) in subdivision.regions {
            self.regions.insert(name, region);
        }
        if remove_parent {
            self.regions.shift_remove(parent);
        }
    }

    /// Merge two containers into a new one.
    ///
    /// Union of keys; on a name collision the region from `first` wins and
    /// one [`DuplicateName`] warning is collected — collisions are
    /// reported, never raised, so bulk merges do not abort. The cell
    /// metadata prefers `first`'s, falling back to `second`'s.
    pub fn merge(first: &RegionMap, second: &RegionMap) -> (RegionMap, Vec<DuplicateName>) {
        let mut merged = first.clone();
        let mut warnings = Vec::new();
        for (name, region) in &second.regions {
            if merged.regions.contains_key(name) {
                warnings.push(DuplicateName { name: name.clone() });
            } else {
                merged.regions.insert(name.clone(), region.clone());
            }
        }
        if merged.cell.is_none() {
            merged.cell = second.cell;
        }
        (merged, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subdivide::{subdivide, Partition, SubdivideOptions};
    use magdom_core::Axis;

    fn domain() -> Region {
        Region::si([0.0, 0.0, 0.0], [100e-9, 10e-9, 12e-9]).unwrap()
    }

    fn small(x0: f64, x1: f64) -> Region {
        Region::si([x0, 0.0, 0.0], [x1, 10e-9, 12e-9]).unwrap()
    }

    // ── Basic container behavior ────────────────────────────────

    #[test]
    fn with_main_sets_reserved_key() {
        let map = RegionMap::with_main(domain());
        assert_eq!(map.main(), Some(&domain()));
        assert!(map.contains(MAIN_KEY));
        assert_eq!(map.subregions().count(), 0);
    }

    #[test]
    fn subregions_excludes_main() {
        let mut map = RegionMap::with_main(domain());
        map.insert("driven", small(0.0, 20e-9));
        map.insert("lead", small(20e-9, 40e-9));
        let names: Vec<&str> = map.subregions().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["driven", "lead"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn insert_like_main_inherits_labels() {
        let mut map = RegionMap::with_main(domain());
        let r = map
            .insert_like_main("driven", [0.0, 0.0, 0.0], [20e-9, 10e-9, 12e-9])
            .unwrap()
            .clone();
        assert_eq!(r.dims(), domain().dims());
        assert_eq!(r.units(), domain().units());
    }

    #[test]
    fn insert_like_main_requires_main() {
        let mut map = RegionMap::new();
        let err = map
            .insert_like_main("driven", [0.0, 0.0, 0.0], [20e-9, 10e-9, 12e-9])
            .unwrap_err();
        assert_eq!(err, RegionError::MissingMain);
    }

    #[test]
    fn get_or_insert_with_creates_once() {
        let mut map = RegionMap::new();
        map.get_or_insert_with("pad", || small(0.0, 20e-9));
        let existing = map.get_or_insert_with("pad", || small(50e-9, 90e-9)).clone();
        assert_eq!(existing, small(0.0, 20e-9));
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut map = RegionMap::with_main(domain());
        map.insert("a", small(0.0, 20e-9));
        map.insert("b", small(20e-9, 40e-9));
        map.insert("c", small(40e-9, 60e-9));
        map.remove("b");
        let names: Vec<&str> = map.names().collect();
        assert_eq!(names, vec![MAIN_KEY, "a", "c"]);
    }

    // ── Subdivision commit ──────────────────────────────────────

    #[test]
    fn apply_subdivision_removes_parent_after_insert() {
        let cell = [2e-9, 1e-9, 12e-9];
        let mut map = RegionMap::with_main(domain());
        let sub = subdivide(
            map.main().unwrap(),
            Axis::X,
            &Partition::Count(2),
            (0.0, 1.0),
            cell,
            &SubdivideOptions::default(),
        )
        .unwrap();
        map.apply_subdivision(MAIN_KEY, sub, true);
        let names: Vec<&str> = map.names().collect();
        assert_eq!(names, vec!["sub0", "sub1"]);
        assert!(map.main().is_none());
    }

    #[test]
    fn apply_subdivision_can_keep_parent() {
        let cell = [2e-9, 1e-9, 12e-9];
        let mut map = RegionMap::with_main(domain());
        let sub = subdivide(
            map.main().unwrap(),
            Axis::X,
            &Partition::Count(2),
            (0.0, 1.0),
            cell,
            &SubdivideOptions::default(),
        )
        .unwrap();
        map.apply_subdivision(MAIN_KEY, sub, false);
        assert!(map.main().is_some());
        assert_eq!(map.len(), 3);
    }

    // ── Merge ───────────────────────────────────────────────────

    #[test]
    fn merge_unions_keys_first_wins() {
        let mut a = RegionMap::new();
        a.insert("x", small(0.0, 20e-9));
        a.insert("a_only", small(20e-9, 40e-9));
        let mut b = RegionMap::new();
        b.insert("x", small(60e-9, 80e-9));
        b.insert("b_only", small(80e-9, 100e-9));

        let (merged, warnings) = RegionMap::merge(&a, &b);
        assert_eq!(merged.get("x"), Some(&small(0.0, 20e-9)));
        assert!(merged.contains("a_only"));
        assert!(merged.contains("b_only"));
        assert_eq!(warnings, vec![DuplicateName { name: "x".into() }]);
    }

    #[test]
    fn merge_without_collisions_reports_nothing() {
        let mut a = RegionMap::new();
        a.insert("a", small(0.0, 20e-9));
        let mut b = RegionMap::new();
        b.insert("b", small(20e-9, 40e-9));
        let (merged, warnings) = RegionMap::merge(&a, &b);
        assert_eq!(merged.len(), 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn merge_prefers_first_cell_metadata() {
        let mut a = RegionMap::new();
        a.set_cell([2e-9, 1e-9, 12e-9]);
        let mut b = RegionMap::new();
        b.set_cell([1e-9, 1e-9, 1e-9]);
        let (merged, _) = RegionMap::merge(&a, &b);
        assert_eq!(merged.cell(), Some([2e-9, 1e-9, 12e-9]));

        let empty = RegionMap::new();
        let (merged, _) = RegionMap::merge(&empty, &b);
        assert_eq!(merged.cell(), Some([1e-9, 1e-9, 1e-9]));
    }
}
