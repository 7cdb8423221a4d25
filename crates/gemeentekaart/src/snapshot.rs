//! Feature snapshot - an immutable, indexed view of one load.
//!
//! Every load builds a fresh snapshot. Search, the province table and the
//! label layer all borrow it; nothing mutates it. A reload replaces the
//! whole value, so a half-built index is never visible.
//!
//! ## Rust Lesson #24: Indices instead of references
//!
//! The lookup maps store `usize` positions into `features` rather than
//! `&LabeledFeature`. A struct holding references into its own fields is
//! self-referential, which the borrow checker rejects.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::feature::LabeledFeature;
use crate::overpass;

/// Group name for features without a province tag.
pub const UNKNOWN_PROVINCE: &str = "Onbekend";

/// All features from one load, with lookup indices.
#[derive(Debug, Clone)]
pub struct FeatureSnapshot {
    features: Vec<LabeledFeature>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<i64, usize>,
    by_province: BTreeMap<String, Vec<usize>>,
    loaded_at: DateTime<Utc>,
}

/// One province and its municipalities, sorted by name.
#[derive(Debug, Clone)]
pub struct ProvinceGroup<'a> {
    pub province: &'a str,
    pub features: Vec<&'a LabeledFeature>,
}

impl FeatureSnapshot {
    /// Index `features`, grouping them by the `province_tag` tag.
    pub fn new(features: Vec<LabeledFeature>, province_tag: &str) -> Self {
        let mut by_name = HashMap::new();
        let mut by_id = HashMap::new();
        let mut by_province: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (idx, feature) in features.iter().enumerate() {
            if let Some(name) = feature.name() {
                // Later duplicates win
                by_name.insert(name.to_lowercase(), idx);
            }
            by_id.insert(feature.id, idx);

            let province = feature.tag(province_tag).unwrap_or(UNKNOWN_PROVINCE);
            by_province.entry(province.to_string()).or_default().push(idx);
        }

        for indices in by_province.values_mut() {
            indices.sort_by(|&a, &b| compare_names(&features[a], &features[b]));
        }

        Self {
            features,
            by_name,
            by_id,
            by_province,
            loaded_at: Utc::now(),
        }
    }

    pub fn features(&self) -> &[LabeledFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Feature by relation id.
    pub fn get(&self, id: i64) -> Option<&LabeledFeature> {
        self.by_id.get(&id).map(|&idx| &self.features[idx])
    }

    /// Case-insensitive lookup by full name. Surrounding whitespace is ignored.
    pub fn find_by_name(&self, query: &str) -> Option<&LabeledFeature> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.by_name.get(&query).map(|&idx| &self.features[idx])
    }

    /// Provinces in alphabetical order with their features sorted by name.
    pub fn provinces(&self) -> Vec<ProvinceGroup<'_>> {
        self.by_province
            .iter()
            .map(|(province, indices)| ProvinceGroup {
                province,
                features: indices.iter().map(|&idx| &self.features[idx]).collect(),
            })
            .collect()
    }
}

/// Sort key for the province table: case-insensitive name, then exact name.
fn compare_names(a: &LabeledFeature, b: &LabeledFeature) -> Ordering {
    let a = a.name().unwrap_or("");
    let b = b.name().unwrap_or("");
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Parse an Overpass response and index the result.
///
/// Fails with [`Error::NoFeatures`] when nothing survives the import, so a
/// caller keeps its previous snapshot instead of showing an empty map.
pub fn load_snapshot(json: &str, config: &Config) -> Result<FeatureSnapshot> {
    let response = overpass::parse_response(json)?;
    let features = overpass::to_features(&response, config);
    if features.is_empty() {
        return Err(Error::NoFeatures);
    }
    Ok(FeatureSnapshot::new(features, &config.province_tag))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::polygon::build;

    fn feature(id: i64, name: &str, province: Option<&str>) -> LabeledFeature {
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        let mut tags = BTreeMap::from([("name".to_string(), name.to_string())]);
        if let Some(province) = province {
            tags.insert("kad:provincie".to_string(), province.to_string());
        }
        LabeledFeature {
            id,
            tags,
            geometry: build(vec![ring], vec![]).unwrap(),
        }
    }

    fn snapshot() -> FeatureSnapshot {
        FeatureSnapshot::new(
            vec![
                feature(1, "Tilburg", Some("Noord-Brabant")),
                feature(2, "Breda", Some("Noord-Brabant")),
                feature(3, "Assen", Some("Drenthe")),
                feature(4, "Nergens", None),
                feature(5, "aalst", Some("Noord-Brabant")),
            ],
            "kad:provincie",
        )
    }

    #[test]
    fn lookup_by_id() {
        let snap = snapshot();
        assert_eq!(snap.len(), 5);
        assert_eq!(snap.get(3).and_then(|f| f.name()), Some("Assen"));
        assert!(snap.get(99).is_none());
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        let snap = snapshot();
        assert_eq!(snap.find_by_name("  tilburg ").map(|f| f.id), Some(1));
        assert_eq!(snap.find_by_name("BREDA").map(|f| f.id), Some(2));
        assert!(snap.find_by_name("Amsterdam").is_none());
        assert!(snap.find_by_name("   ").is_none());
    }

    #[test]
    fn duplicate_names_keep_last() {
        let snap = FeatureSnapshot::new(
            vec![feature(1, "Oosterhout", None), feature(2, "oosterhout", None)],
            "kad:provincie",
        );
        assert_eq!(snap.find_by_name("Oosterhout").map(|f| f.id), Some(2));
    }

    #[test]
    fn provinces_sorted_with_sorted_members() {
        let snap = snapshot();
        let groups = snap.provinces();

        let names: Vec<&str> = groups.iter().map(|g| g.province).collect();
        assert_eq!(names, vec!["Drenthe", "Noord-Brabant", UNKNOWN_PROVINCE]);

        let brabant: Vec<&str> = groups[1].features.iter().filter_map(|f| f.name()).collect();
        assert_eq!(brabant, vec!["aalst", "Breda", "Tilburg"]);
    }

    #[test]
    fn empty_province_groups_as_unknown() {
        let snap = FeatureSnapshot::new(
            vec![feature(1, "Zonder", Some("")), feature(2, "Nergens", None)],
            "kad:provincie",
        );
        let groups = snap.provinces();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].province, UNKNOWN_PROVINCE);
        assert_eq!(groups[0].features.len(), 2);
    }

    #[test]
    fn empty_load_is_an_error() {
        let err = load_snapshot(r#"{"elements": []}"#, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::NoFeatures));
    }

    #[test]
    fn reload_builds_independent_snapshot() {
        let first = snapshot();
        let second = FeatureSnapshot::new(vec![feature(7, "Urk", None)], "kad:provincie");

        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 1);
        assert!(first.get(7).is_none());
        assert!(second.loaded_at() >= first.loaded_at());
    }
}
