//! Property tests for version marker matching.

use proptest::prelude::*;

use legacy_promote::domain::value_objects::version::{
    extract_component_name, extract_version, has_version_marker, is_map_of_versioned,
};
use legacy_promote::domain::value_objects::GroupKey;

fn component() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

fn extension() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,4}").unwrap()
}

fn version() -> impl Strategy<Value = String> {
    (0u32..1000, 0u32..1000, 0u32..1000).prop_map(|(a, b, c)| format!("{a}.{b}.{c}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Matching never panics on arbitrary names.
    #[test]
    fn property_matcher_never_panics(name in "(?s).{0,128}") {
        let _ = has_version_marker(&name);
        let _ = is_map_of_versioned(&name);
        let _ = extract_version(&name);
        let _ = extract_component_name(&name);
        let _ = GroupKey::for_file_name(&name);
    }

    /// PROPERTY: A well-formed release name yields its component and version.
    #[test]
    fn property_release_name_parts(c in component(), v in version(), ext in extension()) {
        let name = format!("{c}-{v}.{ext}");

        prop_assert!(has_version_marker(&name));
        prop_assert_eq!(extract_version(&name), Some(v.as_str()));
        prop_assert_eq!(extract_component_name(&name), c.as_str());
    }

    /// PROPERTY: A map file shares the key of the artifact it belongs to.
    #[test]
    fn property_map_shares_artifact_key(c in component(), v in version(), ext in extension()) {
        let name = format!("{c}-{v}.{ext}");
        let map = format!("{name}.map");

        prop_assert!(is_map_of_versioned(&map));
        prop_assert_eq!(GroupKey::for_file_name(&map), GroupKey::for_file_name(&name));
    }

    /// PROPERTY: Names without digits never carry a version.
    #[test]
    fn property_no_digits_no_version(name in "[A-Za-z._-]{0,40}") {
        prop_assert!(!has_version_marker(&name));
        prop_assert!(!is_map_of_versioned(&name));
        prop_assert!(GroupKey::for_file_name(&name).is_none());
    }

    /// PROPERTY: Two-part versions are not release markers.
    #[test]
    fn property_two_part_version_rejected(c in component(), a in 0u32..100, b in 0u32..100) {
        let name = format!("{c}-{a}.{b}.js");
        prop_assert!(!has_version_marker(&name));
    }
}
