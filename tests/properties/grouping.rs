//! Property tests for conflict grouping.

use proptest::prelude::*;

use legacy_promote::domain::entities::FileCandidate;
use legacy_promote::domain::services::group_candidates;
use legacy_promote::domain::value_objects::GroupKey;

fn file_name() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u8..3, 0u8..3).prop_map(|(c, v)| format!("c{c}-{v}.0.0.js")),
        (0u8..3, 0u8..3).prop_map(|(c, v)| format!("c{c}-{v}.0.0.js.map")),
        Just("api.json".to_string()),
        Just("logo.png".to_string()),
        Just("mystery.bin".to_string()),
    ]
}

fn candidates() -> impl Strategy<Value = Vec<FileCandidate>> {
    proptest::collection::vec((file_name(), any::<bool>(), any::<bool>()), 0..24).prop_map(
        |entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (name, confirm, release))| {
                    let unique = format!("{i}/{name}");
                    FileCandidate::new(
                        format!("/dist/{unique}"),
                        format!("/legacy/{unique}"),
                        unique,
                        name,
                    )
                    .with_exists_at_destination(confirm)
                    .with_requires_confirmation(confirm)
                    .with_release_file(release)
                })
                .collect()
        },
    )
}

fn sources(candidates: &[FileCandidate]) -> Vec<String> {
    let mut out: Vec<String> = candidates
        .iter()
        .map(|c| c.source().display().to_string())
        .collect();
    out.sort();
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Grouping neither drops nor duplicates a candidate.
    #[test]
    fn property_grouping_is_a_partition(input in candidates()) {
        let plan = group_candidates(input.clone());

        let mut grouped: Vec<FileCandidate> = plan
            .groups
            .iter()
            .flat_map(|g| g.members().iter().cloned())
            .collect();
        grouped.extend(plan.auto.iter().cloned());

        prop_assert_eq!(plan.candidate_count(), input.len());
        prop_assert_eq!(sources(&grouped), sources(&input));
    }

    /// PROPERTY: Every group member carries the group's key, and every group
    /// has at least one member that needed confirmation.
    #[test]
    fn property_groups_are_keyed_releases(input in candidates()) {
        let plan = group_candidates(input);

        for group in &plan.groups {
            prop_assert!(group.members().iter().any(|c| c.requires_confirmation()));
            for member in group.members() {
                let key = GroupKey::for_file_name(member.file_name());
                prop_assert_eq!(key.as_ref(), Some(group.key()));
            }
        }
    }

    /// PROPERTY: Confirmable candidates only reach `auto` when they have no version.
    #[test]
    fn property_confirmable_versions_are_grouped(input in candidates()) {
        let plan = group_candidates(input);

        for candidate in &plan.auto {
            if candidate.requires_confirmation() {
                prop_assert!(GroupKey::for_file_name(candidate.file_name()).is_none());
            }
        }
        let unversioned = plan
            .auto
            .iter()
            .filter(|c| c.requires_confirmation())
            .count();
        prop_assert_eq!(plan.ungrouped, unversioned);
    }
}
