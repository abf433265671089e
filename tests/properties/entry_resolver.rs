//! Property tests for entry resolution.

use proptest::prelude::*;
use std::path::PathBuf;

use serverlessui::domain::services::EntryResolver;

fn route_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z][a-z0-9_-]{0,11}", 0..12)
        .prop_map(|names| names.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one entry per path, in input order.
    #[test]
    fn property_resolve_preserves_order(
        names in route_names(),
        ext in prop::sample::select(vec!["ts", "js"])
    ) {
        let paths: Vec<PathBuf> = names
            .iter()
            .map(|n| PathBuf::from(format!("functions/{}.{}", n, ext)))
            .collect();

        let entries = EntryResolver::resolve(&paths).unwrap();

        let resolved: Vec<&str> = entries.iter().map(|e| e.route_name()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(resolved, expected);
        for (entry, path) in entries.iter().zip(&paths) {
            prop_assert_eq!(entry.source_path(), path.as_path());
        }
    }

    /// PROPERTY: only the last extension is stripped; directories never leak in.
    #[test]
    fn property_route_name_is_file_stem(
        dir in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        stem in "[a-z][a-z0-9]{0,7}(\\.[a-z]{1,4})?",
        ext in prop::sample::select(vec!["ts", "js", "mjs"])
    ) {
        let path = PathBuf::from(format!("{}/{}.{}", dir, stem, ext));
        prop_assert_eq!(EntryResolver::route_name(&path).unwrap(), stem);
    }

    /// PROPERTY: resolution never panics on arbitrary input.
    #[test]
    fn property_resolve_never_panics(s in "(?s).{0,64}") {
        let _ = EntryResolver::resolve(&[PathBuf::from(s)]);
    }
}
