//! Property tests for topology compilation.

use proptest::prelude::*;
use std::path::PathBuf;

use serverlessui::domain::entities::{BuildContext, RouteTarget};
use serverlessui::domain::services::TopologyCompiler;
use serverlessui::domain::value_objects::{BuildId, DomainConfig};

fn entry_paths() -> impl Strategy<Value = Vec<PathBuf>> {
    proptest::collection::btree_set("[a-z][a-z0-9]{0,9}", 0..10).prop_map(|names| {
        names
            .into_iter()
            .map(|n| PathBuf::from(format!("functions/{}.ts", n)))
            .collect::<Vec<_>>()
    })
}

fn context(entries: Vec<PathBuf>, id: u32, is_prod: bool, with_domain: bool) -> BuildContext {
    let ctx = if is_prod {
        BuildContext::production()
    } else {
        BuildContext::preview(BuildId::from_u32(id))
    };
    let ctx = ctx.with_api_entries(entries);
    if with_domain {
        ctx.with_domain(DomainConfig::new("example.com", "Z1", "arn:aws:acm:x"))
    } else {
        ctx
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: equal contexts compile to equal plans.
    #[test]
    fn property_compile_is_deterministic(
        entries in entry_paths(),
        id in any::<u32>(),
        is_prod in any::<bool>(),
        with_domain in any::<bool>()
    ) {
        let ctx = context(entries, id, is_prod, with_domain);

        let first = TopologyCompiler::compile(&ctx).unwrap();
        let second = TopologyCompiler::compile(&ctx).unwrap();

        prop_assert_eq!(first, second);
    }

    /// PROPERTY: every API route outranks the catch-all, whatever the entry order.
    #[test]
    fn property_api_routes_outrank_default(
        shuffled in entry_paths().prop_shuffle(),
        id in any::<u32>()
    ) {
        let plan = TopologyCompiler::compile(&context(shuffled.clone(), id, false, false)).unwrap();

        let default = plan.default_route().unwrap();
        prop_assert_eq!(&default.target, &RouteTarget::Storage);
        prop_assert_eq!(plan.routes.last().unwrap(), default);
        prop_assert_eq!(plan.routes.len(), shuffled.len() + 1);
        for route in plan.routes.iter().filter(|r| !r.is_default()) {
            prop_assert!(route.rank > default.rank);
            prop_assert!(route.path_pattern.starts_with("/api/"));
        }
    }

    /// PROPERTY: the set of API routes does not depend on entry order.
    #[test]
    fn property_route_set_is_order_independent(
        entries in entry_paths(),
        id in any::<u32>()
    ) {
        let mut reversed = entries.clone();
        reversed.reverse();

        let forward = TopologyCompiler::compile(&context(entries, id, false, false)).unwrap();
        let backward = TopologyCompiler::compile(&context(reversed, id, false, false)).unwrap();

        let mut a: Vec<&str> = forward.routes.iter().map(|r| r.path_pattern.as_str()).collect();
        let mut b: Vec<&str> = backward.routes.iter().map(|r| r.path_pattern.as_str()).collect();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: each API function has exactly one route pointing at it.
    #[test]
    fn property_one_route_per_function(entries in entry_paths(), id in any::<u32>()) {
        let plan = TopologyCompiler::compile(&context(entries, id, false, false)).unwrap();

        for node in plan.api_nodes() {
            let hits = plan
                .routes
                .iter()
                .filter(|r| r.target == RouteTarget::Compute(node.route_name.clone()))
                .count();
            prop_assert_eq!(hits, 1);
        }
    }
}
