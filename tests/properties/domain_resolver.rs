//! Property tests for the domain decision.

use proptest::prelude::*;

use serverlessui::domain::services::DomainResolver;
use serverlessui::domain::value_objects::{BuildId, DomainConfig};

fn maybe_field(value: &'static str) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some(value.to_string())),
    ]
}

fn build_id() -> impl Strategy<Value = BuildId> {
    any::<u32>().prop_map(BuildId::from_u32)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an alias exists exactly when all three fields are non-blank.
    #[test]
    fn property_alias_requires_complete_triple(
        domain_name in maybe_field("example.com"),
        hosted_zone_id in maybe_field("Z1"),
        certificate_arn in maybe_field("arn:aws:acm:us-east-1:1:certificate/x"),
        id in build_id(),
        is_prod in any::<bool>()
    ) {
        let complete = [&domain_name, &hosted_zone_id, &certificate_arn]
            .iter()
            .all(|f| f.as_deref().is_some_and(|v| !v.is_empty()));
        let domain = DomainConfig { domain_name, hosted_zone_id, certificate_arn };
        let build_id = (!is_prod).then_some(&id);

        let decision = DomainResolver::resolve(Some(&domain), build_id, is_prod);

        prop_assert_eq!(decision.is_alias(), complete);
    }

    /// PROPERTY: previews alias `{build_id}.{domain}`, production aliases `www.{domain}`.
    #[test]
    fn property_hostname_label(id in build_id(), is_prod in any::<bool>()) {
        let domain = DomainConfig::new("example.com", "Z1", "arn:aws:acm:x");
        let build_id = (!is_prod).then_some(&id);

        let decision = DomainResolver::resolve(Some(&domain), build_id, is_prod);

        let expected = if is_prod {
            "www.example.com".to_string()
        } else {
            format!("{}.example.com", id)
        };
        prop_assert_eq!(decision.hostname(), Some(expected.as_str()));
    }
}

#[test]
fn test_all_eight_presence_combinations() {
    let fields = ["example.com", "Z1", "arn:aws:acm:x"];
    for mask in 0u8..8 {
        let pick = |bit: u8, value: &str| (mask & (1 << bit) != 0).then(|| value.to_string());
        let domain = DomainConfig {
            domain_name: pick(0, fields[0]),
            hosted_zone_id: pick(1, fields[1]),
            certificate_arn: pick(2, fields[2]),
        };

        let decision = DomainResolver::resolve(Some(&domain), None, true);

        assert_eq!(decision.is_alias(), mask == 7, "mask {mask:03b}");
    }
}
