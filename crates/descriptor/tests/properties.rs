//! Property tests for the construction laws every builder relies on.

use descriptor::reference::{self, by_class, by_id, by_index, by_name, by_ordinal, by_property};
use descriptor::{unit, Command, Descriptor, Ordinal, Reference, Value, TARGET_KEY};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn arb_domain() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["layer", "document", "path", "contentLayer", "brushes", "guide"])
}

fn arb_reference() -> impl Strategy<Value = Reference> {
    let ordinals: Vec<Ordinal> = Ordinal::iter().collect();
    prop_oneof![
        (arb_domain(), any::<u32>()).prop_map(|(domain, id)| by_id(domain, id)),
        (arb_domain(), any::<u32>()).prop_map(|(domain, index)| by_index(domain, index)),
        (arb_domain(), "[a-zA-Z ]{0,12}").prop_map(|(domain, name)| by_name(domain, name)),
        (arb_domain(), prop::sample::select(ordinals))
            .prop_map(|(domain, ordinal)| by_ordinal(domain, ordinal)),
        arb_domain().prop_map(by_class),
        "[a-zA-Z]{1,12}".prop_map(by_property),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        // Quarters print and parse back exactly.
        (-1_000_000i32..1_000_000).prop_map(|v| Value::from(f64::from(v) / 4.0)),
        "[a-z]{0,8}".prop_map(Value::from),
        (-10_000i32..10_000).prop_map(|v| Value::from(unit::pixels(f64::from(v)).unwrap())),
        arb_reference().prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| Value::Descriptor(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn unit_wrapping_round_trips(v in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let wrapped = unit::percent(v).unwrap();
        prop_assert_eq!(wrapped.kind(), descriptor::UnitKind::Percent);
        prop_assert_eq!(wrapped.value(), v);
    }

    #[test]
    fn chain_resolves_to_outermost_domain(a in arb_reference(), b in arb_reference()) {
        let expected = reference::domain_of(&b).cloned();
        let chained = reference::chain([a, b]).unwrap();
        prop_assert_eq!(reference::domain_of(&chained).cloned(), expected);
    }

    #[test]
    fn key_order_never_affects_equality(
        entries in prop::collection::btree_map("[a-z]{1,6}", arb_value(), 0..6)
    ) {
        let forward: Descriptor = entries.clone().into_iter().collect();
        let backward: Descriptor = entries.into_iter().rev().collect();
        let a = Command::new("set", forward).unwrap();
        let b = Command::new("set", backward).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &a);
    }

    #[test]
    fn list_order_always_affects_equality(items in prop::collection::btree_set(any::<i64>(), 2..6)) {
        let forward: Vec<i64> = items.iter().copied().collect();
        let backward: Vec<i64> = items.iter().rev().copied().collect();
        let a = Command::new("set", Descriptor::new().with("to", forward)).unwrap();
        let b = Command::new("set", Descriptor::new().with("to", backward)).unwrap();
        prop_assert_ne!(a, b);
    }

    #[test]
    fn equality_is_reflexive_and_transitive(target in arb_reference(), value in arb_value()) {
        let build = || {
            Command::new(
                "set",
                Descriptor::new().with(TARGET_KEY, target.clone()).with("to", value.clone()),
            )
            .unwrap()
        };
        let (a, b, c) = (build(), build(), build());
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &c);
        prop_assert_eq!(&a, &c);
    }

    #[test]
    fn wire_form_parses_back_to_an_equal_command(target in arb_reference(), value in arb_value()) {
        let command = Command::new(
            "set",
            Descriptor::new().with(TARGET_KEY, target).with("to", value),
        )
        .unwrap();
        let restored = Command::from_wire(&command.to_json()).unwrap();
        prop_assert_eq!(restored, command);
    }
}
