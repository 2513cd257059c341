//! Model-based property test: `AtomicFlag` must behave like a plain `bool`
//! when driven from a single thread.

use atomic_flag::AtomicFlag;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Get,
    GetNegated,
    Store(bool),
    SetTrue,
    SetFalse,
    Swap(bool),
    Toggle,
    CompareAndSwap(bool, bool),
    UnmarshalText(Vec<u8>),
}

fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        Just(b"true".to_vec()),
        Just(b"false".to_vec()),
        proptest::collection::vec(any::<u8>(), 0..8),
    ]
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Get),
        Just(Operation::GetNegated),
        any::<bool>().prop_map(Operation::Store),
        Just(Operation::SetTrue),
        Just(Operation::SetFalse),
        any::<bool>().prop_map(Operation::Swap),
        Just(Operation::Toggle),
        (any::<bool>(), any::<bool>()).prop_map(|(e, d)| Operation::CompareAndSwap(e, d)),
        text_strategy().prop_map(Operation::UnmarshalText),
    ]
}

proptest! {
    #[test]
    fn test_flag_matches_bool_model(
        initial in any::<bool>(),
        ops in proptest::collection::vec(operation_strategy(), 1..100),
    ) {
        let flag = AtomicFlag::new(initial);
        let mut model = initial;

        for op in ops {
            match op {
                Operation::Get => {
                    prop_assert_eq!(flag.get(), model);
                }
                Operation::GetNegated => {
                    prop_assert_eq!(flag.get_negated(), !model);
                }
                Operation::Store(v) => {
                    flag.store(v);
                    model = v;
                }
                Operation::SetTrue => {
                    flag.set_true();
                    model = true;
                }
                Operation::SetFalse => {
                    flag.set_false();
                    model = false;
                }
                Operation::Swap(v) => {
                    prop_assert_eq!(flag.swap(v), model);
                    model = v;
                }
                Operation::Toggle => {
                    prop_assert_eq!(flag.toggle(), model);
                    model = !model;
                }
                Operation::CompareAndSwap(expected, desired) => {
                    let swapped = flag.compare_and_swap(expected, desired);
                    prop_assert_eq!(swapped, model == expected);
                    if swapped {
                        model = desired;
                    }
                }
                Operation::UnmarshalText(text) => {
                    let parsed = std::str::from_utf8(&text)
                        .ok()
                        .and_then(|s| s.parse::<bool>().ok());
                    match (flag.unmarshal_text(&text), parsed) {
                        (Ok(()), Some(v)) => model = v,
                        (Err(_), None) => {}
                        (result, expected) => prop_assert!(
                            false,
                            "unmarshal_text({:?}) returned {:?}, expected {:?}",
                            text,
                            result,
                            expected
                        ),
                    }
                }
            }
            prop_assert_eq!(flag.get(), model);
        }
    }

    #[test]
    fn test_text_round_trip(value in any::<bool>()) {
        let target = AtomicFlag::new(!value);
        target.unmarshal_text(AtomicFlag::new(value).marshal_text()).unwrap();
        prop_assert_eq!(target.get(), value);
    }
}
