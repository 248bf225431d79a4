use memogate::prelude::*;
use std::{collections::HashMap, rc::Rc, sync::Arc};

#[derive(Record)]
struct Heading {
    text: &'static str,
    counter: Option<u32>,
}

#[derive(Record)]
struct Nested {
    x: Rc<Inner>,
}

struct Inner {
    v: i32,
}

#[derive(Record)]
struct Pair(String, Arc<[u8]>);

#[derive(Record)]
struct Empty;

#[derive(Record)]
struct Generic<T> {
    value: T,
}

#[test]
fn it_compares_key_sets() {
    assert!(!shallow_equal(&props! { a: 1 }, &props! { a: 1, b: 2 }));
    assert!(!shallow_equal(&props! { a: 1, b: 2 }, &props! { a: 1 }));
    assert!(!shallow_equal(&props! { a: 1 }, &props! { b: 1 }));
}

#[test]
fn it_compares_values() {
    assert!(!shallow_equal(&props! { a: 1 }, &props! { a: 2 }));
    assert!(shallow_equal(&props! { a: "x" }, &props! { a: String::from("x") }));
}

#[test]
fn it_compares_numbers_by_value() {
    assert!(shallow_equal(&props! { a: 1 }, &props! { a: 1u32 }));
    assert!(shallow_equal(&props! { a: 2u8 }, &props! { a: 2.0 }));
    assert!(!shallow_equal(&props! { a: 1 }, &props! { a: 1.5 }));
    assert!(!shallow_equal(&props! { a: -1 }, &props! { a: u64::MAX }));
}

#[test]
fn it_ignores_key_order() {
    assert!(shallow_equal(&props! { a: 1, b: 2 }, &props! { b: 2, a: 1 }));
}

#[test]
fn it_compares_composites_by_reference() {
    assert!(!shallow_equal(
        &props! { x: Value::new_shared(Inner { v: 1 }) },
        &props! { x: Value::new_shared(Inner { v: 1 }) },
    ));

    let a = Nested {
        x: Rc::new(Inner { v: 1 }),
    };
    let b = Nested {
        x: Rc::new(Inner { v: 1 }),
    };
    assert_eq!(a.x.v, b.x.v);
    assert!(!shallow_equal(&a, &b));

    let c = Nested { x: a.x.clone() };
    assert!(shallow_equal(&a, &c));
}

#[test]
fn it_treats_absent_records_as_empty() {
    assert!(shallow_equal(&None, &Some(props! {})));
    assert!(!shallow_equal(&None, &Some(props! { a: 1 })));
    assert!(shallow_equal(&Some(Empty), &None));
}

#[test]
fn it_derives_records() {
    let a = Heading {
        text: "Count",
        counter: Some(1),
    };

    assert_eq!(a.len(), 2);
    assert!(shallow_equal(
        &a,
        &Heading {
            text: "Count",
            counter: Some(1)
        }
    ));
    assert!(should_recompute(
        &a,
        &Heading {
            text: "Count",
            counter: None
        }
    ));

    let bytes: Arc<[u8]> = Arc::from([1, 2].as_slice());
    assert!(shallow_equal(
        &Pair("a".into(), bytes.clone()),
        &Pair("a".into(), bytes)
    ));
    assert!(!shallow_equal(
        &Pair("a".into(), Arc::from([1].as_slice())),
        &Pair("a".into(), Arc::from([1].as_slice()))
    ));

    assert!(Empty.is_empty());
    assert!(shallow_equal(&Empty, &Empty));

    assert!(shallow_equal(&Generic { value: 1.5 }, &Generic { value: 1.5 }));
    assert!(!shallow_equal(
        &Generic { value: f64::NAN },
        &Generic { value: f64::NAN }
    ));
}

#[test]
fn it_compares_maps() {
    let a: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 2)]);
    let b: HashMap<&str, i32> = HashMap::from([("b", 2), ("a", 1)]);
    assert!(shallow_equal(&a, &b));

    let c: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 3)]);
    assert!(!shallow_equal(&a, &c));
}
