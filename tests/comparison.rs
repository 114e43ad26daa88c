use equate::{
    evaluate_equals, evaluate_not_equals, normalize_boolean, Array, Comparator, EqualityOp,
    Error, Kind, Value,
};
use rstest::rstest;

fn array() -> Value {
    Value::Array(Array::new())
}

fn s(text: &str) -> Value {
    Value::from(text)
}

/// Assert `lhs == rhs` gives `expected` in both operand orders, and `!=` the opposite.
fn assert_compares(lhs: &Value, rhs: &Value, expected: bool) {
    assert_eq!(evaluate_equals(lhs, rhs), Ok(expected), "{lhs:?} == {rhs:?}");
    assert_eq!(evaluate_equals(rhs, lhs), Ok(expected), "{rhs:?} == {lhs:?}");
    assert_eq!(evaluate_not_equals(lhs, rhs), Ok(!expected), "{lhs:?} != {rhs:?}");
    assert_eq!(evaluate_not_equals(rhs, lhs), Ok(!expected), "{rhs:?} != {lhs:?}");
}

#[rstest]
#[case::null_null(Value::Null, Value::Null, true)]
#[case::null_false(Value::Null, Value::Boolean(false), false)]
#[case::null_true(Value::Null, Value::Boolean(true), false)]
#[case::null_zero(Value::Null, Value::Integer(0), false)]
#[case::null_real_zero(Value::Null, Value::Real(0.0), false)]
#[case::null_string_null(Value::Null, s("null"), false)]
#[case::null_empty_string(Value::Null, s(""), false)]
#[case::null_array(Value::Null, array(), false)]
#[case::false_false(Value::Boolean(false), Value::Boolean(false), true)]
#[case::true_false(Value::Boolean(true), Value::Boolean(false), false)]
#[case::false_int_zero(Value::Boolean(false), Value::Integer(0), true)]
#[case::true_int_zero(Value::Boolean(true), Value::Integer(0), false)]
#[case::true_int_one(Value::Boolean(true), Value::Integer(1), true)]
#[case::true_int_minus_one(Value::Boolean(true), Value::Integer(-1), true)]
#[case::false_int_minus_one(Value::Boolean(false), Value::Integer(-1), false)]
#[case::false_real_zero(Value::Boolean(false), Value::Real(0.0), true)]
#[case::false_real_minus_zero(Value::Boolean(false), Value::Real(-0.0), true)]
#[case::true_real_one(Value::Boolean(true), Value::Real(1.0), true)]
#[case::true_real_minus_one(Value::Boolean(true), Value::Real(-1.0), true)]
#[case::true_real_tiny(Value::Boolean(true), Value::Real(1e-300), true)]
#[case::false_string_false(Value::Boolean(false), s("false"), true)]
#[case::true_string_true(Value::Boolean(true), s("true"), true)]
#[case::true_string_false(Value::Boolean(true), s("false"), false)]
#[case::true_string_yes(Value::Boolean(true), s("yes"), false)]
#[case::true_string_capital(Value::Boolean(true), s("True"), false)]
#[case::true_string_one(Value::Boolean(true), s("1"), false)]
#[case::false_string_zero(Value::Boolean(false), s("0"), false)]
#[case::false_string_empty(Value::Boolean(false), s(""), false)]
#[case::true_array(Value::Boolean(true), array(), true)]
#[case::false_array(Value::Boolean(false), array(), false)]
#[case::int_int(Value::Integer(0), Value::Integer(0), true)]
#[case::int_int_differ(Value::Integer(-1), Value::Integer(1), false)]
#[case::int_real(Value::Integer(1), Value::Real(1.0), true)]
#[case::int_real_negative(Value::Integer(-1), Value::Real(-1.0), true)]
#[case::int_real_fraction(Value::Integer(0), Value::Real(0.1), false)]
#[case::int_real_near(Value::Integer(-1), Value::Real(-0.9), false)]
#[case::int_string(Value::Integer(10), s("10"), true)]
#[case::int_string_negative(Value::Integer(-10), s("-10"), true)]
#[case::int_string_zero(Value::Integer(0), s("0"), true)]
#[case::int_string_longer(Value::Integer(10), s("101"), false)]
#[case::int_string_leading_zero(Value::Integer(10), s("010"), false)]
#[case::int_string_plus(Value::Integer(10), s("+10"), false)]
#[case::int_string_hex(Value::Integer(16), s("0x10"), false)]
#[case::int_string_space(Value::Integer(10), s(" 10"), false)]
#[case::int_string_real_text(Value::Integer(1), s("1.0"), false)]
#[case::real_real(Value::Real(0.0), Value::Real(0.0), true)]
#[case::real_real_signed_zero(Value::Real(0.0), Value::Real(-0.0), true)]
#[case::real_real_differ(Value::Real(0.0), Value::Real(0.1), false)]
#[case::real_real_no_tolerance(Value::Real(-3.14e5), Value::Real(-31400.0), false)]
#[case::real_string_own_text(Value::Real(0.0), s("0.0"), false)]
#[case::real_string_own_text_fraction(Value::Real(1.234), s("1.234"), false)]
#[case::real_string_integral_text(Value::Real(1.0), s("1"), false)]
#[case::string_string(s("abc"), s("abc"), true)]
#[case::string_string_case(s("abc"), s("ABC"), false)]
#[case::string_string_space(s("abc"), s("abc "), false)]
#[case::string_empty(s(""), s(""), true)]
fn legal_pairs(#[case] lhs: Value, #[case] rhs: Value, #[case] expected: bool) {
    assert_compares(&lhs, &rhs, expected);
}

#[rstest]
#[case::integer_array(Value::Integer(0), array())]
#[case::real_array(Value::Real(0.0), array())]
#[case::string_array(s("i"), array())]
#[case::array_array(array(), array())]
fn illegal_pairs(#[case] lhs: Value, #[case] rhs: Value) {
    for (a, b) in [(&lhs, &rhs), (&rhs, &lhs)] {
        for op in [EqualityOp::Equal, EqualityOp::NotEqual] {
            assert_eq!(
                Comparator::default().evaluate(op, a, b),
                Err(Error::Incomparable {
                    op,
                    lhs: a.kind(),
                    rhs: b.kind()
                })
            );
        }
    }
}

#[test]
fn same_array_is_still_incomparable() {
    let i = Array::from(vec![Value::Integer(1)]);
    let lhs = Value::Array(i.clone());
    let rhs = Value::Array(i);
    assert!(matches!(
        evaluate_equals(&lhs, &rhs),
        Err(Error::Incomparable { .. })
    ));
    assert!(matches!(
        evaluate_not_equals(&lhs, &rhs),
        Err(Error::Incomparable { .. })
    ));
}

#[test]
fn null_never_raises() {
    for v in [
        Value::Null,
        Value::Boolean(false),
        Value::Integer(0),
        Value::Real(f64::NAN),
        s("null"),
        array(),
    ] {
        let expected = v.kind() == Kind::Null;
        assert_eq!(evaluate_equals(&Value::Null, &v), Ok(expected));
        assert_eq!(evaluate_equals(&v, &Value::Null), Ok(expected));
    }
}

#[test]
fn boolean_aliases_compare_equal() {
    let lhs = Value::Boolean(normalize_boolean("yes").unwrap());
    let rhs = Value::Boolean(normalize_boolean("true").unwrap());
    assert_compares(&lhs, &rhs, true);
    let lhs = Value::Boolean(normalize_boolean("0").unwrap());
    let rhs = Value::Boolean(normalize_boolean("False").unwrap());
    assert_compares(&lhs, &rhs, true);
}

#[test]
fn integer_string_uses_canonical_text() {
    for i in [0, 7, -7, 1234567890, i64::MAX, i64::MIN] {
        assert_compares(&Value::Integer(i), &s(&i.to_string()), true);
    }
}

#[test]
fn operands_are_not_modified() {
    let arr = Array::from(vec![Value::Integer(1), Value::Null]);
    let lhs = Value::Boolean(true);
    let rhs = Value::Array(arr.clone());
    assert_eq!(evaluate_equals(&lhs, &rhs), Ok(true));
    assert_eq!(arr.len(), 2);
    assert!(matches!(lhs, Value::Boolean(true)));
}

#[test]
fn comparisons_run_in_parallel() {
    let shared = Value::Array(Array::new());
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(evaluate_equals(&Value::Boolean(true), &shared), Ok(true));
                    assert!(evaluate_equals(&Value::Integer(1), &shared).is_err());
                }
            });
        }
    });
}

#[test]
fn end_to_end_scenario() {
    assert_eq!(
        evaluate_equals(&Value::Boolean(true), &Value::Integer(-1)),
        Ok(true)
    );
    assert_eq!(
        evaluate_equals(&Value::Boolean(false), &Value::Real(0.0)),
        Ok(true)
    );
    assert_eq!(evaluate_equals(&Value::Boolean(true), &s("yes")), Ok(false));
}
