use super::prelude::{Environment, Value, ValueType, FALSE, TRUE};

#[test]
fn test_declare_and_set() {
    let mut env = Environment::new();

    assert!(!env.is_declared("x"));
    assert!(!env.set("x", Value::Number { value: 1.0 }), "undeclared variables cannot be set");
    assert!(env.is_empty());

    assert_eq!(env.declare("x".into(), ValueType::Numero, ValueType::Numero.default_value()), None);
    assert_eq!(env.get("x"), Some(&Value::Number { value: 0.0 }));

    assert!(env.set("x", Value::Number { value: 42.0 }));
    assert_eq!(env.lookup("x"), Some((ValueType::Numero, &Value::Number { value: 42.0 })));
}

#[test]
fn test_redeclaration_replaces_type_and_value() {
    let mut env = Environment::new();

    env.declare("a".into(), ValueType::Numero, Value::Number { value: 7.0 });

    let previous = env.declare("a".into(), ValueType::Tinuod, TRUE);

    assert_eq!(previous, Some(ValueType::Numero));
    assert_eq!(env.get_type("a"), Some(ValueType::Tinuod));
    assert_eq!(env.get("a"), Some(&TRUE));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_names_are_case_sensitive() {
    let mut env = Environment::new();

    env.declare("name".into(), ValueType::Letra, Value::Text { value: "x".into() });

    assert!(env.is_declared("name"));
    assert!(!env.is_declared("Name"));
}

#[test]
fn test_defaults() {
    assert_eq!(ValueType::Numero.default_value(), Value::Number { value: 0.0 });
    assert_eq!(ValueType::Tipik.default_value(), Value::Number { value: 0.0 });
    assert_eq!(ValueType::Tinuod.default_value(), FALSE);
    assert_eq!(ValueType::Letra.default_value(), Value::Text { value: String::new() });
}

#[test]
fn test_display_by_type() {
    let number = Value::Number { value: 3.75 };

    assert_eq!(number.display_as(ValueType::Numero), "3");
    assert_eq!(number.display_as(ValueType::Tipik), "3.75");
    assert_eq!(Value::Number { value: 2.0 }.display_as(ValueType::Tipik), "2.0");
    assert_eq!(Value::Number { value: -0.5 }.display_as(ValueType::Numero), "0");
    assert_eq!(TRUE.display_as(ValueType::Tinuod), "OO");
    assert_eq!(FALSE.display_as(ValueType::Tinuod), "DILI");
    assert_eq!(Value::Text { value: "c".into() }.display_as(ValueType::Letra), "c");
    assert_eq!(Value::Number { value: 16.0 }.to_string(), "16");
}
