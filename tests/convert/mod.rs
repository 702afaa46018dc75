use scipio::convert::*;
use scipio::Outcome;

#[test]
fn result_to_outcome_maps_variants() {
    assert_eq!(result_to_outcome(Ok::<i32, &str>(1)), Outcome::succeeded(1));
    assert_eq!(result_to_outcome(Err::<i32, &str>("e")), Outcome::failed("e"));
}

#[test]
fn outcome_to_result_maps_variants() {
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::succeeded(1)), Ok(1));
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::failed("e")), Err("e"));
}

#[test]
fn option_to_outcome_uses_fallback_error_for_none() {
    let present = option_to_outcome(Some("test"), || "Empty optional");
    assert_eq!(present.get(), Ok("test"));

    let absent = option_to_outcome(None::<&str>, || "Empty optional");
    assert_eq!(absent.get(), Err("Empty optional"));
}

#[test]
fn outcome_to_option_drops_error() {
    assert_eq!(outcome_to_option(Outcome::<i32, &str>::succeeded(2)), Some(2));
    assert_eq!(outcome_to_option(Outcome::<i32, &str>::failed("e")), None);
}

#[test]
fn option_chaining_after_conversion() {
    let greeting = Outcome::<&str, &str>::succeeded("world")
        .to_option()
        .map(|name| format!("hello {name}"));
    assert_eq!(greeting.as_deref(), Some("hello world"));

    let fallback = Outcome::<&str, &str>::failed("offline")
        .to_option()
        .unwrap_or("default");
    assert_eq!(fallback, "default");
}
