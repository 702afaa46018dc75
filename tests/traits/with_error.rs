use scipio::traits::WithError;
use scipio::Outcome;

#[test]
fn with_error_maps_result_error_type() {
    let result: Result<i32, &str> = Err("oops");
    let mapped: Result<i32, String> = result.fmap_error(|e| format!("ERR:{e}"));

    assert_eq!(mapped.unwrap_err(), "ERR:oops");
}

#[test]
fn with_error_leaves_result_success_untouched() {
    let result: Result<i32, &str> = Ok(42);
    let mapped = result.fmap_error(|e| format!("Error: {}", e));
    assert_eq!(mapped, Ok(42));
}

#[test]
fn with_error_maps_outcome_error_type() {
    let outcome: Outcome<i32, u16> = Outcome::failed(404);
    let mapped = outcome.fmap_error(|code| format!("HTTP {code}"));

    assert_eq!(mapped, Outcome::failed("HTTP 404".to_string()));
}

#[test]
fn with_error_to_result_on_outcome() {
    let outcome: Outcome<i32, &str> = Outcome::succeeded(42);
    assert_eq!(outcome.to_result(), Ok(42));

    let outcome: Outcome<i32, &str> = Outcome::failed("e");
    assert_eq!(outcome.to_result(), Err("e"));
}
