use scipio::traits::{IntoOutcome, OptionOutcomeExt};
use scipio::Outcome;

#[test]
fn result_into_outcome_keeps_variant() {
    let ok: Result<i32, &str> = Ok(1);
    assert_eq!(ok.into_outcome(), Outcome::succeeded(1));

    let err: Result<i32, &str> = Err("e");
    assert_eq!(err.into_outcome(), Outcome::failed("e"));
}

#[test]
fn into_outcome_at_end_of_result_chain() {
    let outcome = "21"
        .parse::<i32>()
        .map(|n| n * 2)
        .into_outcome()
        .map(|n| Ok(n + 1));

    assert_eq!(outcome.get(), Ok(43));
}

#[test]
fn option_into_outcome_or_supplies_error() {
    assert_eq!(Some(1).into_outcome_or("none"), Outcome::succeeded(1));
    assert_eq!(None::<i32>.into_outcome_or("none"), Outcome::failed("none"));
}

#[test]
fn option_into_outcome_or_else_is_lazy() {
    let mut built = false;
    let outcome = Some(3).into_outcome_or_else(|| {
        built = true;
        "unused"
    });
    assert!(!built);
    assert_eq!(outcome, Outcome::succeeded(3));

    let outcome = None::<i32>.into_outcome_or_else(|| "missing".to_string());
    assert_eq!(outcome.get(), Err("missing".to_string()));
}
