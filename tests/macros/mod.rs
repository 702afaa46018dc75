use scipio::{attempt, Outcome};
use std::num::ParseIntError;

#[test]
fn attempt_wraps_single_expression() {
    let outcome = attempt!("7".parse::<u8>());
    assert_eq!(outcome, Outcome::succeeded(7));
}

#[test]
fn attempt_captures_question_mark_inside_block() {
    let outcome = attempt!({
        let a: i32 = "40".parse()?;
        let b: i32 = "two".parse()?;
        Ok::<_, ParseIntError>(a + b)
    });

    assert!(outcome.is_failed());
}

#[test]
fn attempt_runs_block_once_and_keeps_value() {
    let mut runs = 0;
    let outcome: Outcome<i32, ParseIntError> = attempt!({
        runs += 1;
        let n: i32 = "21".parse()?;
        Ok::<_, ParseIntError>(n * 2)
    });

    assert_eq!(runs, 1);
    assert_eq!(outcome.get(), Ok(42));
}
