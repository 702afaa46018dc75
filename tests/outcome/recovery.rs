use scipio::Outcome;

#[test]
fn recover_turns_failure_into_value() {
    let recovered = Outcome::<i32, &str>::failed("x").recover(|_| Ok(-1));
    assert_eq!(recovered.get(), Ok(-1));
}

#[test]
fn recover_receives_the_stored_error() {
    let recovered = Outcome::<usize, &str>::failed("four").recover(|e| Ok(e.len()));
    assert_eq!(recovered.get(), Ok(4));
}

#[test]
fn recover_leaves_success_untouched() {
    let mut called = false;
    let recovered = Outcome::<i32, &str>::succeeded(1).recover(|_| {
        called = true;
        Ok(0)
    });

    assert!(!called);
    assert_eq!(recovered, Outcome::succeeded(1));
}

#[test]
fn recover_keeps_the_same_success_allocation() {
    let success = Outcome::<Box<i32>, &str>::succeeded(Box::new(5));
    let before: *const i32 = &**success.value().unwrap();

    let recovered = success.recover(|_| Ok(Box::new(0)));
    let after: *const i32 = &**recovered.value().unwrap();

    assert_eq!(before, after);
}

#[test]
fn recover_with_keeps_the_same_success_allocation() {
    let success = Outcome::<Box<i32>, &str>::succeeded(Box::new(5));
    let before: *const i32 = &**success.value().unwrap();

    let recovered = success.recover_with(|_| Outcome::succeeded(Box::new(0)));
    let after: *const i32 = &**recovered.value().unwrap();

    assert_eq!(before, after);
}

#[test]
fn recover_captures_recovery_error() {
    let recovered = Outcome::<i32, &str>::failed("first").recover(|_| Err("second"));
    assert_eq!(recovered, Outcome::failed("second"));
}

#[test]
fn recover_with_returns_function_outcome() {
    let fallback = Outcome::<i32, &str>::failed("primary down")
        .recover_with(|_| Outcome::succeeded(7));
    assert_eq!(fallback.get(), Ok(7));

    let still_failed = Outcome::<i32, &str>::failed("primary down")
        .recover_with(|_| Outcome::failed("secondary down"));
    assert_eq!(still_failed.get(), Err("secondary down"));
}

#[test]
fn recover_with_leaves_success_untouched() {
    let mut called = false;
    let result = Outcome::<i32, &str>::succeeded(3).recover_with(|_| {
        called = true;
        Outcome::succeeded(0)
    });

    assert!(!called);
    assert_eq!(result.get(), Ok(3));
}

#[test]
fn recovery_chains_try_each_fallback_in_turn() {
    let attempts = std::cell::Cell::new(0);
    let result = Outcome::<&str, &str>::failed("cache miss")
        .recover_with(|_| {
            attempts.set(attempts.get() + 1);
            Outcome::failed("replica timeout")
        })
        .recover_with(|e| {
            attempts.set(attempts.get() + 1);
            assert_eq!(e, "replica timeout");
            Outcome::succeeded("primary")
        })
        .recover(|_| {
            attempts.set(attempts.get() + 1);
            Ok("default")
        });

    assert_eq!(result.get(), Ok("primary"));
    assert_eq!(attempts.get(), 2);
}
