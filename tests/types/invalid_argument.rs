use scipio::{InvalidArgument, Outcome};

#[test]
fn invalid_argument_names_the_missing_argument() {
    let err = InvalidArgument::new("supplier");
    assert_eq!(err.argument(), "supplier");
    assert_eq!(err.to_string(), "invalid argument: `supplier` must not be absent");
}

#[test]
fn try_constructors_report_invalid_argument_before_building() {
    let missing_value = Outcome::<String, String>::try_succeeded(None);
    assert_eq!(missing_value, Err(InvalidArgument::new("value")));

    let missing_error = Outcome::<String, String>::try_failed(None);
    assert_eq!(missing_error, Err(InvalidArgument::new("error")));
}

#[test]
fn invalid_argument_is_a_std_error() {
    fn boxed() -> Result<(), Box<dyn std::error::Error>> {
        let _outcome = Outcome::<i32, String>::try_succeeded(None)?;
        Ok(())
    }

    assert!(boxed().unwrap_err().to_string().contains("`value`"));
}
