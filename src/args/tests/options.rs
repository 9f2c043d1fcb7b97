use super::*;

#[test]
fn parse_args_core_options() -> AppResult<()> {
    let args = parse_test_args([
        "routeload",
        "--url",
        "http://localhost:5000",
        "--requests",
        "12",
        "--endpoint",
        "/db",
        "-e",
        "/pay",
        "--timeout",
        "750ms",
        "--connect-timeout",
        "2",
        "--no-prompt",
        "-v",
    ])?;

    if args.url.as_deref() != Some("http://localhost:5000") {
        return Err(AppError::validation("Unexpected url"));
    }
    if args.requests.map(u64::from) != Some(12) {
        return Err(AppError::validation("Unexpected requests"));
    }
    if args.endpoints != ["/db", "/pay"] {
        return Err(AppError::validation(format!(
            "Unexpected endpoints {:?}",
            args.endpoints
        )));
    }
    if args.request_timeout != Duration::from_millis(750) {
        return Err(AppError::validation("Unexpected request_timeout"));
    }
    if args.connect_timeout != Duration::from_secs(2) {
        return Err(AppError::validation("Unexpected connect_timeout"));
    }
    if !args.no_prompt || !args.verbose {
        return Err(AppError::validation("Expected no_prompt and verbose"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_bad_request_counts() -> AppResult<()> {
    for bad in ["0", "-1", "abc", "1.5", ""] {
        if parse_test_args(["routeload", "-n", bad]).is_ok() {
            return Err(AppError::validation(format!("Accepted request count {:?}", bad)));
        }
    }
    Ok(())
}

#[test]
fn request_count_error_echoes_input() -> AppResult<()> {
    match parse_request_count(" ten ") {
        Err(ValidationError::InvalidRequestCount { value }) if value == "ten" => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error {}", err))),
        Ok(_) => Err(AppError::validation("Accepted 'ten'")),
    }
}

#[test]
fn duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3", Duration::from_secs(3)),
        ("3s", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Unexpected duration for {}: {:?}",
                input, parsed
            )));
        }
    }
    for bad in ["", "0s", "ms", "5d"] {
        if parse_duration_arg(bad).is_ok() {
            return Err(AppError::validation(format!("Accepted duration {:?}", bad)));
        }
    }
    Ok(())
}

#[test]
fn bool_env_values() -> AppResult<()> {
    for truthy in ["1", "true", "YES", "on"] {
        if !parse_bool_env(truthy)? {
            return Err(AppError::validation(format!("Expected {} to be true", truthy)));
        }
    }
    for falsy in ["0", "false", "No", "off"] {
        if parse_bool_env(falsy)? {
            return Err(AppError::validation(format!("Expected {} to be false", falsy)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("Accepted 'maybe'"));
    }
    Ok(())
}

#[test]
fn no_color_flag_forms() -> AppResult<()> {
    let cases: [(&[&str], bool); 4] = [
        (&["routeload"], false),
        (&["routeload", "--no-color"], true),
        (&["routeload", "--no-color=false"], false),
        (&["routeload", "--no-color=on", "-u", "http://localhost"], true),
    ];
    for (argv, expected) in cases {
        let args = parse_test_args(argv.iter().copied())?;
        if args.no_color != expected {
            return Err(AppError::validation(format!(
                "Unexpected no_color for {:?}",
                argv
            )));
        }
    }
    if parse_test_args(["routeload", "--no-color=always"]).is_ok() {
        return Err(AppError::validation("Accepted --no-color=always"));
    }
    Ok(())
}

#[test]
fn no_color_env_accepts_any_non_empty_value() -> AppResult<()> {
    for value in ["1", "true", "always", "0", "false"] {
        if !no_color_requested(Some(OsStr::new(value))) {
            return Err(AppError::validation(format!(
                "Expected NO_COLOR={} to disable color",
                value
            )));
        }
    }
    if no_color_requested(Some(OsStr::new(""))) || no_color_requested(None) {
        return Err(AppError::validation("Empty or unset NO_COLOR disabled color"));
    }
    Ok(())
}
