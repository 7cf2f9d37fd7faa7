use clap::Parser;
use fastlane_setup::cli::Args;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("fastlane-setup")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(!parsed.local);
    assert!(!parsed.verbose);
    assert!(parsed.rest.is_empty());
    assert!(!parsed.use_local());
}

#[test]
fn test_local_flag() {
    let parsed = Args::try_parse_from(make_args(&["--local"])).unwrap();
    assert!(parsed.local);
    assert!(parsed.use_local());
}

#[test]
fn test_short_verbose_flag() {
    let parsed = Args::try_parse_from(make_args(&["-v", "--local"])).unwrap();
    assert!(parsed.verbose);
    assert!(parsed.local);
}

#[test]
fn test_extra_args_are_ignored() {
    let parsed = Args::try_parse_from(make_args(&["whatever", "--unknown"])).unwrap();
    assert_eq!(parsed.rest, vec!["whatever", "--unknown"]);
    assert!(!parsed.use_local());
}

#[test]
fn test_local_after_ignored_args() {
    let parsed = Args::try_parse_from(make_args(&["whatever", "--local"])).unwrap();
    assert!(!parsed.local);
    assert!(parsed.use_local());
}

#[test]
fn test_repeated_flags_are_accepted() {
    let parsed = Args::try_parse_from(make_args(&["--local", "--local", "-v", "--verbose"])).unwrap();
    assert!(parsed.local);
    assert!(parsed.verbose);
    assert!(parsed.use_local());
}
