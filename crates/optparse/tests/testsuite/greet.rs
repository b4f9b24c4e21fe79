use crate::util::greet_cmd;

#[test]
fn greets_once() {
    greet_cmd()
        .arg("world")
        .assert()
        .success()
        .stdout_matches(
            "\
Hello world
",
        );
}

#[test]
fn greets_number_times() {
    let cases: [&[&str]; 3] = [&["--number=3"], &["--number", "3"], &["-n", "3"]];
    for number in cases {
        greet_cmd()
            .args(number)
            .arg("world")
            .assert()
            .success()
            .stdout_matches(
                "\
Hello world
Hello world
Hello world
",
            );
    }
}

#[test]
fn shout() {
    greet_cmd()
        .args(["-s", "world"])
        .assert()
        .success()
        .stdout_matches(
            "\
HELLO WORLD
",
        );
}

#[test]
fn clustered_value_option_is_true() {
    greet_cmd()
        .args(["-sn", "world"])
        .assert()
        .code(2)
        .stdout_matches("")
        .stderr_matches(
            "\
error: `true` is not a valid unsigned integer: [..]
",
        );
}

#[test]
fn help() {
    greet_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout_matches(
            "\
Say hello to THING.

Usage: greet [OPTIONS] [ARGS]...

Options:
  -n, --number <NUM>  Number of greetings [default: 1]
  -s, --shout         Greet in capitals
  -h, --help          Print help
  -V, --version       Print version
",
        );
}

#[test]
fn version() {
    greet_cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout_matches(
            "\
greet [..]
",
        );
}

#[test]
fn unknown_flag() {
    greet_cmd()
        .args(["-z", "world"])
        .assert()
        .code(2)
        .stdout_matches("")
        .stderr_matches(
            "\
error: unrecognized `-z` flag
",
        );
}

#[test]
fn unknown_long_flag() {
    greet_cmd()
        .args(["world", "--zap"])
        .assert()
        .code(2)
        .stderr_matches(
            "\
error: unrecognized `--zap` flag
",
        );
}

#[test]
fn missing_thing() {
    greet_cmd()
        .assert()
        .code(2)
        .stderr_matches(
            "\
error: missing argument THING
",
        );
}

#[test]
fn extra_thing() {
    greet_cmd()
        .args(["world", "moon"])
        .assert()
        .code(2)
        .stderr_matches(
            "\
error: unexpected argument `moon`
",
        );
}

#[test]
fn invalid_number() {
    greet_cmd()
        .args(["--number=many", "world"])
        .assert()
        .code(2)
        .stderr_matches(
            "\
error: `many` is not a valid unsigned integer: [..]
",
        );
}
