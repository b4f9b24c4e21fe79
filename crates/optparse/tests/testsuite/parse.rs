use optparse::ErrorKind;
use optparse::OptionParser;
use optparse::ProgramInfo;
use optparse::Value;

fn reply_parser() -> OptionParser {
    let mut parser = OptionParser::new();
    parser.add_long('r', "reply").unwrap();
    parser
}

#[test]
fn absent_options_resolve_to_defaults() {
    let mut parser = OptionParser::new();
    parser.add_long('r', "reply").unwrap().set_default_value("42");
    parser.add('q').unwrap().flag();
    parser.add_long('o', "output").unwrap();

    let options = parser.parse(&["bin"]).unwrap();
    assert_eq!(options['r'], "42");
    assert_eq!(options['q'], "");
    assert_eq!(options['o'], "");
    assert_eq!(options.iter().count(), 3);
}

#[test]
fn bare_short_flag_is_true() {
    let mut parser = OptionParser::new();
    parser.add('a').unwrap().flag();
    parser.add('b').unwrap();

    let options = parser.parse(&["bin", "-a", "-b"]).unwrap();
    assert_eq!(options['a'], optparse::TRUE);
    assert_eq!(options['b'], optparse::TRUE);
    assert!(options['a'].to_bool().unwrap());
}

#[test]
fn cluster_binds_every_member() {
    let mut parser = OptionParser::new();
    parser.add('a').unwrap().flag();
    parser.add('r').unwrap().set_default_value("7");
    parser.add('g').unwrap();
    parser.add('h').unwrap().flag();

    let options = parser.parse(&["bin", "-argh"]).unwrap();
    for short in ['a', 'r', 'g', 'h'] {
        assert_eq!(options[short], "true", "-{short}");
    }
    assert!(options.args().is_empty());
}

#[test]
fn equals_and_space_are_equivalent() {
    let parser = reply_parser();
    let attached = parser.parse(&["bin", "--reply=42"]).unwrap();
    let separate = parser.parse(&["bin", "--reply", "42"]).unwrap();
    assert_eq!(attached, separate);
    assert_eq!(attached['r'], "42");
    assert_eq!(attached['r'].to_i32().unwrap(), 42);
}

#[test]
fn parsing_is_idempotent() {
    let parser = reply_parser();
    let raw = ["bin", "-r", "1", "a", "b"];
    let first = parser.parse(&raw).unwrap();
    let second = parser.parse(&raw).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.args(), [Value::new("a"), Value::new("b")]);
}

#[test]
fn flag_leaves_following_name_positional() {
    let mut parser = OptionParser::new();
    parser.add('r').unwrap().flag();

    let options = parser.parse(&["program_name", "-r", "42"]).unwrap();
    assert_eq!(options.program_name(), "program_name");
    assert_eq!(options['r'], "true");
    assert_eq!(options.args(), [Value::new("42")]);
}

#[test]
fn declared_program_name_wins() {
    let mut parser = OptionParser::with_program(ProgramInfo::new("program"));
    parser.add('r').unwrap().flag();

    let options = parser.parse(&["program_name", "-r", "42"]).unwrap();
    assert_eq!(options.program_name(), "program");
    assert_eq!(options.args(), [Value::new("42")]);
    assert_eq!(parser.program_info().name, "program");
}

#[test]
fn unknown_short_option() {
    let parser = OptionParser::new();
    let err = parser.parse(&["p", "-z"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownOption);
    assert_eq!(err.to_string(), "unrecognized `-z` flag");
}

#[test]
fn whole_command_line_in_one_argument() {
    let parser = reply_parser();
    let split = parser.parse(&["bin", "--reply", "42", "rest"]).unwrap();
    let joined = parser.parse(&["bin --reply 42 rest"]).unwrap();
    assert_eq!(split, joined);
}

#[test]
fn numeric_values() {
    let mut parser = OptionParser::new();
    parser.add_long('n', "number").unwrap();
    parser.add_long('x', "ratio").unwrap();

    let options = parser
        .parse(&["bin", "--number", r"\-3", "--ratio=0.5"])
        .unwrap();
    assert_eq!(options['n'].to_i16().unwrap(), -3);
    assert_eq!(options['x'].to_f64().unwrap(), 0.5);
    assert_eq!(
        options['n'].to_u16().unwrap_err().kind(),
        ErrorKind::Conversion
    );
}

#[cfg(feature = "serde")]
#[test]
fn serialize_options() {
    let mut parser = OptionParser::with_program(ProgramInfo::new("bin").with_version("1.0"));
    parser.add_long('r', "reply").unwrap().set_default_value("42");
    parser.add('v').unwrap().flag();

    let options = parser.parse(&["ignored", "-v", "file"]).unwrap();
    let actual = serde_json::to_value(&options).unwrap();
    let expected = serde_json::json!({
        "program": { "name": "bin", "help": "", "version": "1.0" },
        "values": { "r": "42", "v": "true" },
        "args": ["file"],
    });
    assert_eq!(actual, expected);
}
