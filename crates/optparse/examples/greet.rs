use optparse::OptionParser;
use optparse::ProgramInfo;

struct Args {
    thing: String,
    number: u32,
    shout: bool,
}

fn declare() -> optparse::Result<OptionParser> {
    let mut parser = OptionParser::with_program(
        ProgramInfo::new("greet")
            .with_help("Say hello to THING.")
            .with_version(env!("CARGO_PKG_VERSION")),
    );
    parser
        .add_long('n', "number")?
        .set_metavar("NUM")
        .set_default_value("1")
        .set_help("Number of greetings");
    parser
        .add_long('s', "shout")?
        .flag()
        .set_help("Greet in capitals");
    parser.add_long('h', "help")?.flag().set_help("Print help");
    parser
        .add_long('V', "version")?
        .flag()
        .set_help("Print version");
    Ok(parser)
}

fn parse_args(parser: &OptionParser) -> optparse::Result<Args> {
    let options = parser.parse_env()?;

    if options['h'].to_bool()? {
        anstream::print!("{}", parser.render_help_for(options.program_info()));
        std::process::exit(0);
    }
    if options['V'].to_bool()? {
        anstream::print!("{}", parser.render_version());
        std::process::exit(0);
    }

    let thing = match options.args() {
        [thing] => thing.as_str().to_owned(),
        [] => return Err(optparse::Error::msg("missing argument THING")),
        [_, extra, ..] => {
            return Err(optparse::Error::msg(format_args!(
                "unexpected argument `{extra}`"
            )));
        }
    };

    Ok(Args {
        thing,
        number: options['n'].to_u32()?,
        shout: options['s'].to_bool()?,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("OPTPARSE_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let args = declare().and_then(|parser| parse_args(&parser));
    let args = match args {
        Ok(args) => args,
        Err(err) => {
            let style = optparse::help::ERROR;
            anstream::eprintln!("{}error:{} {err}", style.render(), style.render_reset());
            std::process::exit(2);
        }
    };

    let mut message = format!("Hello {}", args.thing);
    if args.shout {
        message = message.to_uppercase();
    }
    for _ in 0..args.number {
        println!("{message}");
    }
}
