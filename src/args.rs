use clap::{App, Arg, ArgMatches};

use crate::enzyme::Enzyme;
use crate::errors::*;

#[derive(Debug)]
pub struct SiteArgs {
    pub input: String,
    pub enzymes: Vec<Enzyme>,
    pub output: String,
    pub threads: usize,
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("cutsites")
        .version("0.1.0")
        .author("Mikkel Schubert")
        .about(
            "Generate cut site positions in genome from given restriction enzymes \
             (multiple enzymes and 'N's are supported)",
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("INPUT")
                .takes_value(true)
                .required(true)
                .help("Input FASTA filename"),
        )
        .arg(
            Arg::with_name("enzymes")
                .short("e")
                .long("enzymes")
                .value_name("ENZYMES")
                .takes_value(true)
                .multiple(true)
                .min_values(1)
                .required(true)
                .help("Enzyme sequences (A, C, G, T, N) or names such as DpnII or HinfI"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUTPUT")
                .takes_value(true)
                .required(true)
                .help("Output filename; use '-' to write to STDOUT"),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                // Records are still written in input order; only the scan of a
                // single record is split into blocks across threads
                .help(
                    "Number of threads used for scanning each sequence (0 for automatic). \
                     Output is identical for any number of threads.",
                ),
        )
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn parse_threads(matches: &ArgMatches) -> Result<usize> {
    let s = get_str(matches, "threads")?;

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --threads ({:?}) value: {}", s, err).into()),
    }
}

fn parse_enzymes(matches: &ArgMatches) -> Result<Vec<Enzyme>> {
    let values = match matches.values_of("enzymes") {
        Some(values) => values,
        None => return Err("Required option \"enzymes\" not set".into()),
    };

    values.map(Enzyme::parse).collect()
}

fn from_matches(matches: &ArgMatches) -> Result<SiteArgs> {
    Ok(SiteArgs {
        input: get_string(matches, "input")?,
        enzymes: parse_enzymes(matches)?,
        output: get_string(matches, "output")?,
        threads: parse_threads(matches)?,
    })
}

/// Parses arguments from an explicit argument list; the first item is the
/// program name. Usage errors are returned rather than exiting.
pub fn parse_from<I, T>(args: I) -> Result<SiteArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = app()
        .get_matches_from_safe(args)
        .map_err(|err| ErrorKind::Msg(err.message))?;

    from_matches(&matches)
}

pub fn parse_args() -> Result<SiteArgs> {
    from_matches(&app().get_matches())
}
