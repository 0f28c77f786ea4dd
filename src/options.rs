use std::{path::PathBuf, str::FromStr};

use lifegif::{Error, Seeding, error::Result};

const USAGE: &str = "usage: lifegif [options] <outfile.gif>";

fn options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optflag("", "help", "print this help menu");
    opts.optopt("g", "gens", "number of generations to render (default 100)", "COUNT");
    opts.optopt("w", "width", "set grid width (default 128)", "WIDTH");
    opts.optopt("h", "height", "set grid height (default 128)", "HEIGHT");
    opts.optopt("n", "radius", "set neighbour radius (default 1)", "RADIUS");
    opts.optopt(
        "d",
        "delay",
        "time each frame is shown, in 1/100 s (default 1)",
        "CENTIS",
    );
    opts.optopt("s", "seed", "seed for the random fill", "SEED");
    opts.optopt("f", "fill", "set fill type: random or empty", "TYPE");
    opts.optopt("i", "input", "seed the grid from an RLE pattern", "FILE");
    opts.optopt("o", "output", "write the final generation as RLE", "FILE");
    opts.optopt("", "stats", "write stats csv to file", "FILE");
    opts
}

pub fn usage() -> String {
    options().usage(USAGE)
}

#[derive(Debug)]
pub struct Args {
    generations: usize,
    width: usize,
    height: usize,
    radius: usize,
    delay: u16,
    seed: Option<u64>,
    fill: Seeding,
    gif_file: PathBuf,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    stats_file: Option<PathBuf>,
}

impl Args {
    /// Parses and validates the given arguments
    ///
    /// Returns `Ok(None)` if help was requested, after printing it
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let matches = options().parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", usage());
            return Ok(None);
        }

        let radius = number(&matches, "radius", 1i64)?;
        if radius < 1 {
            return Err(Error::InvalidRadius(radius));
        }
        let fill = match matches.opt_str("fill") {
            Some(name) => Seeding::from_name(&name).ok_or(Error::InvalidFill(name))?,
            None => Seeding::Random,
        };
        let gif_file = matches
            .free
            .first()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .ok_or(Error::MissingOutput)?;

        Ok(Some(Self {
            generations: number(&matches, "gens", 100)?,
            width: dimension(&matches, "width")?,
            height: dimension(&matches, "height")?,
            radius: radius as usize,
            delay: number(&matches, "delay", 1)?,
            seed: optional_number(&matches, "seed")?,
            fill,
            gif_file,
            input_file: matches.opt_str("input").map(PathBuf::from),
            output_file: matches.opt_str("output").map(PathBuf::from),
            stats_file: matches.opt_str("stats").map(PathBuf::from),
        }))
    }
    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn generations(&self) -> usize {
        self.generations
    }
    pub fn grid_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub fn radius(&self) -> usize {
        self.radius
    }
    pub fn delay(&self) -> u16 {
        self.delay
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn fill(&self) -> &Seeding {
        &self.fill
    }

    pub fn gif_file(&self) -> &PathBuf {
        &self.gif_file
    }
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.input_file.as_ref()
    }
    pub fn output_file(&self) -> Option<&PathBuf> {
        self.output_file.as_ref()
    }
    pub fn stats_file(&self) -> Option<&PathBuf> {
        self.stats_file.as_ref()
    }
}

fn optional_number<T: FromStr>(
    matches: &getopts::Matches,
    option: &'static str,
) -> Result<Option<T>> {
    matches
        .opt_str(option)
        .map(|value| {
            value
                .parse()
                .map_err(|_| Error::InvalidNumber { option, value })
        })
        .transpose()
}

fn number<T: FromStr>(matches: &getopts::Matches, option: &'static str, default: T) -> Result<T> {
    Ok(optional_number(matches, option)?.unwrap_or(default))
}

/// A grid side, which also has to fit in a GIF header
fn dimension(matches: &getopts::Matches, option: &'static str) -> Result<usize> {
    let value = number(matches, option, 128i64)?;
    if value < 1 || value > i64::from(u16::MAX) {
        return Err(Error::InvalidDimension {
            name: option,
            value,
            max: u16::MAX,
        });
    }
    Ok(value as usize)
}
