use std::fmt::Display;
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{self, stdin, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::{info, Record};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use springboard::challenge::{
    BenefitsChallenge, BenefitsInput, BoardGameChallenge, BoardGameInput, SequenceChallenge, SequenceInput,
    StringChallenge, StringInput,
};
use springboard::{Challenge, ChallengeError, ChallengeKind, LogObserver};

/// Command line front end for the challenge calculators.
#[derive(Parser, Debug)]
#[command(name = "springboard", version)]
struct Settings {
    /// Log filter passed to env_logger, e.g. `info` or `springboard=debug`.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
    /// Append log lines to this file, e.g. `logs/challenge_api.log`, instead of stderr.
    #[arg(long, env = "LOG_FILE")]
    log_file: Option<PathBuf>,
    /// Name reported in start and stop log lines.
    #[arg(long, env = "APP_NAME", default_value = "ChallengeAPI")]
    app_name: String,
    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a string starts with `B` and ends with `A`.
    String(StringArgs),
    /// Evaluate the sequence 11, 18, 25, ... at a position.
    Sequence(SequenceArgs),
    /// Solve a jump board: fewest turns, success probability, and path count.
    BoardGame(BoardGameArgs),
    /// Compute proportional vacation pay and thirteenth salary on resignation.
    Benefits(BenefitsArgs),
    /// Describe every challenge along with an example input.
    Describe,
}

#[derive(Args, Debug)]
struct StringArgs {
    /// Text to check.
    #[arg(long, required_unless_present = "input")]
    text: Option<String>,
    /// Read the input record as JSON from a file, or `-` for stdin.
    #[arg(long, conflicts_with = "text")]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    /// 1-indexed position of the term.
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    position: Option<i64>,
    /// Read the input record as JSON from a file, or `-` for stdin.
    #[arg(long, conflicts_with = "position")]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BoardGameArgs {
    /// Declared number of cells.
    #[arg(long, required_unless_present = "input")]
    size: Option<usize>,
    /// Jump length of each cell, comma separated.
    #[arg(long, value_delimiter = ',', required_unless_present = "input")]
    board: Vec<u32>,
    /// Read the input record as JSON from a file, or `-` for stdin.
    #[arg(long, conflicts_with_all = ["size", "board"])]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BenefitsArgs {
    /// Monthly salary.
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    salary: Option<f64>,
    /// Hire date, `YYYY-MM-DD`.
    #[arg(long, required_unless_present = "input")]
    hire_date: Option<NaiveDate>,
    /// Resignation date, `YYYY-MM-DD`.
    #[arg(long, required_unless_present = "input")]
    resignation_date: Option<NaiveDate>,
    /// Read the input record as JSON from a file, or `-` for stdin.
    #[arg(long, conflicts_with_all = ["salary", "hire_date", "resignation_date"])]
    input: Option<PathBuf>,
}

/// Reads a JSON record from `path`, or from stdin if `path` is `-`.
fn load<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let reader: Box<dyn Read> = if path == Path::new("-") {
        Box::new(stdin().lock())
    } else {
        Box::new(File::open(path).with_context(|| format!("opening {}", path.display()))?)
    };

    serde_json::from_reader(BufReader::new(reader)).with_context(|| format!("parsing {}", path.display()))
}

fn missing(flag: &str) -> anyhow::Error {
    anyhow!("--{flag} is required without --input")
}

impl StringArgs {
    fn into_input(self) -> anyhow::Result<StringInput> {
        match self.input {
            Some(path) => load(&path),
            None => Ok(StringInput { text: self.text.ok_or_else(|| missing("text"))? }),
        }
    }
}

impl SequenceArgs {
    fn into_input(self) -> anyhow::Result<SequenceInput> {
        match self.input {
            Some(path) => load(&path),
            None => Ok(SequenceInput { position: self.position.ok_or_else(|| missing("position"))? }),
        }
    }
}

impl BoardGameArgs {
    fn into_input(self) -> anyhow::Result<BoardGameInput> {
        match self.input {
            Some(path) => load(&path),
            None => Ok(BoardGameInput {
                board_size: self.size.ok_or_else(|| missing("size"))?,
                board: self.board,
            }),
        }
    }
}

impl BenefitsArgs {
    fn into_input(self) -> anyhow::Result<BenefitsInput> {
        match self.input {
            Some(path) => load(&path),
            None => Ok(BenefitsInput {
                salary: self.salary.ok_or_else(|| missing("salary"))?,
                hire_date: self.hire_date.ok_or_else(|| missing("hire-date"))?,
                resignation_date: self.resignation_date.ok_or_else(|| missing("resignation-date"))?,
            }),
        }
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? })
}

fn run_challenge<C: Challenge>(challenge: C, input: C::Input, pretty: bool) -> anyhow::Result<String>
where
    C::Input: std::fmt::Debug,
    C::Output: Serialize,
{
    info!("processing {} challenge: {input:?}", challenge.kind());
    render(&challenge.run(&input)?, pretty)
}

/// Runs the selected subcommand, returning the JSON it should print.
fn dispatch(command: Command, pretty: bool) -> anyhow::Result<String> {
    match command {
        Command::String(args) => run_challenge(StringChallenge, args.into_input()?, pretty),
        Command::Sequence(args) => run_challenge(SequenceChallenge, args.into_input()?, pretty),
        Command::BoardGame(args) => {
            run_challenge(BoardGameChallenge::<LogObserver>::default(), args.into_input()?, pretty)
        }
        Command::Benefits(args) => run_challenge(BenefitsChallenge, args.into_input()?, pretty),
        Command::Describe => {
            let descriptions = ChallengeKind::all().iter()
                .map(|kind| json!({
                    "name": kind.to_string(),
                    "description": kind.description(),
                    "example_input": kind.example_input(),
                }))
                .collect::<Vec<_>>();
            render(&descriptions, pretty)
        }
    }
}

/// Validation failures exit with 2, everything else with 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ChallengeError>() {
        Some(ChallengeError::Invalid(_)) => 2,
        _ => 1,
    }
}

/// Writes one log line as `time - LEVEL -> target - file -> message`.
fn write_record(out: &mut impl Write, time: impl Display, record: &Record) -> io::Result<()> {
    writeln!(
        out,
        "{time} - {} -> {} - {} -> {}",
        record.level(),
        record.target(),
        record.file().unwrap_or("unknown"),
        record.args(),
    )
}

fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .parse_filters(&settings.log_level)
        .format(|buf, record| {
            let time = buf.timestamp();
            write_record(buf, time, record)
        });

    if let Some(path) = &settings.log_file {
        if let Some(dir) = path.parent() {
            create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)
            .with_context(|| format!("opening {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

fn main() -> ExitCode {
    let settings = Settings::parse();
    if let Err(err) = init_logging(&settings) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    info!("application started: {}", settings.app_name);
    let code = match dispatch(settings.command, settings.pretty) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    };
    info!("application stopped: {}", settings.app_name);

    code
}
