//! tunnelpath: run a search problem file and write its report.
//!
//! ```text
//! tunnelpath [input] [output]            defaults: input.txt output.txt
//! tunnelpath generate <maze-dir> <out-dir>
//! ```

mod logger;

use std::path::PathBuf;

use log::LevelFilter;
use tunnelpath_io::{Problem, generate};

const INPUT: &str = "input.txt";
const OUTPUT: &str = "output.txt";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run { input: PathBuf, output: PathBuf },
    Generate { mazes: PathBuf, out: PathBuf },
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [cmd, mazes, out] if cmd == "generate" => Ok(Command::Generate {
            mazes: mazes.into(),
            out: out.into(),
        }),
        [cmd, ..] if cmd == "generate" => {
            Err("usage: tunnelpath generate <maze-dir> <out-dir>".to_string())
        }
        [] | [_] | [_, _] => Ok(Command::Run {
            input: args.first().map_or(INPUT, String::as_str).into(),
            output: args.get(1).map_or(OUTPUT, String::as_str).into(),
        }),
        _ => Err("usage: tunnelpath [input] [output]".to_string()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match parse_args(std::env::args().skip(1))? {
        Command::Run { input, output } => {
            logger::init(LevelFilter::Warn);
            let problem = Problem::from_path(&input)?;
            if problem.config.trace_open {
                logger::init(LevelFilter::Info);
            }
            let report = problem.run();
            report.write_to(&output)?;
            log::debug!("{} -> {}", input.display(), output.display());
        }
        Command::Generate { mazes, out } => {
            logger::init(LevelFilter::Info);
            let n = generate(&mazes, &out)?;
            println!("Generated {n} files.");
        }
    }
    Ok(())
}
