use clap::Parser;
use std::{
  fs,
  io::{self, Read},
  process::exit,
};
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};
use vdf2json::{parse_with_options, Options, DEFAULT_MAX_DEPTH};

/// Convert Valve Data Format (KeyValues) to JSON
#[derive(Debug, Parser, PartialEq)]
#[command(version)]
struct Args {
  /// Convert objects keyed "0".."n-1" into JSON arrays
  #[arg(short = 'a', long)]
  convert_arrays: bool,

  /// Reject input nested deeper than this
  #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
  max_depth: usize,

  /// Write JSON to PATH instead of stdout
  #[arg(short, long, value_name = "PATH")]
  output: Option<String>,

  /// File to convert, otherwise uses stdin
  file: Option<String>,
}

fn main() -> io::Result<()> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::fmt::layer()
        .map_writer(move |_| io::stderr)
        .with_ansi(false),
    )
    .with(EnvFilter::from_default_env())
    .init();

  run(Args::parse())
}

fn run(args: Args) -> io::Result<()> {
  let mut input: String;
  if let Some(path) = args.file.as_ref() {
    debug!(path = %path, "reading");
    input = fs::read_to_string(path)?;
  } else {
    debug!("reading stdin");
    input = String::new();
    io::stdin().read_to_string(&mut input)?;
  }

  let options = Options {
    convert_arrays: args.convert_arrays,
    max_depth: args.max_depth,
  };
  debug!(bytes = input.len(), ?options, "parsing");

  match parse_with_options(&input, &options) {
    Ok(node) => {
      let output = node.to_string() + "\n";
      if let Some(path) = args.output.as_ref() {
        debug!(path = %path, bytes = output.len(), "writing");
        fs::write(path, output)?;
      } else {
        print!("{}", output)
      }
    }
    Err(e) => {
      let (line, column) = e.location(&input);
      let name = args.file.as_deref().unwrap_or("<stdin>");
      eprintln!("{}:{}:{}: {}", name, line, column, e.kind);
      exit(1);
    }
  }

  Ok(())
}

#[cfg(test)]
mod arg_tests {
  use crate::Args;
  use clap::Parser;
  use vdf2json::DEFAULT_MAX_DEPTH;

  #[test]
  fn can_parse_file_arg() {
    let args = Args::try_parse_from(["vdf2json", "xyz.vdf"]).unwrap();
    assert_eq!(
      args,
      Args {
        convert_arrays: false,
        max_depth: DEFAULT_MAX_DEPTH,
        output: None,
        file: Some("xyz.vdf".to_owned())
      }
    );
  }

  #[test]
  fn can_parse_convert_arrays_arg() {
    for flag in ["-a", "--convert-arrays"] {
      let args = Args::try_parse_from(["vdf2json", flag]).unwrap();
      assert_eq!(
        args,
        Args {
          convert_arrays: true,
          max_depth: DEFAULT_MAX_DEPTH,
          output: None,
          file: None
        }
      )
    }
  }

  #[test]
  fn can_parse_output_and_depth_args() {
    let args =
      Args::try_parse_from(["vdf2json", "--max-depth", "8", "-o", "out.json", "in.vdf"]).unwrap();
    assert_eq!(
      args,
      Args {
        convert_arrays: false,
        max_depth: 8,
        output: Some("out.json".to_owned()),
        file: Some("in.vdf".to_owned())
      }
    )
  }

  #[test]
  fn rejects_bad_depth() {
    assert!(Args::try_parse_from(["vdf2json", "--max-depth", "deep"]).is_err());
  }
}
