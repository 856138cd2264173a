// In: src/main.rs

//! The command-line entry point: two path arguments in, one deinterlaced
//! JPEG out. All real work happens in the `delace` library; this binary only
//! parses arguments, moves bytes through the file shim, and maps failure to a
//! nonzero exit status.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::LevelFilter;

use delace::{deinterlace, shim, DelaceError};

fn run(input: &Path, output: &Path) -> Result<(), DelaceError> {
    let input_bytes = shim::read_input(input)?;
    let output_bytes = deinterlace(&input_bytes)?;
    shim::write_output(output, &output_bytes)?;
    log::info!(
        "deinterlaced {} ({} bytes) -> {} ({} bytes)",
        input.display(),
        input_bytes.len(),
        output.display(),
        output_bytes.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let matches = clap::Command::new("delace")
        .version(delace::VERSION)
        .about("Deinterlaces a JPEG still by blending each scanline with its predecessor")
        .arg(
            clap::Arg::new("input")
                .help("The JPEG file to deinterlace")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("output")
                .help("Where to write the deinterlaced JPEG")
                .required(true)
                .index(2),
        )
        .arg(
            clap::Arg::new("debug")
                .help("Enable debug logging")
                .short('d')
                .long("debug")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let mut builder = env_logger::Builder::new();
    builder.filter_level(if matches.get_flag("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    builder.init();

    let input = PathBuf::from(matches.get_one::<String>("input").expect("input"));
    let output = PathBuf::from(matches.get_one::<String>("output").expect("output"));

    match run(&input, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
