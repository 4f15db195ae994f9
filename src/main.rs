use clap::Parser;
use rmk_xls_to_xml::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();
    let source_file = args.source_file.clone();

    let result = commands::run(args).map_err(|error| {
        let stage = error.stage();
        anyhow::Error::new(error).context(format!(
            "Conversion of {} failed at the {} stage",
            source_file.display(),
            stage
        ))
    });

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print the context chain to stderr
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
