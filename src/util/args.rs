use crate::fixture::writer::DEFAULT_NUM_FILES;
use clap::Parser;

/// command line options.
#[derive(Parser)]
#[command(about = "generate random job scripts for a key-value store")]
pub struct Args {
    /// number of job files to generate.
    #[arg(short = 'f', long = "files", default_value_t = DEFAULT_NUM_FILES)]
    pub num_files: usize,
    /// number of commands per job file.
    #[arg(short = 'c', long = "commands", default_value_t = 60)]
    pub num_commands: usize,
}
