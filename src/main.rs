use anyhow::Context;
use clap::Parser;
use jobgen::fixture::writer::BatchWriter;
use jobgen::util::args::Args;

fn main() -> anyhow::Result<()> {
    // parse the two numeric options.
    let args = Args::parse();
    // job files land in the directory the generator is run from.
    let out_dir = std::env::current_dir().context("failed to resolve the output directory")?;
    // write one batch of job scripts.
    let mut rng = rand::thread_rng();
    BatchWriter::new(out_dir)
        .write_batch(&mut rng, args.num_files, args.num_commands)
        .context("failed to write the job batch")?;
    Ok(())
}
