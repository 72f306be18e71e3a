use crate::fixture::cleanup::remove_stale_fixtures;
use crate::script::script::generate_script;
use crate::util::name::{job_file_name, STALE_PATTERNS};
use rand::Rng;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// default number of job files in a batch.
pub const DEFAULT_NUM_FILES: usize = 5;

/// batch fixture writer. clears stale fixtures from the output directory,
/// then writes a fresh set of job scripts into it.
pub struct BatchWriter {
    /// directory the job files are written to.
    out_dir: PathBuf,
}

impl BatchWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> BatchWriter {
        BatchWriter {
            out_dir: out_dir.into(),
        }
    }

    /// write `num_files` job scripts with `num_commands` commands each.
    /// files are named input1.job through input<num_files>.job. each script
    /// gets one trailing newline. the first write error aborts the batch.
    pub fn write_batch(
        &self,
        rng: &mut impl Rng,
        num_files: usize,
        num_commands: usize,
    ) -> io::Result<()> {
        remove_stale_fixtures(&self.out_dir, &STALE_PATTERNS);

        for i in 1..=num_files {
            let script = generate_script(rng, num_commands);
            let path = self.out_dir.join(job_file_name(i));

            let mut file = File::create(&path)?;
            file.write_all(script.as_bytes())?;
            file.write_all(b"\n")?;

            println!("Generated script for {}:", path.display());
            println!("{}", script);
        }
        Ok(())
    }
}
