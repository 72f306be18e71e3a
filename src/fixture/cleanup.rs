use std::fs;
use std::path::Path;

/// delete every file in `dir` matching any of the glob patterns.
/// cleanup is best-effort: a failure on one file is reported and the
/// remaining files are still processed.
pub fn remove_stale_fixtures(dir: &Path, patterns: &[&str]) {
    for pattern in patterns.iter() {
        let full_pattern = dir.join(pattern);
        let paths = match glob::glob(&full_pattern.to_string_lossy()) {
            Ok(paths) => paths,
            Err(err) => {
                log::warn!("skipping bad glob pattern {}: {}", pattern, err);
                continue;
            }
        };
        for entry in paths {
            match entry {
                Ok(path) => match fs::remove_file(&path) {
                    Ok(()) => println!("Removed {}", path.display()),
                    Err(err) => eprintln!("Error removing {}: {}", path.display(), err),
                },
                Err(err) => eprintln!("Error reading {}: {}", err.path().display(), err),
            }
        }
    }
}
