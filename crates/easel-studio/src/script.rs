use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::session::Session;

/// Runs every line of `reader`, reporting failures as `source:line: error`
/// on stderr. Returns the number of failed commands.
pub fn run_reader<R: BufRead>(session: &mut Session, source: &str, reader: R) -> Result<usize> {
    let mut failures = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("{source}: read failed"))?;
        if let Err(err) = session.run_line(&line) {
            eprintln!("{}", report(source, index + 1, &err));
            failures += 1;
        }
    }
    Ok(failures)
}

pub fn run_file(session: &mut Session, path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    run_reader(session, &path.display().to_string(), BufReader::new(file))
}

fn report(source: &str, line: usize, err: &dyn std::fmt::Display) -> String {
    format!("{source}:{line}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_failures_and_keeps_going() {
        let script = "\
# sample
define c circle 20
draw green c 100 100
draw red missing 1 1
moveby 5
bogus
";
        let mut s = Session::new();
        let failures = run_reader(&mut s, "demo", script.as_bytes()).unwrap();
        assert_eq!(failures, 2);
        assert_eq!(s.scene.len(), 1);
        assert_eq!(s.scene.get(0).map(|o| o.move_step()), Some(5.0));
    }

    #[test]
    fn report_format() {
        assert_eq!(report("a.txt", 3, &"boom"), "a.txt:3: boom");
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut s = Session::new();
        assert!(run_file(&mut s, Path::new("/nonexistent/easel/script")).is_err());
    }
}
