use std::{io::Write, path::PathBuf, process::Command};

use crate::{
    misc::log::targets,
    types::err::{CountingOracleError, ErrorKind},
};

use super::{CountOracle, WeightedCnf};

/// A counter which calls an external program on a file containing the query.
///
/// The program is called as `program [args..] <path>` and the probability is read from the output, as written by Cachet.
/// See [parse_probability].
pub struct ProcessCounter {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl ProcessCounter {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        ProcessCounter {
            program: program.into(),
            args,
        }
    }
}

impl CountOracle for ProcessCounter {
    fn weighted_probability(&mut self, query: &WeightedCnf) -> Result<f64, ErrorKind> {
        let mut file = tempfile::Builder::new()
            .prefix("otter_ssat_")
            .suffix(".wcnf")
            .tempfile()
            .map_err(|e| CountingOracleError::Io(format!("failed to create a query file ({e})")))?;

        file.write_all(query.as_dimacs().as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| CountingOracleError::Io(format!("failed to write a query file ({e})")))?;

        log::debug!(target: targets::COUNTING, "Calling {:?} on {:?}", self.program, file.path());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(file.path())
            .output()
            .map_err(|e| CountingOracleError::Spawn(format!("{:?}: {e}", self.program)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        match parse_probability(&stdout) {
            Ok(probability) => Ok(probability),
            Err(CountingOracleError::MissingOutput) if !output.status.success() => {
                Err(ErrorKind::from(CountingOracleError::Status(output.status.code())))
            }
            Err(e) => Err(ErrorKind::from(e)),
        }
    }
}

/// Reads a probability from the output of a counter.
///
/// The probability is the third token of the first line containing `Satisfying`.
///
/// ```rust
/// # use otter_ssat::counting::parse_probability;
/// let output = "Number of Decisions 3\nSatisfying probability 0.375\n";
/// assert_eq!(parse_probability(output), Ok(0.375));
/// ```
pub fn parse_probability(output: &str) -> Result<f64, CountingOracleError> {
    let line = output
        .lines()
        .find(|line| line.contains("Satisfying"))
        .ok_or(CountingOracleError::MissingOutput)?;

    let token = line
        .split_whitespace()
        .nth(2)
        .ok_or(CountingOracleError::MissingOutput)?;

    token
        .parse::<f64>()
        .map_err(|_| CountingOracleError::Unparsable(token.to_owned()))
}

#[cfg(test)]
mod process_tests {
    use super::*;

    #[test]
    fn missing_output() {
        assert_eq!(
            parse_probability("Satisfying\n"),
            Err(CountingOracleError::MissingOutput)
        );
        assert_eq!(
            parse_probability("Satisfying probability one"),
            Err(CountingOracleError::Unparsable("one".to_owned()))
        );
    }

    #[test]
    fn spawn_failure() {
        let mut counter = ProcessCounter::new("/nonexistent/otter_ssat/counter", Vec::default());
        let result = counter.weighted_probability(&WeightedCnf::default());
        assert!(matches!(
            result,
            Err(ErrorKind::CountingOracle(CountingOracleError::Spawn(_)))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn shell_counter() {
        let script = "grep -q '^p cnf 1 2' \"$0\" && echo 'Satisfying probability 0.25'";
        let mut counter = ProcessCounter::new("sh", vec!["-c".to_owned(), script.to_owned()]);
        let result = counter.weighted_probability(&WeightedCnf::contradiction());
        assert_eq!(result, Ok(0.25));
    }

    #[cfg(unix)]
    #[test]
    fn failure_status() {
        let mut counter = ProcessCounter::new("sh", vec!["-c".to_owned(), "exit 3".to_owned()]);
        let result = counter.weighted_probability(&WeightedCnf::default());
        assert_eq!(
            result,
            Err(ErrorKind::CountingOracle(CountingOracleError::Status(Some(3))))
        );
    }
}
