use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use tunnelpath_search::SearchOutcome;

use crate::error::ProblemError;

/// The text written to the output file.
///
/// ```text
/// R-Ent-L-L-L-L-L-L
/// Num: 21
/// Max space: 9
/// Cost: 13
/// 0.001 seconds
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: SearchOutcome,
    /// Present only when the problem asked for timing.
    pub elapsed: Option<Duration>,
}

impl Report {
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ProblemError> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.outcome;
        writeln!(f, "{}", o.path_string())?;
        writeln!(f, "Num: {}", o.nodes_generated)?;
        writeln!(f, "Max space: {}", o.max_frontier)?;
        write!(f, "Cost: {}", o.cost_string())?;
        if let Some(d) = self.elapsed {
            write!(f, "\n{:.3} seconds", d.as_secs_f64())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunnelpath_search::Direction;

    #[test]
    fn found_with_time() {
        let r = Report {
            outcome: SearchOutcome {
                path: Some(vec![Direction::Right, Direction::Enter, Direction::Right]),
                nodes_generated: 3,
                max_frontier: 1,
                cost: Some(8),
            },
            elapsed: Some(Duration::from_millis(1250)),
        };
        assert_eq!(
            r.to_string(),
            "R-Ent-R\nNum: 3\nMax space: 1\nCost: 8\n1.250 seconds"
        );
    }

    #[test]
    fn no_path_without_time() {
        let r = Report {
            outcome: SearchOutcome {
                path: None,
                nodes_generated: 17,
                max_frontier: 6,
                cost: None,
            },
            elapsed: None,
        };
        assert_eq!(r.to_string(), "no path\nNum: 17\nMax space: 6\nCost: inf");
    }
}
