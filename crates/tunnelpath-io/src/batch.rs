//! Batch generation of problem files from bare mazes.
//!
//! A maze file is the tail of a problem file: the `<rows>x<cols>` line and
//! the board. Every maze is expanded into one problem per algorithm and
//! expansion order, and per tie-break for the algorithms that use one.

use std::fs;
use std::path::Path;

use tunnelpath_search::{Algorithm, Rotation, TieBreak};

use crate::error::ProblemError;
use crate::problem::{rotation_word, tie_break_word};

/// One generated problem configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub algorithm: Algorithm,
    pub rotation: Rotation,
    /// `None` for algorithms that ignore the tie-break.
    pub tie_break: Option<TieBreak>,
}

impl Variant {
    /// Every configuration, in generation order.
    pub fn all() -> Vec<Variant> {
        let mut out = Vec::new();
        for algorithm in [
            Algorithm::Bfs,
            Algorithm::AStar,
            Algorithm::Dfid,
            Algorithm::IdaStar,
            Algorithm::Dfbnb,
        ] {
            for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
                if algorithm.uses_tie_break() {
                    for tie in [TieBreak::OldFirst, TieBreak::NewFirst] {
                        out.push(Variant {
                            algorithm,
                            rotation,
                            tie_break: Some(tie),
                        });
                    }
                } else {
                    out.push(Variant {
                        algorithm,
                        rotation,
                        tie_break: None,
                    });
                }
            }
        }
        out
    }

    /// The order line of the problem file.
    pub fn order_line(&self) -> String {
        match self.tie_break {
            Some(t) => format!("{} {}", rotation_word(self.rotation), tie_break_word(t)),
            None => rotation_word(self.rotation).to_string(),
        }
    }

    /// File name for this variant of `maze`, with `A*` and `IDA*` spelled
    /// `AStar` and `IDAStar`.
    pub fn file_name(&self, maze: &str) -> String {
        let algo = match self.algorithm {
            Algorithm::AStar => "AStar",
            Algorithm::IdaStar => "IDAStar",
            other => other.name(),
        };
        format!("{algo} {} {maze}.txt", self.order_line())
    }

    /// Problem file text: header, then the maze verbatim.
    pub fn contents(&self, maze_text: &str) -> String {
        format!(
            "{}\n{}\nwith time\nno open\n{maze_text}",
            self.algorithm.name(),
            self.order_line()
        )
    }
}

/// Write every variant of every `.txt` maze in `maze_dir` into `out_dir`.
/// Returns the number of files written.
pub fn generate(maze_dir: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<usize, ProblemError> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut mazes = Vec::new();
    for entry in fs::read_dir(maze_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            mazes.push(path);
        }
    }
    mazes.sort();

    let variants = Variant::all();
    let mut written = 0;
    for path in mazes {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            log::warn!("skipping maze with a non-UTF-8 name: {}", path.display());
            continue;
        };
        let text = fs::read_to_string(&path)?;
        for v in &variants {
            let target = out_dir.join(v.file_name(name));
            fs::write(&target, v.contents(&text))?;
            log::info!("generated {}", target.display());
            written += 1;
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Problem;

    #[test]
    fn variant_count() {
        let all = Variant::all();
        // 3 algorithms × 2 orders + 2 algorithms × 2 orders × 2 tie-breaks
        assert_eq!(all.len(), 14);
        assert!(
            all.iter()
                .all(|v| v.tie_break.is_some() == v.algorithm.uses_tie_break())
        );
    }

    #[test]
    fn names_and_contents() {
        let v = Variant {
            algorithm: Algorithm::AStar,
            rotation: Rotation::CounterClockwise,
            tie_break: Some(TieBreak::OldFirst),
        };
        assert_eq!(v.file_name("maze1"), "AStar counter-clockwise old-first maze1.txt");
        assert_eq!(
            v.contents("1x2\nSG\n"),
            "A*\ncounter-clockwise old-first\nwith time\nno open\n1x2\nSG\n"
        );

        let v = Variant {
            algorithm: Algorithm::IdaStar,
            rotation: Rotation::Clockwise,
            tie_break: None,
        };
        assert_eq!(v.file_name("m"), "IDAStar clockwise m.txt");
    }

    #[test]
    fn generated_files_parse_back() {
        for v in Variant::all() {
            let p = Problem::parse(&v.contents("2x3\nS-~\n-*G\n")).unwrap();
            assert_eq!(p.algorithm, v.algorithm);
            assert_eq!(p.config.rotation, v.rotation);
            assert_eq!(p.config.tie_break, v.tie_break.unwrap_or_default());
            assert!(p.with_time);
            assert!(!p.config.trace_open);
        }
    }

    #[test]
    fn generate_writes_every_variant() {
        let root = std::env::temp_dir().join(format!("tunnelpath-batch-{}", std::process::id()));
        let mazes = root.join("mazes");
        let out = root.join("out");
        fs::create_dir_all(&mazes).unwrap();
        fs::write(mazes.join("small.txt"), "1x3\nS-G\n").unwrap();
        fs::write(mazes.join("notes.md"), "ignored").unwrap();

        let n = generate(&mazes, &out).unwrap();
        assert_eq!(n, 14);
        let text = fs::read_to_string(out.join("DFBnB clockwise new-first small.txt")).unwrap();
        assert_eq!(text, "DFBnB\nclockwise new-first\nwith time\nno open\n1x3\nS-G\n");
        assert_eq!(fs::read_dir(&out).unwrap().count(), 14);

        fs::remove_dir_all(&root).unwrap();
    }
}
