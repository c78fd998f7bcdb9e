use crate::config::SOLUTION_DIR_NAME;
use crate::coordinator::RunOutcome;
use crate::error::{Result, SolverError};
use crate::structs::Placement;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// `<tile id> <rotation>` per cell, row 0 first, each row left to right.
pub fn format_solution(placements: &[Placement]) -> String {
    let mut text = String::with_capacity(placements.len() * 8);
    for placement in placements {
        let _ = writeln!(text, "{} {}", placement.tile_id, placement.rotation);
    }
    text
}

pub fn print_outcome(outcome: &RunOutcome) {
    let Some(report) = outcome.winning_report() else {
        println!("\nSOLUTION NOT FOUND");
        return;
    };

    println!(
        "Worker {} found the solution in {:.6} seconds",
        report.rank,
        report.elapsed.as_secs_f64()
    );
    if let Some(placements) = &report.placements {
        println!("\n=== SOLUTION FOUND ===");
        print!("{}", format_solution(placements));
        println!("======================");
    }
}

/// Default folder for saved solutions, under the user's documents directory.
pub fn default_solution_dir() -> Option<PathBuf> {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
        .map(|mut path| {
            path.push(SOLUTION_DIR_NAME);
            path
        })
}

/// Writes the solution to `<dir>/<N>x<N>_<md5>.txt` and returns the path.
pub fn save_solution(size: usize, placements: &[Placement], dir: &Path) -> Result<PathBuf> {
    let contents = format!("{size}\n{}", format_solution(placements));
    let hash = format!("{:x}", md5::compute(&contents));
    let path = dir.join(format!("{size}x{size}_{hash}.txt"));

    fs::create_dir_all(dir)
        .and_then(|()| fs::write(&path, &contents))
        .map_err(|source| SolverError::Save {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placements() -> Vec<Placement> {
        vec![
            Placement { tile_id: 2, rotation: 0 },
            Placement { tile_id: 0, rotation: 3 },
            Placement { tile_id: 3, rotation: 1 },
            Placement { tile_id: 1, rotation: 2 },
        ]
    }

    #[test]
    fn one_line_per_cell_in_row_major_order() {
        assert_eq!(format_solution(&placements()), "2 0\n0 3\n3 1\n1 2\n");
        assert_eq!(format_solution(&[]), "");
    }

    #[test]
    fn saved_file_is_named_after_its_contents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("solutions");

        let first = save_solution(2, &placements(), &nested).unwrap();
        let again = save_solution(2, &placements(), &nested).unwrap();
        assert_eq!(first, again);

        let name = first.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("2x2_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(fs::read_to_string(&first).unwrap(), "2\n2 0\n0 3\n3 1\n1 2\n");
    }

    #[test]
    fn unwritable_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = save_solution(2, &placements(), &blocker).unwrap_err();
        assert!(matches!(err, SolverError::Save { .. }));
    }
}
