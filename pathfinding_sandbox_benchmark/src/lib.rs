//! Loads maps and scenarios in the [Moving AI](https://movingai.com/benchmarks/formats.html)
//! format from the `maps/` and `scenarios/` directories of this crate. Scenario distances are
//! the 4-connected step counts between start and goal.
use csv::ReaderBuilder;
use serde::Deserialize;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[allow(unused)]
#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    bucket: u32,
    file_name: String,
    w: u32,
    h: u32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    distance: f64,
}

/// A start/goal query as `(row, col)` pairs, with the recorded 4-connected distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub start: (i32, i32),
    pub goal: (i32, i32),
    pub distance: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkMap {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Vec<u8>>,
}

impl BenchmarkMap {
    /// Only `.` and `G` are passable; `@`, `O`, `T`, `S` and `W` all block movement here.
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        !matches!(self.tiles[row][col], b'.' | b'G')
    }

    /// Blocked `(row, col)` positions in row-major order.
    pub fn blocked(&self) -> Vec<(i32, i32)> {
        (0..self.height)
            .flat_map(|r| (0..self.width).map(move |c| (r, c)))
            .filter(|&(r, c)| self.is_blocked(r, c))
            .map(|(r, c)| (r as i32, c as i32))
            .collect()
    }
}

fn root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

pub fn parse_map(map_str: &str) -> Result<BenchmarkMap, Box<dyn Error>> {
    let mut lines = map_str.lines();
    let mut width = None;
    let mut height = None;
    for line in lines.by_ref() {
        let line = line.trim();
        if line == "map" {
            break;
        }
        match line.split_once(' ') {
            Some(("width", v)) => width = Some(v.trim().parse::<usize>()?),
            Some(("height", v)) => height = Some(v.trim().parse::<usize>()?),
            _ => {}
        }
    }
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err("map header lacks width or height".into()),
    };
    let tiles = lines
        .take(height)
        .map(|l| l.as_bytes().to_vec())
        .collect::<Vec<_>>();
    if tiles.len() != height || tiles.iter().any(|row| row.len() != width) {
        return Err(format!("map body does not match {}x{} header", width, height).into());
    }
    Ok(BenchmarkMap {
        width,
        height,
        tiles,
    })
}

pub fn parse_scenarios<R: BufRead>(reader: R) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut lines = reader.lines();

    // Skip the version line
    lines.next();

    let remaining_data = lines.collect::<Result<Vec<_>, _>>()?.join("\n");
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());
    let mut scenarios = Vec::new();
    for result in csv_reader.deserialize() {
        let record: ScenarioRecord = result?;
        scenarios.push(Scenario {
            start: (record.y1, record.x1),
            goal: (record.y2, record.x2),
            distance: record.distance,
        });
    }
    Ok(scenarios)
}

fn load_benchmark(name: &str) -> Result<(BenchmarkMap, Vec<Scenario>), Box<dyn Error>> {
    let base = root();
    let map_str = fs::read_to_string(base.join(format!("maps/{}.map", name)))?;
    let file = File::open(base.join(format!("scenarios/{}.map.scen", name)))?;
    let map = parse_map(&map_str)?;
    let scenarios = parse_scenarios(io::BufReader::new(file))?;
    Ok((map, scenarios))
}

/// Names of all maps below `maps/`, relative and without extension, e.g. `sandbox/rooms`.
pub fn get_benchmark_names() -> Vec<String> {
    let maps = root().join("maps");
    let mut names = WalkDir::new(&maps)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let rel_path = entry.path().strip_prefix(&maps).ok()?.to_str()?.to_owned();
            rel_path
                .strip_suffix(".map")
                .map(|name| name.replace('\\', "/"))
        })
        .collect::<Vec<_>>();
    names.sort();
    names
}

pub fn get_benchmark(name: &str) -> (BenchmarkMap, Vec<Scenario>) {
    if !get_benchmark_names().iter().any(|n| n == name) {
        panic!("Unknown benchmark {}", name);
    }
    load_benchmark(name).unwrap_or_else(|e| panic!("Could not load benchmark {}: {}", name, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_tiles() {
        let map = parse_map("type octile\nheight 2\nwidth 3\nmap\n.@.\nT.G\n").unwrap();
        assert_eq!((map.width, map.height), (3, 2));
        assert!(map.is_blocked(0, 1));
        assert!(map.is_blocked(1, 0));
        assert!(!map.is_blocked(1, 2));
        assert_eq!(map.blocked(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn rejects_short_body() {
        assert!(parse_map("type octile\nheight 3\nwidth 2\nmap\n..\n..\n").is_err());
    }

    #[test]
    fn parses_scenarios_as_row_col() {
        let data = "version 1\n0\tm.map\t4\t4\t1\t2\t3\t0\t4.00000000\n";
        let scenarios = parse_scenarios(data.as_bytes()).unwrap();
        assert_eq!(
            scenarios,
            vec![Scenario {
                start: (2, 1),
                goal: (0, 3),
                distance: 4.0
            }]
        );
    }

    #[test]
    fn bundled_benchmarks_load() {
        let names = get_benchmark_names();
        assert!(names.contains(&"sandbox/rooms".to_owned()));
        for name in names {
            let (map, scenarios) = get_benchmark(&name);
            assert!(!scenarios.is_empty());
            for s in scenarios {
                assert!(!map.is_blocked(s.start.0 as usize, s.start.1 as usize));
                assert!(!map.is_blocked(s.goal.0 as usize, s.goal.1 as usize));
            }
        }
    }
}
