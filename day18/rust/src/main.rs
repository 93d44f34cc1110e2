use std::collections::VecDeque;

use anyhow::{bail, Context, Result};
use aoc::{time, Grid, Pos};
use tuple::Map;

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±300µs
        println!("First part: {}", solve(&input, SIZE, FALLEN)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±3ms
        println!("Bonus: {}", bonus(&input, SIZE)?);
        Ok(())
    })
}

/// Coordinates run from 0 to `SIZE`, inclusive
const SIZE: usize = 70;
const FALLEN: usize = 1024;

fn parse(input: &str) -> Result<Vec<Pos>> {
    input
        .trim()
        .lines()
        .map(|line| -> Result<Pos> {
            let (x, y) = line
                .trim()
                .split_once(',')
                .with_context(|| format!("not a coordinate: {line}"))?
                .map(str::parse::<i64>);

            Ok((x?, y?))
        })
        .collect()
}

/// Length of the shortest path from the top left to the bottom right corner
fn shortest_path(bytes: &[Pos], size: usize) -> Option<usize> {
    let mut corrupted = Grid::new(size + 1, size + 1, false);
    for &p in bytes {
        if let Some(c) = corrupted.get_mut(p) {
            *c = true;
        }
    }

    let start = (0, 0);
    let end = (size as i64, size as i64);

    if corrupted.get(start) != Some(&false) {
        return None;
    }

    let mut seen = Grid::new(size + 1, size + 1, false);
    if let Some(s) = seen.get_mut(start) {
        *s = true;
    }
    let mut todo = VecDeque::from_iter([(start, 0)]);

    while let Some((p, steps)) = todo.pop_front() {
        if p == end {
            return Some(steps);
        }

        for n in corrupted.neighbors(p) {
            if corrupted.get(n) == Some(&false) {
                if let Some(visited) = seen.get_mut(n) {
                    if !*visited {
                        *visited = true;
                        todo.push_back((n, steps + 1));
                    }
                }
            }
        }
    }

    None
}

fn solve(input: &str, size: usize, fallen: usize) -> Result<usize> {
    let bytes = parse(input)?;
    let fallen = fallen.min(bytes.len());

    shortest_path(&bytes[..fallen], size).context("the exit is unreachable")
}

// binary search for the number of fallen bytes that first cuts off the exit
fn bonus(input: &str, size: usize) -> Result<String> {
    let bytes = parse(input)?;

    if shortest_path(&bytes, size).is_some() {
        bail!("the exit stays reachable");
    }

    // reachable with `lo` bytes fallen, unreachable with `hi`
    let (mut lo, mut hi) = (0, bytes.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if shortest_path(&bytes[..mid], size).is_some() {
            lo = mid;
        } else {
            hi = mid;
        }
        log::debug!("searching between {lo} and {hi}");
    }

    let (x, y) = bytes[hi - 1];
    Ok(format!("{x},{y}"))
}

#[test]
fn test() {
    let example_input = "
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    assert_eq!(solve(example_input, 6, 12).unwrap(), 22);
    assert_eq!(bonus(example_input, 6).unwrap(), "6,1");
}

#[test]
fn test_open_space() {
    assert_eq!(shortest_path(&[], 6), Some(12));
    assert_eq!(shortest_path(&[(0, 0)], 6), None);
    assert!(solve("1,0\n0,1", 2, 2).is_err());
    assert!(bonus("3,3", 2).is_err());
}
