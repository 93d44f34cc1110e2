use anyhow::Result;
use aoc::{time, Grid, Pos};
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±100µs
        println!("First part: {}", solve(&input)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±150µs
        println!("Bonus: {}", bonus(&input)?);
        Ok(())
    })
}

fn antennas(grid: &Grid<char>) -> FxHashMap<char, Vec<Pos>> {
    let mut antennas: FxHashMap<char, Vec<Pos>> = FxHashMap::default();

    for (p, &c) in grid.iter() {
        if c.is_ascii_alphanumeric() {
            antennas.entry(c).or_default().push(p);
        }
    }

    antennas
}

fn count_antinodes<F>(input: &str, mut antinodes: F) -> Result<usize>
where
    F: FnMut(&Grid<char>, Pos, Pos) -> Vec<Pos>,
{
    let grid = Grid::from_chars(input)?;

    let found = antennas(&grid)
        .values()
        .flat_map(|ps| ps.iter().tuple_combinations::<(_, _)>())
        .flat_map(|(&a, &b)| {
            let mut ns = antinodes(&grid, a, b);
            ns.extend(antinodes(&grid, b, a));
            ns
        })
        .collect::<FxHashSet<_>>();

    Ok(found.len())
}

fn solve(input: &str) -> Result<usize> {
    // the point beyond `b`, as far from `b` as `a` is
    count_antinodes(input, |grid, a, b| {
        let p = (2 * b.0 - a.0, 2 * b.1 - a.1);
        if grid.in_bounds(p) {
            vec![p]
        } else {
            vec![]
        }
    })
}

fn bonus(input: &str) -> Result<usize> {
    // every step from `a` through `b` and beyond, `a` and `b` included
    count_antinodes(input, |grid, a, b| {
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);

        let mut ns = vec![];
        let mut p = a;
        while grid.in_bounds(p) {
            ns.push(p);
            p = (p.0 + dx, p.1 + dy);
        }
        ns
    })
}

#[test]
fn test() {
    let example_input = "
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    assert_eq!(solve(example_input).unwrap(), 14);
    assert_eq!(bonus(example_input).unwrap(), 34);
}

#[test]
fn test_resonant_harmonics() {
    assert_eq!(
        bonus(
            "
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
"
        )
        .unwrap(),
        9
    );
}
