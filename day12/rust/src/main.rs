use anyhow::Result;
use aoc::{time, Dir, Grid, Pos};
use fxhash::FxHashSet;

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±4ms
        println!("First part: {}", solve(&input)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±5ms
        println!("Bonus: {}", bonus(&input)?);
        Ok(())
    })
}

type Region = FxHashSet<Pos>;

fn fill(grid: &Grid<char>, start: Pos) -> Region {
    let plant = grid.get(start);

    let mut region = FxHashSet::from_iter([start]);
    let mut todo = vec![start];

    while let Some(p) = todo.pop() {
        for n in grid.neighbors(p) {
            if grid.get(n) == plant && region.insert(n) {
                todo.push(n);
            }
        }
    }

    region
}

fn regions(grid: &Grid<char>) -> Vec<Region> {
    let mut seen = FxHashSet::default();
    let mut regions = vec![];

    for p in grid.positions() {
        if !seen.contains(&p) {
            let region = fill(grid, p);
            seen.extend(region.iter().copied());
            regions.push(region);
        }
    }

    regions
}

/// Cell borders facing `dir` that are not shared with the same region.
fn fences(region: &Region) -> impl Iterator<Item = (Pos, Dir)> + '_ {
    region.iter().flat_map(move |&p| {
        Dir::ALL
            .into_iter()
            .filter(move |dir| !region.contains(&dir.step(p)))
            .map(move |dir| (p, dir))
    })
}

fn perimeter(region: &Region) -> usize {
    fences(region).count()
}

// a side is counted once, at the fence that has no continuation to its right
fn sides(region: &Region) -> usize {
    fences(region)
        .filter(|&(p, dir)| {
            let next = dir.turn_right().step(p);
            !region.contains(&next) || region.contains(&dir.step(next))
        })
        .count()
}

fn price<F>(input: &str, measure: F) -> Result<usize>
where
    F: Fn(&Region) -> usize,
{
    let grid = Grid::from_chars(input)?;

    Ok(regions(&grid)
        .iter()
        .map(|region| region.len() * measure(region))
        .sum())
}

fn solve(input: &str) -> Result<usize> {
    price(input, perimeter)
}

fn bonus(input: &str) -> Result<usize> {
    price(input, sides)
}

#[test]
fn test() {
    let small = "
AAAA
BBCD
BBCC
EEEC
";
    assert_eq!(solve(small).unwrap(), 140);
    assert_eq!(bonus(small).unwrap(), 80);

    let nested = "
OOOOO
OXOXO
OOOOO
OXOXO
OOOOO
";
    assert_eq!(solve(nested).unwrap(), 772);
    assert_eq!(bonus(nested).unwrap(), 436);

    let example_input = "
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";
    assert_eq!(solve(example_input).unwrap(), 1930);
    assert_eq!(bonus(example_input).unwrap(), 1206);
}

#[test]
fn test_sides() {
    assert_eq!(
        bonus(
            "
EEEEE
EXXXX
EEEEE
EXXXX
EEEEE
"
        )
        .unwrap(),
        236
    );

    assert_eq!(
        bonus(
            "
AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA
"
        )
        .unwrap(),
        368
    );
}
