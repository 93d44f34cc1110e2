use anyhow::Result;
use aoc::{time, Grid, Pos};
use fxhash::{FxHashMap, FxHashSet};

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±500µs
        println!("First part: {}", solve(&input)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±200µs
        println!("Bonus: {}", bonus(&input)?);
        Ok(())
    })
}

fn parse(input: &str) -> Result<Grid<u32>> {
    Ok(Grid::parse(input, |c| c.to_digit(10))?)
}

fn uphill<'a>(grid: &'a Grid<u32>, p: Pos) -> impl Iterator<Item = Pos> + 'a {
    let h = grid.get(p).copied();
    grid.neighbors(p)
        .filter(move |&n| h.is_some_and(|h| grid.get(n) == Some(&(h + 1))))
}

fn trailheads(grid: &Grid<u32>) -> impl Iterator<Item = Pos> + '_ {
    grid.iter().filter(|&(_, &h)| h == 0).map(|(p, _)| p)
}

fn summits(grid: &Grid<u32>, start: Pos) -> usize {
    let mut seen = FxHashSet::from_iter([start]);
    let mut todo = vec![start];
    let mut found = 0;

    while let Some(p) = todo.pop() {
        if grid.get(p) == Some(&9) {
            found += 1;
            continue;
        }

        for n in uphill(grid, p) {
            if seen.insert(n) {
                todo.push(n);
            }
        }
    }

    found
}

fn solve(input: &str) -> Result<usize> {
    let grid = parse(input)?;

    Ok(trailheads(&grid).map(|p| summits(&grid, p)).sum())
}

fn trails(grid: &Grid<u32>, cache: &mut FxHashMap<Pos, usize>, p: Pos) -> usize {
    if let Some(&n) = cache.get(&p) {
        return n;
    }

    let n = if grid.get(p) == Some(&9) {
        1
    } else {
        uphill(grid, p)
            .map(|next| trails(grid, cache, next))
            .sum()
    };

    cache.insert(p, n);
    n
}

fn bonus(input: &str) -> Result<usize> {
    let grid = parse(input)?;
    let mut cache = FxHashMap::default();

    Ok(trailheads(&grid)
        .map(|p| trails(&grid, &mut cache, p))
        .sum())
}

#[test]
fn test() {
    let example_input = "
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    assert_eq!(solve(example_input).unwrap(), 36);
    assert_eq!(bonus(example_input).unwrap(), 81);
}

#[test]
fn test_single_trailhead() {
    let example_input = "
0123
1234
8765
9876
";

    assert_eq!(solve(example_input).unwrap(), 1);
    assert_eq!(bonus(example_input).unwrap(), 16);
}
