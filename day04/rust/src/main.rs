use anyhow::Result;
use aoc::{time, Grid, Pos};

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±2ms
        println!("First part: {}", solve(&input)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±1ms
        println!("Bonus: {}", bonus(&input)?);
        Ok(())
    })
}

const ALL_DIRECTIONS: [Pos; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

fn reads(grid: &Grid<char>, (x, y): Pos, (dx, dy): Pos, word: &str) -> bool {
    word.chars()
        .enumerate()
        .all(|(i, c)| grid.get((x + dx * i as i64, y + dy * i as i64)) == Some(&c))
}

fn solve(input: &str) -> Result<usize> {
    let grid = Grid::from_chars(input)?;

    Ok(grid
        .positions()
        .map(|p| {
            ALL_DIRECTIONS
                .into_iter()
                .filter(|&d| reads(&grid, p, d, "XMAS"))
                .count()
        })
        .sum())
}

fn is_mas(a: Option<&char>, b: Option<&char>) -> bool {
    matches!(
        (a.copied(), b.copied()),
        (Some('M'), Some('S')) | (Some('S'), Some('M'))
    )
}

fn bonus(input: &str) -> Result<usize> {
    let grid = Grid::from_chars(input)?;

    Ok(grid
        .positions()
        .filter(|&(x, y)| {
            grid.get((x, y)) == Some(&'A')
                && is_mas(grid.get((x - 1, y - 1)), grid.get((x + 1, y + 1)))
                && is_mas(grid.get((x + 1, y - 1)), grid.get((x - 1, y + 1)))
        })
        .count())
}

#[test]
fn test() {
    let example_input = "
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    assert_eq!(solve(example_input).unwrap(), 18);
    assert_eq!(bonus(example_input).unwrap(), 9);
}

#[test]
fn test_small() {
    assert_eq!(
        solve(
            "
..X...
.SAMX.
.A..A.
XMAS.S
.X....
"
        )
        .unwrap(),
        4
    );
}
