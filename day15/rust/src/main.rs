use anyhow::{bail, Context, Result};
use aoc::{time, Dir, Grid, Pos};

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±1ms
        println!("First part: {}", solve(&input)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±2ms
        println!("Bonus: {}", bonus(&input)?);
        Ok(())
    })
}

fn is_tile(c: char) -> bool {
    matches!(c, '#' | '.' | 'O' | '[' | ']' | '@')
}

fn parse(input: &str, widen: bool) -> Result<(Grid<char>, Vec<Dir>)> {
    let input = input.replace("\r\n", "\n");
    let (map, moves) = input
        .trim()
        .split_once("\n\n")
        .context("expected a map and a list of moves, separated by a blank line")?;

    let map = if widen {
        map.chars()
            .map(|c| match c {
                'O' => "[]".to_string(),
                '@' => "@.".to_string(),
                '\n' => "\n".to_string(),
                c => c.to_string().repeat(2),
            })
            .collect::<String>()
    } else {
        map.to_string()
    };

    let grid = Grid::parse(&map, |c| is_tile(c).then_some(c))?;

    let moves = moves
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Dir::from_arrow(c).with_context(|| format!("not a move: {c:?}")))
        .collect::<Result<_>>()?;

    Ok((grid, moves))
}

/// Tries to move whatever is at `at` one step in `dir`, pushing everything
/// in the way. Either all of it moves, or nothing does.
fn push(grid: &mut Grid<char>, at: Pos, dir: Dir) -> bool {
    let mut moving = vec![at];
    let mut i = 0;

    while let Some(&p) = moving.get(i) {
        i += 1;

        let next = dir.step(p);
        let also = match grid.get(next).copied() {
            Some('.') => continue,
            Some('O') => None,
            Some('[') if dir.is_vertical() => Some(Dir::Right.step(next)),
            Some(']') if dir.is_vertical() => Some(Dir::Left.step(next)),
            Some('[' | ']') => None,
            _ => return false,
        };

        for q in [Some(next), also].into_iter().flatten() {
            if !moving.contains(&q) {
                moving.push(q);
            }
        }
    }

    let tiles = moving
        .iter()
        .map(|&p| grid.get(p).copied().unwrap_or('.'))
        .collect::<Vec<_>>();

    for &p in &moving {
        if let Some(c) = grid.get_mut(p) {
            *c = '.';
        }
    }

    for (&p, tile) in moving.iter().zip(tiles) {
        if let Some(c) = grid.get_mut(dir.step(p)) {
            *c = tile;
        }
    }

    true
}

fn simulate(input: &str, widen: bool) -> Result<i64> {
    let (mut grid, moves) = parse(input, widen)?;

    let Some(mut robot) = grid.find(|&c| c == '@') else {
        bail!("there's no robot");
    };

    for dir in moves {
        if push(&mut grid, robot, dir) {
            robot = dir.step(robot);
        }
    }

    log::debug!("final state:\n{grid}");

    Ok(grid
        .iter()
        .filter(|&(_, &c)| c == 'O' || c == '[')
        .map(|((x, y), _)| 100 * y + x)
        .sum())
}

fn solve(input: &str) -> Result<i64> {
    simulate(input, false)
}

fn bonus(input: &str) -> Result<i64> {
    simulate(input, true)
}

#[test]
fn test() {
    let small = "
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    assert_eq!(solve(small).unwrap(), 2028);

    let example_input = "
##########
#..O..O.O#
#......O.#
#.OO..O.O#
#..O@..O.#
#O#..O...#
#O..O..O.#
#.OO.O.OO#
#....O...#
##########

<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
";

    assert_eq!(solve(example_input).unwrap(), 10092);
    assert_eq!(bonus(example_input).unwrap(), 9021);
}

#[test]
fn test_wide_push() {
    let (mut grid, moves) = parse(
        "
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^
",
        true,
    )
    .unwrap();

    let mut robot = grid.find(|&c| c == '@').unwrap();
    for dir in moves {
        if push(&mut grid, robot, dir) {
            robot = dir.step(robot);
        }
    }

    // the last push lifts three boxes at once
    assert_eq!(
        grid.to_string(),
        "\
##############
##......##..##
##...[][]...##
##....[]....##
##.....@....##
##..........##
##############
"
    );

    // blocked by the wall above
    assert!(!push(&mut grid, (8, 2), Dir::Up));
}

#[test]
fn test_crlf() {
    let small = "########\r\n#..O.O.#\r\n##@.O..#\r\n#...O..#\r\n#.#.O..#\r\n#...O..#\r\n#......#\r\n########\r\n\r\n<^^>>>vv<v>>v<<\r\n";

    assert_eq!(solve(small).unwrap(), 2028);

    let (grid, _) = parse(small, true).unwrap();
    assert_eq!((grid.width(), grid.height()), (16, 8));
}
