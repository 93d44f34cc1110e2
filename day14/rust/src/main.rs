use anyhow::{bail, Context, Result};
use aoc::{time, Grid};
use fxhash::FxHashSet;
use regex::Regex;

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±200µs
        println!("First part: {}", solve(&input, WIDTH, HEIGHT)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±60ms
        println!("Bonus: {}", bonus(&input, WIDTH, HEIGHT)?);
        Ok(())
    })
}

const WIDTH: i64 = 101;
const HEIGHT: i64 = 103;
const SECONDS: i64 = 100;

#[derive(Debug, Clone, Copy)]
struct Robot {
    p: (i64, i64),
    v: (i64, i64),
}

impl Robot {
    fn after(&self, t: i64, w: i64, h: i64) -> (i64, i64) {
        (
            (self.p.0 + self.v.0 * t).rem_euclid(w),
            (self.p.1 + self.v.1 * t).rem_euclid(h),
        )
    }
}

/// Robots, and the room size when the input starts with a `W H` line
fn parse(input: &str, w: i64, h: i64) -> Result<(i64, i64, Vec<Robot>)> {
    let re = Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$")?;
    let room = Regex::new(r"^(\d+) (\d+)$")?;

    let mut lines = input.trim().lines().peekable();

    let (w, h) = match lines.peek().copied().and_then(|line| room.captures(line.trim())) {
        Some(c) => {
            lines.next();
            (c[1].parse()?, c[2].parse()?)
        }
        None => (w, h),
    };

    if w <= 0 || h <= 0 {
        bail!("the room is empty: {w} by {h}");
    }

    let robots = lines
        .map(|line| -> Result<Robot> {
            let c = re
                .captures(line.trim())
                .with_context(|| format!("malformed robot: {line}"))?;
            let n = |i: usize| c[i].parse::<i64>();

            Ok(Robot {
                p: (n(1)?, n(2)?),
                v: (n(3)?, n(4)?),
            })
        })
        .collect::<Result<_>>()?;

    Ok((w, h, robots))
}

fn solve(input: &str, w: i64, h: i64) -> Result<usize> {
    let (w, h, robots) = parse(input, w, h)?;
    let (mid_x, mid_y) = (w / 2, h / 2);
    let mut quadrants = [0; 4];

    for robot in robots {
        let (x, y) = robot.after(SECONDS, w, h);
        if x == mid_x || y == mid_y {
            continue;
        }

        let q = (x > mid_x) as usize + 2 * (y > mid_y) as usize;
        quadrants[q] += 1;
    }

    Ok(quadrants.iter().product())
}

// The picture shows up the first time no two robots overlap. Positions
// repeat every `w * h` seconds, so that bounds the search.
fn bonus(input: &str, w: i64, h: i64) -> Result<i64> {
    let (w, h, robots) = parse(input, w, h)?;

    for t in 0..(w * h) {
        let mut seen = FxHashSet::default();
        if robots.iter().all(|robot| seen.insert(robot.after(t, w, h))) {
            if log::log_enabled!(log::Level::Debug) {
                let mut picture = Grid::new(w as usize, h as usize, '.');
                for p in seen {
                    if let Some(c) = picture.get_mut(p) {
                        *c = '#';
                    }
                }
                log::debug!("after {t} seconds:\n{picture}");
            }

            return Ok(t);
        }
    }

    bail!("robots never spread out")
}

#[test]
fn test() {
    let example_input = "
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    assert_eq!(solve(example_input, 11, 7).unwrap(), 12);

    let with_room = format!("11 7\n{}", example_input.trim());
    assert_eq!(solve(&with_room, WIDTH, HEIGHT).unwrap(), 12);
}

#[test]
fn test_wrapping() {
    let robot = Robot {
        p: (2, 4),
        v: (2, -3),
    };

    assert_eq!(robot.after(1, 11, 7), (4, 1));
    assert_eq!(robot.after(2, 11, 7), (6, 5));
    assert_eq!(robot.after(5, 11, 7), (1, 3));
}

#[test]
fn test_spread_out() {
    let example_input = "
p=0,0 v=1,0
p=0,0 v=0,1
p=4,4 v=1,1
";

    assert_eq!(bonus(example_input, 5, 5).unwrap(), 1);
    assert!(bonus("p=0,0 v=0,0\np=0,0 v=0,0", 5, 5).is_err());
}

#[test]
fn test_room_size() {
    let (w, h, robots) = parse("5 3\np=1,1 v=0,0", WIDTH, HEIGHT).unwrap();
    assert_eq!((w, h, robots.len()), (5, 3, 1));

    let (w, h, _) = parse("p=1,1 v=0,0", WIDTH, HEIGHT).unwrap();
    assert_eq!((w, h), (WIDTH, HEIGHT));

    assert!(parse("0 3\np=1,1 v=0,0", WIDTH, HEIGHT).is_err());
    assert!(parse("5 3\n5 3", WIDTH, HEIGHT).is_err());
}
