use anyhow::Result;
use aoc::time;
use regex::Regex;

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±300µs
        println!("First part: {}", solve(&input)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±300µs
        println!("Bonus: {}", bonus(&input)?);
        Ok(())
    })
}

const COST_A: i64 = 3;
const COST_B: i64 = 1;
const MAX_PRESSES: i64 = 100;
const UNIT_CONVERSION: i64 = 10_000_000_000_000;

type Vec2 = (i64, i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Machine {
    a: Vec2,
    b: Vec2,
    prize: Vec2,
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl Machine {
    fn lands(&self, na: i64, nb: i64) -> bool {
        let ((ax, ay), (bx, by), (px, py)) = (self.a, self.b, self.prize);
        na * ax + nb * bx == px && na * ay + nb * by == py
    }

    /// Cheapest press counts `(na, nb)` landing exactly on the prize.
    ///
    /// `na * a + nb * b = prize` has at most one solution unless `a` and `b`
    /// are parallel.
    fn presses(&self, limit: Option<i64>) -> Option<(i64, i64)> {
        let ((ax, ay), (bx, by), (px, py)) = (self.a, self.b, self.prize);

        let det = ax * by - ay * bx;
        if det == 0 {
            return self.parallel_presses(limit);
        }

        let na = px * by - py * bx;
        let nb = ax * py - ay * px;

        if na % det != 0 || nb % det != 0 {
            return None;
        }

        let (na, nb) = (na / det, nb / det);
        if na < 0 || nb < 0 || limit.is_some_and(|max| na > max || nb > max) {
            return None;
        }

        Some((na, nb))
    }

    /// Both buttons move along the same line, so only one axis matters
    /// and there may be many ways to reach the prize.
    fn parallel_presses(&self, limit: Option<i64>) -> Option<(i64, i64)> {
        let cost = |&(na, nb): &(i64, i64)| na * COST_A + nb * COST_B;

        if let Some(max) = limit {
            return (0..=max)
                .flat_map(|na| (0..=max).map(move |nb| (na, nb)))
                .filter(|&(na, nb)| self.lands(na, nb))
                .min_by_key(cost);
        }

        // na * u + nb * v = p
        let (u, v, p) = if self.a.0 + self.b.0 > 0 {
            (self.a.0, self.b.0, self.prize.0)
        } else {
            (self.a.1, self.b.1, self.prize.1)
        };

        let step = match (u, v) {
            (0, 0) => return self.lands(0, 0).then_some((0, 0)),
            (_, 0) => return (p % u == 0 && self.lands(p / u, 0)).then_some((p / u, 0)),
            (0, _) => return (p % v == 0 && self.lands(0, p / v)).then_some((0, p / v)),
            _ => v / gcd(u, v),
        };

        // The solutions for `na` repeat every `step`, and the cost is linear
        // in `na`, so the cheapest one is either the smallest or the largest.
        let top = p / u;
        (0..step.min(top + 1))
            .chain((top + 1 - step).max(0)..=top)
            .filter(|na| (p - na * u) % v == 0)
            .map(|na| (na, (p - na * u) / v))
            .filter(|&(na, nb)| self.lands(na, nb))
            .min_by_key(cost)
    }

    fn tokens(&self, limit: Option<i64>) -> Option<i64> {
        let (na, nb) = self.presses(limit)?;
        Some(na * COST_A + nb * COST_B)
    }
}

fn parse(input: &str) -> Result<Vec<Machine>> {
    let re = Regex::new(
        r"Button A: X\+(\d+), Y\+(\d+)\s+Button B: X\+(\d+), Y\+(\d+)\s+Prize: X=(\d+), Y=(\d+)",
    )?;

    re.captures_iter(input)
        .map(|c| -> Result<Machine> {
            let n = |i: usize| c[i].parse::<i64>();
            Ok(Machine {
                a: (n(1)?, n(2)?),
                b: (n(3)?, n(4)?),
                prize: (n(5)?, n(6)?),
            })
        })
        .collect()
}

fn solve(input: &str) -> Result<i64> {
    Ok(parse(input)?
        .iter()
        .filter_map(|m| m.tokens(Some(MAX_PRESSES)))
        .sum())
}

fn bonus(input: &str) -> Result<i64> {
    Ok(parse(input)?
        .into_iter()
        .map(|m| Machine {
            prize: (m.prize.0 + UNIT_CONVERSION, m.prize.1 + UNIT_CONVERSION),
            ..m
        })
        .filter_map(|m| m.tokens(None))
        .sum())
}

#[test]
fn test() {
    let example_input = "
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    assert_eq!(solve(example_input).unwrap(), 480);
    assert_eq!(bonus(example_input).unwrap(), 875318608908);
}

#[test]
fn test_presses() {
    let m = Machine {
        a: (94, 34),
        b: (22, 67),
        prize: (8400, 5400),
    };
    assert_eq!(m.presses(Some(MAX_PRESSES)), Some((80, 40)));
    assert_eq!(m.tokens(Some(MAX_PRESSES)), Some(280));

    let far = Machine {
        prize: (8400 * 2, 5400 * 2),
        ..m
    };
    assert_eq!(far.presses(Some(MAX_PRESSES)), None);
    assert_eq!(far.presses(None), Some((160, 80)));
}

#[test]
fn test_parallel_buttons() {
    let example_input = "
Button A: X+1, Y+1
Button B: X+2, Y+2
Prize: X=10, Y=10
";

    assert_eq!(solve(example_input).unwrap(), 5);
    assert_eq!(bonus(example_input).unwrap(), 5_000_000_000_005);

    let m = Machine {
        a: (1, 1),
        b: (2, 2),
        prize: (10, 10),
    };
    assert_eq!(m.presses(Some(MAX_PRESSES)), Some((0, 5)));
    assert_eq!(m.presses(None), Some((0, 5)));

    // here pressing `a` is worth it
    let m = Machine {
        a: (4, 4),
        b: (1, 1),
        prize: (10, 10),
    };
    assert_eq!(m.tokens(Some(MAX_PRESSES)), Some(8));
    assert_eq!(m.tokens(None), Some(8));

    // off the shared line
    let m = Machine {
        a: (1, 1),
        b: (2, 2),
        prize: (10, 11),
    };
    assert_eq!(m.tokens(Some(MAX_PRESSES)), None);
    assert_eq!(m.tokens(None), None);
}
