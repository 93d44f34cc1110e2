use anyhow::{Context, Result};
use aoc::time;

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±1ms
        println!("First part: {}", solve(&input)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±40ms
        println!("Bonus: {}", bonus(&input)?);
        Ok(())
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
    Concat,
}

impl Op {
    fn apply(self, a: u64, b: u64) -> Option<u64> {
        match self {
            Op::Add => a.checked_add(b),
            Op::Mul => a.checked_mul(b),
            Op::Concat => a.checked_mul(10u64.pow(num_digits(b)))?.checked_add(b),
        }
    }
}

fn num_digits(n: u64) -> u32 {
    n.checked_ilog10().unwrap_or(0) + 1
}

struct Equation {
    target: u64,
    nums: Vec<u64>,
}

fn parse(input: &str) -> Result<Vec<Equation>> {
    input
        .trim()
        .lines()
        .map(|line| -> Result<Equation> {
            let (target, nums) = line
                .split_once(": ")
                .with_context(|| format!("malformed equation: {line}"))?;

            Ok(Equation {
                target: target.parse()?,
                nums: nums
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect()
}

// Without zeros left to multiply by, operators never decrease the value, so
// we can stop once we overshoot.
fn solvable(target: u64, acc: u64, rest: &[u64], ops: &[Op]) -> bool {
    if acc > target && !rest.contains(&0) {
        return false;
    }

    let Some((&n, rest)) = rest.split_first() else {
        return acc == target;
    };

    ops.iter()
        .filter_map(|op| op.apply(acc, n))
        .any(|next| solvable(target, next, rest, ops))
}

fn calibrate(input: &str, ops: &[Op]) -> Result<u64> {
    Ok(parse(input)?
        .into_iter()
        .filter(|eq| match eq.nums.split_first() {
            Some((&first, rest)) => solvable(eq.target, first, rest, ops),
            None => false,
        })
        .map(|eq| eq.target)
        .sum())
}

fn solve(input: &str) -> Result<u64> {
    calibrate(input, &[Op::Add, Op::Mul])
}

fn bonus(input: &str) -> Result<u64> {
    calibrate(input, &[Op::Add, Op::Mul, Op::Concat])
}

#[test]
fn test() {
    let example_input = "
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    assert_eq!(solve(example_input).unwrap(), 3749);
    assert_eq!(bonus(example_input).unwrap(), 11387);
}

#[test]
fn test_concat() {
    assert_eq!(Op::Concat.apply(12, 345), Some(12345));
    assert_eq!(Op::Concat.apply(15, 6), Some(156));
    assert_eq!(Op::Concat.apply(7, 0), Some(70));
    assert_eq!(Op::Concat.apply(1, 10), Some(110));
}

#[test]
fn test_zero_operands() {
    assert_eq!(solve("5: 10 0 5").unwrap(), 5);
    assert_eq!(solve("3: 7 0 3").unwrap(), 3);
    assert_eq!(solve("0: 5 0").unwrap(), 0);
    assert!(solvable(0, 5, &[0], &[Op::Add, Op::Mul]));
    assert!(!solvable(4, 5, &[1, 1], &[Op::Add, Op::Mul]));
    assert_eq!(bonus("50: 9 0 5 0").unwrap(), 50);
}
