use anyhow::{Context, Result};
use aoc::time;
use cached::proc_macro::cached;
use fxhash::FxHashMap;

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±5ms
        println!("First part: {}", solve(&input, 25)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±30ms
        println!("Bonus: {}", bonus(&input, 75)?);
        Ok(())
    })
}

fn parse(input: &str) -> Result<Vec<u64>> {
    Ok(input
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()?)
}

fn split_digits(stone: u64) -> Option<(u64, u64)> {
    let digits = stone.checked_ilog10()? + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        Some((stone / half, stone % half))
    } else {
        None
    }
}

/// `None` once a stone no longer fits in a `u64`
fn blink(stone: u64) -> Option<(u64, Option<u64>)> {
    if stone == 0 {
        Some((1, None))
    } else if let Some((le, ri)) = split_digits(stone) {
        Some((le, Some(ri)))
    } else {
        Some((stone.checked_mul(2024)?, None))
    }
}

// straightforward simulation, stones are kept in order
fn solve(input: &str, blinks: usize) -> Result<usize> {
    let mut stones = parse(input)?;

    for _ in 0..blinks {
        let mut next = Vec::with_capacity(stones.len() * 2);
        for stone in stones {
            let (a, b) = blink(stone).with_context(|| format!("stone {stone} grew too large"))?;
            next.push(a);
            next.extend(b);
        }
        stones = next;
    }

    Ok(stones.len())
}

#[cached]
fn count(stone: u64, blinks: usize) -> Option<u64> {
    if blinks == 0 {
        return Some(1);
    }

    match blink(stone)? {
        (a, None) => count(a, blinks - 1),
        (a, Some(b)) => count(a, blinks - 1)?.checked_add(count(b, blinks - 1)?),
    }
}

fn bonus(input: &str, blinks: usize) -> Result<u64> {
    // the same numbers come up over and over, so tally duplicates first
    let mut tally: FxHashMap<u64, u64> = FxHashMap::default();
    for stone in parse(input)? {
        *tally.entry(stone).or_default() += 1;
    }

    tally
        .into_iter()
        .try_fold(0u64, |total, (stone, n)| {
            count(stone, blinks)
                .and_then(|c| c.checked_mul(n))
                .and_then(|c| c.checked_add(total))
                .with_context(|| format!("stones from {stone} grew too large"))
        })
}

#[test]
fn test() {
    assert_eq!(solve("125 17", 6).unwrap(), 22);
    assert_eq!(solve("125 17", 25).unwrap(), 55312);

    assert_eq!(bonus("125 17", 25).unwrap(), 55312);
    assert_eq!(bonus("125 17", 75).unwrap(), 65601038650482);
}

#[test]
fn test_blink() {
    assert_eq!(blink(0), Some((1, None)));
    assert_eq!(blink(1), Some((2024, None)));
    assert_eq!(blink(10), Some((1, Some(0))));
    assert_eq!(blink(99), Some((9, Some(9))));
    assert_eq!(blink(999), Some((2021976, None)));
    assert_eq!(blink(1000), Some((10, Some(0))));
}

#[test]
fn test_overflow() {
    // 19 digits, so it gets multiplied, and 2024 times that is past u64::MAX
    let huge = 1_000_000_000_000_000_000u64;
    assert_eq!(blink(huge), None);

    assert!(solve(&huge.to_string(), 1).is_err());
    assert!(bonus(&huge.to_string(), 1).is_err());
    assert_eq!(solve(&huge.to_string(), 0).unwrap(), 1);
}

#[test]
fn test_one_blink() {
    assert_eq!(solve("0 1 10 99 999", 1).unwrap(), 7);
}
