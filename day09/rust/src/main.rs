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
        // ±60ms
        println!("Bonus: {}", bonus(&input)?);
        Ok(())
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    pos: usize,
    len: usize,
}

#[derive(Debug, Default)]
struct Disk {
    files: Vec<Span>, // indexed by file id
    free: Vec<Span>,
}

fn parse(input: &str) -> Result<Disk> {
    let mut disk = Disk::default();
    let mut pos = 0;

    for (i, c) in input.trim().chars().enumerate() {
        let len = c
            .to_digit(10)
            .with_context(|| format!("not a digit: {c:?}"))? as usize;

        if i % 2 == 0 {
            disk.files.push(Span { pos, len });
        } else if len > 0 {
            disk.free.push(Span { pos, len });
        }

        pos += len;
    }

    Ok(disk)
}

fn expand(disk: &Disk) -> Vec<Option<usize>> {
    let size = disk
        .files
        .iter()
        .chain(&disk.free)
        .map(|s| s.pos + s.len)
        .max()
        .unwrap_or(0);

    let mut blocks = vec![None; size];
    for (id, file) in disk.files.iter().enumerate() {
        blocks[file.pos..(file.pos + file.len)].fill(Some(id));
    }
    blocks
}

fn solve(input: &str) -> Result<usize> {
    let mut blocks = expand(&parse(input)?);

    if blocks.is_empty() {
        return Ok(0);
    }

    let (mut i, mut j) = (0, blocks.len() - 1);
    while i < j {
        if blocks[i].is_some() {
            i += 1;
        } else if blocks[j].is_none() {
            j -= 1;
        } else {
            blocks.swap(i, j);
        }
    }

    Ok(blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, id)| id.map(|id| pos * id))
        .sum())
}

fn bonus(input: &str) -> Result<usize> {
    let mut disk = parse(input)?;

    for file in disk.files.iter_mut().rev() {
        let Some(space) = disk
            .free
            .iter_mut()
            .take_while(|space| space.pos < file.pos)
            .find(|space| space.len >= file.len)
        else {
            continue;
        };

        // the vacated span lies right of every file still to be moved, so it is never reused
        file.pos = space.pos;
        space.pos += file.len;
        space.len -= file.len;
    }

    Ok(disk
        .files
        .iter()
        .enumerate()
        .map(|(id, file)| (file.pos..(file.pos + file.len)).sum::<usize>() * id)
        .sum())
}

#[test]
fn test() {
    assert_eq!(solve("2333133121414131402").unwrap(), 1928);
    assert_eq!(bonus("2333133121414131402").unwrap(), 2858);
}

#[test]
fn test_tiny() {
    // 0..111....22222 -> 022111222......
    assert_eq!(solve("12345").unwrap(), 60);

    // nothing fits anywhere
    assert_eq!(bonus("12345").unwrap(), 132);

    assert!(solve("12a").is_err());
}
