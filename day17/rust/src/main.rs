use anyhow::{bail, Context, Result};
use aoc::time;
use itertools::Itertools;
use regex::Regex;
use thiserror::Error;

fn main() -> Result<()> {
    let input = aoc::setup(env!("CARGO_MANIFEST_DIR"))?;

    time(|| -> Result<()> {
        // ±20µs
        println!("First part: {}", solve(&input)?);
        Ok(())
    })?;

    time(|| -> Result<()> {
        // ±1ms
        println!("Bonus: {}", bonus(&input)?);
        Ok(())
    })
}

const MAX_STEPS: usize = 1_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
enum VmError {
    #[error("invalid combo operand {0}")]
    InvalidComboOperand(u8),
    #[error("unknown opcode {0}")]
    UnknownOpcode(u8),
    #[error("program did not halt")]
    StepLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instr {
    Adv,
    Bxl,
    Bst,
    Jnz,
    Bxc,
    Out,
    Bdv,
    Cdv,
}

use Instr::*;

impl TryFrom<u8> for Instr {
    type Error = VmError;

    fn try_from(opcode: u8) -> Result<Self, Self::Error> {
        Ok(match opcode {
            0 => Adv,
            1 => Bxl,
            2 => Bst,
            3 => Jnz,
            4 => Bxc,
            5 => Out,
            6 => Bdv,
            7 => Cdv,
            _ => return Err(VmError::UnknownOpcode(opcode)),
        })
    }
}

/// `a / 2^n`, which is just `0` once `n` gets large enough
fn dv(a: u64, n: u64) -> u64 {
    u32::try_from(n)
        .ok()
        .and_then(|n| a.checked_shr(n))
        .unwrap_or(0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Machine {
    a: u64,
    b: u64,
    c: u64,
    ip: usize,
    out: Vec<u8>,
}

impl Machine {
    fn new(a: u64, b: u64, c: u64) -> Machine {
        Machine {
            a,
            b,
            c,
            ..Default::default()
        }
    }

    fn combo(&self, operand: u8) -> Result<u64, VmError> {
        match operand {
            0..=3 => Ok(operand as u64),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(VmError::InvalidComboOperand(operand)),
        }
    }

    /// Executes one instruction; returns `false` once halted.
    fn step(&mut self, program: &[u8]) -> Result<bool, VmError> {
        let (Some(&opcode), Some(&operand)) = (program.get(self.ip), program.get(self.ip + 1))
        else {
            return Ok(false);
        };

        match Instr::try_from(opcode)? {
            Adv => self.a = dv(self.a, self.combo(operand)?),
            Bxl => self.b ^= operand as u64,
            Bst => self.b = self.combo(operand)? % 8,
            Jnz if self.a != 0 => {
                self.ip = operand as usize;
                return Ok(true);
            }
            Jnz => {}
            Bxc => self.b ^= self.c,
            Out => self.out.push((self.combo(operand)? % 8) as u8),
            Bdv => self.b = dv(self.a, self.combo(operand)?),
            Cdv => self.c = dv(self.a, self.combo(operand)?),
        }

        self.ip += 2;
        Ok(true)
    }

    fn run(&mut self, program: &[u8]) -> Result<&[u8], VmError> {
        for _ in 0..MAX_STEPS {
            if !self.step(program)? {
                return Ok(&self.out);
            }
        }

        Err(VmError::StepLimit)
    }
}

fn parse(input: &str) -> Result<(Machine, Vec<u8>)> {
    let re = Regex::new(
        r"Register A: (\d+)\s+Register B: (\d+)\s+Register C: (\d+)\s+Program: ([0-7](?:,[0-7])*)",
    )?;

    let c = re.captures(input).context("malformed program listing")?;

    let machine = Machine::new(c[1].parse()?, c[2].parse()?, c[3].parse()?);
    let program = c[4]
        .split(',')
        .map(str::parse)
        .collect::<Result<_, _>>()?;

    Ok((machine, program))
}

fn solve(input: &str) -> Result<String> {
    let (mut machine, program) = parse(input)?;

    Ok(machine.run(&program)?.iter().join(","))
}

// Programs of this kind consume A three bits per output, starting from the
// lowest. So the last output only depends on the highest three bits, and we
// can build A up from the top, matching an ever longer tail of the program.
fn bonus(input: &str) -> Result<u64> {
    let (machine, program) = parse(input)?;

    let mut prefixes = vec![0];

    for len in 1..=program.len() {
        let target = &program[(program.len() - len)..];
        let mut next = vec![];

        for prefix in prefixes {
            for bits in 0..8 {
                let a = prefix * 8 + bits;
                let mut m = Machine::new(a, machine.b, machine.c);
                if m.run(&program)? == target {
                    next.push(a);
                }
            }
        }

        log::debug!("{len} of {} matched: {next:?}", program.len());

        if next.is_empty() {
            bail!("no value of A makes the program output its last {len} values");
        }

        prefixes = next;
    }

    prefixes
        .into_iter()
        .min()
        .context("the program is empty")
}

#[test]
fn test() {
    let example_input = "
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";

    assert_eq!(solve(example_input).unwrap(), "4,6,3,5,6,3,5,2,1,0");

    let example_input = "
Register A: 2024
Register B: 0
Register C: 0

Program: 0,3,5,4,3,0
";

    assert_eq!(bonus(example_input).unwrap(), 117440);
}

#[test]
fn test_instructions() {
    let mut m = Machine::new(0, 0, 9);
    m.run(&[2, 6]).unwrap();
    assert_eq!(m.b, 1);

    let mut m = Machine::new(10, 0, 0);
    assert_eq!(m.run(&[5, 0, 5, 1, 5, 4]).unwrap(), &[0u8, 1, 2]);

    let mut m = Machine::new(2024, 0, 0);
    assert_eq!(
        m.run(&[0, 1, 5, 4, 3, 0]).unwrap(),
        &[4u8, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]
    );
    assert_eq!(m.a, 0);

    let mut m = Machine::new(0, 29, 0);
    m.run(&[1, 7]).unwrap();
    assert_eq!(m.b, 26);

    let mut m = Machine::new(0, 2024, 43690);
    m.run(&[4, 0]).unwrap();
    assert_eq!(m.b, 44354);
}

#[test]
fn test_errors() {
    let mut m = Machine::new(1, 0, 0);
    assert_eq!(m.run(&[2, 7]), Err(VmError::InvalidComboOperand(7)));

    // jnz to itself, forever
    let mut m = Machine::new(1, 0, 0);
    assert_eq!(m.run(&[3, 0]), Err(VmError::StepLimit));

    // a dangling opcode halts
    let mut m = Machine::new(1, 0, 0);
    assert_eq!(m.run(&[1, 3, 5]).unwrap(), &[] as &[u8]);
    assert_eq!(m.b, 3);

    assert_eq!(dv(u64::MAX, 64), 0);
    assert_eq!(dv(1 << 40, 40), 1);
}
