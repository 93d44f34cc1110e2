use std::fmt;

use thiserror::Error;

/// `(x, y)`, with `y` growing downwards.
pub type Pos = (i64, i64);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} is {found} wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected {c:?} at ({x}, {y})")]
    UnexpectedChar { c: char, x: usize, y: usize },
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

use Dir::*;

impl Dir {
    pub const ALL: [Dir; 4] = [Up, Right, Down, Left];

    pub fn from_arrow(c: char) -> Option<Dir> {
        match c {
            '^' => Some(Up),
            '>' => Some(Right),
            'v' => Some(Down),
            '<' => Some(Left),
            _ => None,
        }
    }

    pub fn delta(self) -> Pos {
        match self {
            Up => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }

    pub fn step(self, (x, y): Pos) -> Pos {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }

    pub fn turn_right(self) -> Dir {
        match self {
            Up => Right,
            Right => Down,
            Down => Left,
            Left => Up,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Up | Down)
    }
}

/// A rectangular grid, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
    width: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Grid {
            rows: vec![vec![fill; width]; height],
            width,
        }
    }
}

impl Grid<char> {
    pub fn from_chars(input: &str) -> Result<Self, GridError> {
        Grid::parse(input, Some)
    }
}

impl<T> Grid<T> {
    /// Parses one row per (non-empty, trimmed) line, one cell per char.
    pub fn parse<F>(input: &str, mut cell: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let mut rows = vec![];

        for (y, line) in input.trim().lines().map(str::trim_end).enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, c)| cell(c).ok_or(GridError::UnexpectedChar { c, x, y }))
                .collect::<Result<Vec<_>, _>>()?;

            rows.push(row);
        }

        let width = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        if width == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: r.len(),
            });
        }

        Ok(Grid { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn in_bounds(&self, (x, y): Pos) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.rows.len()
    }

    pub fn get(&self, p: Pos) -> Option<&T> {
        self.in_bounds(p)
            .then(|| &self.rows[p.1 as usize][p.0 as usize])
    }

    pub fn get_mut(&mut self, p: Pos) -> Option<&mut T> {
        if self.in_bounds(p) {
            Some(&mut self.rows[p.1 as usize][p.0 as usize])
        } else {
            None
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (w, h) = (self.width as i64, self.rows.len() as i64);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, c)| ((x as i64, y as i64), c))
        })
    }

    pub fn find<P>(&self, mut pred: P) -> Option<Pos>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find_map(|(p, c)| pred(c).then_some(p))
    }

    /// In-bounds orthogonal neighbours.
    pub fn neighbors(&self, p: Pos) -> impl Iterator<Item = Pos> + '_ {
        Dir::ALL
            .into_iter()
            .map(move |dir| dir.step(p))
            .filter(|&n| self.in_bounds(n))
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_access() {
        let grid = Grid::from_chars(
            "
ab.
.cd
",
        )
        .unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get((1, 1)), Some(&'c'));
        assert_eq!(grid.get((3, 0)), None);
        assert_eq!(grid.get((0, -1)), None);
        assert_eq!(grid.find(|&c| c == 'd'), Some((2, 1)));
        assert_eq!(grid.to_string(), "ab.\n.cd\n");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Grid::from_chars("\n\n"), Err(GridError::Empty));

        assert_eq!(
            Grid::from_chars("abc\nab"),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );

        assert_eq!(
            Grid::parse("12\n3x", |c| c.to_digit(10)),
            Err(GridError::UnexpectedChar { c: 'x', x: 1, y: 1 })
        );
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid = Grid::new(3, 3, 0u8);

        assert_eq!(grid.neighbors((0, 0)).count(), 2);
        assert_eq!(grid.neighbors((1, 0)).count(), 3);
        assert_eq!(grid.neighbors((1, 1)).count(), 4);
        assert_eq!(grid.positions().count(), 9);
    }

    #[test]
    fn dirs() {
        assert_eq!(Dir::from_arrow('v'), Some(Down));
        assert_eq!(Dir::from_arrow('x'), None);
        assert_eq!(Up.step((2, 2)), (2, 1));
        assert_eq!(Left.turn_right(), Up);
        assert!(Down.is_vertical());
        assert!(!Right.is_vertical());
    }
}
