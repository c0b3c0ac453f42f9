use std::fmt;

/// One of the four cardinal directions a cell can have a wall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in the fixed order used by generators and solvers.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Slot of this direction in a cell's wall array.
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit offset `(dx, dy)`, with y growing downwards.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Step one cell from `coord` in this direction.
    /// Returns `None` when the step would leave a `width` x `height` grid.
    pub fn step(self, coord: (u8, u8), width: u8, height: u8) -> Option<(u8, u8)> {
        let (x, y) = coord;
        let next = match self {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::South => (x, y.checked_add(1)?),
            Direction::East => (x.checked_add(1)?, y),
            Direction::West => (x.checked_sub(1)?, y),
        };
        (next.0 < width && next.1 < height).then_some(next)
    }

    /// Direction leading from `from` to the adjacent cell `to`, if they are adjacent.
    pub fn between(from: (u8, u8), to: (u8, u8)) -> Option<Direction> {
        Direction::ALL.into_iter().find(|dir| {
            let (dx, dy) = dir.offset();
            from.0 as i16 + dx as i16 == to.0 as i16 && from.1 as i16 + dy as i16 == to.1 as i16
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "N"),
            Direction::South => write!(f, "S"),
            Direction::East => write!(f, "E"),
            Direction::West => write!(f, "W"),
        }
    }
}

/// A single maze cell: its coordinates and the four wall flags around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    x: u8,
    y: u8,
    /// Wall flags indexed by [`Direction::index`]. `true` means the wall is present.
    walls: [bool; 4],
}

impl Cell {
    /// A fully walled cell at `(x, y)`.
    pub const fn new(x: u8, y: u8) -> Self {
        Cell {
            x,
            y,
            walls: [true; 4],
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn coord(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        self.walls[direction.index()] = false;
    }

    /// Number of cleared walls around this cell.
    pub fn open_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }

    /// A dead end has exactly one way out.
    pub fn is_dead_end(&self) -> bool {
        self.open_count() == 1
    }
}
