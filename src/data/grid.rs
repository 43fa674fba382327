use crate::constants::{GRID_HEIGHT, GRID_WIDTH, PAINT_RADIUS, TILE_SIZE};
use crate::types::{Actor, GridSnapshot, Team};

/// Fixed-size tile ownership store, flattened row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Team>,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cells: vec![Team::Neutral; GRID_WIDTH * GRID_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Team] {
        &self.cells
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Team> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, team: Team) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = team;
                true
            }
            None => false,
        }
    }

    /// Tile an actor occupies, from its top-left corner.
    pub fn tile_of(actor: &Actor) -> (i32, i32) {
        (
            (actor.position_x / TILE_SIZE).floor() as i32,
            (actor.position_y / TILE_SIZE).floor() as i32,
        )
    }

    /// Stamps the actor's team over the 3x3 block around its tile.
    /// Offsets falling off the grid are skipped.
    pub fn paint(&mut self, actor: &Actor) {
        let (grid_x, grid_y) = Self::tile_of(actor);
        for dy in -PAINT_RADIUS..=PAINT_RADIUS {
            for dx in -PAINT_RADIUS..=PAINT_RADIUS {
                self.set(grid_x + dx, grid_y + dy, actor.team);
            }
        }
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            tags: self.tags().collect(),
        }
    }

    pub fn tags(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().map(|&team| u8::from(team))
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
