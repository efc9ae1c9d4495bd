//! Toroidal multi-occupancy grid.
//!
//! Cells hold unordered occupant lists. Placement accepts any in-bounds
//! position; coordinates only wrap when derived through [`Grid::wrap`]
//! or [`Grid::neighbors`]. Misuse (out-of-bounds placement, removing an
//! absent occupant) is surfaced as an error rather than tolerated.

use crate::components::Position;
use crate::error::GridError;
use hecs::Entity;

pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Vec<Entity>>,
}

impl Grid {
    /// Panics on zero dimensions; run configs are validated before this.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Vec::new(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GridError> {
        if pos.x >= self.width || pos.y >= self.height {
            return Err(GridError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Normalize raw coordinates onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> Position {
        Position {
            x: x.rem_euclid(self.width as i64) as u32,
            y: y.rem_euclid(self.height as i64) as u32,
        }
    }

    /// Insert an occupant; multi-occupancy is allowed, so this only
    /// fails on an out-of-bounds position.
    pub fn place(&mut self, agent: Entity, pos: Position) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        let idx = self.index(pos);
        self.cells[idx].push(agent);
        Ok(())
    }

    /// Delete one occurrence of an occupant. A double remove is a logic
    /// error and reported, never silently absorbed.
    pub fn remove(&mut self, agent: Entity, pos: Position) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        let idx = self.index(pos);
        match self.cells[idx].iter().position(|&e| e == agent) {
            Some(slot) => {
                self.cells[idx].swap_remove(slot);
                Ok(())
            }
            None => Err(GridError::NotInCell { x: pos.x, y: pos.y }),
        }
    }

    /// Remove + place; the destination is checked first so a failure
    /// leaves the grid unchanged.
    pub fn move_agent(&mut self, agent: Entity, from: Position, to: Position) -> Result<(), GridError> {
        self.check_bounds(to)?;
        self.remove(agent, from)?;
        self.place(agent, to)
    }

    /// The four orthogonal neighbors, torus-wrapped, in fixed order:
    /// up, left, right, down; `include_center` appends `pos` last.
    pub fn neighbors(&self, pos: Position, include_center: bool) -> Vec<Position> {
        let (x, y) = (pos.x as i64, pos.y as i64);
        let mut cells = vec![
            self.wrap(x, y - 1),
            self.wrap(x - 1, y),
            self.wrap(x + 1, y),
            self.wrap(x, y + 1),
        ];
        if include_center {
            cells.push(pos);
        }
        cells
    }

    /// Occupants of a cell, possibly empty.
    pub fn contents(&self, pos: Position) -> &[Entity] {
        assert!(
            pos.x < self.width && pos.y < self.height,
            "cell ({}, {}) outside {}x{} grid",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        &self.cells[self.index(pos)]
    }
}
