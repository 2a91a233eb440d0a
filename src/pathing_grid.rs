use core::fmt;
use core::str::FromStr;
use grid_util::grid::ValueGrid;
use grid_util::BoolGrid;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::{Result, SearchError};
use crate::N_SMALLVEC_SIZE;

/// Row and column offsets in the order neighbours are enumerated: North, East, South, West.
/// Every tie between equally eligible cells is resolved by this order.
const NEUMANN_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// [PathingGrid] stores the wall layout of a fixed-size rectangular grid in a [BoolGrid], where
/// [true] marks a wall, and maintains connected components of the open cells using a
/// [UnionFind] structure. Rows map to the y axis and columns to the x axis of the underlying grid.
///
/// The shape is fixed at construction. Searches never mutate the grid; they derive their own
/// [SearchState](crate::state::SearchState) from it.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Creates a grid of `rows` x `cols` open cells.
    pub fn new(rows: usize, cols: usize) -> Result<PathingGrid> {
        check_dimensions(rows, cols)?;
        Ok(PathingGrid::from_bool_grid(BoolGrid::new(cols, rows, false)))
    }

    /// Builds a grid from row slices where [true] marks a wall. Every row must have the same
    /// non-zero length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<PathingGrid> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((ix, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(SearchError::invalid_grid(format!(
                "row {ix} has {} columns, expected {cols}",
                row.len()
            )));
        }
        check_dimensions(rows.len(), cols)?;
        let mut grid = BoolGrid::new(cols, rows.len(), false);
        for (r, row) in rows.iter().enumerate() {
            for (c, &wall) in row.iter().enumerate() {
                grid.set(c as i32, r as i32, wall);
            }
        }
        Ok(PathingGrid::from_bool_grid(grid))
    }

    fn from_bool_grid(grid: BoolGrid) -> PathingGrid {
        let mut pathing_grid = PathingGrid {
            components: UnionFind::new(grid.width() * grid.height()),
            grid,
            components_dirty: false,
        };
        pathing_grid.generate_components();
        pathing_grid
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }

    pub fn cols(&self) -> usize {
        self.grid.width()
    }

    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// Whether the cell is a wall. Out-of-bounds cells count as walls.
    pub fn is_wall(&self, cell: Cell) -> bool {
        !self.in_bounds(cell) || self.grid.get(cell.col as i32, cell.row as i32)
    }

    /// Flat row-major index of an in-bounds cell.
    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        cell.row * self.cols() + cell.col
    }

    /// Inverse of [index](Self::index).
    pub fn cell_at(&self, ix: usize) -> Cell {
        Cell::new(ix / self.cols(), ix % self.cols())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols()).map(move |col| Cell::new(row, col)))
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells().filter(|&c| !self.is_wall(c)).count()
    }

    /// In-bounds orthogonal neighbours of `cell` in North, East, South, West order. Walls are
    /// included; callers decide whether to skip them.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = cell.row.checked_add_signed(dr)?;
                let col = cell.col.checked_add_signed(dc)?;
                Some(Cell::new(row, col))
            })
            .filter(|&n| self.in_bounds(n))
            .collect()
    }

    /// Like [neighbours](Self::neighbours) but without walls.
    pub fn open_neighbours(&self, cell: Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        self.neighbours(cell)
            .into_iter()
            .filter(|&n| !self.is_wall(n))
            .collect()
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// they are (potentially) broken apart into multiple. Returns [false] for an
    /// out-of-bounds cell, which is left alone.
    pub fn set_wall(&mut self, cell: Cell, wall: bool) -> bool {
        if !self.in_bounds(cell) {
            warn!("Ignoring wall update for out-of-bounds cell {cell}");
            return false;
        }
        if wall {
            if !self.is_wall(cell) {
                self.components_dirty = true;
            }
        } else {
            let ix = self.index(cell);
            for n in self.open_neighbours(cell) {
                self.components.union(ix, self.index(n));
            }
        }
        self.grid.set(cell.col as i32, cell.row as i32, wall);
        true
    }

    /// Turns every cell into an open cell.
    pub fn clear_walls(&mut self) {
        for cell in self.cells().collect::<Vec<_>>() {
            self.grid.set(cell.col as i32, cell.row as i32, false);
        }
        self.generate_components();
    }

    /// Walls off every cell on the [Bresenham line](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
    /// from `from` to `to`, both inclusive, so that a fast drag still draws a connected stroke.
    /// Cells listed in `protected` (typically the start and end markers) are left untouched.
    pub fn set_walls_between(&mut self, from: Cell, to: Cell, protected: &[Cell]) {
        for cell in line_between(from, to) {
            if !protected.contains(&cell) {
                self.set_wall(cell, true);
            }
        }
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: Cell) -> usize {
        self.components.find(self.index(cell))
    }

    /// Checks if two open cells are on the same component. Call [update](Self::update) first if
    /// walls were added since the components were generated.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        if self.is_wall(start) || self.is_wall(goal) {
            return false;
        }
        self.components
            .equiv(self.index(start), self.index(goal))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up orthogonally adjacent open cells.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.rows(),
            self.cols()
        );
        self.components = UnionFind::new(self.len());
        self.components_dirty = false;
        for cell in self.cells().collect::<Vec<_>>() {
            if self.is_wall(cell) {
                continue;
            }
            let ix = self.index(cell);
            // South and east suffice; the other two directions are covered from the other side.
            for n in [Cell::new(cell.row + 1, cell.col), Cell::new(cell.row, cell.col + 1)] {
                if !self.is_wall(n) {
                    self.components.union(ix, self.index(n));
                }
            }
        }
    }
}

/// Both dimensions must be non-zero and addressable by [grid_util]'s `i32` coordinates, and the
/// cell count must fit in a [usize].
fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(SearchError::invalid_grid(format!(
            "dimensions must be non-zero, got {rows}x{cols}"
        )));
    }
    let max = i32::MAX as usize;
    if rows > max || cols > max || rows.checked_mul(cols).is_none() {
        return Err(SearchError::invalid_grid(format!(
            "dimensions {rows}x{cols} are too large"
        )));
    }
    Ok(())
}

/// Cells on the Bresenham line between two cells, endpoints included.
fn line_between(from: Cell, to: Cell) -> Vec<Cell> {
    let (r1, c1) = (to.row as i64, to.col as i64);
    let (mut r, mut c) = (from.row as i64, from.col as i64);
    let dc = (c1 - c).abs();
    let dr = (r1 - r).abs();
    let sc = if c < c1 { 1 } else { -1 };
    let sr = if r < r1 { 1 } else { -1 };
    let mut err = dc - dr;
    let mut cells = Vec::with_capacity((dc.max(dr) + 1) as usize);
    loop {
        cells.push(Cell::new(r as usize, c as usize));
        if r == r1 && c == c1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dr {
            err -= dr;
            c += sc;
        }
        if e2 < dc {
            err += dc;
            r += sr;
        }
    }
    cells
}

/// Parses one line per row, `#` for a wall and `.` for an open cell. `S` and `E` are accepted
/// as open cells so that fixtures can mark their endpoints.
impl FromStr for PathingGrid {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<PathingGrid> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(r, line)| {
                line.chars()
                    .map(|ch| match ch {
                        '#' => Ok(true),
                        '.' | 'S' | 'E' => Ok(false),
                        other => Err(SearchError::invalid_grid(format!(
                            "unexpected character {other:?} in row {r}"
                        ))),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        PathingGrid::from_rows(&rows)
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let line = (0..self.cols())
                .map(|col| if self.is_wall(Cell::new(row, col)) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
