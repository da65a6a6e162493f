use macroquad::rand;

/// Base tick interval at round start, in milliseconds.
pub const BASE_TICK_MS: u32 = 100;
/// The tick interval never drops below this.
pub const MIN_TICK_MS: u32 = 50;

const SPEED_STEP_MS: u32 = 5;
const SPEED_UP_EVERY: u32 = 5;

/// One square of the playing field, in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Travel direction of the snake. The game keeps an `Option<Direction>`;
/// `None` is the stationary state before the first key press of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid delta for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Process-wide toggles, flipped live from the settings panel keys.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub wall_pass: bool,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wall_pass: true,
            sound: true,
        }
    }
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The snake moved into an empty cell.
    Moved,
    /// The snake reached the food and grew by one segment.
    Ate,
    /// The snake hit a wall or itself; the round is over.
    Died,
}

/// Everything that resets between rounds. The best score lives outside,
/// with the run loop.
#[derive(Debug, Clone)]
pub struct Game {
    /// Body segments, head at index 0.
    pub snake: Vec<Cell>,
    pub heading: Option<Direction>,
    pub food: Cell,
    pub score: u32,
    /// Current tick interval; shrinks as the score climbs.
    pub tick_ms: u32,
    pub alive: bool,
    /// Cells per side of the square board.
    pub grid: i32,
}

impl Game {
    pub fn new(grid: i32) -> Self {
        let snake = vec![Cell::new(grid / 2, grid / 2)];
        let food = place_food(&snake, grid);
        Self {
            snake,
            heading: None,
            food,
            score: 0,
            tick_ms: BASE_TICK_MS,
            alive: true,
            grid,
        }
    }

    pub fn restart(&mut self) {
        *self = Game::new(self.grid);
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    /// Apply a direction key. A press that would reverse the current heading
    /// is dropped; anything else overwrites the heading immediately and takes
    /// effect on the next tick, latest press wins.
    pub fn steer(&mut self, requested: Direction) {
        match self.heading {
            Some(current) if requested == current.opposite() => {}
            _ => self.heading = Some(requested),
        }
    }

    /// Advance the round by one cell.
    pub fn advance(&mut self, wall_pass: bool) -> Step {
        let (dx, dy) = self.heading.map_or((0, 0), Direction::delta);
        let mut head = Cell::new(self.head().x + dx, self.head().y + dy);

        if wall_pass {
            head.x = head.x.rem_euclid(self.grid);
            head.y = head.y.rem_euclid(self.grid);
        }

        let off_board =
            head.x < 0 || head.x >= self.grid || head.y < 0 || head.y >= self.grid;
        // Self-collision is judged against the body as it stands, tail
        // included: the tail cell only vacates after a safe move.
        if (!wall_pass && off_board) || self.snake[1..].contains(&head) {
            self.alive = false;
            return Step::Died;
        }

        self.snake.insert(0, head);

        if head == self.food {
            self.score += 1;
            self.food = place_food(&self.snake, self.grid);
            if self.score % SPEED_UP_EVERY == 0 {
                self.tick_ms = (self.tick_ms - SPEED_STEP_MS).max(MIN_TICK_MS);
            }
            Step::Ate
        } else {
            self.snake.pop();
            Step::Moved
        }
    }
}

/// Pick a random cell that is not covered by the snake. Rejection sampling;
/// the snake covers a small fraction of the board in any reachable state, so
/// the loop settles quickly.
pub fn place_food(occupied: &[Cell], grid: i32) -> Cell {
    loop {
        let cell = Cell::new(rand::gen_range(0, grid), rand::gen_range(0, grid));
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}
