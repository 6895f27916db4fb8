//! Common test fixtures: the 3×2 grid world used across the test suite.
//!
//! Six states addressed as (row, column) on a 3-row by 2-column grid.
//! (0, 0) is the finish line (reward 0), (1, 1) is a danger zone
//! (reward −99), every other state pays −1. Moves that would leave the
//! grid keep the mover in place. Episodes start at (2, 1).

// Each integration-test binary compiles its own copy of this module and
// uses a different slice of it.
#![allow(dead_code)]

use std::cell::Cell;

use tabular_rl::ports::{Environment, Model, Task};

pub type Pos = (i8, i8);

pub const UP: char = '^';
pub const DOWN: char = 'v';
pub const LEFT: char = '<';
pub const RIGHT: char = '>';

pub const START: Pos = (2, 1);
pub const GOAL: Pos = (0, 0);
pub const DANGER: Pos = (1, 1);

pub fn grid_states() -> Vec<Pos> {
    vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
}

pub fn grid_actions() -> Vec<char> {
    vec![UP, DOWN, RIGHT, LEFT]
}

pub fn grid_reward(state: &Pos) -> f64 {
    if *state == GOAL {
        0.0
    } else if *state == DANGER {
        -99.0
    } else {
        -1.0
    }
}

/// Where `action` leads from `state`, staying put on out-of-bounds moves.
pub fn grid_move(state: &Pos, action: &char) -> Pos {
    let (row, column) = *state;
    let target = match *action {
        UP => (row - 1, column),
        DOWN => (row + 1, column),
        LEFT => (row, column - 1),
        _ => (row, column + 1),
    };
    let in_bounds = (0..=2).contains(&target.0) && (0..=1).contains(&target.1);
    if in_bounds { target } else { *state }
}

/// The grid as a known model for the DP solvers.
pub struct GridModel;

impl Model for GridModel {
    type State = Pos;
    type Action = char;

    fn states(&self) -> Vec<Pos> {
        grid_states()
    }

    fn reward(&self, state: &Pos) -> f64 {
        grid_reward(state)
    }

    fn legal_actions(&self, _state: &Pos) -> Vec<char> {
        grid_actions()
    }

    fn transitions(&self, state: &Pos, action: &char) -> Vec<(f64, Pos)> {
        vec![(1.0, grid_move(state, action))]
    }
}

/// The grid as a stateful environment for the TD learner.
pub struct GridEnvironment {
    position: Pos,
}

impl GridEnvironment {
    pub fn new() -> Self {
        Self { position: START }
    }
}

impl Environment for GridEnvironment {
    type State = Pos;
    type Action = char;

    fn reset(&mut self) {
        self.position = START;
    }

    fn current_state(&self) -> Pos {
        self.position
    }

    fn apply(&mut self, action: &char) {
        self.position = grid_move(&self.position, action);
    }
}

/// Domain knowledge for the TD learner, with a goal-completion counter so
/// tests can check the episode budget exactly.
pub struct GridTask {
    pub goal_completions: Cell<usize>,
}

impl GridTask {
    pub fn new() -> Self {
        Self {
            goal_completions: Cell::new(0),
        }
    }
}

impl Task for GridTask {
    type State = Pos;
    type Action = char;

    fn legal_actions(&self, _state: &Pos) -> Vec<char> {
        grid_actions()
    }

    fn reward(&self, state: &Pos) -> f64 {
        grid_reward(state)
    }

    fn reached_goal(&self, state: &Pos) -> bool {
        let reached = *state == GOAL;
        if reached {
            self.goal_completions.set(self.goal_completions.get() + 1);
        }
        reached
    }
}
