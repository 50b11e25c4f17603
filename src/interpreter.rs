//! Interpreter that converts an L-System symbol sequence into a [`PathTrace`].
//!
//! The entry point is [`PathInterpreter`]. Configure it with a
//! [`TraceConfig`], register symbol-to-command mappings via
//! [`PathInterpreter::set_command`] or [`PathInterpreter::with_commands`],
//! then call [`PathInterpreter::trace`] with an expanded symbol string.

use crate::path::{Bounds, PathTrace};
use crate::turtle::{TurtleCommand, TurtleState};
use std::collections::HashMap;

/// Configuration for path tracing.
#[derive(Clone, Debug)]
pub struct TraceConfig {
    /// Distance the pen advances per [`TurtleCommand::DrawForward`], in
    /// output units. Must be positive; a zero step collapses every draw onto
    /// the origin and a negative one mirrors the path.
    pub step_size: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { step_size: 10.0 }
    }
}

/// Interprets L-System output to trace a 2D polyline.
pub struct PathInterpreter {
    commands: HashMap<char, TurtleCommand>,
    config: TraceConfig,
}

impl PathInterpreter {
    /// Creates a new interpreter with the given configuration and an empty
    /// symbol map.
    ///
    /// Register commands with [`set_command`](Self::set_command) or
    /// [`with_commands`](Self::with_commands) before calling
    /// [`trace`](Self::trace).
    pub fn new(config: TraceConfig) -> Self {
        Self {
            commands: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-command map in one step (builder pattern).
    pub fn with_commands(mut self, commands: HashMap<char, TurtleCommand>) -> Self {
        self.commands = commands;
        self
    }

    /// Binds a single symbol to a drawing command.
    pub fn set_command(&mut self, symbol: char, command: TurtleCommand) {
        self.commands.insert(symbol, command);
    }

    /// Walks every symbol of `symbols` in order and returns the traced path.
    ///
    /// The turtle starts at the origin facing +x. Symbols with no registered
    /// command are silently skipped — rewrite-only helper symbols are
    /// expected, not an error. [`TurtleCommand::Turn`] adjusts the heading
    /// without emitting a point; the heading persists across symbols until
    /// the next turn. Single pass, O(symbols) time, O(1) state beyond the
    /// accumulating point list.
    pub fn trace(&self, symbols: &str) -> PathTrace {
        let mut turtle = TurtleState::default();
        let mut points = vec![turtle.position];
        let mut bounds = Bounds::at(turtle.position);

        for symbol in symbols.chars() {
            let Some(command) = self.commands.get(&symbol) else {
                continue;
            };
            match command {
                TurtleCommand::DrawForward => {
                    turtle.advance(self.config.step_size);
                    points.push(turtle.position);
                    bounds.expand(turtle.position);
                }
                TurtleCommand::Turn(degrees) => turtle.rotate(degrees.to_radians()),
            }
        }

        PathTrace { points, bounds }
    }
}
