//! The built-in curve definitions.
//!
//! Each curve is a pure factory returning an immutable [`LSystem`] value;
//! selection happens by [`Curve`] key at the boundary layer. No registry
//! machinery beyond a plain enum is needed.

use crate::errors::UnknownCurve;
use crate::grammar::LSystem;
use crate::turtle::TurtleCommand;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Keys for the built-in curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curve {
    Koch,
    LeviC,
    Dragon,
}

impl Curve {
    pub const ALL: [Curve; 3] = [Curve::Koch, Curve::LeviC, Curve::Dragon];

    /// The name this curve is selected by on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Curve::Koch => "koch",
            Curve::LeviC => "levic",
            Curve::Dragon => "dragon",
        }
    }

    /// Returns the full definition for this curve.
    pub fn definition(self) -> LSystem {
        match self {
            Curve::Koch => koch_curve(),
            Curve::LeviC => levi_c_curve(),
            Curve::Dragon => dragon_curve(),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = UnknownCurve;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Curve::ALL
            .into_iter()
            .find(|curve| curve.name() == s)
            .ok_or_else(|| UnknownCurve(s.to_owned()))
    }
}

/// Koch curve: every segment grows a right-angle bump.
pub fn koch_curve() -> LSystem {
    LSystem {
        variables: vec!['F'],
        constants: vec!['+', '-'],
        axiom: "F".to_owned(),
        rules: HashMap::from([('F', "F+F-F-F+F".to_owned())]),
        commands: HashMap::from([
            ('F', TurtleCommand::DrawForward),
            ('+', TurtleCommand::Turn(90.0)),
            ('-', TurtleCommand::Turn(-90.0)),
        ]),
    }
}

/// Dragon curve. `X` and `Y` only steer the rewriting and are never drawn.
pub fn dragon_curve() -> LSystem {
    LSystem {
        variables: vec!['X', 'Y'],
        constants: vec!['F', '+', '-'],
        axiom: "FX".to_owned(),
        rules: HashMap::from([
            ('X', "X+YF+".to_owned()),
            ('Y', "-FX-Y".to_owned()),
        ]),
        commands: HashMap::from([
            ('F', TurtleCommand::DrawForward),
            ('+', TurtleCommand::Turn(90.0)),
            ('-', TurtleCommand::Turn(-90.0)),
        ]),
    }
}

/// Lévy C curve: 45° kinks instead of the Koch square bump.
pub fn levi_c_curve() -> LSystem {
    LSystem {
        variables: vec!['F'],
        constants: vec!['+', '-'],
        axiom: "F".to_owned(),
        rules: HashMap::from([('F', "+F--F+".to_owned())]),
        commands: HashMap::from([
            ('F', TurtleCommand::DrawForward),
            ('+', TurtleCommand::Turn(45.0)),
            ('-', TurtleCommand::Turn(-45.0)),
        ]),
    }
}
