use crate::models::{Difficulty, Operator, Problem};
use rand::Rng;

/// Rounds to two decimal places. Applied to division solutions and to parsed
/// answers so both sides of the comparison go through the same rounding.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn generate_problem(tier: Difficulty) -> Problem {
    generate_problem_with(tier, &mut rand::thread_rng())
}

pub fn generate_problem_with<R: Rng + ?Sized>(tier: Difficulty, rng: &mut R) -> Problem {
    let max = tier.max_operand();
    let operand_a = rng.gen_range(1..=max);
    let operand_b = rng.gen_range(1..=max);

    let operator = match tier {
        Difficulty::Easy => Operator::Add,
        Difficulty::Medium => {
            if rng.gen_bool(0.5) {
                Operator::Add
            } else {
                Operator::Subtract
            }
        }
        Difficulty::Hard => {
            if rng.gen_bool(0.5) {
                Operator::Multiply
            } else {
                Operator::Divide
            }
        }
    };

    Problem {
        operand_a,
        operand_b,
        operator,
        solution: solve(operand_a, operand_b, operator),
    }
}

fn solve(a: i64, b: i64, operator: Operator) -> f64 {
    match operator {
        Operator::Add => (a + b) as f64,
        Operator::Subtract => (a - b) as f64,
        Operator::Multiply => (a * b) as f64,
        // b is never zero: operands start at 1
        Operator::Divide => round_to_cents(a as f64 / b as f64),
    }
}
