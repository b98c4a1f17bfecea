//! Recommendation engine: a pure function over an in-memory snapshot of
//! the program catalog. No store access, no mutation.

use crate::types::db::program;
use crate::types::db::InterestLevel;

/// A student's stated preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationInput {
    pub min_acceptable_salary: f64,
    pub previous_gpa: f64,
    pub student_interest: InterestLevel,
}

/// A program that survived the filter, with the derived effort estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub program: program::Model,
    /// Suggested extra study hours per day to close the gap to the
    /// post-degree GPA the industry expects.
    pub suggested_extra_study_hours: f64,
}

/// Filter and score a snapshot of programs against student preferences.
///
/// A program is kept when all three hold:
/// 1. its advertised industry salary meets the student's minimum,
/// 2. the student's previous GPA meets the program's entry requirement,
/// 3. the student's analytical interest rank meets the program's
///    required rank.
///
/// Output order preserves the snapshot order; an empty result means "no
/// matches", not a failure.
pub fn recommend(programs: Vec<program::Model>, input: &RecommendationInput) -> Vec<Recommendation> {
    programs
        .into_iter()
        .filter(|p| p.min_salary >= input.min_acceptable_salary)
        .filter(|p| input.previous_gpa >= p.min_previous_gpa)
        .filter(|p| input.student_interest.rank() >= p.interest_level.rank())
        .map(|p| {
            // 1 extra hour per day per missing GPA point
            let gap = p.post_degree_gpa - input.previous_gpa;
            let extra_hours = round2(f64::max(0.0, gap));
            Recommendation {
                program: p,
                suggested_extra_study_hours: extra_hours,
            }
        })
        .collect()
}

/// Round half-up to two decimals on the scaled integer.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
