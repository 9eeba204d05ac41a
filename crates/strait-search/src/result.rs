// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::stats::SearchStatistics;
use strait_graph::VertexSeparator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult {
    /// We have proven that no valid separator exists under the given
    /// shore capacity.
    Infeasible,
    /// We have found a separator and proven its optimality.
    Optimal(VertexSeparator),
    /// We have found a separator, but not proven its optimality.
    Feasible(VertexSeparator),
    /// The solver terminated without finding a separator and without
    /// proving infeasibility.
    Unknown,
}

impl SolverResult {
    /// Returns the separator carried by this result, if any.
    #[inline]
    pub fn separator(&self) -> Option<&VertexSeparator> {
        match self {
            SolverResult::Optimal(separator) | SolverResult::Feasible(separator) => {
                Some(separator)
            }
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }

    /// Consumes the result, returning the separator if one was found.
    #[inline]
    pub fn into_separator(self) -> Option<VertexSeparator> {
        match self {
            SolverResult::Optimal(separator) | SolverResult::Feasible(separator) => {
                Some(separator)
            }
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }
}

impl std::fmt::Display for SolverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(separator) => {
                write!(f, "Optimal(separator_size={})", separator.separator_size())
            }
            SolverResult::Feasible(separator) => {
                write!(f, "Feasible(separator_size={})", separator.separator_size())
            }
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The solver found a separator and proved its optimality.
    OptimalityProven,
    /// The solver proved that no valid separator exists.
    InfeasibilityProven,
    /// The solver aborted due to a search limit (time, interrupt, etc.).
    /// The string contains information about the reason for abortion.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The complete report of a finished solve: what was found, why the
/// search stopped, and how much work it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome {
    pub result: SolverResult,
    pub reason: TerminationReason,
    pub statistics: SearchStatistics,
}

impl SolverOutcome {
    #[inline]
    pub fn new(
        result: SolverResult,
        reason: TerminationReason,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolverResult::Feasible(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SolverResult::Infeasible)
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        matches!(
            self.result,
            SolverResult::Optimal(_) | SolverResult::Feasible(_)
        )
    }

    /// Returns the separator carried by this outcome, if any.
    #[inline]
    pub fn separator(&self) -> Option<&VertexSeparator> {
        self.result.separator()
    }
}

impl std::fmt::Display for SolverOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Termination: {}", self.reason)?;
        write!(f, "{}", self.statistics)
    }
}
