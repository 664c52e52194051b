use std::collections::HashSet;

use rand::Rng;

use crate::error::{PipelineError, Result};

pub const ID_MIN: u32 = 10_000;
pub const ID_MAX: u32 = 99_999;

/// Source of candidate student ids.
pub trait StudentIdSource {
    fn next_id(&mut self) -> String;
}

pub fn format_student_id(number: u32) -> String {
    format!("S{number}")
}

/// Draws `S` followed by a uniform number in `[10000, 99999]`.
#[derive(Debug)]
pub struct RandomStudentIds<R> {
    rng: R,
}

impl<R: Rng> RandomStudentIds<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> StudentIdSource for RandomStudentIds<R> {
    fn next_id(&mut self) -> String {
        format_student_id(self.rng.gen_range(ID_MIN..=ID_MAX))
    }
}

/// Hands out consecutive ids, wrapping back to `S10000` after `S99999`.
#[derive(Debug, Clone)]
pub struct SequentialStudentIds {
    next: u32,
}

impl SequentialStudentIds {
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: first.clamp(ID_MIN, ID_MAX),
        }
    }
}

impl Default for SequentialStudentIds {
    fn default() -> Self {
        Self::starting_at(ID_MIN)
    }
}

impl StudentIdSource for SequentialStudentIds {
    fn next_id(&mut self) -> String {
        let id = format_student_id(self.next);
        self.next = if self.next >= ID_MAX { ID_MIN } else { self.next + 1 };
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// Accept whatever the source returns, duplicates included.
    AllowDuplicates,
    /// Redraw ids already taken, giving up after `max_attempts` draws.
    RequireUnique { max_attempts: usize },
}

impl IdPolicy {
    pub const DEFAULT_ATTEMPTS: usize = 32;

    pub fn from_flag(unique: bool) -> Self {
        if unique {
            IdPolicy::RequireUnique {
                max_attempts: Self::DEFAULT_ATTEMPTS,
            }
        } else {
            IdPolicy::AllowDuplicates
        }
    }
}

impl Default for IdPolicy {
    fn default() -> Self {
        Self::from_flag(true)
    }
}

/// Draws one id under `policy`, recording it in `taken`.
pub fn assign_id<S>(source: &mut S, policy: IdPolicy, taken: &mut HashSet<String>) -> Result<String>
where
    S: StudentIdSource + ?Sized,
{
    match policy {
        IdPolicy::AllowDuplicates => {
            let id = source.next_id();
            taken.insert(id.clone());
            Ok(id)
        }
        IdPolicy::RequireUnique { max_attempts } => {
            for attempt in 1..=max_attempts.max(1) {
                let id = source.next_id();
                if taken.insert(id.clone()) {
                    return Ok(id);
                }
                tracing::warn!(student_id = %id, attempt, "student id already taken, redrawing");
            }
            Err(PipelineError::IdentityExhausted {
                attempts: max_attempts.max(1),
            })
        }
    }
}
