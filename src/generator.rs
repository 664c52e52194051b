use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PipelineError, Result};
use crate::identity::{assign_id, IdPolicy, RandomStudentIds, StudentIdSource};
use crate::models::{round_gpa, Major, StudentRecord};
use crate::storage::PipelineStorage;

pub const FIRST_NAMES: [&str; 10] = [
    "James",
    "Mary",
    "John",
    "Patricia",
    "Robert",
    "Jennifer",
    "Michael",
    "Linda",
    "William",
    "Elizabeth",
];

pub const LAST_NAMES: [&str; 10] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

pub const EMAIL_DOMAIN: &str = "university.edu";

const GPA_MIN: f64 = 2.0;
const GPA_MAX: f64 = 4.0;
const EMAIL_SUFFIX_MIN: u32 = 80;
const EMAIL_SUFFIX_MAX: u32 = 99;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Builds one unprocessed student with randomized attributes.
pub fn new_student<R: Rng + ?Sized>(rng: &mut R, student_id: String) -> StudentRecord {
    let first_name = pick(rng, &FIRST_NAMES);
    let last_name = pick(rng, &LAST_NAMES);
    let major = Major::ALL[rng.gen_range(0..Major::ALL.len())];
    let gpa = round_gpa(rng.gen_range(GPA_MIN..=GPA_MAX));
    let suffix = rng.gen_range(EMAIL_SUFFIX_MIN..=EMAIL_SUFFIX_MAX);

    StudentRecord {
        student_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        major,
        gpa,
        email: format!(
            "{}.{}{suffix}@{EMAIL_DOMAIN}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        processed: false,
        summary: None,
    }
}

/// Appends synthetic students to a store.
pub struct StudentGenerator<R, I> {
    rng: R,
    ids: I,
    policy: IdPolicy,
}

impl StudentGenerator<StdRng, RandomStudentIds<StdRng>> {
    pub fn from_entropy(policy: IdPolicy) -> Self {
        Self::new(
            StdRng::from_entropy(),
            RandomStudentIds::new(StdRng::from_entropy()),
            policy,
        )
    }

    /// Fully reproducible generator, for tests and replays.
    pub fn seeded(seed: u64, policy: IdPolicy) -> Self {
        Self::new(
            StdRng::seed_from_u64(seed),
            RandomStudentIds::new(StdRng::seed_from_u64(seed.wrapping_add(1))),
            policy,
        )
    }
}

impl<R: Rng, I: StudentIdSource> StudentGenerator<R, I> {
    pub fn new(rng: R, ids: I, policy: IdPolicy) -> Self {
        Self { rng, ids, policy }
    }

    /// Appends `count` new students after the existing rows and returns the
    /// total number of rows now stored.
    pub fn generate<S>(&mut self, storage: &mut S, count: usize) -> Result<usize>
    where
        S: PipelineStorage + ?Sized,
    {
        if count == 0 {
            return Err(PipelineError::InvalidCount);
        }

        let mut records = storage.load_records()?;
        let mut taken: HashSet<String> = records.iter().map(|r| r.student_id.clone()).collect();

        records.reserve(count);
        for _ in 0..count {
            let student_id = assign_id(&mut self.ids, self.policy, &mut taken)?;
            records.push(new_student(&mut self.rng, student_id));
        }

        storage.save_records(&records)?;

        let total = records.len();
        tracing::info!(generated = count, total, "generated new student records");
        Ok(total)
    }
}
