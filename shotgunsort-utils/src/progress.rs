use serde::Serialize;

/// Best candidate seen so far, ranked by how long a sorted prefix it had.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosestAttempt {
    pub array: Vec<i32>,
    pub match_count: usize,
    pub attempt: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Sorted,
    /// Not sorted, but this candidate replaced the closest attempt.
    Improved(usize),
    Unchanged(usize),
}

/// Number of leading positions where `candidate` already equals `target`.
///
/// Stops at the first mismatch: a correct element after a wrong one is not
/// counted.
pub fn prefix_match_len(candidate: &[i32], target: &[i32]) -> usize {
    candidate
        .iter()
        .zip(target)
        .take_while(|(c, t)| c == t)
        .count()
}

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    target: Vec<i32>,
    closest: Option<ClosestAttempt>,
}

impl ProgressTracker {
    pub fn new(target: Vec<i32>) -> Self {
        Self {
            target,
            closest: None,
        }
    }

    pub fn target(&self) -> &[i32] {
        &self.target
    }

    pub fn closest(&self) -> Option<&ClosestAttempt> {
        self.closest.as_ref()
    }

    pub fn best_match_count(&self) -> usize {
        self.closest.as_ref().map_or(0, |c| c.match_count)
    }

    pub fn check(&mut self, candidate: &[i32], attempt: u64) -> Check {
        let match_count = prefix_match_len(candidate, &self.target);
        if match_count == self.target.len() {
            return Check::Sorted;
        }

        let improved = match &self.closest {
            Some(closest) => match_count > closest.match_count,
            None => true,
        };
        if !improved {
            return Check::Unchanged(match_count);
        }

        log::debug!(
            "New closest attempt at {}: {}/{} in place",
            attempt,
            match_count,
            self.target.len()
        );
        self.closest = Some(ClosestAttempt {
            array: candidate.to_vec(),
            match_count,
            attempt,
        });
        Check::Improved(match_count)
    }
}
