use std::collections::{HashMap, HashSet};

/// Guarantees uniqueness of names within one bulk pass.
///
/// The first occurrence of a name passes through unchanged; repeats get
/// `_1`, `_2`, … in encounter order. Counters only grow and nothing is ever
/// released, so a number is never handed out twice. No ceiling is enforced:
/// a pathological batch can grow suffixes without bound, and capping would
/// break uniqueness.
#[derive(Debug, Default)]
pub struct CollisionResolver {
    used: HashSet<String>,
    next_suffix: HashMap<String, u32>,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, name: String) -> String {
        if self.used.insert(name.clone()) {
            return name;
        }

        // Formatted names never contain underscores (the tokenizer strips
        // them and no suffix adds one), so the incoming name is the base.
        let counter = self.next_suffix.entry(name.clone()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{}_{}", name, counter);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    pub fn assigned(&self) -> usize {
        self.used.len()
    }
}
