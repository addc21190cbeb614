use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

// =============================================================================
// Milestone 1: The singleton itself
// =============================================================================

static INSTANCE_COUNT: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Error, PartialEq)]
enum SingletonError {
    #[error("cannot construct more than one database")]
    AlreadyConstructed,
}

trait Database {
    fn get_population(&self, name: &str) -> u32;
}

#[derive(Debug)]
struct SingletonDatabase {
    capitals: HashMap<String, u32>,
}

lazy_static::lazy_static! {
    static ref DATABASE: SingletonDatabase = SingletonDatabase::build();
}

impl SingletonDatabase {
    // Only the lazy static above and try_new call this.
    fn build() -> Self {
        INSTANCE_COUNT.fetch_add(1, Ordering::SeqCst);
        let mut capitals = HashMap::new();
        capitals.insert("Tokyo".to_string(), 33_200_000);
        capitals.insert("New York".to_string(), 17_800_000);
        capitals.insert("Seoul".to_string(), 17_500_000);
        capitals.insert("Mexico City".to_string(), 17_400_000);
        capitals.insert("Sao Paulo".to_string(), 17_700_000);
        SingletonDatabase { capitals }
    }

    fn get() -> &'static SingletonDatabase {
        &DATABASE
    }

    // The guarded constructor from the original: a second instance is
    // refused instead of thrown.
    fn try_new() -> Result<Self, SingletonError> {
        if INSTANCE_COUNT.load(Ordering::SeqCst) > 0 {
            return Err(SingletonError::AlreadyConstructed);
        }
        Ok(Self::build())
    }

    fn instance_count() -> usize {
        INSTANCE_COUNT.load(Ordering::SeqCst)
    }
}

impl Database for SingletonDatabase {
    fn get_population(&self, name: &str) -> u32 {
        self.capitals.get(name).copied().unwrap_or(0)
    }
}

// =============================================================================
// Milestone 2: The testability problem
// =============================================================================

// Hard-wired to the live singleton: any test of this finder is an
// integration test against real data.
struct SingletonRecordFinder;

impl SingletonRecordFinder {
    fn total_population(names: &[&str]) -> u32 {
        names
            .iter()
            .map(|name| SingletonDatabase::get().get_population(name))
            .sum()
    }
}

// =============================================================================
// Milestone 3: Dependency injection fix
// =============================================================================

struct DummyDatabase {
    capitals: HashMap<String, u32>,
}

impl DummyDatabase {
    fn new() -> Self {
        let mut capitals = HashMap::new();
        capitals.insert("alpha".to_string(), 1);
        capitals.insert("beta".to_string(), 2);
        capitals.insert("gamma".to_string(), 3);
        DummyDatabase { capitals }
    }
}

impl Database for DummyDatabase {
    fn get_population(&self, name: &str) -> u32 {
        self.capitals.get(name).copied().unwrap_or(0)
    }
}

struct ConfigurableRecordFinder<'a> {
    db: &'a dyn Database,
}

impl<'a> ConfigurableRecordFinder<'a> {
    fn new(db: &'a dyn Database) -> Self {
        ConfigurableRecordFinder { db }
    }

    fn total_population(&self, names: &[&str]) -> u32 {
        names
            .iter()
            .map(|name| self.db.get_population(name))
            .sum()
    }
}

fn main() {
    println!("=== Milestone 1: The singleton itself ===");
    let db = SingletonDatabase::get();
    println!("Tokyo population: {}", db.get_population("Tokyo"));
    println!("Instances constructed: {}", SingletonDatabase::instance_count());
    match SingletonDatabase::try_new() {
        Ok(_) => println!("constructed a second database (should not happen)"),
        Err(err) => println!("second construction refused: {err}"),
    }

    println!("\n=== Milestone 2: Hard-wired finder ===");
    let total = SingletonRecordFinder::total_population(&["Seoul", "Mexico City"]);
    println!("Seoul + Mexico City = {total}");

    println!("\n=== Milestone 3: Dependency injection fix ===");
    let dummy = DummyDatabase::new();
    let finder = ConfigurableRecordFinder::new(&dummy);
    println!("alpha + gamma = {}", finder.total_population(&["alpha", "gamma"]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_serves_population_data() {
        let db = SingletonDatabase::get();
        assert_eq!(db.get_population("Tokyo"), 33_200_000);
        assert_eq!(db.get_population("Atlantis"), 0);
    }

    #[test]
    fn test_second_construction_is_refused() {
        // force the global instance first
        let _ = SingletonDatabase::get();
        assert_eq!(
            SingletonDatabase::try_new().unwrap_err(),
            SingletonError::AlreadyConstructed
        );
        assert!(SingletonDatabase::instance_count() >= 1);
    }

    #[test]
    fn test_singleton_finder_depends_on_live_data() {
        // works, but only against the real table: this is the problem
        let total = SingletonRecordFinder::total_population(&["Seoul", "Mexico City"]);
        assert_eq!(total, 17_500_000 + 17_400_000);
    }

    #[test]
    fn test_dependent_total_population() {
        let dummy = DummyDatabase::new();
        let finder = ConfigurableRecordFinder::new(&dummy);
        assert_eq!(finder.total_population(&["alpha", "gamma"]), 4);
    }

    #[test]
    fn test_injected_finder_ignores_unknown_names() {
        let dummy = DummyDatabase::new();
        let finder = ConfigurableRecordFinder::new(&dummy);
        assert_eq!(finder.total_population(&["alpha", "omega"]), 1);
    }
}
