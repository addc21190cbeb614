use itertools::Itertools;
use rand::Rng;
use std::sync::Mutex;

// =============================================================================
// Milestone 1: Interned user names
// =============================================================================

lazy_static::lazy_static! {
    static ref NAME_POOL: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

// Each distinct token is stored once; interning an existing token returns
// its slot.
fn intern(token: &str) -> usize {
    let mut pool = NAME_POOL.lock().unwrap();
    if let Some(index) = pool.iter().position(|existing| existing == token) {
        return index;
    }
    pool.push(token.to_string());
    pool.len() - 1
}

fn pool_size() -> usize {
    NAME_POOL.lock().unwrap().len()
}

// Users hold indices into the pool, not strings. Ten thousand Smiths cost
// one "Smith".
#[derive(Debug, Clone, PartialEq)]
struct User {
    name_tokens: Vec<usize>,
}

impl User {
    fn new(full_name: &str) -> Self {
        User {
            name_tokens: full_name.split_whitespace().map(intern).collect(),
        }
    }

    fn full_name(&self) -> String {
        let pool = NAME_POOL.lock().unwrap();
        self.name_tokens
            .iter()
            .filter_map(|&index| pool.get(index))
            .join(" ")
    }

    fn tokens(&self) -> &[usize] {
        &self.name_tokens
    }
}

// =============================================================================
// Milestone 2: Formatted text without a flag per character
// =============================================================================

// Bounds are inclusive on both ends.
#[derive(Debug, Clone, Copy)]
struct TextRange {
    start: usize,
    end: usize,
    capitalize: bool,
}

impl TextRange {
    fn covers(&self, position: usize) -> bool {
        position >= self.start && position <= self.end
    }
}

struct BetterFormattedText {
    plain_text: String,
    formatting: Vec<TextRange>,
}

impl BetterFormattedText {
    fn new(text: &str) -> Self {
        BetterFormattedText {
            plain_text: text.to_string(),
            formatting: Vec::new(),
        }
    }

    fn get_range(&mut self, start: usize, end: usize) -> &mut TextRange {
        self.formatting.push(TextRange {
            start,
            end,
            capitalize: false,
        });
        let last = self.formatting.len() - 1;
        &mut self.formatting[last]
    }
}

impl std::fmt::Display for BetterFormattedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, c) in self.plain_text.chars().enumerate() {
            let capitalize = self
                .formatting
                .iter()
                .any(|range| range.covers(position) && range.capitalize);
            if capitalize {
                write!(f, "{}", c.to_ascii_uppercase())?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

const FIRST_NAMES: [&str; 4] = ["John", "Jane", "Chris", "Sarah"];
const LAST_NAMES: [&str; 3] = ["Smith", "Doe", "Murphy"];

fn main() {
    println!("=== Milestone 1: Interned user names ===");
    let mut rng = rand::thread_rng();
    let users: Vec<User> = (0..20)
        .map(|_| {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            User::new(&format!("{first} {last}"))
        })
        .collect();

    for user in users.iter().take(5) {
        println!("user: {}", user.full_name());
    }
    println!("{} users share {} pooled name tokens", users.len(), pool_size());

    println!("\n=== Milestone 2: Formatted text ranges ===");
    let mut text = BetterFormattedText::new("This is a brave new world");
    text.get_range(10, 15).capitalize = true;
    println!("{text}");
}
