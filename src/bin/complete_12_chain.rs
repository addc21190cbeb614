use std::fmt;

// =============================================================================
// Milestone 1: The creature under modification
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Creature {
    name: String,
    attack: i32,
    defense: i32,
}

impl Creature {
    fn new(name: &str, attack: i32, defense: i32) -> Self {
        Creature {
            name: name.to_string(),
            attack,
            defense,
        }
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (attack {}, defense {})",
            self.name, self.attack, self.defense
        )
    }
}

// =============================================================================
// Milestone 2: The modifier chain
// =============================================================================

#[derive(Debug, PartialEq)]
enum Handling {
    Continue,
    Stop,
}

trait CreatureModifier {
    fn modify(&self, creature: &mut Creature) -> Handling;
}

struct DoubleAttackModifier;

impl CreatureModifier for DoubleAttackModifier {
    fn modify(&self, creature: &mut Creature) -> Handling {
        creature.attack *= 2;
        Handling::Continue
    }
}

struct IncreaseDefenseModifier;

impl CreatureModifier for IncreaseDefenseModifier {
    fn modify(&self, creature: &mut Creature) -> Handling {
        // only weak attackers get the defense bonus
        if creature.attack <= 2 {
            creature.defense += 1;
        }
        Handling::Continue
    }
}

// A curse: once reached, no later modifier runs.
struct NoBonusesModifier;

impl CreatureModifier for NoBonusesModifier {
    fn modify(&self, _creature: &mut Creature) -> Handling {
        Handling::Stop
    }
}

struct ModifierChain {
    modifiers: Vec<Box<dyn CreatureModifier>>,
}

impl ModifierChain {
    fn new() -> Self {
        ModifierChain {
            modifiers: Vec::new(),
        }
    }

    fn add(&mut self, modifier: Box<dyn CreatureModifier>) -> &mut Self {
        self.modifiers.push(modifier);
        self
    }

    fn handle(&self, creature: &mut Creature) {
        for modifier in &self.modifiers {
            if modifier.modify(creature) == Handling::Stop {
                break;
            }
        }
    }
}

fn main() {
    println!("=== Milestone 1: Stacked bonuses ===");
    let mut goblin = Creature::new("Goblin", 1, 1);
    println!("before: {goblin}");

    let mut chain = ModifierChain::new();
    chain
        .add(Box::new(DoubleAttackModifier))
        .add(Box::new(DoubleAttackModifier))
        .add(Box::new(IncreaseDefenseModifier));
    chain.handle(&mut goblin);
    println!("after:  {goblin}");

    println!("\n=== Milestone 2: A curse stops the chain ===");
    let mut cursed = Creature::new("Cursed Goblin", 1, 1);
    let mut cursed_chain = ModifierChain::new();
    cursed_chain
        .add(Box::new(NoBonusesModifier))
        .add(Box::new(DoubleAttackModifier))
        .add(Box::new(IncreaseDefenseModifier));
    cursed_chain.handle(&mut cursed);
    println!("after:  {cursed}");
}
