use itertools::Itertools;

// =============================================================================
// Milestone 1: Drawing groups
// =============================================================================

const INDENT_SIZE: usize = 2;

trait GraphicObject {
    fn draw_into(&self, out: &mut String, depth: usize);

    fn draw(&self) -> String {
        let mut out = String::new();
        self.draw_into(&mut out, 0);
        out
    }
}

struct Circle;

impl GraphicObject for Circle {
    fn draw_into(&self, out: &mut String, depth: usize) {
        out.push_str(&" ".repeat(INDENT_SIZE * depth));
        out.push_str("Circle\n");
    }
}

struct Square;

impl GraphicObject for Square {
    fn draw_into(&self, out: &mut String, depth: usize) {
        out.push_str(&" ".repeat(INDENT_SIZE * depth));
        out.push_str("Square\n");
    }
}

struct Group {
    name: String,
    children: Vec<Box<dyn GraphicObject>>,
}

impl Group {
    fn new(name: &str) -> Self {
        Group {
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    fn add(&mut self, child: Box<dyn GraphicObject>) -> &mut Self {
        self.children.push(child);
        self
    }
}

impl GraphicObject for Group {
    fn draw_into(&self, out: &mut String, depth: usize) {
        out.push_str(&" ".repeat(INDENT_SIZE * depth));
        out.push_str(&format!("Group {} contains:\n", self.name));
        for child in &self.children {
            child.draw_into(out, depth + 1);
        }
    }
}

// =============================================================================
// Milestone 2: Neurons and layers
// =============================================================================

// Neurons live in an arena and refer to each other by id, so connecting
// whole layers needs no aliasing tricks.
#[derive(Debug)]
struct Neuron {
    id: usize,
    inputs: Vec<usize>,
    outputs: Vec<usize>,
}

struct NeuronNetwork {
    neurons: Vec<Neuron>,
}

impl NeuronNetwork {
    fn new() -> Self {
        NeuronNetwork { neurons: Vec::new() }
    }

    // Ids start at 1 and double as arena handles.
    fn add_neuron(&mut self) -> usize {
        let id = self.neurons.len() + 1;
        self.neurons.push(Neuron {
            id,
            inputs: Vec::new(),
            outputs: Vec::new(),
        });
        id
    }

    fn add_layer(&mut self, count: usize) -> Vec<usize> {
        (0..count).map(|_| self.add_neuron()).collect()
    }

    // A single neuron is just a one-element group, so `[n]`, a layer and a
    // layer slice all connect through the same call.
    fn connect(&mut self, from: impl AsRef<[usize]>, to: impl AsRef<[usize]>) {
        for &source in from.as_ref() {
            for &target in to.as_ref() {
                self.neurons[source - 1].outputs.push(target);
                self.neurons[target - 1].inputs.push(source);
            }
        }
    }

    fn neuron(&self, id: usize) -> &Neuron {
        &self.neurons[id - 1]
    }

    fn describe(&self, id: usize) -> String {
        let neuron = self.neuron(id);
        format!(
            "Neuron {} <- [{}] -> [{}]",
            neuron.id,
            neuron.inputs.iter().join(", "),
            neuron.outputs.iter().join(", ")
        )
    }
}

// =============================================================================
// Milestone 3: Array-backed properties
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Ability {
    Strength,
    Agility,
    Intelligence,
}

const ABILITY_COUNT: usize = 3;

// Aggregates iterate the backing array instead of enumerating one named
// field per stat.
#[derive(Debug, Default)]
struct Creature {
    abilities: [i32; ABILITY_COUNT],
}

impl Creature {
    fn new() -> Self {
        Creature::default()
    }

    fn get(&self, ability: Ability) -> i32 {
        self.abilities[ability as usize]
    }

    fn set(&mut self, ability: Ability, value: i32) {
        self.abilities[ability as usize] = value;
    }

    fn sum(&self) -> i32 {
        self.abilities.iter().sum()
    }

    fn average(&self) -> f64 {
        f64::from(self.sum()) / ABILITY_COUNT as f64
    }

    fn max(&self) -> i32 {
        self.abilities.iter().copied().max().unwrap_or(0)
    }
}

fn main() {
    println!("=== Milestone 1: Drawing groups ===");
    let mut subgroup = Group::new("sub");
    subgroup.add(Box::new(Square));

    let mut root = Group::new("root");
    root.add(Box::new(Circle)).add(Box::new(subgroup));
    print!("{}", root.draw());

    println!("\n=== Milestone 2: Neurons and layers ===");
    let mut net = NeuronNetwork::new();
    let n1 = net.add_neuron();
    let n2 = net.add_neuron();
    let layer1 = net.add_layer(3);
    let layer2 = net.add_layer(4);

    net.connect([n1], [n2]);
    net.connect([n1], &layer1);
    net.connect(&layer1, [n1]);
    net.connect(&layer1, &layer2);
    for id in [n1, n2] {
        println!("{}", net.describe(id));
    }

    println!("\n=== Milestone 3: Array-backed properties ===");
    let mut orc = Creature::new();
    orc.set(Ability::Strength, 16);
    orc.set(Ability::Agility, 11);
    orc.set(Ability::Intelligence, 9);
    println!(
        "orc: sum={} average={:.1} max={}",
        orc.sum(),
        orc.average(),
        orc.max()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_draws_children_indented() {
        let mut subgroup = Group::new("sub");
        subgroup.add(Box::new(Circle));

        let mut root = Group::new("root");
        root.add(Box::new(Circle)).add(Box::new(subgroup));

        assert_eq!(
            root.draw(),
            "Group root contains:\n  Circle\n  Group sub contains:\n    Circle\n"
        );
    }

    #[test]
    fn test_leaf_draws_alone() {
        assert_eq!(Circle.draw(), "Circle\n");
        assert_eq!(Square.draw(), "Square\n");
    }

    #[test]
    fn test_neuron_to_neuron_edges_are_symmetric() {
        let mut net = NeuronNetwork::new();
        let n1 = net.add_neuron();
        let n2 = net.add_neuron();
        net.connect([n1], [n2]);

        assert_eq!(net.neuron(n1).outputs, vec![n2]);
        assert_eq!(net.neuron(n2).inputs, vec![n1]);
        assert!(net.neuron(n1).inputs.is_empty());
    }

    #[test]
    fn test_layer_to_layer_is_all_pairs() {
        let mut net = NeuronNetwork::new();
        let layer1 = net.add_layer(3);
        let layer2 = net.add_layer(4);
        net.connect(&layer1, &layer2);

        for &source in &layer1 {
            assert_eq!(net.neuron(source).outputs.len(), 4);
        }
        for &target in &layer2 {
            assert_eq!(net.neuron(target).inputs.len(), 3);
        }
    }

    #[test]
    fn test_single_and_layer_connect_uniformly() {
        let mut net = NeuronNetwork::new();
        let n1 = net.add_neuron();
        let layer = net.add_layer(2);
        net.connect([n1], &layer);

        assert_eq!(net.neuron(n1).outputs, layer);
    }

    #[test]
    fn test_ids_start_at_one() {
        let mut net = NeuronNetwork::new();
        assert_eq!(net.add_neuron(), 1);
        assert_eq!(net.add_layer(2), vec![2, 3]);
    }

    #[test]
    fn test_creature_aggregates() {
        let mut creature = Creature::new();
        creature.set(Ability::Strength, 10);
        creature.set(Ability::Agility, 5);
        creature.set(Ability::Intelligence, 3);

        assert_eq!(creature.get(Ability::Agility), 5);
        assert_eq!(creature.sum(), 18);
        assert_eq!(creature.average(), 6.0);
        assert_eq!(creature.max(), 10);
    }

    #[test]
    fn test_new_creature_is_zeroed() {
        let creature = Creature::new();
        assert_eq!(creature.sum(), 0);
        assert_eq!(creature.max(), 0);
    }
}
