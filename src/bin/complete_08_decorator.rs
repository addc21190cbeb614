use colored::Colorize;

// =============================================================================
// Milestone 1: Dynamic shape decorators
// =============================================================================

trait Shape {
    fn describe(&self) -> String;
    fn clone_box(&self) -> Box<dyn Shape>;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Clone)]
struct Circle {
    radius: f64,
}

impl Circle {
    fn new(radius: f64) -> Self {
        Circle { radius }
    }

    fn resize(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

impl Shape for Circle {
    fn describe(&self) -> String {
        format!("A circle of radius {}", self.radius)
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

#[derive(Clone)]
struct Square {
    side: f64,
}

impl Square {
    fn new(side: f64) -> Self {
        Square { side }
    }
}

impl Shape for Square {
    fn describe(&self) -> String {
        format!("A square of side {}", self.side)
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

#[derive(Clone)]
struct ColoredShape {
    inner: Box<dyn Shape>,
    color: String,
}

impl ColoredShape {
    fn new(inner: Box<dyn Shape>, color: &str) -> Self {
        ColoredShape {
            inner,
            color: color.to_string(),
        }
    }
}

impl Shape for ColoredShape {
    fn describe(&self) -> String {
        format!("{} with color {}", self.inner.describe(), self.color)
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

#[derive(Clone)]
struct TransparentShape {
    inner: Box<dyn Shape>,
    transparency: u8,
}

impl TransparentShape {
    fn new(inner: Box<dyn Shape>, transparency: u8) -> Self {
        TransparentShape { inner, transparency }
    }

    fn percentage(&self) -> f64 {
        f64::from(self.transparency) / 255.0 * 100.0
    }
}

impl Shape for TransparentShape {
    fn describe(&self) -> String {
        format!(
            "{} with {:.1}% transparency",
            self.inner.describe(),
            self.percentage()
        )
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

// =============================================================================
// Milestone 2: Function decorator
// =============================================================================

struct Logger<F> {
    func: F,
    name: String,
}

impl<F> Logger<F>
where
    F: Fn(f64, f64) -> f64,
{
    fn new(func: F, name: &str) -> Self {
        Logger {
            func,
            name: name.to_string(),
        }
    }

    fn call(&self, a: f64, b: f64) -> f64 {
        println!("Entering {}", self.name);
        let result = (self.func)(a, b);
        println!("Exiting {}", self.name);
        result
    }
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn main() {
    println!("=== Milestone 1: Dynamic shape decorators ===");
    let red_circle = ColoredShape::new(Box::new(Circle::new(5.0)), "red");
    println!("{}", red_circle.describe().red());

    let ghost_square = TransparentShape::new(
        Box::new(ColoredShape::new(Box::new(Square::new(3.0)), "green")),
        51,
    );
    println!("{}", ghost_square.describe().green());

    let copy = ghost_square.clone_box();
    println!("cloned: {}", copy.describe());

    println!("\n=== Milestone 2: Function decorator ===");
    let logged_add = Logger::new(add, "add");
    let sum = logged_add.call(2.0, 3.0);
    println!("2 + 3 = {sum}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_shapes_describe_themselves() {
        assert_eq!(Circle::new(5.0).describe(), "A circle of radius 5");
        assert_eq!(Square::new(3.0).describe(), "A square of side 3");
    }

    #[test]
    fn test_color_decorator_appends_suffix() {
        let shape = ColoredShape::new(Box::new(Circle::new(5.0)), "red");
        assert_eq!(shape.describe(), "A circle of radius 5 with color red");
    }

    #[test]
    fn test_decorators_stack_outermost_last() {
        let shape = TransparentShape::new(
            Box::new(ColoredShape::new(Box::new(Square::new(3.0)), "green")),
            51,
        );
        assert_eq!(
            shape.describe(),
            "A square of side 3 with color green with 20.0% transparency"
        );

        let reversed = ColoredShape::new(
            Box::new(TransparentShape::new(Box::new(Square::new(3.0)), 51)),
            "green",
        );
        assert_eq!(
            reversed.describe(),
            "A square of side 3 with 20.0% transparency with color green"
        );
    }

    #[test]
    fn test_transparency_scales_from_byte() {
        let opaque = TransparentShape::new(Box::new(Circle::new(1.0)), 255);
        assert!(opaque.describe().contains("100.0% transparency"));
        let clear = TransparentShape::new(Box::new(Circle::new(1.0)), 0);
        assert!(clear.describe().contains("0.0% transparency"));
    }

    #[test]
    fn test_wrapping_does_not_mutate_inner() {
        let mut circle = Circle::new(5.0);
        let wrapped = ColoredShape::new(circle.clone_box(), "blue");
        circle.resize(2.0);

        assert_eq!(circle.describe(), "A circle of radius 10");
        assert_eq!(wrapped.describe(), "A circle of radius 5 with color blue");
    }

    #[test]
    fn test_clone_box_deep_copies_the_chain() {
        let original = ColoredShape::new(Box::new(Circle::new(5.0)), "red");
        let copy = original.clone_box();
        assert_eq!(copy.describe(), original.describe());
    }

    #[test]
    fn test_logger_returns_wrapped_result() {
        let logged = Logger::new(add, "add");
        assert_eq!(logged.call(2.0, 3.0), 5.0);

        let logged_mul = Logger::new(|a, b| a * b, "mul");
        assert_eq!(logged_mul.call(2.0, 3.0), 6.0);
    }
}
