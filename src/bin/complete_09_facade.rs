use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Milestone 1: The subsystem - buffers and viewports
// =============================================================================

trait Buffer {
    fn write_line(&mut self, line: &str);
    fn clear(&mut self);
    fn line_count(&self) -> usize;
    fn line(&self, index: usize) -> Option<String>;
}

// A fixed-width, fixed-capacity text buffer that drops its oldest line
// once full.
struct TextBuffer {
    width: usize,
    capacity: usize,
    lines: Vec<String>,
}

impl TextBuffer {
    fn new(width: usize, capacity: usize) -> Self {
        TextBuffer {
            width,
            capacity,
            lines: Vec::new(),
        }
    }
}

impl Buffer for TextBuffer {
    fn write_line(&mut self, line: &str) {
        let clipped: String = line.chars().take(self.width).collect();
        self.lines.push(clipped);
        if self.lines.len() > self.capacity {
            self.lines.remove(0);
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<String> {
        self.lines.get(index).cloned()
    }
}

// A fixed-height window into one buffer, starting at an offset.
struct Viewport {
    buffer: Rc<RefCell<dyn Buffer>>,
    height: usize,
    offset: usize,
}

impl Viewport {
    fn new(buffer: Rc<RefCell<dyn Buffer>>, height: usize, offset: usize) -> Self {
        Viewport {
            buffer,
            height,
            offset,
        }
    }

    fn visible_lines(&self) -> Vec<String> {
        let buffer = self.buffer.borrow();
        (self.offset..self.offset + self.height)
            .filter_map(|index| buffer.line(index))
            .collect()
    }
}

// =============================================================================
// Milestone 2: The console facade
// =============================================================================

// Wiring buffers to viewports by hand is the complicated path; the facade
// offers the one-call setups almost every caller wants.
struct Console {
    buffers: Vec<Rc<RefCell<dyn Buffer>>>,
    viewports: Vec<Viewport>,
}

impl Console {
    // One buffer, one viewport covering it. The 90% case.
    fn single(width: usize, height: usize) -> Self {
        let buffer: Rc<RefCell<dyn Buffer>> = Rc::new(RefCell::new(TextBuffer::new(width, height)));
        let viewport = Viewport::new(Rc::clone(&buffer), height, 0);
        Console {
            buffers: vec![buffer],
            viewports: vec![viewport],
        }
    }

    // One shared buffer split across stacked viewports.
    fn split(width: usize, height: usize, viewport_count: usize) -> Self {
        let capacity = height * viewport_count;
        let buffer: Rc<RefCell<dyn Buffer>> =
            Rc::new(RefCell::new(TextBuffer::new(width, capacity)));
        let viewports = (0..viewport_count)
            .map(|i| Viewport::new(Rc::clone(&buffer), height, i * height))
            .collect();
        Console {
            buffers: vec![buffer],
            viewports,
        }
    }

    fn write_line(&mut self, text: &str) {
        if let Some(buffer) = self.buffers.first() {
            buffer.borrow_mut().write_line(text);
        }
    }

    fn clear(&mut self) {
        for buffer in &self.buffers {
            buffer.borrow_mut().clear();
        }
    }

    fn render(&self) -> String {
        self.viewports
            .iter()
            .flat_map(|viewport| viewport.visible_lines())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn main() {
    println!("=== Milestone 1: Manual wiring ===");
    let buffer: Rc<RefCell<dyn Buffer>> = Rc::new(RefCell::new(TextBuffer::new(40, 10)));
    buffer.borrow_mut().write_line("wired by hand");
    let viewport = Viewport::new(Rc::clone(&buffer), 10, 0);
    println!("{}", viewport.visible_lines().join("\n"));

    println!("\n=== Milestone 2: The console facade ===");
    let mut console = Console::single(40, 5);
    console.write_line("Hello from the facade");
    console.write_line("No buffers or viewports in sight");
    println!("{}", console.render());

    println!("\n=== Split console ===");
    let mut split = Console::split(40, 2, 2);
    for line in ["one", "two", "three", "four"] {
        split.write_line(line);
    }
    println!("{}", split.render());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_clips_to_width() {
        let mut buffer = TextBuffer::new(5, 10);
        buffer.write_line("abcdefgh");
        assert_eq!(buffer.line(0), Some("abcde".to_string()));
    }

    #[test]
    fn test_buffer_drops_oldest_when_full() {
        let mut buffer = TextBuffer::new(20, 2);
        buffer.write_line("one");
        buffer.write_line("two");
        buffer.write_line("three");

        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(0), Some("two".to_string()));
        assert_eq!(buffer.line(1), Some("three".to_string()));
    }

    #[test]
    fn test_viewport_windows_the_buffer() {
        let buffer: Rc<RefCell<dyn Buffer>> = Rc::new(RefCell::new(TextBuffer::new(20, 10)));
        for line in ["a", "b", "c", "d"] {
            buffer.borrow_mut().write_line(line);
        }
        let viewport = Viewport::new(Rc::clone(&buffer), 2, 1);
        assert_eq!(viewport.visible_lines(), vec!["b", "c"]);
    }

    #[test]
    fn test_single_console_round_trip() {
        let mut console = Console::single(40, 5);
        console.write_line("hello");
        console.write_line("world");
        assert_eq!(console.render(), "hello\nworld");
    }

    #[test]
    fn test_split_console_partitions_lines() {
        let mut console = Console::split(40, 2, 2);
        for line in ["one", "two", "three", "four"] {
            console.write_line(line);
        }
        assert_eq!(console.render(), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn test_clear_empties_the_console() {
        let mut console = Console::single(40, 5);
        console.write_line("gone soon");
        console.clear();
        assert_eq!(console.render(), "");
    }
}
