use crate::doc::LINE_SEPARATOR;
use std::cell::RefCell;
use std::rc::Rc;

/// Output buffer for rendering one file
pub struct RenderContext {
    buffer: Rc<RefCell<String>>,
    indent_level: Rc<RefCell<usize>>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: Rc::new(RefCell::new(0)),
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        self.add_indented(text);
        self.add(LINE_SEPARATOR);
    }

    pub fn add_indented(&self, text: &str) {
        let indent = "\t".repeat(*self.indent_level.borrow());
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(&indent);
        buffer.push_str(text);
    }

    pub fn indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn dedent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_uses_tabs() {
        let ctx = RenderContext::new();
        ctx.add_line("class A {");
        ctx.indent();
        ctx.add_line("String id");
        ctx.dedent();
        ctx.dedent();
        ctx.add_line("}");

        assert_eq!(ctx.get_output(), "class A {\n\tString id\n}\n");
    }
}
