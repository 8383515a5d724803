/// LIFO of currently-open, unclosed tag names.
///
/// Top of stack is the most recently opened tag, which must be the next one
/// closed. Popping an empty stack returns `None`; reporting that as an error
/// is the caller's job.
#[derive(Debug, Default)]
pub struct TagStack {
    names: Vec<String>,
}

impl TagStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly opened tag.
    pub fn push(&mut self, name: String) {
        self.names.push(name);
    }

    /// Remove and return the most recently opened tag, if any.
    pub fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    /// True when no tags are open.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of open tags.
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack = TagStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = TagStack::new();
        stack.push("window".into());
        stack.push("button".into());
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some("button".into()));
        assert_eq!(stack.pop(), Some("window".into()));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut stack = TagStack::new();
        assert_eq!(stack.pop(), None);
        // Popping empty is not fatal; the stack stays usable.
        stack.push("a".into());
        assert_eq!(stack.pop(), Some("a".into()));
    }
}
