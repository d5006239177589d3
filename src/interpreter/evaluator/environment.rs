use std::collections::HashMap;

/// A chain of name-to-value frames.
///
/// The chain is stored as an owned stack: index 0 is the root (global) frame
/// and every active call owns exactly one frame above it. The parent of a
/// frame is the frame below it, which always outlives it, so no references
/// between frames are needed.
#[derive(Debug)]
pub struct Environment<V> {
    frames: Vec<HashMap<String, V>>,
}

impl<V> Default for Environment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Environment<V> {
    /// Creates a chain consisting of an empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![HashMap::new()] }
    }

    /// Retrieves a binding, searching from the innermost frame outward.
    ///
    /// # Example
    /// ```
    /// use stackwalk::interpreter::evaluator::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.define_local("x", 5);
    ///
    /// assert_eq!(env.get_variable("x"), Some(&5));
    /// assert_eq!(env.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&V> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Binds a name in the innermost frame, replacing any binding there.
    pub fn define_local(&mut self, name: &str, value: V) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), value);
        }
    }

    /// Assigns to the nearest existing binding, otherwise defines the name in
    /// the innermost frame.
    ///
    /// An assignment never shadows a binding that already exists further out
    /// in the chain.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use stackwalk::interpreter::evaluator::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.define_local("x", 1);
    /// env.push_frame(HashMap::new());
    ///
    /// env.assign_nearest("x", 2);
    /// env.assign_nearest("y", 3);
    /// env.pop_frame();
    ///
    /// assert_eq!(env.get_variable("x"), Some(&2));
    /// assert_eq!(env.get_variable("y"), None);
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: V) {
        if let Some(slot) = self.frames.iter_mut().rev().find_map(|frame| frame.get_mut(name)) {
            *slot = value;
        } else {
            self.define_local(name, value);
        }
    }

    /// Pushes a new innermost frame whose parent is the current one.
    pub fn push_frame(&mut self, frame: HashMap<String, V>) {
        self.frames.push(frame);
    }

    /// Removes and returns the innermost frame. The root frame is never
    /// removed.
    pub fn pop_frame(&mut self) -> Option<HashMap<String, V>> {
        if self.frames.len() > 1 { self.frames.pop() } else { None }
    }

    /// Number of frames in the chain, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The root frame.
    #[must_use]
    pub fn root(&self) -> &HashMap<String, V> {
        &self.frames[0]
    }

    /// Consumes the chain and returns the root frame.
    #[must_use]
    pub fn into_root(self) -> HashMap<String, V> {
        self.frames.into_iter().next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_prefers_innermost_binding() {
        let mut env = Environment::new();
        env.define_local("x", 1);
        env.push_frame(HashMap::from([("x".to_string(), 2)]));

        assert_eq!(env.get_variable("x"), Some(&2));
        env.pop_frame();
        assert_eq!(env.get_variable("x"), Some(&1));
    }

    #[test]
    fn assignment_updates_the_frame_where_found() {
        let mut env = Environment::new();
        env.define_local("outer", 1);
        env.push_frame(HashMap::new());
        env.push_frame(HashMap::new());

        env.assign_nearest("outer", 10);
        env.assign_nearest("inner", 20);

        assert_eq!(env.depth(), 3);
        assert_eq!(env.root().get("outer"), Some(&10));
        assert_eq!(env.root().get("inner"), None);
        assert_eq!(env.get_variable("inner"), Some(&20));

        env.pop_frame();
        assert_eq!(env.get_variable("inner"), None);
    }

    #[test]
    fn root_frame_is_never_popped() {
        let mut env: Environment<i32> = Environment::new();
        assert!(env.pop_frame().is_none());
        assert_eq!(env.depth(), 1);
    }
}
