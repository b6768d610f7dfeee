//! Change notification to the owning form.
//!
//! The widget mutates its store, then pushes the result to subscribers.
//! Value subscribers always receive the complete replacement ordered
//! sequence, never a diff; collapse subscribers receive the new flag.

use crate::value::Value;

/// Subscribers to the ordered value sequence.
#[derive(Default)]
pub struct ChangeEmitter {
    listeners: Vec<Box<dyn FnMut(&[Value])>>,
}

impl ChangeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for every committed mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Value]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Delivers the full ordered value sequence to every listener.
    pub fn emit(&mut self, values: &[Value]) {
        for listener in &mut self.listeners {
            listener(values);
        }
    }
}

impl std::fmt::Debug for ChangeEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Subscribers to collapse-state changes.
#[derive(Default)]
pub struct CollapseEmitter {
    listeners: Vec<Box<dyn FnMut(bool)>>,
}

impl CollapseEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, collapsed: bool) {
        for listener in &mut self.listeners {
            listener(collapsed);
        }
    }
}

impl std::fmt::Debug for CollapseEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollapseEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = ChangeEmitter::new();

        for _ in 0..2 {
            let seen = Rc::clone(&seen);
            emitter.subscribe(move |values| {
                seen.borrow_mut().push(values.len());
            });
        }

        emitter.emit(&[Value::from("a"), Value::from("b")]);
        assert_eq!(*seen.borrow(), vec![2, 2]);
    }

    #[test]
    fn test_collapse_emitter_delivers_flag() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = CollapseEmitter::new();
        {
            let seen = Rc::clone(&seen);
            emitter.subscribe(move |collapsed| seen.borrow_mut().push(collapsed));
        }

        emitter.emit(false);
        emitter.emit(true);
        assert_eq!(*seen.borrow(), vec![false, true]);
    }
}
