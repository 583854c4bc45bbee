use std::rc::Rc;
use yew::Reducible;

/// Reveals `target` one character at a time. Counts chars, not bytes, so
/// accented letters never split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    target: Rc<str>,
    revealed: usize,
}

pub enum TypewriterAction {
    Step,
}

impl Typewriter {
    pub fn new(target: &str) -> Self {
        Self {
            target: Rc::from(target),
            revealed: 0,
        }
    }

    pub fn text(&self) -> &str {
        match self.target.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.target[..end],
            None => &self.target,
        }
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.target.chars().count()
    }

    pub fn step(&self) -> Self {
        if self.is_done() {
            return self.clone();
        }
        Self {
            target: self.target.clone(),
            revealed: self.revealed + 1,
        }
    }
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TypewriterAction::Step if self.is_done() => self,
            TypewriterAction::Step => Rc::new(self.step()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let typewriter = Typewriter::new("Psicóloga Clínica");
        assert_eq!(typewriter.text(), "");
        assert!(!typewriter.is_done());
    }

    #[test]
    fn output_is_a_strictly_growing_prefix() {
        let target = "Psicóloga Clínica";
        let mut typewriter = Typewriter::new(target);
        let mut last_len = 0;
        while !typewriter.is_done() {
            typewriter = typewriter.step();
            let text = typewriter.text();
            assert!(target.starts_with(text));
            assert!(text.chars().count() == last_len + 1);
            last_len = text.chars().count();
        }
        assert_eq!(typewriter.text(), target);
        assert_eq!(last_len, target.chars().count());
    }

    #[test]
    fn never_exceeds_target() {
        let mut typewriter = Typewriter::new("Oi");
        for _ in 0..10 {
            typewriter = typewriter.step();
        }
        assert_eq!(typewriter.text(), "Oi");
        assert!(typewriter.is_done());
    }

    #[test]
    fn empty_target_is_done_immediately() {
        let typewriter = Typewriter::new("");
        assert!(typewriter.is_done());
        assert_eq!(typewriter.text(), "");
    }

    #[test]
    fn reducer_keeps_state_once_done() {
        let state = Rc::new(Typewriter::new("a"));
        let state = state.reduce(TypewriterAction::Step);
        assert_eq!(state.text(), "a");
        let again = state.clone().reduce(TypewriterAction::Step);
        assert!(Rc::ptr_eq(&state, &again));
    }
}
