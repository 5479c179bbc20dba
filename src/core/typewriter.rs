/// Character-by-character reveal of a piece of text, one tick at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    emitted: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            emitted: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.emitted >= self.chars.len()
    }

    /// Advances by one character and returns the revealed prefix, or None
    /// once the full text has been emitted.
    pub fn tick(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.emitted += 1;
        Some(self.chars[..self.emitted].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut tw = Typewriter::new("Hola");
        assert_eq!(tw.tick().as_deref(), Some("H"));
        assert_eq!(tw.tick().as_deref(), Some("Ho"));
        assert_eq!(tw.tick().as_deref(), Some("Hol"));
        assert_eq!(tw.tick().as_deref(), Some("Hola"));
        assert!(tw.is_done());
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.tick(), None);
    }
}
