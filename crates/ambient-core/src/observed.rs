/// Elements currently subscribed to sizing and visibility observation.
///
/// Membership is by handle equality; each entry keeps the fallback key that
/// was assigned when the element joined.
#[derive(Debug)]
pub struct ObservedSet<E> {
    entries: Vec<(E, String)>,
}

impl<E: PartialEq> ObservedSet<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn contains(&self, element: &E) -> bool {
        self.entries.iter().any(|(e, _)| e == element)
    }

    /// Returns false if the element was already present.
    pub fn insert(&mut self, element: E, key: String) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.entries.push((element, key));
        true
    }

    /// Returns false if the element was not present.
    pub fn remove(&mut self, element: &E) -> bool {
        match self.entries.iter().position(|(e, _)| e == element) {
            Some(i) => {
                self.entries.swap_remove(i);
                true
            }
            None => false,
        }
    }

    pub fn key_of(&self, element: &E) -> Option<&str> {
        self.entries
            .iter()
            .find(|(e, _)| e == element)
            .map(|(_, k)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: PartialEq> Default for ObservedSet<E> {
    fn default() -> Self {
        Self::new()
    }
}
