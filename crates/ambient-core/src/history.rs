use fnv::FnvHashMap;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionSample {
    pub width: f64,
    pub height: f64,
    pub observed_at_ms: f64,
}

/// Bounded FIFO of the most recent size samples for one element.
#[derive(Clone, Debug)]
pub struct DimensionHistory {
    samples: VecDeque<DimensionSample>,
    capacity: usize,
}

impl DimensionHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, sample: DimensionSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&DimensionSample> {
        self.samples.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DimensionSample> {
        self.samples.iter()
    }
}

/// Per-key histories; entries live until the store is dropped.
#[derive(Debug, Default)]
pub struct HistoryStore {
    histories: FnvHashMap<String, DimensionHistory>,
}

impl HistoryStore {
    pub fn record(&mut self, key: &str, sample: DimensionSample, capacity: usize) {
        match self.histories.get_mut(key) {
            Some(h) => h.push(sample),
            None => {
                let mut h = DimensionHistory::new(capacity);
                h.push(sample);
                self.histories.insert(key.to_string(), h);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&DimensionHistory> {
        self.histories.get(key)
    }

    pub fn len(&self) -> usize {
        self.histories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}
