use super::{Dataset, Example};
use serde::{Deserialize, Serialize};

/// A growable dataset that owns its examples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InMemoryDataset<O> {
    examples: Vec<Example<O>>,
}

impl<O> InMemoryDataset<O> {
    pub fn new() -> Self {
        Self {
            examples: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            examples: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, example: Example<O>) {
        self.examples.push(example);
    }

    pub fn get(&self, index: usize) -> Option<&Example<O>> {
        self.examples.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Example<O>> {
        self.examples.iter()
    }

    pub fn into_examples(self) -> Vec<Example<O>> {
        self.examples
    }
}

impl<O> Default for InMemoryDataset<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> FromIterator<Example<O>> for InMemoryDataset<O> {
    fn from_iter<I: IntoIterator<Item = Example<O>>>(iter: I) -> Self {
        Self {
            examples: iter.into_iter().collect(),
        }
    }
}

impl<O: Clone> Dataset for InMemoryDataset<O> {
    type Output = O;

    fn examples(&self) -> &[Example<O>] {
        &self.examples
    }

    fn from_examples(examples: Vec<Example<O>>) -> Self {
        Self { examples }
    }
}
