//! In-memory quotation store.

use crate::error::StoreError;
use crate::quotation::Quotation;

/// Ordered, in-memory collection of quotations.
///
/// Records keep insertion order, which is also the listing order. Ids are
/// assigned as (max existing id) + 1, or 1 when the store is empty, and are
/// never renumbered by later mutations. The store holds no lock of its own;
/// callers that share it across tasks wrap it in their own synchronization.
#[derive(Debug, Clone, Default)]
pub struct QuotationStore {
    items: Vec<Quotation>,
}

impl QuotationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the fixed seed set.
    pub fn seeded() -> Self {
        let items = SEED
            .iter()
            .enumerate()
            .map(|(i, (text, author))| Quotation {
                id: i as u64 + 1,
                text: (*text).to_string(),
                author: (*author).to_string(),
            })
            .collect();
        Self { items }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[Quotation] {
        &self.items
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Result<&Quotation, StoreError> {
        self.items
            .iter()
            .find(|q| q.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new record with the next free id.
    pub fn create(&mut self, text: &str, author: &str) -> Result<Quotation, StoreError> {
        validate(text, author)?;
        let quotation = Quotation {
            id: self.next_id(),
            text: text.to_string(),
            author: author.to_string(),
        };
        self.items.push(quotation.clone());
        Ok(quotation)
    }

    /// Replace text and author of an existing record, id unchanged.
    ///
    /// Unknown ids report NotFound before the fields are validated.
    pub fn update(&mut self, id: u64, text: &str, author: &str) -> Result<Quotation, StoreError> {
        let index = self.index_of(id)?;
        validate(text, author)?;
        let quotation = &mut self.items[index];
        quotation.text = text.to_string();
        quotation.author = author.to_string();
        Ok(quotation.clone())
    }

    /// Remove a record and return it.
    pub fn delete(&mut self, id: u64) -> Result<Quotation, StoreError> {
        let index = self.index_of(id)?;
        Ok(self.items.remove(index))
    }

    fn index_of(&self, id: u64) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|q| q.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn next_id(&self) -> u64 {
        self.items.iter().map(|q| q.id).max().unwrap_or(0) + 1
    }
}

fn validate(text: &str, author: &str) -> Result<(), StoreError> {
    if text.is_empty() {
        return Err(StoreError::EmptyField("text"));
    }
    if author.is_empty() {
        return Err(StoreError::EmptyField("author"));
    }
    Ok(())
}

/// Seed records loaded at process start, ids 1..=10.
const SEED: &[(&str, &str)] = &[
    (
        "The only thing we have to fear is fear itself.",
        "Franklin D. Roosevelt",
    ),
    ("I think, therefore I am.", "René Descartes"),
    (
        "That's one small step for man, one giant leap for mankind.",
        "Neil Armstrong",
    ),
    (
        "To be, or not to be, that is the question.",
        "William Shakespeare",
    ),
    ("I have a dream.", "Martin Luther King Jr."),
    ("The unexamined life is not worth living.", "Socrates"),
    (
        "If you want to go fast, go alone. If you want to go far, go together.",
        "African Proverb",
    ),
    (
        "In the beginning, God created the heavens and the earth.",
        "Genesis",
    ),
    ("Float like a butterfly, sting like a bee.", "Muhammad Ali"),
    (
        "That's one small step for [a] man, one giant leap for mankind.",
        "Neil Armstrong (reiterated)",
    ),
];
