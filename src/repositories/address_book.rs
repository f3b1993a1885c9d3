use crate::models::Record;
use crate::repositories::traits::ContactRepository;
use std::collections::HashMap;
use tracing::debug;

/// In-memory contact repository.
///
/// Records are keyed by name and iterate in the order their names were first
/// inserted. Overwriting a name keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for AddressBook {
    fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            debug!(name = %key, "Overwrote existing record");
        } else {
            self.order.push(key);
        }
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        debug!(name, "Deleted record");
        Some(removed)
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.order.iter().filter_map(|key| self.records.get(key)))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
