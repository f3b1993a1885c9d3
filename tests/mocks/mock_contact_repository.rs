use contact_book::models::Record;
use contact_book::repositories::ContactRepository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Keeps records in a plain vector and tracks method calls so tests can
/// verify which repository operations a handler used.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    records: Vec<Record>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository without counting a call.
    pub fn seed(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl ContactRepository for MockContactRepository {
    fn add_record(&mut self, record: Record) {
        self.track_call("add_record");
        match self.position(record.name().as_str()) {
            Some(i) => self.records[i] = record,
            None => self.records.push(record),
        }
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.track_call("find");
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.track_call("find_mut");
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    fn delete(&mut self, name: &str) -> Option<Record> {
        self.track_call("delete");
        let i = self.position(name)?;
        Some(self.records.remove(i))
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        self.track_call("records");
        Box::new(self.records.iter())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
