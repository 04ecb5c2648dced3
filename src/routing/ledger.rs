use std::collections::BTreeMap;

use crate::cargo::CargoType;

/// A consumer node and the cargo it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DemandKey {
    pub node: usize,
    pub cargo: CargoType,
}

impl DemandKey {
    #[must_use]
    pub fn new(node: usize, cargo: CargoType) -> Self {
        Self { node, cargo }
    }
}

/// Outstanding quantity still to be routed per (consumer, cargo).
///
/// Entries whose quantity falls to `tolerance` or below are dropped.
#[derive(Debug, Clone)]
pub struct DemandLedger {
    entries: BTreeMap<DemandKey, f64>,
    tolerance: f64,
}

impl DemandLedger {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            entries: BTreeMap::new(),
            tolerance,
        }
    }

    /// Replaces the demand for `key`.
    pub fn set(&mut self, key: DemandKey, quantity: f64) {
        if quantity > self.tolerance {
            self.entries.insert(key, quantity);
        } else {
            self.entries.remove(&key);
        }
    }

    /// Adds `quantity` to the demand for `key`.
    pub fn add(&mut self, key: DemandKey, quantity: f64) {
        let total = self.get(key) + quantity;
        self.set(key, total);
    }

    /// Removes `quantity` of fulfilled demand from `key`.
    pub fn fulfil(&mut self, key: DemandKey, quantity: f64) {
        self.add(key, -quantity);
    }

    /// Outstanding quantity for `key`, zero when absent.
    #[must_use]
    pub fn get(&self, key: DemandKey) -> f64 {
        self.entries.get(&key).copied().unwrap_or(0.0)
    }

    /// Iterates over outstanding entries in key order.
    pub fn outstanding(&self) -> impl Iterator<Item = (DemandKey, f64)> + '_ {
        self.entries.iter().map(|(&key, &quantity)| (key, quantity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-6;

    #[test]
    fn add_accumulates() {
        let mut ledger = DemandLedger::new(TOL);
        let key = DemandKey::new(3, CargoType::Coal);
        ledger.add(key, 40.0);
        ledger.add(key, 60.0);
        assert_relative_eq!(ledger.get(key), 100.0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn fulfilled_entries_are_removed() {
        let mut ledger = DemandLedger::new(TOL);
        let key = DemandKey::new(0, CargoType::Food);
        ledger.set(key, 0.3);
        ledger.fulfil(key, 0.1);
        ledger.fulfil(key, 0.2);
        // 0.3 - 0.1 - 0.2 is not exactly zero in binary floating point.
        assert!(ledger.is_empty());
    }

    #[test]
    fn partial_fulfilment_keeps_entry() {
        let mut ledger = DemandLedger::new(TOL);
        let key = DemandKey::new(5, CargoType::Goods);
        ledger.set(key, 250.0);
        ledger.fulfil(key, 100.0);
        assert_relative_eq!(ledger.get(key), 150.0);
    }

    #[test]
    fn setting_zero_removes() {
        let mut ledger = DemandLedger::new(TOL);
        let key = DemandKey::new(1, CargoType::Stone);
        ledger.set(key, 10.0);
        ledger.set(key, 0.0);
        assert!(ledger.is_empty());
        assert_relative_eq!(ledger.get(key), 0.0);
    }

    #[test]
    fn outstanding_is_ordered_by_node_then_cargo() {
        let mut ledger = DemandLedger::new(TOL);
        ledger.set(DemandKey::new(2, CargoType::Stone), 1.0);
        ledger.set(DemandKey::new(1, CargoType::Food), 1.0);
        ledger.set(DemandKey::new(1, CargoType::Coal), 1.0);
        let keys: Vec<_> = ledger.outstanding().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                DemandKey::new(1, CargoType::Coal),
                DemandKey::new(1, CargoType::Food),
                DemandKey::new(2, CargoType::Stone),
            ]
        );
    }
}
