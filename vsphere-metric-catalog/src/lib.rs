//! Read-only catalog of the vSphere performance counters the collection
//! engine is allowed to query, keyed by managed object type and counter name.
//!
//! The catalog is built once from the const tables in [`tables`] and is never
//! mutated afterwards, so a single instance can be shared by any number of
//! reader threads without synchronization. Use [`catalog`] for the
//! process-wide instance.

use std::collections::{HashMap, HashSet};

pub mod tables;

use tables::{
    CounterRow, CLUSTER_METRICS, DATACENTER_METRICS, DATASTORE_METRICS, HOST_METRICS,
    PERCENT_METRICS, VM_METRICS,
};

/// The managed object types the catalog keeps counter tables for.
///
/// This is a closed set. Each type has its own independently maintained
/// table; there is no fallback from one type to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorType {
    VirtualMachine,
    HostSystem,
    Datacenter,
    Datastore,
    ClusterComputeResource,
}

impl MorType {
    pub const ALL: [MorType; 5] = [
        MorType::VirtualMachine,
        MorType::HostSystem,
        MorType::Datacenter,
        MorType::Datastore,
        MorType::ClusterComputeResource,
    ];

    /// The vim type name, as it appears in vCenter inventory paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            MorType::VirtualMachine => "VirtualMachine",
            MorType::HostSystem => "HostSystem",
            MorType::Datacenter => "Datacenter",
            MorType::Datastore => "Datastore",
            MorType::ClusterComputeResource => "ClusterComputeResource",
        }
    }

    /// Parse a vim type name. Unknown names are a miss, not an error.
    pub fn from_name(name: &str) -> Option<MorType> {
        for mor_type in MorType::ALL.iter() {
            if mor_type.as_str() == name {
                return Some(*mor_type);
            }
        }
        return None;
    }

    fn table(&self) -> &'static [CounterRow] {
        match self {
            MorType::VirtualMachine => VM_METRICS,
            MorType::HostSystem => HOST_METRICS,
            MorType::Datacenter => DATACENTER_METRICS,
            MorType::Datastore => DATASTORE_METRICS,
            MorType::ClusterComputeResource => CLUSTER_METRICS,
        }
    }
}

impl std::fmt::Display for MorType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry for a (managed object type, counter name) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSpec {
    /// Dotted group.property.rollup identifier, e.g. `cpu.usage.avg`.
    pub name: &'static str,
    /// Minimum vCenter statistics level for aggregate collection.
    pub collection_level: u8,
    /// Minimum statistics level for per-instance collection. Always at
    /// least `collection_level`.
    pub per_instance_level: u8,
    /// Whether the performance manager supports per-device breakdown for
    /// this counter at all.
    pub per_instance: bool,
}

impl CounterSpec {
    fn from_row(row: &CounterRow) -> Self {
        let (name, collection_level, per_instance_level, per_instance) = *row;
        CounterSpec {
            name,
            collection_level,
            per_instance_level,
            per_instance,
        }
    }
}

/// The catalog registry. Immutable once constructed.
///
/// Every query is a total function over the fixed dataset: an unknown
/// counter name or an out-of-range level is an ordinary miss reported as
/// `false`/`None`/empty, never a panic. Whether a miss is worth a warning
/// is the caller's call.
pub struct MetricCatalog {
    defs: HashMap<MorType, HashMap<&'static str, CounterSpec>>,
    percent: HashSet<&'static str>,
}

impl MetricCatalog {
    pub fn new() -> Self {
        let mut defs = HashMap::new();
        for mor_type in MorType::ALL.iter() {
            let mut table = HashMap::new();
            for row in mor_type.table() {
                table.insert(row.0, CounterSpec::from_row(row));
            }
            defs.insert(*mor_type, table);
        }
        let percent = PERCENT_METRICS.iter().copied().collect();
        MetricCatalog { defs, percent }
    }

    /// Look up the entry for a counter on one object type.
    pub fn spec_for(&self, mor_type: MorType, name: &str) -> Option<&CounterSpec> {
        self.defs.get(&mor_type).and_then(|table| table.get(name))
    }

    /// All counters registered for an object type, in no particular order.
    pub fn counters_for(&self, mor_type: MorType) -> Vec<CounterSpec> {
        match self.defs.get(&mor_type) {
            Some(table) => table.values().copied().collect(),
            None => Vec::new(),
        }
    }

    /// True iff the counter exists for this object type and the configured
    /// level is high enough to collect it in aggregate form.
    pub fn is_available(&self, mor_type: MorType, name: &str, level: u8) -> bool {
        match self.spec_for(mor_type, name) {
            Some(spec) => level >= spec.collection_level,
            None => false,
        }
    }

    /// True iff the counter exists, supports per-device breakdown, and the
    /// configured level is high enough to request it.
    pub fn is_per_instance_available(&self, mor_type: MorType, name: &str, level: u8) -> bool {
        match self.spec_for(mor_type, name) {
            Some(spec) => spec.per_instance && level >= spec.per_instance_level,
            None => false,
        }
    }

    /// True iff vCenter reports this counter as a 0-100 percentage. Keyed
    /// by name only; the answer is the same for every object type.
    pub fn is_percentage(&self, name: &str) -> bool {
        self.percent.contains(name)
    }

    /// Rescale a raw sample: percentage counters come back from vCenter in
    /// 0-100 and are emitted as a 0-1 fraction, everything else passes
    /// through untouched.
    pub fn normalize_value(&self, name: &str, raw: f64) -> f64 {
        if self.is_percentage(name) {
            return raw / 100.0;
        }
        return raw;
    }
}

impl Default for MetricCatalog {
    fn default() -> Self {
        MetricCatalog::new()
    }
}

lazy_static::lazy_static! {
    static ref CATALOG: MetricCatalog = MetricCatalog::new();
}

/// The process-wide catalog, built on first use before any reader sees it.
pub fn catalog() -> &'static MetricCatalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_instance_level_never_below_collection_level() {
        for mor_type in MorType::ALL.iter() {
            for (name, collection_level, per_instance_level, _) in mor_type.table() {
                assert!(
                    per_instance_level >= collection_level,
                    "{} {}: per instance level {} below collection level {}",
                    mor_type,
                    name,
                    per_instance_level,
                    collection_level
                );
            }
        }
    }

    #[test]
    fn levels_stay_in_range() {
        for mor_type in MorType::ALL.iter() {
            for (name, collection_level, per_instance_level, _) in mor_type.table() {
                assert!(
                    (1..=4).contains(collection_level),
                    "{} {}: collection level {} out of range",
                    mor_type,
                    name,
                    collection_level
                );
                assert!(
                    (1..=4).contains(per_instance_level),
                    "{} {}: per instance level {} out of range",
                    mor_type,
                    name,
                    per_instance_level
                );
            }
        }
    }

    #[test]
    fn counter_names_unique_within_each_table() {
        for mor_type in MorType::ALL.iter() {
            let mut seen = HashSet::new();
            for (name, _, _, _) in mor_type.table() {
                assert!(seen.insert(*name), "{} lists {} twice", mor_type, name);
            }
        }
    }

    #[test]
    fn availability_is_monotonic_in_level() {
        let catalog = MetricCatalog::new();
        for mor_type in MorType::ALL.iter() {
            for spec in catalog.counters_for(*mor_type) {
                for level in 0..spec.collection_level {
                    assert!(!catalog.is_available(*mor_type, spec.name, level));
                }
                for level in spec.collection_level..=4 {
                    assert!(catalog.is_available(*mor_type, spec.name, level));
                }
            }
        }
    }

    #[test]
    fn per_instance_availability_implies_availability() {
        let catalog = MetricCatalog::new();
        for mor_type in MorType::ALL.iter() {
            for spec in catalog.counters_for(*mor_type) {
                for level in 0..=4 {
                    if catalog.is_per_instance_available(*mor_type, spec.name, level) {
                        assert!(
                            catalog.is_available(*mor_type, spec.name, level),
                            "{} {} per instance available at level {} but not available",
                            mor_type,
                            spec.name,
                            level
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn vm_cpu_usage_becomes_per_instance_at_level_three() {
        let catalog = catalog();
        assert!(catalog.is_available(MorType::VirtualMachine, "cpu.usage.avg", 1));
        assert!(!catalog.is_per_instance_available(MorType::VirtualMachine, "cpu.usage.avg", 1));
        assert!(!catalog.is_per_instance_available(MorType::VirtualMachine, "cpu.usage.avg", 2));
        assert!(catalog.is_per_instance_available(MorType::VirtualMachine, "cpu.usage.avg", 3));
    }

    #[test]
    fn level_zero_is_a_miss_not_a_panic() {
        let catalog = catalog();
        assert!(!catalog.is_available(MorType::HostSystem, "cpu.usage.avg", 0));
        assert!(!catalog.is_per_instance_available(MorType::HostSystem, "cpu.usage.avg", 0));
    }

    #[test]
    fn unknown_counter_is_a_miss_everywhere() {
        let catalog = catalog();
        for mor_type in MorType::ALL.iter() {
            assert!(catalog.spec_for(*mor_type, "cpu.bogus.avg").is_none());
            assert!(!catalog.is_available(*mor_type, "cpu.bogus.avg", 4));
            assert!(!catalog.is_per_instance_available(*mor_type, "cpu.bogus.avg", 4));
        }
        assert!(!catalog.is_percentage("cpu.bogus.avg"));
    }

    #[test]
    fn datacenter_table_is_exactly_the_vmop_counters() {
        let counters = catalog().counters_for(MorType::Datacenter);
        assert_eq!(counters.len(), 20);
        for spec in counters {
            assert!(spec.name.starts_with("vmop."), "unexpected {}", spec.name);
            assert_eq!(spec.collection_level, 1);
            assert_eq!(spec.per_instance_level, 3);
            assert!(!spec.per_instance);
        }
    }

    #[test]
    fn percentage_membership_is_by_name_only() {
        let catalog = catalog();
        assert!(catalog.is_percentage("cpu.usage.avg"));
        assert!(!catalog.is_percentage("cpu.usagemhz.avg"));
        // cpu.usage.avg shows up under several object types and must be a
        // percentage under all of them.
        for mor_type in [
            MorType::VirtualMachine,
            MorType::HostSystem,
            MorType::ClusterComputeResource,
        ]
        .iter()
        {
            assert!(catalog.spec_for(*mor_type, "cpu.usage.avg").is_some());
            assert!(catalog.is_percentage("cpu.usage.avg"));
        }
    }

    #[test]
    fn normalize_rescales_percentages_only() {
        let catalog = catalog();
        assert_eq!(catalog.normalize_value("cpu.usage.avg", 45.0), 0.45);
        assert_eq!(catalog.normalize_value("cpu.usagemhz.avg", 45.0), 45.0);
        assert_eq!(catalog.normalize_value("cpu.usage.avg", 0.0), 0.0);
    }

    #[test]
    fn mor_type_names_round_trip() {
        for mor_type in MorType::ALL.iter() {
            assert_eq!(MorType::from_name(mor_type.as_str()), Some(*mor_type));
        }
        assert_eq!(MorType::from_name("ResourcePool"), None);
    }

    #[test]
    fn counters_for_matches_table_sizes() {
        let catalog = catalog();
        assert_eq!(catalog.counters_for(MorType::VirtualMachine).len(), VM_METRICS.len());
        assert_eq!(catalog.counters_for(MorType::HostSystem).len(), HOST_METRICS.len());
        assert_eq!(catalog.counters_for(MorType::Datastore).len(), DATASTORE_METRICS.len());
        assert_eq!(
            catalog.counters_for(MorType::ClusterComputeResource).len(),
            CLUSTER_METRICS.len()
        );
    }
}
