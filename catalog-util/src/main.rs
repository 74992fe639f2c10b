use docopt;
use log::debug;

use vsphere_metric_catalog::{catalog, MorType};

const USAGE: &'static str = "
vSphere Metric Catalog Util

Lists the performance counters the collection engine would query for one
managed object type at a given vCenter statistics level.

Usage: catalog-util [options] <mor-type>

Arguments:
    <mor-type>      One of VirtualMachine, HostSystem, Datacenter, Datastore,
                    ClusterComputeResource.

Options:
    -h --help       Show this help text
    --level=N       Configured vCenter statistics level to filter by. [default: 4]
    --percent-only  Only show counters emitted as 0-1 fractions.
    --debug         Enable debug logging.
";

fn flags() -> docopt::Docopt {
    docopt::Docopt::new(USAGE).unwrap()
}

fn init_log(argv: &docopt::ArgvMap) -> anyhow::Result<()> {
    stderrlog::new()
        .timestamp(stderrlog::Timestamp::Millisecond)
        .verbosity(if argv.get_bool("--debug") { 3 } else { 2 })
        .init()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let argv = flags().parse().unwrap_or_else(|e| e.exit());
    init_log(&argv)?;

    let type_name = argv.get_str("<mor-type>");
    let mor_type = MorType::from_name(type_name)
        .ok_or_else(|| anyhow::anyhow!("unknown managed object type {}", type_name))?;
    let level: u8 = argv
        .get_str("--level")
        .parse()
        .map_err(|_| anyhow::anyhow!("--level must be an integer 1-4"))?;

    let catalog = catalog();
    debug!("listing counters for {} at level {}", mor_type, level);
    let mut counters = catalog.counters_for(mor_type);
    // Catalog order is arbitrary so sort for the terminal.
    counters.sort_by_key(|spec| spec.name);
    for spec in counters {
        if !catalog.is_available(mor_type, spec.name, level) {
            continue;
        }
        if argv.get_bool("--percent-only") && !catalog.is_percentage(spec.name) {
            continue;
        }
        println!(
            "{}\tlevel={}\tper_instance={}\tpercent={}",
            spec.name,
            spec.collection_level,
            if catalog.is_per_instance_available(mor_type, spec.name, level) {
                "yes"
            } else {
                "no"
            },
            if catalog.is_percentage(spec.name) {
                "yes"
            } else {
                "no"
            },
        );
    }
    Ok(())
}
