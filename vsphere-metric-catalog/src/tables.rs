// Copyright 2020 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Raw counter tables for the vSphere performance manager, one per managed
//! object type.
//!
//! Each row is `(name, collection_level, per_instance_level, per_instance)`.
//! Levels are the vCenter statistics levels 1 through 4; `per_instance` marks
//! counters the performance manager will break down by device when asked.

// https://code.vmware.com/apis/358/vsphere/doc/cpu_counters.html

/// One table row: counter name, minimum level for aggregate collection,
/// minimum level for per-instance collection, and whether per-instance
/// collection is supported at all.
pub type CounterRow = (&'static str, u8, u8, bool);

/// Counters reported by vCenter as percentages between 0 and 100, keyed by
/// name only. A name listed here is a percentage for every object type it
/// appears under.
pub const PERCENT_METRICS: &[&str] = &[
    "cpu.capacity.contention.avg",
    "cpu.coreUtilization.avg",
    "cpu.coreUtilization.max",
    "cpu.coreUtilization.min",
    "cpu.coreUtilization.raw",
    "cpu.corecount.contention.avg",
    "cpu.demandEntitlementRatio.latest",
    "cpu.latency.avg",
    "cpu.readiness.avg",
    "cpu.usage.avg",
    "cpu.usage.max",
    "cpu.usage.min",
    "cpu.usage.raw",
    "cpu.utilization.avg",
    "cpu.utilization.max",
    "cpu.utilization.min",
    "cpu.utilization.raw",
    "datastore.siocActiveTimePercentage.avg",
    "disk.capacity.contention.avg",
    "disk.scsiReservationCnflctsPct.avg",
    "gpu.mem.usage.avg",
    "gpu.mem.usage.max",
    "gpu.mem.usage.min",
    "gpu.mem.usage.raw",
    "gpu.utilization.avg",
    "gpu.utilization.max",
    "gpu.utilization.min",
    "gpu.utilization.raw",
    "mem.capacity.contention.avg",
    "mem.latency.avg",
    "mem.reservedCapacityPct.avg",
    "mem.usage.avg",
    "mem.usage.max",
    "mem.usage.min",
    "mem.usage.raw",
    "mem.vmfs.pbc.capMissRatio.latest",
    "power.capacity.usagePct.avg",
    "rescpu.actav1.latest",
    "rescpu.actav15.latest",
    "rescpu.actav5.latest",
    "rescpu.actpk1.latest",
    "rescpu.actpk15.latest",
    "rescpu.actpk5.latest",
    "rescpu.maxLimited1.latest",
    "rescpu.maxLimited15.latest",
    "rescpu.maxLimited5.latest",
    "rescpu.runav1.latest",
    "rescpu.runav15.latest",
    "rescpu.runav5.latest",
    "rescpu.runpk1.latest",
    "rescpu.runpk15.latest",
    "rescpu.runpk5.latest",
    "storageAdapter.OIOsPct.avg",
    "sys.diskUsage.latest",
    "sys.resourceCpuAct1.latest",
    "sys.resourceCpuAct5.latest",
    "sys.resourceCpuMaxLimited1.latest",
    "sys.resourceCpuMaxLimited5.latest",
    "sys.resourceCpuRun1.latest",
    "sys.resourceCpuRun5.latest",
    "vcResources.priviledgedcpuusage.avg",
    "vcResources.processcpuusage.avg",
    "vcResources.systemcpuusage.avg",
    "vcResources.systemnetusage.avg",
    "vcResources.usercpuusage.avg",
    "vsanDomObj.readCacheHitRate.latest",
];

/// Counters collectable from virtual machines.
pub const VM_METRICS: &[CounterRow] = &[
    ("cpu.costop.sum", 2, 3, false),
    ("cpu.demand.avg", 2, 3, false),
    ("cpu.demandEntitlementRatio.latest", 4, 4, false),
    ("cpu.entitlement.latest", 2, 3, false),
    ("cpu.idle.sum", 2, 3, true),
    ("cpu.latency.avg", 2, 3, false),
    ("cpu.maxlimited.sum", 2, 3, true),
    ("cpu.overlap.sum", 3, 3, true),
    ("cpu.readiness.avg", 4, 4, false),
    ("cpu.ready.sum", 1, 3, false),
    ("cpu.run.sum", 2, 3, true),
    ("cpu.swapwait.sum", 3, 3, false),
    ("cpu.system.sum", 3, 3, true),
    ("cpu.usage.avg", 1, 3, true),
    ("cpu.usage.max", 4, 4, true),
    ("cpu.usage.min", 4, 4, true),
    ("cpu.usage.raw", 4, 4, true),
    ("cpu.usagemhz.avg", 1, 3, false),
    ("cpu.usagemhz.max", 4, 4, false),
    ("cpu.usagemhz.min", 4, 4, false),
    ("cpu.usagemhz.raw", 4, 4, false),
    ("cpu.used.sum", 3, 3, true),
    ("cpu.wait.sum", 3, 3, false),
    ("datastore.maxTotalLatency.latest", 3, 3, false),
    ("datastore.numberReadAveraged.avg", 1, 3, false),
    ("datastore.numberWriteAveraged.avg", 1, 3, false),
    ("datastore.read.avg", 2, 2, true),
    ("datastore.totalReadLatency.avg", 1, 3, true),
    ("datastore.totalWriteLatency.avg", 1, 3, true),
    ("datastore.write.avg", 2, 2, true),
    ("disk.busResets.sum", 2, 3, true),
    ("disk.commands.sum", 2, 3, true),
    ("disk.commandsAborted.sum", 2, 3, true),
    ("disk.commandsAveraged.avg", 2, 3, true),
    ("disk.maxTotalLatency.latest", 1, 3, false),
    ("disk.numberRead.sum", 3, 3, true),
    ("disk.numberReadAveraged.avg", 1, 3, false),
    ("disk.numberWrite.sum", 3, 3, true),
    ("disk.numberWriteAveraged.avg", 1, 3, false),
    ("disk.read.avg", 2, 3, true),
    ("disk.usage.avg", 1, 3, false),
    ("disk.usage.max", 4, 4, false),
    ("disk.usage.min", 4, 4, false),
    ("disk.usage.raw", 4, 4, false),
    ("disk.write.avg", 2, 3, true),
    ("hbr.hbrNetRx.avg", 4, 4, false),
    ("hbr.hbrNetTx.avg", 4, 4, false),
    ("mem.active.avg", 2, 3, false),
    ("mem.active.max", 4, 4, false),
    ("mem.active.min", 4, 4, false),
    ("mem.active.raw", 4, 4, false),
    ("mem.activewrite.avg", 2, 3, false),
    ("mem.compressed.avg", 2, 3, false),
    ("mem.compressionRate.avg", 2, 3, false),
    ("mem.consumed.avg", 1, 3, false),
    ("mem.consumed.max", 4, 4, false),
    ("mem.consumed.min", 4, 4, false),
    ("mem.consumed.raw", 4, 4, false),
    ("mem.decompressionRate.avg", 2, 3, false),
    ("mem.entitlement.avg", 2, 3, false),
    ("mem.granted.avg", 2, 3, false),
    ("mem.granted.max", 4, 4, false),
    ("mem.granted.min", 4, 4, false),
    ("mem.granted.raw", 4, 4, false),
    ("mem.latency.avg", 2, 3, false),
    ("mem.llSwapInRate.avg", 2, 3, false),
    ("mem.llSwapOutRate.avg", 2, 3, false),
    ("mem.llSwapUsed.avg", 4, 4, false),
    ("mem.llSwapUsed.max", 4, 4, false),
    ("mem.llSwapUsed.min", 4, 4, false),
    ("mem.llSwapUsed.raw", 4, 4, false),
    ("mem.overhead.avg", 1, 1, false),
    ("mem.overhead.max", 4, 4, false),
    ("mem.overhead.min", 4, 4, false),
    ("mem.overhead.raw", 4, 4, false),
    ("mem.overheadMax.avg", 2, 3, false),
    ("mem.overheadTouched.avg", 4, 4, false),
    ("mem.shared.avg", 2, 3, false),
    ("mem.shared.max", 4, 4, false),
    ("mem.shared.min", 4, 4, false),
    ("mem.shared.raw", 4, 4, false),
    ("mem.swapin.avg", 2, 3, false),
    ("mem.swapin.max", 4, 4, false),
    ("mem.swapin.min", 4, 4, false),
    ("mem.swapin.raw", 4, 4, false),
    ("mem.swapinRate.avg", 1, 3, false),
    ("mem.swapout.avg", 2, 3, false),
    ("mem.swapout.max", 4, 4, false),
    ("mem.swapout.min", 4, 4, false),
    ("mem.swapout.raw", 4, 4, false),
    ("mem.swapoutRate.avg", 1, 3, false),
    ("mem.swapped.avg", 2, 3, false),
    ("mem.swapped.max", 4, 4, false),
    ("mem.swapped.min", 4, 4, false),
    ("mem.swapped.raw", 4, 4, false),
    ("mem.swaptarget.avg", 2, 3, false),
    ("mem.swaptarget.max", 4, 4, false),
    ("mem.swaptarget.min", 4, 4, false),
    ("mem.swaptarget.raw", 4, 4, false),
    ("mem.usage.avg", 1, 3, false),
    ("mem.usage.max", 4, 4, false),
    ("mem.usage.min", 4, 4, false),
    ("mem.usage.raw", 4, 4, false),
    ("mem.vmmemctl.avg", 1, 3, false),
    ("mem.vmmemctl.max", 4, 4, false),
    ("mem.vmmemctl.min", 4, 4, false),
    ("mem.vmmemctl.raw", 4, 4, false),
    ("mem.vmmemctltarget.avg", 2, 3, false),
    ("mem.vmmemctltarget.max", 4, 4, false),
    ("mem.vmmemctltarget.min", 4, 4, false),
    ("mem.vmmemctltarget.raw", 4, 4, false),
    ("mem.zero.avg", 2, 3, false),
    ("mem.zero.max", 4, 4, false),
    ("mem.zero.min", 4, 4, false),
    ("mem.zero.raw", 4, 4, false),
    ("mem.zipSaved.latest", 2, 3, false),
    ("mem.zipped.latest", 2, 3, false),
    ("net.broadcastRx.sum", 2, 3, true),
    ("net.broadcastTx.sum", 2, 3, true),
    ("net.bytesRx.avg", 2, 3, true),
    ("net.bytesTx.avg", 2, 3, true),
    ("net.droppedRx.sum", 2, 3, true),
    ("net.droppedTx.sum", 2, 3, true),
    ("net.multicastRx.sum", 2, 3, true),
    ("net.multicastTx.sum", 2, 3, true),
    ("net.packetsRx.sum", 2, 3, true),
    ("net.packetsTx.sum", 2, 3, true),
    ("net.pnicBytesRx.avg", 4, 4, true),
    ("net.pnicBytesTx.avg", 4, 4, true),
    ("net.received.avg", 2, 3, true),
    ("net.transmitted.avg", 2, 3, true),
    ("net.usage.avg", 1, 3, true),
    ("net.usage.max", 4, 4, true),
    ("net.usage.min", 4, 4, true),
    ("net.usage.raw", 4, 4, true),
    ("power.energy.sum", 3, 3, false),
    ("power.power.avg", 2, 3, false),
    ("rescpu.actav1.latest", 3, 3, false),
    ("rescpu.actav15.latest", 3, 3, false),
    ("rescpu.actav5.latest", 3, 3, false),
    ("rescpu.actpk1.latest", 3, 3, false),
    ("rescpu.actpk15.latest", 3, 3, false),
    ("rescpu.actpk5.latest", 3, 3, false),
    ("rescpu.maxLimited1.latest", 3, 3, false),
    ("rescpu.maxLimited15.latest", 3, 3, false),
    ("rescpu.maxLimited5.latest", 3, 3, false),
    ("rescpu.runav1.latest", 3, 3, false),
    ("rescpu.runav15.latest", 3, 3, false),
    ("rescpu.runav5.latest", 3, 3, false),
    ("rescpu.runpk1.latest", 3, 3, false),
    ("rescpu.runpk15.latest", 3, 3, false),
    ("rescpu.runpk5.latest", 3, 3, false),
    ("rescpu.sampleCount.latest", 3, 3, false),
    ("rescpu.samplePeriod.latest", 3, 3, false),
    ("sys.heartbeat.latest", 4, 4, false),
    ("sys.heartbeat.sum", 1, 3, false),
    ("sys.osUptime.latest", 4, 4, false),
    ("sys.uptime.latest", 1, 3, false),
    ("virtualDisk.busResets.sum", 2, 4, true),
    ("virtualDisk.commandsAborted.sum", 2, 4, true),
    ("virtualDisk.largeSeeks.latest", 4, 4, true),
    ("virtualDisk.mediumSeeks.latest", 4, 4, true),
    ("virtualDisk.numberReadAveraged.avg", 1, 3, true),
    ("virtualDisk.numberWriteAveraged.avg", 1, 3, true),
    ("virtualDisk.read.avg", 2, 2, true),
    ("virtualDisk.readIOSize.latest", 4, 4, true),
    ("virtualDisk.readLatencyUS.latest", 4, 4, true),
    ("virtualDisk.readLoadMetric.latest", 2, 2, true),
    ("virtualDisk.readOIO.latest", 2, 2, true),
    ("virtualDisk.smallSeeks.latest", 4, 4, true),
    ("virtualDisk.totalReadLatency.avg", 1, 3, true),
    ("virtualDisk.totalWriteLatency.avg", 1, 3, true),
    ("virtualDisk.write.avg", 2, 2, true),
    ("virtualDisk.writeIOSize.latest", 4, 4, true),
    ("virtualDisk.writeLatencyUS.latest", 4, 4, true),
    ("virtualDisk.writeLoadMetric.latest", 2, 2, true),
    ("virtualDisk.writeOIO.latest", 2, 2, true),
];

/// Counters collectable from ESXi hosts.
pub const HOST_METRICS: &[CounterRow] = &[
    ("cpu.coreUtilization.avg", 2, 3, true),
    ("cpu.coreUtilization.max", 4, 4, true),
    ("cpu.coreUtilization.min", 4, 4, true),
    ("cpu.coreUtilization.raw", 4, 4, true),
    ("cpu.costop.sum", 2, 3, false),
    ("cpu.demand.avg", 2, 3, false),
    ("cpu.idle.sum", 2, 3, true),
    ("cpu.latency.avg", 2, 3, false),
    ("cpu.readiness.avg", 4, 4, false),
    ("cpu.ready.sum", 1, 3, false),
    ("cpu.reservedCapacity.avg", 2, 3, false),
    ("cpu.swapwait.sum", 3, 3, false),
    ("cpu.totalCapacity.avg", 2, 3, false),
    ("cpu.usage.avg", 1, 3, true),
    ("cpu.usage.max", 4, 4, true),
    ("cpu.usage.min", 4, 4, true),
    ("cpu.usage.raw", 4, 4, true),
    ("cpu.usagemhz.avg", 1, 3, false),
    ("cpu.usagemhz.max", 4, 4, false),
    ("cpu.usagemhz.min", 4, 4, false),
    ("cpu.usagemhz.raw", 4, 4, false),
    ("cpu.used.sum", 3, 3, true),
    ("cpu.utilization.avg", 2, 3, true),
    ("cpu.utilization.max", 4, 4, true),
    ("cpu.utilization.min", 4, 4, true),
    ("cpu.utilization.raw", 4, 4, true),
    ("cpu.wait.sum", 3, 3, false),
    ("datastore.datastoreIops.avg", 1, 3, true),
    ("datastore.datastoreMaxQueueDepth.latest", 1, 3, true),
    ("datastore.datastoreNormalReadLatency.latest", 2, 2, true),
    ("datastore.datastoreNormalWriteLatency.latest", 2, 2, true),
    ("datastore.datastoreReadBytes.latest", 2, 2, true),
    ("datastore.datastoreReadIops.latest", 1, 3, true),
    ("datastore.datastoreReadLoadMetric.latest", 4, 4, true),
    ("datastore.datastoreReadOIO.latest", 1, 3, true),
    ("datastore.datastoreVMObservedLatency.latest", 1, 3, true),
    ("datastore.datastoreWriteBytes.latest", 2, 2, true),
    ("datastore.datastoreWriteIops.latest", 1, 3, true),
    ("datastore.datastoreWriteLoadMetric.latest", 4, 4, true),
    ("datastore.datastoreWriteOIO.latest", 1, 3, true),
    ("datastore.maxTotalLatency.latest", 3, 3, false),
    ("datastore.numberReadAveraged.avg", 1, 3, false),
    ("datastore.numberWriteAveraged.avg", 1, 3, false),
    ("datastore.read.avg", 2, 2, true),
    ("datastore.siocActiveTimePercentage.avg", 1, 3, true),
    ("datastore.sizeNormalizedDatastoreLatency.avg", 1, 3, true),
    ("datastore.totalReadLatency.avg", 1, 3, true),
    ("datastore.totalWriteLatency.avg", 1, 3, true),
    ("datastore.write.avg", 2, 2, true),
    ("disk.busResets.sum", 2, 3, true),
    ("disk.commands.sum", 2, 3, true),
    ("disk.commandsAborted.sum", 2, 3, true),
    ("disk.commandsAveraged.avg", 2, 3, true),
    ("disk.deviceLatency.avg", 1, 3, true),
    ("disk.deviceReadLatency.avg", 2, 3, true),
    ("disk.deviceWriteLatency.avg", 2, 3, true),
    ("disk.kernelLatency.avg", 2, 3, true),
    ("disk.kernelReadLatency.avg", 2, 3, true),
    ("disk.kernelWriteLatency.avg", 2, 3, true),
    ("disk.maxQueueDepth.avg", 1, 3, true),
    ("disk.maxTotalLatency.latest", 1, 3, false),
    ("disk.numberRead.sum", 3, 3, true),
    ("disk.numberReadAveraged.avg", 1, 3, false),
    ("disk.numberWrite.sum", 3, 3, true),
    ("disk.numberWriteAveraged.avg", 1, 3, false),
    ("disk.queueLatency.avg", 2, 3, true),
    ("disk.queueReadLatency.avg", 2, 3, true),
    ("disk.queueWriteLatency.avg", 2, 3, true),
    ("disk.read.avg", 2, 3, true),
    ("disk.scsiReservationCnflctsPct.avg", 4, 4, true),
    ("disk.scsiReservationConflicts.sum", 2, 2, true),
    ("disk.totalLatency.avg", 3, 3, true),
    ("disk.totalReadLatency.avg", 2, 3, true),
    ("disk.totalWriteLatency.avg", 2, 3, true),
    ("disk.usage.avg", 1, 3, false),
    ("disk.usage.max", 4, 4, false),
    ("disk.usage.min", 4, 4, false),
    ("disk.usage.raw", 4, 4, false),
    ("disk.write.avg", 2, 3, true),
    ("hbr.hbrNetRx.avg", 4, 4, false),
    ("hbr.hbrNetTx.avg", 4, 4, false),
    ("hbr.hbrNumVms.avg", 4, 4, false),
    ("mem.active.avg", 2, 3, false),
    ("mem.active.max", 4, 4, false),
    ("mem.active.min", 4, 4, false),
    ("mem.active.raw", 4, 4, false),
    ("mem.activewrite.avg", 2, 3, false),
    ("mem.compressed.avg", 2, 3, false),
    ("mem.compressionRate.avg", 2, 3, false),
    ("mem.consumed.avg", 1, 3, false),
    ("mem.consumed.max", 4, 4, false),
    ("mem.consumed.min", 4, 4, false),
    ("mem.consumed.raw", 4, 4, false),
    ("mem.consumed.userworlds.avg", 2, 4, false),
    ("mem.consumed.vms.avg", 2, 4, false),
    ("mem.decompressionRate.avg", 2, 3, false),
    ("mem.granted.avg", 2, 3, false),
    ("mem.granted.max", 4, 4, false),
    ("mem.granted.min", 4, 4, false),
    ("mem.granted.raw", 4, 4, false),
    ("mem.heap.avg", 4, 4, false),
    ("mem.heap.max", 4, 4, false),
    ("mem.heap.min", 4, 4, false),
    ("mem.heap.raw", 4, 4, false),
    ("mem.heapfree.avg", 4, 4, false),
    ("mem.heapfree.max", 4, 4, false),
    ("mem.heapfree.min", 4, 4, false),
    ("mem.heapfree.raw", 4, 4, false),
    ("mem.latency.avg", 2, 3, false),
    ("mem.llSwapIn.avg", 4, 4, false),
    ("mem.llSwapIn.max", 4, 4, false),
    ("mem.llSwapIn.min", 4, 4, false),
    ("mem.llSwapIn.raw", 4, 4, false),
    ("mem.llSwapInRate.avg", 2, 3, false),
    ("mem.llSwapOut.avg", 4, 4, false),
    ("mem.llSwapOut.max", 4, 4, false),
    ("mem.llSwapOut.min", 4, 4, false),
    ("mem.llSwapOut.raw", 4, 4, false),
    ("mem.llSwapOutRate.avg", 2, 3, false),
    ("mem.llSwapUsed.avg", 4, 4, false),
    ("mem.llSwapUsed.max", 4, 4, false),
    ("mem.llSwapUsed.min", 4, 4, false),
    ("mem.llSwapUsed.raw", 4, 4, false),
    ("mem.lowfreethreshold.avg", 2, 3, false),
    ("mem.overhead.avg", 1, 1, false),
    ("mem.overhead.max", 4, 4, false),
    ("mem.overhead.min", 4, 4, false),
    ("mem.overhead.raw", 4, 4, false),
    ("mem.reservedCapacity.avg", 2, 3, false),
    ("mem.shared.avg", 2, 3, false),
    ("mem.shared.max", 4, 4, false),
    ("mem.shared.min", 4, 4, false),
    ("mem.shared.raw", 4, 4, false),
    ("mem.sharedcommon.avg", 2, 3, false),
    ("mem.sharedcommon.max", 4, 4, false),
    ("mem.sharedcommon.min", 4, 4, false),
    ("mem.sharedcommon.raw", 4, 4, false),
    ("mem.state.latest", 2, 3, false),
    ("mem.swapin.avg", 2, 3, false),
    ("mem.swapin.max", 4, 4, false),
    ("mem.swapin.min", 4, 4, false),
    ("mem.swapin.raw", 4, 4, false),
    ("mem.swapinRate.avg", 1, 3, false),
    ("mem.swapout.avg", 2, 3, false),
    ("mem.swapout.max", 4, 4, false),
    ("mem.swapout.min", 4, 4, false),
    ("mem.swapout.raw", 4, 4, false),
    ("mem.swapoutRate.avg", 1, 3, false),
    ("mem.swapused.avg", 2, 3, false),
    ("mem.swapused.max", 4, 4, false),
    ("mem.swapused.min", 4, 4, false),
    ("mem.swapused.raw", 4, 4, false),
    ("mem.sysUsage.avg", 2, 3, false),
    ("mem.sysUsage.max", 4, 4, false),
    ("mem.sysUsage.min", 4, 4, false),
    ("mem.sysUsage.raw", 4, 4, false),
    ("mem.totalCapacity.avg", 2, 3, false),
    ("mem.unreserved.avg", 2, 3, false),
    ("mem.unreserved.max", 4, 4, false),
    ("mem.unreserved.min", 4, 4, false),
    ("mem.unreserved.raw", 4, 4, false),
    ("mem.usage.avg", 1, 3, false),
    ("mem.usage.max", 4, 4, false),
    ("mem.usage.min", 4, 4, false),
    ("mem.usage.raw", 4, 4, false),
    ("mem.vmfs.pbc.capMissRatio.latest", 4, 4, false),
    ("mem.vmfs.pbc.overhead.latest", 4, 4, false),
    ("mem.vmfs.pbc.size.latest", 4, 4, false),
    ("mem.vmfs.pbc.sizeMax.latest", 4, 4, false),
    ("mem.vmfs.pbc.workingSet.latest", 4, 4, false),
    ("mem.vmfs.pbc.workingSetMax.latest", 4, 4, false),
    ("mem.vmmemctl.avg", 1, 3, false),
    ("mem.vmmemctl.max", 4, 4, false),
    ("mem.vmmemctl.min", 4, 4, false),
    ("mem.vmmemctl.raw", 4, 4, false),
    ("mem.zero.avg", 2, 3, false),
    ("mem.zero.max", 4, 4, false),
    ("mem.zero.min", 4, 4, false),
    ("mem.zero.raw", 4, 4, false),
    ("net.broadcastRx.sum", 2, 3, true),
    ("net.broadcastTx.sum", 2, 3, true),
    ("net.bytesRx.avg", 2, 3, true),
    ("net.bytesTx.avg", 2, 3, true),
    ("net.droppedRx.sum", 2, 3, true),
    ("net.droppedTx.sum", 2, 3, true),
    ("net.errorsRx.sum", 2, 3, true),
    ("net.errorsTx.sum", 2, 3, true),
    ("net.multicastRx.sum", 2, 3, true),
    ("net.multicastTx.sum", 2, 3, true),
    ("net.packetsRx.sum", 2, 3, true),
    ("net.packetsTx.sum", 2, 3, true),
    ("net.received.avg", 2, 3, true),
    ("net.transmitted.avg", 2, 3, true),
    ("net.unknownProtos.sum", 2, 3, true),
    ("net.usage.avg", 1, 3, true),
    ("net.usage.max", 4, 4, true),
    ("net.usage.min", 4, 4, true),
    ("net.usage.raw", 4, 4, true),
    ("power.energy.sum", 3, 3, false),
    ("power.power.avg", 2, 3, false),
    ("power.powerCap.avg", 3, 3, false),
    ("rescpu.actav1.latest", 3, 3, false),
    ("rescpu.actav15.latest", 3, 3, false),
    ("rescpu.actav5.latest", 3, 3, false),
    ("rescpu.actpk1.latest", 3, 3, false),
    ("rescpu.actpk15.latest", 3, 3, false),
    ("rescpu.actpk5.latest", 3, 3, false),
    ("rescpu.maxLimited1.latest", 3, 3, false),
    ("rescpu.maxLimited15.latest", 3, 3, false),
    ("rescpu.maxLimited5.latest", 3, 3, false),
    ("rescpu.runav1.latest", 3, 3, false),
    ("rescpu.runav15.latest", 3, 3, false),
    ("rescpu.runav5.latest", 3, 3, false),
    ("rescpu.runpk1.latest", 3, 3, false),
    ("rescpu.runpk15.latest", 3, 3, false),
    ("rescpu.runpk5.latest", 3, 3, false),
    ("rescpu.sampleCount.latest", 3, 3, false),
    ("rescpu.samplePeriod.latest", 3, 3, false),
    ("storageAdapter.commandsAveraged.avg", 2, 2, true),
    ("storageAdapter.maxTotalLatency.latest", 3, 3, false),
    ("storageAdapter.numberReadAveraged.avg", 2, 2, true),
    ("storageAdapter.numberWriteAveraged.avg", 2, 2, true),
    ("storageAdapter.outstandingIOs.avg", 2, 2, true),
    ("storageAdapter.queueDepth.avg", 2, 2, true),
    ("storageAdapter.queueLatency.avg", 2, 2, true),
    ("storageAdapter.queued.avg", 2, 2, true),
    ("storageAdapter.read.avg", 2, 2, true),
    ("storageAdapter.totalReadLatency.avg", 2, 2, true),
    ("storageAdapter.totalWriteLatency.avg", 2, 2, true),
    ("storageAdapter.write.avg", 2, 2, true),
    ("storagePath.busResets.sum", 2, 3, true),
    ("storagePath.commandsAborted.sum", 2, 3, true),
    ("storagePath.commandsAveraged.avg", 3, 3, true),
    ("storagePath.maxTotalLatency.latest", 3, 3, false),
    ("storagePath.numberReadAveraged.avg", 3, 3, true),
    ("storagePath.numberWriteAveraged.avg", 3, 3, true),
    ("storagePath.read.avg", 3, 3, true),
    ("storagePath.totalReadLatency.avg", 3, 3, true),
    ("storagePath.totalWriteLatency.avg", 3, 3, true),
    ("storagePath.write.avg", 3, 3, true),
    ("sys.resourceCpuAct1.latest", 3, 3, true),
    ("sys.resourceCpuAct5.latest", 3, 3, true),
    ("sys.resourceCpuAllocMax.latest", 3, 3, true),
    ("sys.resourceCpuAllocMin.latest", 3, 3, true),
    ("sys.resourceCpuAllocShares.latest", 3, 3, true),
    ("sys.resourceCpuMaxLimited1.latest", 3, 3, true),
    ("sys.resourceCpuMaxLimited5.latest", 3, 3, true),
    ("sys.resourceCpuRun1.latest", 3, 3, true),
    ("sys.resourceCpuRun5.latest", 3, 3, true),
    ("sys.resourceCpuUsage.avg", 3, 3, true),
    ("sys.resourceCpuUsage.max", 4, 4, true),
    ("sys.resourceCpuUsage.min", 4, 4, true),
    ("sys.resourceCpuUsage.raw", 4, 4, true),
    ("sys.resourceFdUsage.latest", 4, 4, true),
    ("sys.resourceMemAllocMax.latest", 3, 3, true),
    ("sys.resourceMemAllocMin.latest", 3, 3, true),
    ("sys.resourceMemAllocShares.latest", 3, 3, true),
    ("sys.resourceMemConsumed.latest", 4, 4, true),
    ("sys.resourceMemCow.latest", 3, 3, true),
    ("sys.resourceMemMapped.latest", 3, 3, true),
    ("sys.resourceMemOverhead.latest", 3, 3, true),
    ("sys.resourceMemShared.latest", 3, 3, true),
    ("sys.resourceMemSwapped.latest", 3, 3, true),
    ("sys.resourceMemTouched.latest", 3, 3, true),
    ("sys.resourceMemZero.latest", 3, 3, true),
    ("sys.uptime.latest", 1, 3, false),
    ("virtualDisk.busResets.sum", 2, 4, true),
    ("virtualDisk.commandsAborted.sum", 2, 4, true),
];

/// Counters collectable from datastores.
pub const DATASTORE_METRICS: &[CounterRow] = &[
    ("datastore.busResets.sum", 2, 2, true),
    ("datastore.commandsAborted.sum", 2, 2, true),
    ("datastore.numberReadAveraged.avg", 1, 3, false),
    ("datastore.numberWriteAveraged.avg", 1, 3, false),
    ("datastore.throughput.contention.avg", 4, 4, true),
    ("datastore.throughput.usage.avg", 4, 4, true),
    ("disk.busResets.sum", 2, 3, true),
    ("disk.capacity.contention.avg", 4, 4, false),
    ("disk.capacity.latest", 1, 3, false),
    ("disk.capacity.provisioned.avg", 4, 4, false),
    ("disk.capacity.usage.avg", 4, 4, true),
    ("disk.numberReadAveraged.avg", 1, 3, false),
    ("disk.numberWriteAveraged.avg", 1, 3, false),
    ("disk.provisioned.latest", 1, 1, true),
    ("disk.unshared.latest", 1, 1, true),
    ("disk.used.latest", 1, 1, true),
];

/// Counters collectable from datacenters. All of these are vm operation
/// counts aggregated over the datacenter.
pub const DATACENTER_METRICS: &[CounterRow] = &[
    ("vmop.numChangeDS.latest", 1, 3, false),
    ("vmop.numChangeHost.latest", 1, 3, false),
    ("vmop.numChangeHostDS.latest", 1, 3, false),
    ("vmop.numClone.latest", 1, 3, false),
    ("vmop.numCreate.latest", 1, 3, false),
    ("vmop.numDeploy.latest", 1, 3, false),
    ("vmop.numDestroy.latest", 1, 3, false),
    ("vmop.numPoweroff.latest", 1, 3, false),
    ("vmop.numPoweron.latest", 1, 3, false),
    ("vmop.numRebootGuest.latest", 1, 3, false),
    ("vmop.numReconfigure.latest", 1, 3, false),
    ("vmop.numRegister.latest", 1, 3, false),
    ("vmop.numReset.latest", 1, 3, false),
    ("vmop.numSVMotion.latest", 1, 3, false),
    ("vmop.numShutdownGuest.latest", 1, 3, false),
    ("vmop.numStandbyGuest.latest", 1, 3, false),
    ("vmop.numSuspend.latest", 1, 3, false),
    ("vmop.numUnregister.latest", 1, 3, false),
    ("vmop.numVMotion.latest", 1, 3, false),
    ("vmop.numXVMotion.latest", 1, 3, false),
];

/// Counters collectable from compute clusters.
///
/// The clusterServices counters only exist on DRS and HA clusters; the
/// performance manager reports them as missing everywhere else, which the
/// catalog treats as an ordinary lookup miss.
pub const CLUSTER_METRICS: &[CounterRow] = &[
    ("clusterServices.cpufairness.latest", 1, 3, false),
    ("clusterServices.effectivecpu.avg", 1, 3, false),
    ("clusterServices.effectivemem.avg", 1, 3, false),
    ("clusterServices.failover.latest", 1, 3, false),
    ("clusterServices.memfairness.latest", 1, 3, false),
    ("cpu.totalmhz.avg", 1, 3, false),
    ("cpu.usage.avg", 1, 3, true),
    ("cpu.usagemhz.avg", 1, 3, false),
    ("mem.consumed.avg", 1, 3, false),
    ("mem.overhead.avg", 1, 1, false),
    ("mem.totalmb.avg", 1, 3, false),
    ("mem.usage.avg", 1, 3, false),
    ("mem.vmmemctl.avg", 1, 3, false),
    ("vmop.numChangeDS.latest", 1, 3, false),
    ("vmop.numChangeHost.latest", 1, 3, false),
    ("vmop.numChangeHostDS.latest", 1, 3, false),
    ("vmop.numClone.latest", 1, 3, false),
    ("vmop.numCreate.latest", 1, 3, false),
    ("vmop.numDeploy.latest", 1, 3, false),
    ("vmop.numDestroy.latest", 1, 3, false),
    ("vmop.numPoweroff.latest", 1, 3, false),
    ("vmop.numPoweron.latest", 1, 3, false),
    ("vmop.numRebootGuest.latest", 1, 3, false),
    ("vmop.numReconfigure.latest", 1, 3, false),
    ("vmop.numRegister.latest", 1, 3, false),
    ("vmop.numReset.latest", 1, 3, false),
    ("vmop.numSVMotion.latest", 1, 3, false),
    ("vmop.numShutdownGuest.latest", 1, 3, false),
    ("vmop.numStandbyGuest.latest", 1, 3, false),
    ("vmop.numSuspend.latest", 1, 3, false),
    ("vmop.numUnregister.latest", 1, 3, false),
    ("vmop.numVMotion.latest", 1, 3, false),
    ("vmop.numXVMotion.latest", 1, 3, false),
];

