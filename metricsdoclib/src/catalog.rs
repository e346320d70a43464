//! Descriptor sources.
//!
//! [`builtin`] returns the fixed list of runtime metric descriptors this
//! tool documents. [`load_json`] reads an alternative list from a JSON
//! file, which is how descriptor sets from other runtime versions are fed
//! in.

use std::fs;
use std::path::Path;

use crate::descriptor::{Descriptor, ValueKind};
use crate::descriptor::ValueKind::{Float64, Float64Histogram, Uint64};
use crate::error::CatalogError;

const BUILTIN: &[(&str, ValueKind, bool, &str)] = &[
    (
        "/cgo/go-to-c-calls:calls",
        Uint64,
        true,
        "Count of calls made from Go to C by the current process.",
    ),
    (
        "/cpu/classes/gc/mark/assist:cpu-seconds",
        Float64,
        true,
        "Estimated total CPU time goroutines spent performing GC tasks to assist the GC and prevent it from falling behind the application. This metric is an overestimate, and not directly comparable to system CPU time measurements. Compare only with other /cpu/classes metrics.",
    ),
    (
        "/cpu/classes/gc/mark/dedicated:cpu-seconds",
        Float64,
        true,
        "Estimated total CPU time spent performing GC tasks on processors (as defined by GOMAXPROCS) dedicated to those tasks. This metric is an overestimate, and not directly comparable to system CPU time measurements. Compare only with other /cpu/classes metrics.",
    ),
    (
        "/cpu/classes/gc/pause:cpu-seconds",
        Float64,
        true,
        "Estimated total CPU time spent with the application paused by the GC. Even if only one thread is running during the pause, this is computed as GOMAXPROCS times the pause latency because nothing else can be executing. This metric is an overestimate, and not directly comparable to system CPU time measurements. Compare only with other /cpu/classes metrics.",
    ),
    (
        "/cpu/classes/gc/total:cpu-seconds",
        Float64,
        true,
        "Estimated total CPU time spent performing GC tasks. This metric is an overestimate, and not directly comparable to system CPU time measurements. Compare only with other /cpu/classes metrics. Sum of all metrics in /cpu/classes/gc.",
    ),
    (
        "/cpu/classes/idle:cpu-seconds",
        Float64,
        true,
        "Estimated total available CPU time not spent executing any Go or Go runtime code. In other words, the part of /cpu/classes/total:cpu-seconds that was unused. This metric is an overestimate, and not directly comparable to system CPU time measurements. Compare only with other /cpu/classes metrics.",
    ),
    (
        "/cpu/classes/scavenge/total:cpu-seconds",
        Float64,
        true,
        "Estimated total CPU time spent performing tasks that return unused memory to the underlying platform. This metric is an overestimate, and not directly comparable to system CPU time measurements. Compare only with other /cpu/classes metrics.",
    ),
    (
        "/cpu/classes/total:cpu-seconds",
        Float64,
        true,
        "Estimated total available CPU time for user Go code or the Go runtime, as defined by GOMAXPROCS. In other words, GOMAXPROCS integrated over the wall-clock duration this process has been executing for. This metric is an overestimate, and not directly comparable to system CPU time measurements. Compare only with other /cpu/classes metrics. Sum of all metrics in /cpu/classes.",
    ),
    (
        "/cpu/classes/user:cpu-seconds",
        Float64,
        true,
        "Estimated total CPU time spent running user Go code. This may also include some small amount of time spent in the Go runtime. This metric is an overestimate, and not directly comparable to system CPU time measurements. Compare only with other /cpu/classes metrics.",
    ),
    (
        "/gc/cycles/automatic:gc-cycles",
        Uint64,
        true,
        "Count of completed GC cycles generated by the Go runtime.",
    ),
    (
        "/gc/cycles/forced:gc-cycles",
        Uint64,
        true,
        "Count of completed GC cycles forced by the application.",
    ),
    (
        "/gc/cycles/total:gc-cycles",
        Uint64,
        true,
        "Count of all completed GC cycles.",
    ),
    (
        "/gc/gogc:percent",
        Uint64,
        false,
        "Heap size target percentage configured by the user, otherwise 100. This value is set by the GOGC environment variable, and the runtime/debug.SetGCPercent function.",
    ),
    (
        "/gc/gomemlimit:bytes",
        Uint64,
        false,
        "Go runtime memory limit configured by the user, otherwise math.MaxInt64. This value is set by the GOMEMLIMIT environment variable, and the runtime/debug.SetMemoryLimit function.",
    ),
    (
        "/gc/heap/allocs-by-size:bytes",
        Float64Histogram,
        true,
        "Distribution of heap allocations by approximate size. Bucket counts increase monotonically. Note that this does not include tiny objects as defined by /gc/heap/tiny/allocs:objects, only tiny blocks.",
    ),
    (
        "/gc/heap/allocs:bytes",
        Uint64,
        true,
        "Cumulative sum of memory allocated to the heap by the application.",
    ),
    (
        "/gc/heap/allocs:objects",
        Uint64,
        true,
        "Cumulative count of heap allocations triggered by the application. Note that this does not include tiny objects as defined by /gc/heap/tiny/allocs:objects, only tiny blocks.",
    ),
    (
        "/gc/heap/frees-by-size:bytes",
        Float64Histogram,
        true,
        "Distribution of freed heap allocations by approximate size. Bucket counts increase monotonically. Note that this does not include tiny objects as defined by /gc/heap/tiny/allocs:objects, only tiny blocks.",
    ),
    (
        "/gc/heap/frees:bytes",
        Uint64,
        true,
        "Cumulative sum of heap memory freed by the garbage collector.",
    ),
    (
        "/gc/heap/frees:objects",
        Uint64,
        true,
        "Cumulative count of heap allocations whose storage was freed by the garbage collector. Note that this does not include tiny objects as defined by /gc/heap/tiny/allocs:objects, only tiny blocks.",
    ),
    (
        "/gc/heap/goal:bytes",
        Uint64,
        false,
        "Heap size target for the end of the GC cycle.",
    ),
    (
        "/gc/heap/live:bytes",
        Uint64,
        false,
        "Heap memory occupied by live objects that were marked by the previous GC.",
    ),
    (
        "/gc/heap/objects:objects",
        Uint64,
        false,
        "Number of objects, live or unswept, occupying heap memory.",
    ),
    (
        "/gc/heap/tiny/allocs:objects",
        Uint64,
        true,
        "Count of small allocations that are packed together into blocks. These allocations are counted separately from other allocations because each individual allocation is not tracked by the runtime, only their block. Each block is already accounted for in allocs-by-size and frees-by-size.",
    ),
    (
        "/gc/limiter/last-enabled:gc-cycle",
        Uint64,
        false,
        "GC cycle the last time the GC CPU limiter was enabled. This metric is useful for diagnosing the root cause of an out-of-memory error, because the limiter trades memory for CPU time when the GC's CPU time gets too high. This is most likely to occur with use of SetMemoryLimit. The first GC cycle is cycle 1, so a value of 0 indicates that it was never enabled.",
    ),
    (
        "/gc/pauses:seconds",
        Float64Histogram,
        true,
        "Distribution of individual GC-related stop-the-world pause latencies. Bucket counts increase monotonically.",
    ),
    (
        "/gc/scan/globals:bytes",
        Uint64,
        false,
        "The total amount of global variable space that is scannable.",
    ),
    (
        "/gc/scan/heap:bytes",
        Uint64,
        false,
        "The total amount of heap space that is scannable.",
    ),
    (
        "/gc/scan/stack:bytes",
        Uint64,
        false,
        "The number of bytes of stack that were scanned last GC cycle.",
    ),
    (
        "/gc/scan/total:bytes",
        Uint64,
        false,
        "The total amount space that is scannable. Sum of all metrics in /gc/scan.",
    ),
    (
        "/gc/stack/starting-size:bytes",
        Uint64,
        false,
        "The stack size of new goroutines.",
    ),
    (
        "/memory/classes/heap/free:bytes",
        Uint64,
        false,
        "Memory that is completely free and eligible to be returned to the underlying system, but has not been. This metric is the runtime's estimate of free address space that is backed by physical memory.",
    ),
    (
        "/memory/classes/heap/objects:bytes",
        Uint64,
        false,
        "Memory occupied by live objects and dead objects that have not yet been marked free by the garbage collector.",
    ),
    (
        "/memory/classes/heap/released:bytes",
        Uint64,
        false,
        "Memory that is completely free and has been returned to the underlying system. This metric is the runtime's estimate of free address space that is still mapped into the process, but is not backed by physical memory.",
    ),
    (
        "/memory/classes/heap/stacks:bytes",
        Uint64,
        false,
        "Memory allocated from the heap that is reserved for stack space, whether or not it is currently in-use. Currently, this represents all stack memory for goroutines. It also includes all OS thread stacks in non-cgo programs.",
    ),
    (
        "/memory/classes/heap/unused:bytes",
        Uint64,
        false,
        "Memory that is reserved for heap objects but is not currently used to hold heap objects.",
    ),
    (
        "/memory/classes/metadata/mcache/free:bytes",
        Uint64,
        false,
        "Memory that is reserved for runtime mcache structures, but not in-use.",
    ),
    (
        "/memory/classes/metadata/mcache/inuse:bytes",
        Uint64,
        false,
        "Memory that is occupied by runtime mcache structures that are currently being used.",
    ),
    (
        "/memory/classes/metadata/mspan/free:bytes",
        Uint64,
        false,
        "Memory that is reserved for runtime mspan structures, but not in-use.",
    ),
    (
        "/memory/classes/metadata/mspan/inuse:bytes",
        Uint64,
        false,
        "Memory that is occupied by runtime mspan structures that are currently being used.",
    ),
    (
        "/memory/classes/metadata/other:bytes",
        Uint64,
        false,
        "Memory that is reserved for or used to hold runtime metadata.",
    ),
    (
        "/memory/classes/os-stacks:bytes",
        Uint64,
        false,
        "Stack memory allocated by the underlying operating system. In non-cgo programs this metric is currently zero. This may change in the future. In cgo programs this metric includes OS thread stacks allocated directly from the OS.",
    ),
    (
        "/memory/classes/other:bytes",
        Uint64,
        false,
        "Memory used by execution trace buffers, structures for debugging the runtime, finalizer and profiler specials, and more.",
    ),
    (
        "/memory/classes/profiling/buckets:bytes",
        Uint64,
        false,
        "Memory that is used by the stack trace hash map used for profiling.",
    ),
    (
        "/memory/classes/total:bytes",
        Uint64,
        false,
        "All memory mapped by the Go runtime into the current process as read-write. Note that this does not include memory mapped by code called via cgo or via the syscall package. Sum of all metrics in /memory/classes.",
    ),
    (
        "/sched/gomaxprocs:threads",
        Uint64,
        false,
        "The current runtime.GOMAXPROCS setting, or the number of operating system threads that can execute user-level Go code simultaneously.",
    ),
    (
        "/sched/goroutines:goroutines",
        Uint64,
        false,
        "Count of live goroutines.",
    ),
    (
        "/sched/latencies:seconds",
        Float64Histogram,
        true,
        "Distribution of the time goroutines have spent in the scheduler in a runnable state before actually running. Bucket counts increase monotonically.",
    ),
    (
        "/sync/mutex/wait/total:seconds",
        Float64,
        true,
        "Approximate cumulative time goroutines have spent blocked on a sync.Mutex, sync.RWMutex, or runtime-internal lock. This metric is useful for identifying global changes in lock contention. Collect a mutex or block profile using the runtime/pprof package for more detailed contention data.",
    ),
];

/// The built-in runtime metric descriptors, in their fixed order.
pub fn builtin() -> Vec<Descriptor> {
    BUILTIN
        .iter()
        .map(|&(name, kind, cumulative, description)| {
            Descriptor::new(name, kind, cumulative, description)
        })
        .collect()
}

/// Load a descriptor list from a JSON file.
///
/// The file holds an array of objects with `name`, `kind` (numeric code),
/// `cumulative` and `description` fields.
pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<Descriptor>, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let descriptors: Vec<Descriptor> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = descriptors.len(), "loaded descriptors");
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_is_not_empty() {
        assert!(!builtin().is_empty());
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let descriptors = builtin();
        let names: HashSet<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), descriptors.len());
    }

    #[test]
    fn test_builtin_contains_heap_allocs() {
        let desc = builtin()
            .into_iter()
            .find(|d| d.name == "/gc/heap/allocs:bytes")
            .unwrap();
        assert_eq!(desc.kind, ValueKind::Uint64);
        assert!(desc.cumulative);
    }

    #[test]
    fn test_builtin_kinds_are_known() {
        assert!(builtin()
            .iter()
            .all(|d| !matches!(d.kind, ValueKind::Unknown(_) | ValueKind::Bad)));
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        fs::write(
            &path,
            r#"[
                {"name": "/a:bytes", "kind": 1, "cumulative": true, "description": "first"},
                {"name": "/b:seconds", "kind": 3, "cumulative": false, "description": "second"}
            ]"#,
        )
        .unwrap();

        let descriptors = load_json(&path).unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name, "/a:bytes");
        assert_eq!(descriptors[1].kind, ValueKind::Float64Histogram);
    }

    #[test]
    fn test_load_json_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_json(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_json_invalid_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"name": "not a list"}"#).unwrap();

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
