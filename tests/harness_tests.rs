// End-to-end tests driving the harness against scripted fake benchmarks.
// Each script emits the exact stdout contract of the real RVV benchmark.

use std::fs;

use rvvbench::config::BenchConfig;
use rvvbench::invoke::ProcessInvoker;
use rvvbench::runner::{self, run_benchmark_for_n};

#[cfg(unix)]
fn write_script(dir: &tempfile::TempDir, name: &str, body: &str) -> Vec<String> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    vec![path.to_str().unwrap().to_string()]
}

#[cfg(unix)]
#[test]
fn process_invoker_collects_cycles_from_valid_output() {
    let dir = tempfile::tempdir().unwrap();
    let command = write_script(
        &dir,
        "bench-ok.sh",
        "echo \"N = $1\"\n\
         echo \"Cycles ref: 1000\"\n\
         echo \"Verify RVV: OK (max diff = 0)\"\n\
         echo \"Cycles RVV: 250\"\n",
    );
    let invoker = ProcessInvoker::new(command);

    let batch = run_benchmark_for_n(&invoker, 256, 5);
    assert_eq!(batch.ref_cycles, vec![1000; 5]);
    assert_eq!(batch.rvv_cycles, vec![250; 5]);
    assert_eq!(batch.failures.total(), 0);
}

#[cfg(unix)]
#[test]
fn verification_failure_contributes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let command = write_script(
        &dir,
        "bench-fail.sh",
        "echo \"Cycles ref: 1000\"\n\
         echo \"Verify RVV: FAIL (max diff = 7)\"\n\
         echo \"Cycles RVV: 250\"\n",
    );
    let invoker = ProcessInvoker::new(command);

    let batch = run_benchmark_for_n(&invoker, 1024, 4);
    assert!(!batch.has_samples());
    assert_eq!(batch.failures.missing_marker, 4);
}

#[cfg(unix)]
#[test]
fn non_zero_exit_contributes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let command = write_script(
        &dir,
        "bench-exit.sh",
        "echo \"Verify RVV: OK\"\n\
         echo \"Cycles ref: 1000\"\n\
         echo \"Cycles RVV: 250\"\n\
         exit 3\n",
    );
    let invoker = ProcessInvoker::new(command);

    let batch = run_benchmark_for_n(&invoker, 512, 3);
    assert!(!batch.has_samples());
    assert_eq!(batch.failures.non_zero_exit, 3);
}

#[test]
fn missing_executable_counts_as_spawn_error() {
    let invoker = ProcessInvoker::new(vec!["/nonexistent/rvvbench-no-such-bin".to_string()]);

    let batch = run_benchmark_for_n(&invoker, 256, 2);
    assert!(!batch.has_samples());
    assert_eq!(batch.failures.spawn_error, 2);
}

#[cfg(unix)]
#[test]
fn full_run_builds_benchmarks_and_aggregates() {
    let dir = tempfile::tempdir().unwrap();

    // Build leaves a witness file so we can assert it ran exactly once.
    let witness = dir.path().join("built");
    let build = write_script(
        &dir,
        "compile.sh",
        &format!("echo built >> {}\n", witness.display()),
    );

    // Cycle counts scale with the requested size: ref = 10*N, rvv = N.
    let bench = write_script(
        &dir,
        "run.sh",
        "echo \"Cycles ref: $(( $1 * 10 ))\"\n\
         echo \"Verify RVV: OK (max diff = 0)\"\n\
         echo \"Cycles RVV: $1\"\n",
    );

    let config = BenchConfig::default()
        .with_sizes(vec![128, 64])
        .with_iterations(3)
        .with_build_command(build)
        .with_benchmark_command(bench.clone());
    let invoker = ProcessInvoker::new(bench);

    let results = runner::run(&config, &invoker).unwrap();

    assert_eq!(fs::read_to_string(&witness).unwrap().lines().count(), 1);
    assert_eq!(results.keys().copied().collect::<Vec<_>>(), vec![64, 128]);
    for (&size, summary) in &results {
        assert_eq!(summary.mean_ref, (size * 10) as f64);
        assert_eq!(summary.mean_rvv, size as f64);
        assert!((summary.speedup - 10.0).abs() < 1e-9);
    }
}

#[cfg(unix)]
#[test]
fn full_run_aborts_when_build_fails() {
    let dir = tempfile::tempdir().unwrap();
    let build = write_script(&dir, "compile.sh", "exit 1\n");
    let bench = write_script(&dir, "run.sh", "echo never-reached\n");

    let config = BenchConfig::default()
        .with_sizes(vec![64])
        .with_iterations(1)
        .with_build_command(build)
        .with_benchmark_command(bench.clone());
    let invoker = ProcessInvoker::new(bench);

    assert!(runner::run(&config, &invoker).is_err());
}

#[cfg(unix)]
#[test]
fn size_with_flaky_trials_keeps_only_usable_samples() {
    let dir = tempfile::tempdir().unwrap();

    // Alternates between a valid trial and a verification failure using a
    // counter file, so the batch ends up with roughly half the trials.
    let counter = dir.path().join("count");
    let bench = write_script(
        &dir,
        "flaky.sh",
        &format!(
            "c=$(cat {c} 2>/dev/null || echo 0)\n\
             echo $(( c + 1 )) > {c}\n\
             if [ $(( c % 2 )) -eq 0 ]; then\n\
             echo \"Cycles ref: 600\"\n\
             echo \"Verify RVV: OK\"\n\
             echo \"Cycles RVV: 200\"\n\
             else\n\
             echo \"Verify RVV: FAIL\"\n\
             fi\n",
            c = counter.display()
        ),
    );
    let invoker = ProcessInvoker::new(bench);

    let batch = run_benchmark_for_n(&invoker, 2048, 6);
    assert_eq!(batch.successes(), 3);
    assert_eq!(batch.failures.missing_marker, 3);
    assert_eq!(batch.ref_cycles, vec![600; 3]);
    assert_eq!(batch.rvv_cycles, vec![200; 3]);
}
