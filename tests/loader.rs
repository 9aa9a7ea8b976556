use iq_plot::error::IqError;
use iq_plot::recording::IqSeries;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_tmp(contents: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "iq-plot-loader-{}-{}.csv",
        std::process::id(),
        n
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn header_and_two_rows() {
    let path = write_tmp("header\n1.0,2.0\n3.0,4.0\n");
    let s = IqSeries::load(&path, 1.0).unwrap();
    assert_eq!(s.q, vec![1.0, 3.0]);
    assert_eq!(s.i, vec![2.0, 4.0]);
    assert_eq!(s.time, vec![0.0, 1.0]);
    fs::remove_file(path).unwrap();
}

#[test]
fn lengths_and_time_axis() {
    let n = 1000;
    let mut contents = String::from("Q,I\n");
    for k in 0..n {
        contents.push_str(&format!("{},{}\n", k as i32 - 500, 500 - k as i32));
    }
    let path = write_tmp(&contents);
    let sample_rate = 1e6;
    let s = IqSeries::load(&path, sample_rate).unwrap();

    assert_eq!(s.len(), n);
    assert_eq!(s.i.len(), n);
    assert_eq!(s.q.len(), n);
    assert_eq!(s.time.len(), n);
    for (k, t) in s.time.iter().enumerate() {
        assert_eq!(*t, k as f64 / sample_rate);
    }
    assert_eq!(s.q[0], -500.0);
    assert_eq!(s.i[0], 500.0);
    fs::remove_file(path).unwrap();
}

#[test]
fn load_is_idempotent() {
    let path = write_tmp("Q,I\n-12,7\n0.5,1e3\n");
    let a = IqSeries::load(&path, 2e6).unwrap();
    let b = IqSeries::load(&path, 2e6).unwrap();
    assert_eq!(a, b);
    fs::remove_file(path).unwrap();
}

#[test]
fn header_only_is_empty() {
    let path = write_tmp("Q,I\n");
    let s = IqSeries::load(&path, 1e6).unwrap();
    assert!(s.is_empty());
    assert!(s.i.is_empty());
    assert!(s.q.is_empty());
    assert!(s.time.is_empty());
    fs::remove_file(path).unwrap();
}

#[test]
fn malformed_rows_are_rejected() {
    for bad in ["Q,I\n1,2\n3\n", "Q,I\n1,2\n3,4,5\n", "Q,I\n1,2\nabc,4\n", "Q,I\n1,\n"] {
        let path = write_tmp(bad);
        match IqSeries::load(&path, 1e6) {
            Err(IqError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("{:?}: unexpected result {:?}", bad, other),
        }
        fs::remove_file(path).unwrap();
    }
}

#[test]
fn missing_file_is_rejected() {
    let path = std::env::temp_dir().join("iq-plot-loader-does-not-exist.csv");
    let _ = fs::remove_file(&path);
    match IqSeries::load(&path, 1e6) {
        Err(IqError::FileAccess { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn errors_name_the_file() {
    let path = write_tmp("Q,I\n1,2\n1;2\n");
    let err = IqSeries::load(&path, 1e6).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains(&path.display().to_string()));
    assert!(msg.contains(":3:"));
    fs::remove_file(path).unwrap();
}

#[test]
fn header_line_is_skipped_verbatim() {
    for header in ["# Q,I capture", "\"Q,I", "Q,I,extra,\"quoted"] {
        let path = write_tmp(&format!("{}\n1.0,2.0\n3.0,4.0\n", header));
        let s = IqSeries::load(&path, 1.0).unwrap();
        assert_eq!(s.q, vec![1.0, 3.0], "header {:?}", header);
        assert_eq!(s.i, vec![2.0, 4.0], "header {:?}", header);
        fs::remove_file(path).unwrap();
    }
}

#[test]
fn non_finite_values_load() {
    let path = write_tmp("Q,I\nnan,inf\n2,3\n");
    let s = IqSeries::load(&path, 1.0).unwrap();
    assert!(s.q[0].is_nan());
    assert_eq!(s.i[0], f64::INFINITY);
    assert_eq!(s.len(), 2);
    fs::remove_file(path).unwrap();
}
