use columnar_frame::{
    ColumnType::{Numeric, Text},
    Config, DataFrame, FrameError, Workers, read_csv, read_csv_file, stat,
};

fn workers(n: usize) -> Workers {
    Workers::new(n).unwrap()
}

#[test]
fn test_unparsable_cell_fails_build() {
    let raw = [["a", "1"], ["b", ""], ["c", "x"]];
    let config = Config::new(vec![Text, Numeric]).with_column_names(["name", "value"]);

    match DataFrame::new(&raw, &config) {
        Err(FrameError::Aggregated(err)) => {
            assert_eq!(err.len(), 1);
            assert_eq!(err.errors()[0].value, "x");
        }
        other => panic!("expected aggregated error, got {other:?}"),
    }
}

#[test]
fn test_header_row_example() {
    let raw = [["id", "score"], ["1", "10.5"], ["2", ""]];
    let config = Config::new(vec![Text, Numeric]).with_header_row();
    let df = DataFrame::new(&raw, &config).unwrap();

    assert_eq!(df.row_count(), 2);
    assert_eq!(df.column_names(), vec!["id", "score"]);
    let score = df.numeric_column("score").unwrap();
    assert_eq!(score[0], 10.5);
    assert!(score[1].is_nan());
}

#[test]
fn test_duplicated_names() {
    let raw = [["1", "2"]];
    let config = Config::new(vec![Text, Numeric]).with_column_names(["id", "id"]);
    assert!(matches!(
        DataFrame::new(&raw, &config),
        Err(FrameError::DuplicatedColumnName(name)) if name == "id"
    ));
}

#[test]
fn test_row_count_matches_input() {
    for rows in [0usize, 1, 7, 64, 1_001] {
        let raw: Vec<Vec<String>> = (0..rows)
            .map(|i| vec![i.to_string(), (i as f64 / 4.0).to_string()])
            .collect();
        let config = Config::new(vec![Text, Numeric])
            .with_column_names(["k", "v"])
            .with_workers(workers(3));
        let df = DataFrame::new(&raw, &config).unwrap();
        assert_eq!(df.row_count(), rows);

        let mut with_header = vec![vec!["k".to_string(), "v".to_string()]];
        with_header.extend(raw);
        let df = DataFrame::new(&with_header, &config.with_header_row()).unwrap();
        assert_eq!(df.row_count(), rows);
    }
}

#[test]
fn test_one_and_eight_workers_agree() {
    let csv: String = (0..5_000)
        .map(|i| {
            let v = if i % 11 == 0 { String::new() } else { format!("{}", i as f64 * 0.1) };
            format!("r{i},{v},${}.{:02}\n", i % 97, i % 100)
        })
        .collect();
    let base = Config::new(vec![Text, Numeric, Text]).with_column_names(["key", "v", "price"]);

    let one = read_csv(csv.as_bytes(), &base.clone().with_workers(workers(1))).unwrap();
    let eight = read_csv(csv.as_bytes(), &base.with_workers(workers(8))).unwrap();

    let parse = |s: &str| s.trim_start_matches('$').parse::<f64>();
    one.append_numeric_column_from_text("usd", "price", parse)
        .unwrap();
    eight
        .append_numeric_column_from_text("usd", "price", parse)
        .unwrap();

    for name in ["v", "usd"] {
        let a = one.numeric_column(name).unwrap();
        let b = eight.numeric_column(name).unwrap();
        assert_eq!(a.len(), b.len());
        assert!(a.iter().zip(b.iter()).all(|(x, y)| x.to_bits() == y.to_bits()));
    }
    assert_eq!(
        one.numeric_values(&["v", "usd"]).unwrap().len(),
        eight.numeric_values(&["v", "usd"]).unwrap().len()
    );
    assert_eq!(&*one.text_column("key").unwrap(), &*eight.text_column("key").unwrap());
}

#[test]
fn test_append_keeps_existing_columns() {
    let raw = [["1", "a1"], ["2", "a2"], ["", "a3"]];
    let config = Config::new(vec![Numeric, Text]).with_column_names(["n", "code"]);
    let df = DataFrame::new(&raw, &config).unwrap();
    let before: Vec<u64> = df.numeric_column("n").unwrap().iter().map(|v| v.to_bits()).collect();

    df.append_numeric_column_from_text("code_num", "code", |s| s[1..].parse::<f64>())
        .unwrap();

    let after: Vec<u64> = df.numeric_column("n").unwrap().iter().map(|v| v.to_bits()).collect();
    assert_eq!(before, after);
    assert_eq!(df.row_count(), 3);
    assert_eq!(&*df.numeric_column("code_num").unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(&*df.text_column("code").unwrap(), &["a1", "a2", "a3"]);
}

#[test]
fn test_stats_over_window() {
    let csv = "k,v\na,1\nb,\nc,3\nd,4\n";
    let config = Config::new(vec![Text, Numeric])
        .with_header_row()
        .with_workers(workers(2));
    let df = read_csv(csv.as_bytes(), &config).unwrap();

    assert_eq!(df.row_count(), 4);
    let tail = df.tail(3);
    let v = tail.numeric_column("v").unwrap();
    assert_eq!(stat::count(&v, tail.workers()), 2);
    assert_eq!(stat::sum(&v, tail.workers()), 7.0);
    assert_eq!(stat::mean(&v, tail.workers()), 3.5);
}

#[test]
fn test_empty_numeric_cells_from_csv() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "name,score\nann,\nbob,2.5\n").unwrap();

    let config = Config::new(vec![Text, Numeric]).with_header_row();
    let df = read_csv_file(tmp.path(), &config).unwrap();
    let score = df.numeric_column("score").unwrap();
    assert!(score[0].is_nan());
    assert_eq!(score[1], 2.5);
    assert_eq!(df.render(), "name score\nann NaN\nbob 2.50000000");
}
