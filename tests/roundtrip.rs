//! Library-level round-trip tests across codec, store and pipeline.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use sparseboard::board::{demo_board, random_board, Grid};
use sparseboard::sparse::codec::decode_records;
use sparseboard::store::{load, load_expecting, save};
use sparseboard::{decode, encode, run, Record, RecordList, SparseError, Stage};

#[test]
fn known_example_survives_disk_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let grid = demo_board(10);

    let records = encode(&grid);
    let expected: Vec<Record> = vec![
        (10, 10, 3).into(),
        (1, 2, 1).into(),
        (2, 2, 1).into(),
        (2, 3, 2).into(),
    ];
    assert_eq!(records.as_slice(), &expected[..]);

    let path = save(&records, dir.path().join("sparsearray.dat")).unwrap();
    let loaded = load_expecting(&path, records.len()).unwrap();
    assert_eq!(loaded, records);

    let restored = decode(&loaded).unwrap();
    assert_eq!(restored, grid);
    let zeros = (0..10)
        .flat_map(|r| (0..10).map(move |c| (r, c)))
        .filter(|&(r, c)| restored.get(r, c) == Some(0))
        .count();
    assert_eq!(zeros, 97);
}

#[test]
fn random_boards_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = SmallRng::seed_from_u64(2024);
    for (i, size) in [1u32, 5, 10, 33].into_iter().enumerate() {
        for density in [0.0, 0.1, 0.6, 1.0] {
            let grid = random_board(size, density, &mut rng);
            let path = dir.path().join(format!("board-{}.dat", i));
            assert_eq!(run(&grid, &path).unwrap(), grid);
        }
    }
}

#[test]
fn arbitrary_values_and_shapes_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let grid = Grid::from_rows(&[
        vec![0, u32::MAX, 0, 0],
        vec![0, 0, 0, 0],
        vec![17, 0, 0, 3],
    ])
    .unwrap();
    let restored = run(&grid, &dir.path().join("wide.dat")).unwrap();
    assert_eq!(restored, grid);
}

#[test]
fn empty_grid_is_header_only_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let grid = Grid::new(6, 4);
    let path = save(&encode(&grid), dir.path().join("empty.dat")).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "6\t4\t0\n");

    let loaded = load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(decode(&loaded).unwrap(), grid);
}

#[test]
fn persisted_list_reloads_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = RecordList::new(50, 40);
    for (row, col, value) in [(49, 39, 7), (0, 0, 1), (12, 30, 400)] {
        list.push(Record::new(row, col, value));
    }
    let path = save(&list, dir.path().join("list.dat")).unwrap();
    assert_eq!(load(&path).unwrap(), list);
}

#[test]
fn out_of_bounds_record_is_reported() {
    let err = decode_records(&[Record::new(2, 2, 1), Record::new(5, 5, 1)]).unwrap_err();
    assert!(matches!(err, SparseError::OutOfBoundsRecord { row: 5, col: 5, .. }));
}

#[test]
fn truncated_line_is_a_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.dat");
    std::fs::write(&path, "10\t10\t1\n1\t2\n").unwrap();
    let err = load(&path).unwrap_err();
    assert!(matches!(err, SparseError::ParseFailure { line: 2, .. }));
}

#[test]
fn non_utf8_line_is_a_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.dat");
    std::fs::write(&path, b"2\t2\t1\n1\t\xff\t1\n").unwrap();
    let err = load(&path).unwrap_err();
    assert!(matches!(err, SparseError::ParseFailure { line: 2, .. }));
}

#[test]
fn huge_header_is_rejected_not_allocated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.dat");
    std::fs::write(&path, "4294967295\t4294967295\t0\n").unwrap();

    let loaded = load(&path).unwrap();
    assert_eq!(loaded.header(), Record::new(u32::MAX, u32::MAX, 0));
    let err = decode(&loaded).unwrap_err();
    assert!(matches!(err, SparseError::MalformedRecordList(_)));

    std::fs::write(&path, "100000\t100000\t0\n").unwrap();
    let err = decode(&load(&path).unwrap()).unwrap_err();
    assert!(matches!(err, SparseError::MalformedRecordList(_)));
}

#[test]
fn corrupted_file_fails_at_decode_stage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.dat");
    std::fs::write(&path, "2\t2\t1\n5\t5\t1\n").unwrap();

    let loaded = load(&path).unwrap();
    let err = decode(&loaded).unwrap_err();
    assert!(matches!(err, SparseError::OutOfBoundsRecord { .. }));
}

#[test]
fn pipeline_reports_failing_stage() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened for writing.
    let err = run(&demo_board(10), dir.path()).unwrap_err();
    assert_eq!(err.stage, Stage::Save);
}
