use montageformats::{read_subject_space_mm_tsv, BstElectrodes, CoordFrame, MontageformatsError};

use std::io::Write;
use std::path::PathBuf;

const FIVE_ROWS_TSV: &str = "resources/test_data/five_rows_subjectspacemm.tsv";

#[test]
fn the_five_row_demo_file_can_be_read() {
    let montage = read_subject_space_mm_tsv(FIVE_ROWS_TSV).unwrap();

    assert_eq!(4, montage.len());
    assert_eq!(&["Fz".to_string(), "Cz".to_string(), "Pz".to_string(), "Oz".to_string()], montage.ch_names());
    assert_eq!(CoordFrame::Head, montage.coord_frame());

    assert_eq!(1, montage.num_fiducials());
    assert_eq!(Some([91.2 / 1000.0, 0.0, 0.0]), montage.fiducials().nasion);
    assert_eq!(None, montage.fiducials().lpa);
    assert_eq!(None, montage.fiducials().rpa);
}

#[test]
fn coordinates_are_converted_from_millimeters_to_meters() {
    let raw = BstElectrodes::from_file(FIVE_ROWS_TSV).unwrap();
    let montage = raw.to_montage();

    for (idx, name) in raw.name.iter().enumerate() {
        let expected = [raw.x_mm[idx] / 1000.0, raw.y_mm[idx] / 1000.0, raw.z_mm[idx] / 1000.0];
        match montage.get(name) {
            Some(p) => assert_eq!(&expected, p),
            None => assert_eq!(Some(expected), montage.fiducials().get(name)),
        }
    }
    assert_eq!(Some(&[0.0605, 0.0, 0.085]), montage.get("Fz"));
}

#[test]
fn gzipped_files_are_read_like_plain_ones() {
    let plain = read_subject_space_mm_tsv(FIVE_ROWS_TSV).unwrap();
    let gz = read_subject_space_mm_tsv("resources/test_data/five_rows_subjectspacemm.tsv.gz").unwrap();
    assert_eq!(plain, gz);
}

#[test]
fn the_last_row_wins_for_duplicate_names() {
    let montage = read_subject_space_mm_tsv("resources/test_data/duplicates_subjectspacemm.tsv").unwrap();

    assert_eq!(&["F3".to_string(), "F4".to_string()], montage.ch_names());
    assert_eq!(Some(&[0.011, 0.021, 0.031]), montage.get("F3"));
    assert_eq!(Some([0.092, 0.0, 0.0]), montage.fiducials().nasion);
}

#[test]
fn a_missing_file_is_reported_before_parsing() {
    match read_subject_space_mm_tsv("resources/test_data/not_there.tsv") {
        Err(MontageformatsError::MissingFile(p)) => assert_eq!(PathBuf::from("resources/test_data/not_there.tsv"), p),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn a_malformed_row_fails_the_whole_load() {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    write!(file, "name\tx\ty\tz\nFz\t60.5\t0\t85\nCz\t0\t\t110\nPz\t-60\t0\t90\n").unwrap();
    file.flush().unwrap();

    match read_subject_space_mm_tsv(file.path()) {
        Err(MontageformatsError::InvalidNumber { row, column, .. }) => {
            assert_eq!(1, row);
            assert_eq!("y", column);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
