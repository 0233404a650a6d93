use criterion::{black_box, criterion_group, criterion_main, Criterion};
use montageformats::{read_ced_with, read_subject_space_mm_tsv, ChannelPositions, Montage, NumericScan};

fn bst_tsv(file: &str) -> Montage {
    read_subject_space_mm_tsv(file).unwrap()
}

fn ced(file: &str, scan: NumericScan) -> ChannelPositions {
    read_ced_with(file, scan).unwrap()
}

fn bench_read(c: &mut Criterion) {
    c.bench_function("bst_tsv", |b| {
        b.iter(|| {
            bst_tsv(black_box(
                "resources/ElectrodeLayouts/brainstorm_electrode_positions_PhoHAle_eeg_subjectspacemm.tsv",
            ))
        })
    });
    c.bench_function("bst_tsv_gz", |b| {
        b.iter(|| bst_tsv(black_box("resources/test_data/five_rows_subjectspacemm.tsv.gz")))
    });
    c.bench_function("ced_whole_line", |b| {
        b.iter(|| ced(black_box("resources/test_data/emotiv.ced"), NumericScan::WholeLine))
    });
    c.bench_function("ced_after_label", |b| {
        b.iter(|| ced(black_box("resources/test_data/emotiv.ced"), NumericScan::AfterLabel))
    });
}

criterion_group!(benches, bench_read);
criterion_main!(benches);
