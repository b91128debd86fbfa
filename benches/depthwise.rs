use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use primr::dtype::DType;
use primr::kernels::conv::{
    depthwise_3x3s1_reference, depthwise_conv2d_3x3s1_with_width, pack_weights, PackedWeights,
    TAPS,
};
use primr::simd::{FixedWidth, NativeWidth, VectorWidth};

// ---------------------------------------------------------------------------
// Helpers: dense NHWC buffers sized for a whole tile grid
// ---------------------------------------------------------------------------

struct ConvCase {
    tile_rows: usize,
    tile_cols: usize,
    channels: usize,
    input: Vec<f32>,
    output: Vec<f32>,
    bias: Vec<f32>,
    taps: Vec<f32>,
}

impl ConvCase {
    fn new(tile_rows: usize, tile_cols: usize, channels: usize) -> Self {
        let in_len = (4 * tile_rows + 2) * (4 * tile_cols + 2) * channels;
        let out_len = (4 * tile_rows) * (4 * tile_cols) * channels;
        Self {
            tile_rows,
            tile_cols,
            channels,
            input: (0..in_len).map(|x| (x % 17) as f32 * 0.1 - 0.8).collect(),
            output: vec![0.0; out_len],
            bias: (0..channels).map(|c| c as f32 * 0.01).collect(),
            taps: (0..channels * TAPS).map(|x| (x % 7) as f32 * 0.05).collect(),
        }
    }

    fn strides(&self) -> (usize, usize, usize, usize) {
        (
            (4 * self.tile_cols + 2) * self.channels,
            self.channels,
            (4 * self.tile_cols) * self.channels,
            self.channels,
        )
    }

    fn pack(&self, lanes: usize) -> PackedWeights<f32> {
        pack_weights(&self.bias, &self.taps, lanes).unwrap()
    }

    fn output_elements(&self) -> u64 {
        self.output.len() as u64
    }
}

// ---------------------------------------------------------------------------
// Tiled kernel vs scalar reference
// ---------------------------------------------------------------------------

fn bench_tiled_vs_reference(c: &mut Criterion) {
    let mut g = c.benchmark_group("depthwise_3x3s1");

    for channels in [16, 64, 256] {
        let mut case = ConvCase::new(4, 4, channels);
        let (ld_in_row, ld_in_col, ld_out_row, ld_out_col) = case.strides();
        let lanes = NativeWidth.lanes(DType::F32);
        let packed = case.pack(lanes);

        g.throughput(Throughput::Elements(case.output_elements()));
        g.bench_with_input(BenchmarkId::new("tiled", channels), &channels, |b, _| {
            b.iter(|| unsafe {
                depthwise_conv2d_3x3s1_with_width(
                    case.tile_rows,
                    case.tile_cols,
                    case.input.as_ptr(),
                    ld_in_row,
                    ld_in_col,
                    case.output.as_mut_ptr(),
                    ld_out_row,
                    ld_out_col,
                    packed.as_ptr(),
                    case.channels,
                    0.0,
                    6.0,
                    &NativeWidth,
                );
                std::hint::black_box(case.output.as_ptr());
            })
        });

        g.bench_with_input(
            BenchmarkId::new("reference", channels),
            &channels,
            |b, _| {
                b.iter(|| unsafe {
                    depthwise_3x3s1_reference(
                        case.tile_rows,
                        case.tile_cols,
                        case.input.as_ptr(),
                        ld_in_row,
                        ld_in_col,
                        case.output.as_mut_ptr(),
                        ld_out_row,
                        ld_out_col,
                        case.bias.as_ptr(),
                        case.taps.as_ptr(),
                        case.channels,
                        0.0,
                        6.0,
                    );
                    std::hint::black_box(case.output.as_ptr());
                })
            },
        );
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Sensitivity to the injected vector width
// ---------------------------------------------------------------------------

fn bench_width_sweep(c: &mut Criterion) {
    let mut g = c.benchmark_group("depthwise_width_sweep");

    let mut case = ConvCase::new(2, 2, 128);
    let (ld_in_row, ld_in_col, ld_out_row, ld_out_col) = case.strides();

    for lanes in [1, 4, 8, 16] {
        let width = FixedWidth(lanes);
        let packed = case.pack(width.lanes(DType::F32));

        g.throughput(Throughput::Elements(case.output_elements()));
        g.bench_with_input(BenchmarkId::from_parameter(lanes), &lanes, |b, _| {
            b.iter(|| unsafe {
                depthwise_conv2d_3x3s1_with_width(
                    case.tile_rows,
                    case.tile_cols,
                    case.input.as_ptr(),
                    ld_in_row,
                    ld_in_col,
                    case.output.as_mut_ptr(),
                    ld_out_row,
                    ld_out_col,
                    packed.as_ptr(),
                    case.channels,
                    f32::NEG_INFINITY,
                    f32::INFINITY,
                    &width,
                );
                std::hint::black_box(case.output.as_ptr());
            })
        });
    }

    g.finish();
}

criterion_group!(benches, bench_tiled_vs_reference, bench_width_sweep);
criterion_main!(benches);
