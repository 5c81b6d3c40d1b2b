use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant and symmetric positive-definite inputs
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize, n: usize) -> f64 {
    ((i + 1) * (j + 2) % 7) as f64 / 7.0 + if i == j { n as f64 } else { 0.0 }
}

fn densolve_dd(n: usize) -> densolve::Matrixf64 {
    densolve::Matrix::from_fn(n, n, |i, j| entry(i, j, n))
}

fn nalgebra_dd(n: usize) -> nalgebra::DMatrix<f64> {
    nalgebra::DMatrix::from_fn(n, n, |i, j| entry(i, j, n))
}

fn densolve_spd(n: usize) -> densolve::Matrixf64 {
    let a = densolve_dd(n);
    &a * &a.transpose()
}

fn nalgebra_spd(n: usize) -> nalgebra::DMatrix<f64> {
    let a = nalgebra_dd(n);
    &a * a.transpose()
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul_dyn_50(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_dyn_50");

    g.bench_function("densolve", |b| {
        let a = densolve_dd(50);
        let m = densolve_spd(50);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_dd(50);
        let m = nalgebra_spd(50);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Decompositions
// ---------------------------------------------------------------------------

fn lu_dyn_20(c: &mut Criterion) {
    let mut g = c.benchmark_group("lu_dyn_20");

    g.bench_function("densolve", |b| {
        let a = densolve_dd(20);
        b.iter(|| std::hint::black_box(&a).lu())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_dd(20);
        b.iter(|| std::hint::black_box(&a).clone().lu())
    });

    g.finish();
}

fn cholesky_dyn_20(c: &mut Criterion) {
    let mut g = c.benchmark_group("cholesky_dyn_20");

    g.bench_function("densolve", |b| {
        let a = densolve_spd(20);
        b.iter(|| std::hint::black_box(&a).cholesky())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_spd(20);
        b.iter(|| std::hint::black_box(&a).clone().cholesky())
    });

    g.finish();
}

// The non-singularity check expands the determinant by cofactors, so keep
// the size small.
fn qr_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("qr_6x6");

    g.bench_function("densolve", |b| {
        let a = densolve_dd(6);
        b.iter(|| std::hint::black_box(&a).qr())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_dd(6);
        b.iter(|| std::hint::black_box(&a).clone().qr())
    });

    g.finish();
}

fn inverse_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse_6x6");

    g.bench_function("densolve", |b| {
        let a = densolve_dd(6);
        b.iter(|| std::hint::black_box(&a).inverse())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_dd(6);
        b.iter(|| std::hint::black_box(&a).clone().try_inverse())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Iterative solvers
// ---------------------------------------------------------------------------

fn svd_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("svd_6x6");

    g.bench_function("densolve", |b| {
        let a = densolve_dd(6);
        b.iter(|| std::hint::black_box(&a).svd())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_dd(6);
        b.iter(|| std::hint::black_box(&a).clone().svd(true, true))
    });

    g.finish();
}

fn eigen_symmetric_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("eigen_symmetric_6x6");

    g.bench_function("densolve", |b| {
        let a = densolve_spd(6);
        b.iter(|| std::hint::black_box(&a).eigenvalues())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_spd(6);
        b.iter(|| std::hint::black_box(&a).clone().symmetric_eigenvalues())
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    matmul_dyn_50,
    lu_dyn_20,
    cholesky_dyn_20,
    qr_6x6,
    inverse_6x6,
    svd_6x6,
    eigen_symmetric_6x6,
);
criterion_main!(benches);
