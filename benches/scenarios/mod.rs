mod poly;

pub use poly::bench_poly;
