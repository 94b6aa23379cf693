//! Criterion benchmarks for gzip container decoding.
//!
//! Run with:
//!   cargo bench --bench gzip
//!
//! Members are synthesized from stored DEFLATE blocks so the numbers
//! isolate container overhead (header walk, CRC-32, trailer checks) plus
//! the delegate's block-copy path, with no encoder in the loop.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gzip::checksum::crc32;
use gzip::{gzip_decompress_ex, Decompressor};

/// Stored-block DEFLATE body for `payload` (BFINAL on the last block).
fn deflate_stored(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut chunks = payload.chunks(0xFFFF).peekable();
    while let Some(chunk) = chunks.next() {
        let last = chunks.peek().is_none();
        let len = chunk.len() as u16;
        out.push(u8::from(last));
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(chunk);
    }
    out
}

fn gzip_member(payload: &[u8]) -> Vec<u8> {
    let mut m = vec![0x1F, 0x8B, 0x08, 0x00, 0, 0, 0, 0, 0, 0xFF];
    m.extend_from_slice(&deflate_stored(payload));
    m.extend_from_slice(&crc32(0, payload).to_le_bytes());
    m.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    m
}

fn synthetic_text(nbytes: usize) -> Vec<u8> {
    b"A gzip member is a header, a DEFLATE payload, and an 8-byte trailer. "
        .iter()
        .copied()
        .cycle()
        .take(nbytes)
        .collect()
}

fn bench_container_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("gzip_decompress");

    for &size in &[4_096usize, 65_536, 1_048_576] {
        let payload = synthetic_text(size);
        let member = gzip_member(&payload);

        // The decompressor and output buffer are reused across iterations
        // so only the decode itself is measured.
        let mut d = Decompressor::new();
        let mut out = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("gzip_decompress_ex", size),
            &member,
            |b, member| {
                b.iter(|| gzip_decompress_ex(&mut d, member, &mut out).unwrap())
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_container_decode);
criterion_main!(benches);
