use criterion::{black_box, criterion_group, criterion_main, Criterion};
use difftok_core::{diff, DataSource, DiffOptions, TokenSource};

struct LineSource {
    lines: [Vec<u32>; 2],
    cursor: [usize; 2],
}

impl LineSource {
    fn new(original: Vec<u32>, modified: Vec<u32>) -> Self {
        Self {
            lines: [original, modified],
            cursor: [0, 0],
        }
    }
}

impl TokenSource for LineSource {
    type Token = u32;
    type Error = std::convert::Infallible;

    fn open(&mut self, _sources: [DataSource; 2]) -> Result<u32, Self::Error> {
        Ok(0)
    }

    fn next_token(&mut self, source: DataSource) -> Result<Option<Self::Token>, Self::Error> {
        let idx = match source {
            DataSource::Original => 0,
            DataSource::Modified => 1,
        };
        let cursor = &mut self.cursor[idx];
        let token = self.lines[idx].get(*cursor).copied();
        if token.is_some() {
            *cursor += 1;
        }
        Ok(token)
    }

    fn token_eq(&self, a: &Self::Token, b: &Self::Token) -> bool {
        a == b
    }

    fn token_hash(&self, token: &Self::Token) -> u64 {
        *token as u64
    }
}

/// Original: 0..N. Modified: every 10th line replaced, otherwise identical —
/// a rough stand-in for a typical localized source edit.
fn sparse_edit(n: u32) -> (Vec<u32>, Vec<u32>) {
    let original: Vec<u32> = (0..n).collect();
    let modified: Vec<u32> = original
        .iter()
        .enumerate()
        .map(|(i, &v)| if i % 10 == 0 { v + n } else { v })
        .collect();
    (original, modified)
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    for &n in &[100u32, 1_000, 5_000] {
        let (original, modified) = sparse_edit(n);
        group.bench_function(format!("sparse_edit_{n}"), |b| {
            b.iter(|| {
                let mut source = LineSource::new(original.clone(), modified.clone());
                let chunks = diff(&mut source, DiffOptions::default()).unwrap();
                black_box(chunks);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_diff);
criterion_main!(benches);
