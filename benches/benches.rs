use criterion::*;
use shapes::*;

fn box_walk(n: usize) -> Vec<Point2> {
    let m = n as f64;
    (0..n)
        .map(|x| [0.0, x as f64])
        .chain((0..n).map(|x| [x as f64, m]))
        .chain((0..n).rev().map(|x| [m, x as f64]))
        .chain((1..n).rev().map(|x| [x as f64, 0.0]))
        .collect()
}

fn vertex_text(pts: &[Point2]) -> String {
    pts.iter()
        .map(|[x, y]| format!("({},{})", x, y))
        .collect::<Vec<_>>()
        .join(",")
}

fn parsing(c: &mut Criterion) {
    c.bench_function("parse small", |b| {
        b.iter(|| parse_vertices("(0,0),(1,0),(1,1),(0,1)"))
    });
    c.bench_function("parse large", |b| {
        let text = vertex_text(&box_walk(100));
        b.iter(|| parse_vertices(&text))
    });
}

fn analyzing(c: &mut Criterion) {
    c.bench_function("analyze small", |b| {
        b.iter(|| analyze("(0,0),(4,0),(0,3)"))
    });
    c.bench_function("analyze large", |b| {
        let text = vertex_text(&box_walk(100));
        b.iter(|| analyze(&text))
    });
}

fn intersections(c: &mut Criterion) {
    c.bench_function("self intersects windowed large", |b| {
        let polygon = Polygon2::new(box_walk(100)).unwrap();
        b.iter(|| self_intersects(&polygon))
    });
    c.bench_function("self intersects all pairs large", |b| {
        let polygon = Polygon2::new(box_walk(100)).unwrap();
        b.iter(|| self_intersects_all_pairs(&polygon))
    });
}

criterion_group!(benches, parsing, analyzing, intersections);
criterion_main!(benches);
