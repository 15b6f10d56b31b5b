use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stl_containers::collections::contiguous::Vector;
use stl_containers::collections::linked::{ForwardList, LinkedList};

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vector", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::new();
                for i in 0..size {
                    vec.push_back(black_box(i));
                }
                vec
            });
        });
        group.bench_with_input(BenchmarkId::new("forward_list", size), size, |b, &size| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for i in 0..size {
                    list.push_back(black_box(i));
                }
                list
            });
        });
        group.bench_with_input(BenchmarkId::new("linked_list", size), size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.push_back(black_box(i));
                }
                list
            });
        });
    }
    group.finish();
}

fn bench_push_mid(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_mid");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vector_insert", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::new();
                for i in 0..size {
                    vec.insert(vec.len() / 2, black_box(i));
                }
                vec
            });
        });
        group.bench_with_input(BenchmarkId::new("forward_list", size), size, |b, &size| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for i in 0..size {
                    list.push_mid(black_box(i));
                }
                list
            });
        });
        group.bench_with_input(BenchmarkId::new("linked_list", size), size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.push_mid(black_box(i));
                }
                list
            });
        });
    }
    group.finish();
}

fn bench_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_front");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vector", size), size, |b, &size| {
            b.iter(|| {
                let mut vec: Vector<usize> = (0..size).collect();
                while !vec.is_empty() {
                    black_box(vec.erase(0).unwrap());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("linked_list_cursor", size), size, |b, &size| {
            b.iter(|| {
                let mut list: LinkedList<usize> = (0..size).collect();
                let mut cursor = list.cursor_front_mut();
                while let Some(value) = cursor.remove_current() {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in [1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        let vec: Vector<usize> = (0..*size).collect();
        group.bench_with_input(BenchmarkId::new("vector", size), &vec, |b, vec| {
            b.iter(|| black_box(vec).iter().sum::<usize>());
        });

        group.bench_with_input(BenchmarkId::new("vector_positions", size), &vec, |b, vec| {
            b.iter(|| {
                let mut sum = 0;
                let mut pos = vec.begin();
                while pos != vec.end() {
                    sum += vec.get_at(pos).unwrap();
                    pos = pos.next();
                }
                black_box(sum)
            });
        });

        let forward: ForwardList<usize> = (0..*size).collect();
        group.bench_with_input(BenchmarkId::new("forward_list", size), &forward, |b, list| {
            b.iter(|| black_box(list).iter().sum::<usize>());
        });

        let linked: LinkedList<usize> = (0..*size).collect();
        group.bench_with_input(BenchmarkId::new("linked_list", size), &linked, |b, list| {
            b.iter(|| black_box(list).iter().sum::<usize>());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_mid,
    bench_erase_front,
    bench_iteration
);
criterion_main!(benches);
