use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_cells::core::{Automaton, RuleConfig, SimpleRng};
use tui_cells::engine::Session;
use tui_cells::term::{FrameBuffer, GridView, Viewport};

fn seeded_automaton() -> Automaton {
    let mut rng = SimpleRng::new(12345);
    let config = RuleConfig::random(&mut rng);
    let mut automaton = Automaton::with_default_size(config);
    automaton.randomize(&mut rng);
    automaton
}

fn bench_tick(c: &mut Criterion) {
    let mut automaton = seeded_automaton();

    c.bench_function("tick_250x250", |b| {
        b.iter(|| {
            automaton.tick();
            black_box(automaton.generation());
        })
    });
}

fn bench_randomize(c: &mut Criterion) {
    let mut automaton = seeded_automaton();
    let mut rng = SimpleRng::new(7);

    c.bench_function("randomize_250x250", |b| {
        b.iter(|| {
            automaton.randomize(black_box(&mut rng));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = Session::new(seeded_automaton(), SimpleRng::new(1));
    let view = GridView::default();
    let viewport = Viewport::new(200, 60);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_200x60", |b| {
        b.iter(|| {
            view.render_into(black_box(&session), viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_randomize, bench_render);
criterion_main!(benches);
