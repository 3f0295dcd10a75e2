//! Benchmark tests for style derivation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipswitch_core::StateValue;
use flipswitch_widgets::{ToggleConfig, ToggleSwitch};

fn demo_toggle() -> ToggleSwitch {
    ToggleSwitch::new(
        ToggleConfig::new()
            .width(50)
            .margin(3)
            .font_size(10)
            .color(StateValue::pair("#BFCBD9", "#BFCBD9"))
            .switch_color(StateValue::pair("#00a388", "red"))
            .font_color(StateValue::pair("#fafafa", "#f45a32")),
    )
}

fn bench_config_build(c: &mut Criterion) {
    c.bench_function("toggle_config_build", |b| {
        b.iter(|| ToggleConfig::new().width(black_box(50)).margin(black_box(3)))
    });
}

fn bench_core_style(c: &mut Criterion) {
    let toggle = demo_toggle();
    c.bench_function("toggle_core_style", |b| b.iter(|| toggle.core_style()));
}

fn bench_button_style(c: &mut Criterion) {
    let toggle = demo_toggle();
    c.bench_function("toggle_button_style", |b| b.iter(|| toggle.button_style()));
}

fn bench_toggle_round_trip(c: &mut Criterion) {
    c.bench_function("toggle_flip_twice", |b| {
        b.iter(|| {
            let mut toggle = demo_toggle();
            toggle.toggle();
            toggle.toggle();
            toggle.is_checked()
        })
    });
}

criterion_group!(
    benches,
    bench_config_build,
    bench_core_style,
    bench_button_style,
    bench_toggle_round_trip
);
criterion_main!(benches);
