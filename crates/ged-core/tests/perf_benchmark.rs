use ged_core::{Canvas, Color, MAX_HEIGHT};
use std::time::Instant;

#[test]
#[ignore] // Run manually with `cargo test --test perf_benchmark -- --nocapture --ignored`
fn benchmark_full_canvas_fill() {
    let mut canvas = Canvas::new();
    canvas.allocate(1_000, MAX_HEIGHT).expect("allocate failed");
    // A comb of vertical bars forces a long, winding fill region.
    for x in (2..1_000).step_by(4) {
        let (y1, y2) = if x % 8 == 2 { (1, MAX_HEIGHT - 1) } else { (2, MAX_HEIGHT) };
        canvas
            .draw_vertical(x, y1, y2, Color::ALL[1])
            .expect("draw failed");
    }

    let start = Instant::now();
    canvas.flood_fill(1, 1, Color::ALL[5]).expect("fill failed");
    let duration = start.elapsed();

    println!("Filled 1000x{MAX_HEIGHT} comb canvas in {:?}", duration);
}
