//! Paint a small island with the 8-bit blob variant and print its codes.
//!
//! Run with: cargo run -p autotiler --example paint_region

use autotiler::{variant_code, AutoTiler, Brush, TileLayer};

const WIDTH: u32 = 12;
const HEIGHT: u32 = 8;

fn main() {
    let mut layer = TileLayer::new("Ground".to_string(), WIDTH, HEIGHT);
    let tiler = AutoTiler::new();

    // A 3x3 block, a 2x2 block touching it, and a one-tile tail
    tiler.place_brush(&mut layer, "BW16=grass90", Brush::Triple, 2, 2);
    tiler.place_brush(&mut layer, "BW16=grass90", Brush::Double, 5, 3);
    tiler.place_tile(&mut layer, "BW16=grass90", 7, 4);

    // A fence running through, using the 4-bit variant
    for x in 1..11 {
        tiler.place_tile(&mut layer, "BW4=fence0", x, 6);
    }

    // Punch a hole in the island; the layer is cleared first, then the
    // neighbors are repaired
    layer.clear(3, 3);
    tiler.erase_tile(&mut layer, 3, 3);

    println!("Variant codes ({}x{}, Y down):", WIDTH, HEIGHT);
    for y in 0..HEIGHT as i32 {
        let row: Vec<String> = (0..WIDTH as i32)
            .map(|x| match layer.get(x, y).and_then(variant_code) {
                Some(code) => format!("{:>4}", code),
                None => "   .".to_string(),
            })
            .collect();
        println!("{}", row.join(""));
    }
}
