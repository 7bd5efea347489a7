// Host-side tests for texture mip generation.

#![allow(dead_code)]
mod mips {
    include!("../src/mips.rs");
}

use image::{Rgba, RgbaImage};
use mips::*;

#[test]
fn level_count_reaches_one_pixel() {
    assert_eq!(mip_level_count(1, 1), 1);
    assert_eq!(mip_level_count(2, 2), 2);
    assert_eq!(mip_level_count(256, 256), 9);
    assert_eq!(mip_level_count(1024, 64), 11);
    assert_eq!(mip_level_count(300, 7), 9);
    assert_eq!(mip_level_count(0, 0), 1);
}

#[test]
fn chain_halves_each_level() {
    let base = RgbaImage::from_pixel(64, 16, Rgba([10, 20, 30, 255]));
    let chain = mip_chain(base);
    assert_eq!(chain.len(), 7);
    let dims: Vec<_> = chain.iter().map(|l| l.dimensions()).collect();
    assert_eq!(
        dims,
        vec![(64, 16), (32, 8), (16, 4), (8, 2), (4, 1), (2, 1), (1, 1)]
    );
}

#[test]
fn flat_colour_survives_downscaling() {
    let chain = mip_chain(RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 255])));
    let last = chain.last().unwrap();
    assert_eq!(last.dimensions(), (1, 1));
    let px = last.get_pixel(0, 0).0;
    for (got, want) in px.iter().zip([200u8, 100, 50, 255]) {
        assert!(got.abs_diff(want) <= 1, "{px:?}");
    }
}

#[test]
fn single_pixel_has_one_level() {
    let chain = mip_chain(RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0])));
    assert_eq!(chain.len(), 1);
}
