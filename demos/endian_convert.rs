//! Byte-order conversion of a single scalar.
//!
//! Run with: cargo run --example endian_convert

use triform::endian::to_big_endian;

fn main() {
    let native = 0x2143_6587u32;
    let wire = to_big_endian(native);

    println!("native: {:08x}", native);
    println!("wire:   {:08x}", wire);

    // Applying the conversion twice restores the original.
    assert_eq!(to_big_endian(wire), native);
}
