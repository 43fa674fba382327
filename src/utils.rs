//! Entropy for seeding the match RNG.
//!
//! Works in both native and WebAssembly contexts: the browser's
//! `Math.random` and clock in WASM, the system clock natively.

#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    const TWO_POW_53: f64 = 9_007_199_254_740_992.0;
    let random_bits = (js_sys::Math::random() * TWO_POW_53) as u64;
    let clock_bits = js_sys::Date::now() as u64;
    mix(random_bits ^ clock_bits.rotate_left(32))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    mix(nanos)
}

/// splitmix64 finalizer, spreads low-entropy inputs across all bits.
#[inline]
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}
