use rand::Rng;

/// Samples a peep length in milliseconds from `[min, max]`, rounded to the
/// nearest millisecond. Reversed bounds are swapped.
pub fn sample_duration<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let unit: f64 = rng.gen();
    let sampled = (unit * f64::from(max - min) + f64::from(min)).round() as u32;
    sampled.clamp(min, max)
}
