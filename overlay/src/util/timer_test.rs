use super::*;

#[test]
fn delay_ms_passes_small_values() {
    assert_eq!(delay_ms(10_000), 10_000);
    assert_eq!(delay_ms(0), 0);
}

#[test]
fn delay_ms_clamps_to_signed_32_bit_range() {
    let max = u32::try_from(i32::MAX).expect("fits");
    assert_eq!(delay_ms(u64::from(max)), max);
    assert_eq!(delay_ms(u64::from(max) + 1), max);
    assert_eq!(delay_ms(3_000_000_000), max);
    assert_eq!(delay_ms(u64::from(u32::MAX)), max);
    assert_eq!(delay_ms(u64::MAX), max);
}

#[test]
fn timer_calls_are_inert_outside_browser() {
    arm_fade(5, || {});
    cancel_fade();
}
