use super::*;
use shared::models::MenuItem;

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    assert_ne!(a + b, 0.3);

    let sum = to_decimal(a).unwrap() + to_decimal(b).unwrap();
    assert_eq!(sum, Decimal::new(3, 1));
    assert_eq!(to_f64(sum), 0.3);
}

#[test]
fn test_to_decimal_rejects_non_finite() {
    assert_eq!(to_decimal(f64::NAN), None);
    assert_eq!(to_decimal(f64::INFINITY), None);
    assert_eq!(to_decimal(f64::NEG_INFINITY), None);
}

#[test]
fn test_to_decimal_rounds_to_cents() {
    assert_eq!(to_decimal(45.556), Some(Decimal::new(4556, 2)));
    assert_eq!(to_decimal(88.0), Some(Decimal::from(88)));
}

#[test]
fn test_accumulation_precision() {
    // Add 0.10 a thousand times, then take half of them back out
    let item = MenuItem::new(1, "Agua", Decimal::new(10, 2));
    let mut total = Decimal::ZERO;
    for _ in 0..1000 {
        total += item.price;
    }
    for _ in 0..500 {
        total -= item.price;
    }
    assert_eq!(total, Decimal::from(50));
}

#[test]
fn test_format_price() {
    assert_eq!(format_price(Decimal::from(45)), "$45");
    assert_eq!(format_price(Decimal::new(4550, 2)), "$45.50");
    assert_eq!(format_price(Decimal::new(455, 1)), "$45.50");
    assert_eq!(format_price(Decimal::new(45000, 3)), "$45");
}

#[test]
fn test_max_price() {
    assert_eq!(MAX_PRICE, Decimal::from(1_000_000));
}
