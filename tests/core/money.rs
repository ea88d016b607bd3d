use rust_decimal::Decimal;

use nestegg::core::money::{
    decimal_from_f64, decimal_to_f64, money, next_multiple_of_100, remanent_from_amount,
};

use crate::common::dec;

#[test]
fn money_rounds_half_even_to_two_places() {
    assert_eq!(money(dec("2.675")), dec("2.68"));
    assert_eq!(money(dec("1.005")), dec("1.00"));
    assert_eq!(money(dec("1.015")), dec("1.02"));
    assert_eq!(money(dec("1.025")), dec("1.02"));
    assert_eq!(money(dec("-1.005")), dec("-1.00"));
    assert_eq!(money(dec("75")), dec("75"));
}

#[test]
fn ceiling_is_the_next_multiple_of_100() {
    assert_eq!(next_multiple_of_100(dec("250")), dec("300"));
    assert_eq!(next_multiple_of_100(dec("375")), dec("400"));
    assert_eq!(next_multiple_of_100(dec("0.01")), dec("100"));
    assert_eq!(next_multiple_of_100(dec("499.99")), dec("500"));
}

#[test]
fn exact_multiples_map_to_themselves() {
    assert_eq!(next_multiple_of_100(dec("300")), dec("300"));
    assert_eq!(next_multiple_of_100(dec("0")), dec("0"));
}

#[test]
fn remanent_is_ceiling_minus_amount() {
    assert_eq!(remanent_from_amount(dec("250")), dec("50"));
    assert_eq!(remanent_from_amount(dec("375")), dec("25"));
    assert_eq!(remanent_from_amount(dec("620")), dec("80"));
    assert_eq!(remanent_from_amount(dec("99.99")), dec("0.01"));
    assert_eq!(remanent_from_amount(dec("300")), dec("0"));
}

#[test]
fn wire_floats_convert_exactly() {
    assert_eq!(decimal_from_f64(250.0), dec("250"));
    assert_eq!(decimal_from_f64(0.055), dec("0.055"));
    assert_eq!(decimal_from_f64(f64::NAN), Decimal::ZERO);
    assert_eq!(decimal_from_f64(f64::INFINITY), Decimal::ZERO);
    assert!((decimal_to_f64(dec("44.94")) - 44.94).abs() < 1e-12);
}

#[test]
fn oversized_floats_saturate_out_of_range() {
    assert!(decimal_from_f64(1e300) >= dec("500000"));
    assert!(decimal_from_f64(-1e300) < Decimal::ZERO);
}
