use proptest::prelude::*;

use drip_types::{format_balance, format_fixed2, scale_to_raw, Account, Ratio};

proptest! {
    /// Scaling a whole-number amount multiplies it by 10^decimals exactly.
    #[test]
    fn scale_whole_matches_u128_math(n in 0u128..1_000_000_000_000, d in 0u8..=18) {
        let raw = scale_to_raw(&n.to_string(), d).unwrap();
        prop_assert_eq!(raw.parse::<u128>().unwrap(), n * 10u128.pow(d as u32));
    }

    /// format_balance inverts scale_to_raw for whole-number inputs when
    /// enough significant digits are kept.
    #[test]
    fn format_inverts_scale_for_whole_amounts(n in 0u128..1_000_000_000_000, d in 0u8..=18) {
        let raw: u128 = scale_to_raw(&n.to_string(), d).unwrap().parse().unwrap();
        prop_assert_eq!(format_balance(raw, d, d), n.to_string());
    }

    /// Fraction digits beyond the token's decimals are always rejected.
    #[test]
    fn scale_rejects_deeper_precision(n in 0u64..1000, d in 0u8..10) {
        let input = format!("{n}.{}", "1".repeat(d as usize + 1));
        prop_assert!(scale_to_raw(&input, d).is_err());
    }

    /// format_fixed2 output always has exactly two fraction digits.
    #[test]
    fn fixed2_shape(s in "[0-9]{0,12}(\\.[0-9]{0,6})?") {
        let out = format_fixed2(&s);
        let (_, frac) = out.split_once('.').unwrap();
        prop_assert_eq!(frac.len(), 2);
        prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '.'));
    }

    /// A decay ratio never exceeds 100% while numer <= denom.
    #[test]
    fn ratio_bounded_by_unity(numer in 0u64..=1000, denom in 1u64..=1000) {
        prop_assume!(numer <= denom);
        let ratio = Ratio::new(numer, denom).unwrap();
        prop_assert!(ratio.basis_points() <= 10_000);
        prop_assert!(ratio.to_string().ends_with('%'));
    }

    /// Any 40-hex-char payload forms a valid account address.
    #[test]
    fn account_accepts_canonical_hex(hex in "[0-9a-fA-F]{40}") {
        let account = Account::new(format!("0x{hex}")).unwrap();
        prop_assert!(account.is_valid());
    }
}
