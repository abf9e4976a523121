//! Property tests for lane reinterpretation and lanewise arithmetic.

use proptest::prelude::*;
use wrt_simd::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, Shape, V128};

fn any_v128() -> impl Strategy<Value = V128> {
    any::<u128>().prop_map(V128::from_bits)
}

fn is_mask(lanes: &[u8], lane_bytes: usize) -> bool {
    lanes
        .chunks_exact(lane_bytes)
        .all(|lane| lane.iter().all(|&b| b == 0xff) || lane.iter().all(|&b| b == 0))
}

proptest! {
    #[test]
    fn round_trip_through_every_shape(v in any_v128()) {
        prop_assert_eq!(V128::from_i8x16(v.to_i8x16()), v);
        prop_assert_eq!(V128::from_i16x8(v.to_i16x8()), v);
        prop_assert_eq!(V128::from_i32x4(v.to_i32x4()), v);
        prop_assert_eq!(V128::from_i64x2(v.to_i64x2()), v);
        prop_assert_eq!(V128::from_f32x4(v.to_f32x4()), v);
        prop_assert_eq!(V128::from_f64x2(v.to_f64x2()), v);
    }

    #[test]
    fn bitwise_ignores_the_decoding_shape(a in any_v128(), b in any_v128(), c in any_v128()) {
        let via_bytes = V128::from_i8x16(a.to_i8x16()).and(V128::from_i8x16(b.to_i8x16()));
        let via_floats = V128::from_f64x2(a.to_f64x2()).and(V128::from_f64x2(b.to_f64x2()));
        prop_assert_eq!(via_bytes, via_floats);
        prop_assert_eq!(a.or(b).to_bits(), a.to_bits() | b.to_bits());
        prop_assert_eq!(a.xor(b).to_bits(), a.to_bits() ^ b.to_bits());
        prop_assert_eq!(a.lognot().to_bits(), !a.to_bits());
        prop_assert_eq!(a.andnot(b).to_bits(), a.to_bits() & !b.to_bits());
        let selected = a.bitselect(b, c).to_bits();
        prop_assert_eq!(selected, (a.to_bits() & c.to_bits()) | (b.to_bits() & !c.to_bits()));
    }

    #[test]
    fn comparisons_yield_full_masks(a in any_v128(), b in any_v128()) {
        prop_assert!(is_mask(&I8x16::lt_u(a, b).bytes(), 1));
        prop_assert!(is_mask(&I16x8::ge_s(a, b).bytes(), 2));
        prop_assert!(is_mask(&I32x4::ne(a, b).bytes(), 4));
        prop_assert!(is_mask(&I64x2::gt_s(a, b).bytes(), 8));
        prop_assert!(is_mask(&F32x4::le(a, b).bytes(), 4));
        prop_assert!(is_mask(&F64x2::ne(a, b).bytes(), 8));
    }

    #[test]
    fn shift_count_is_reduced_modulo_lane_width(v in any_v128(), k in any::<u32>()) {
        prop_assert_eq!(I8x16::shl(v, k), I8x16::shl(v, k % 8));
        prop_assert_eq!(I16x8::shl(v, k), I16x8::shl(v, k % 16));
        prop_assert_eq!(I32x4::shl(v, k), I32x4::shl(v, k % 32));
        prop_assert_eq!(I64x2::shl(v, k), I64x2::shl(v, k % 64));
        prop_assert_eq!(I32x4::shr_s(v, k), I32x4::shr_s(v, k % 32));
    }

    #[test]
    fn avgr_u_is_rounded_mean(a in any::<u64>(), b in any::<u64>()) {
        // Reference mean in 128 bits, taken over the low `bits` of a and b.
        let mean = |bits: u32| {
            let mask = (1u128 << bits) - 1;
            ((u128::from(a) & mask) + (u128::from(b) & mask) + 1) / 2
        };

        let r = I8x16::avgr_u(I8x16::splat(a as i8), I8x16::splat(b as i8));
        prop_assert_eq!(u128::from(I8x16::extract_lane_u(r, 0)), mean(8));

        let r = I16x8::avgr_u(I16x8::splat(a as i16), I16x8::splat(b as i16));
        prop_assert_eq!(u128::from(I16x8::extract_lane_u(r, 7)), mean(16));

        let r = I32x4::avgr_u(I32x4::splat(a as i32), I32x4::splat(b as i32));
        prop_assert_eq!(u128::from(I32x4::extract_lane_u(r, 3)), mean(32));

        let r = I64x2::avgr_u(I64x2::splat(a as i64), I64x2::splat(b as i64));
        prop_assert_eq!(u128::from(I64x2::extract_lane_u(r, 1)), mean(64));
    }

    #[test]
    fn lane_text_reads_back(v in any_v128()) {
        for shape in Shape::ALL {
            let text = v.to_string_as(shape);
            let literals: Vec<&str> = text.split(' ').skip(1).collect();
            prop_assert_eq!(V128::of_strings(shape, &literals).unwrap(), v);
        }
    }
}
