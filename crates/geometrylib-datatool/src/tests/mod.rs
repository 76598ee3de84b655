
use super::*;
use nalgebra::{Vector2, Vector3};
use rstest::rstest;

fn xs(array: &DataArray2) -> Vec<f64> {
    array.iter().map(|sample| sample.x).collect()
}

#[test]
fn test_new_array_is_inline() {
    let array = DataArray1::new();
    assert!(array.is_empty());
    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), INLINE_CAPACITY);
    assert_eq!(array.storage(), Storage::Inline);
}

#[test]
fn test_push_preserves_order() {
    let mut array = DataArray1::new();
    for i in 0..10 {
        array.push(i as f64 * 0.5);
    }
    assert_eq!(array.len(), 10);
    assert_eq!(array.as_slice(), &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5]);
    assert_eq!(array[3], 1.5);
}

#[test]
fn test_stays_inline_up_to_threshold() {
    let mut array = DataArray2::new();
    for i in 0..INLINE_CAPACITY {
        array.push_xy(i as f64, 0.0);
    }
    assert_eq!(array.len(), INLINE_CAPACITY);
    assert_eq!(array.capacity(), INLINE_CAPACITY);
    assert_eq!(array.storage(), Storage::Inline);
}

#[test]
fn test_promotes_and_doubles_past_threshold() {
    let mut array = DataArray3::new();
    for i in 0..=INLINE_CAPACITY {
        array.push_xyz(i as f64, 1.0, 2.0);
    }
    assert_eq!(array.storage(), Storage::Owned);
    assert_eq!(array.capacity(), 2 * INLINE_CAPACITY);

    for i in 0..INLINE_CAPACITY {
        array.push_xyz(i as f64, 1.0, 2.0);
    }
    assert_eq!(array.len(), 2 * INLINE_CAPACITY + 1);
    assert_eq!(array.capacity(), 4 * INLINE_CAPACITY);
    assert_eq!(array[INLINE_CAPACITY], Vector3::new(INLINE_CAPACITY as f64, 1.0, 2.0));
}

#[test]
fn test_clear_keeps_owned_storage() {
    let mut array: DataArray1 = (0..300).map(|i| i as f64).collect();
    assert_eq!(array.storage(), Storage::Owned);
    let capacity = array.capacity();

    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), capacity);
    assert_eq!(array.storage(), Storage::Owned);

    array.push(1.0);
    assert_eq!(array.as_slice(), &[1.0]);
    assert_eq!(array.storage(), Storage::Owned);
}

#[test]
fn test_clear_inline() {
    let mut array = DataArray1::new();
    array.extend([1.0, 2.0, 3.0]);
    array.clear();
    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), INLINE_CAPACITY);
    assert_eq!(array.storage(), Storage::Inline);
}

#[test]
fn test_insert_sorted_mid_sequence() {
    let mut array = DataArray2::new();
    array.push_xy(0.0, 10.0);
    array.push_xy(2.0, 12.0);
    array.push_xy(4.0, 14.0);

    array.insert_sorted(1.0, -3.0);

    assert_eq!(
        array.as_slice(),
        &[
            Vector2::new(0.0, 10.0),
            Vector2::new(1.0, -3.0),
            Vector2::new(2.0, 12.0),
            Vector2::new(4.0, 14.0),
        ]
    );
}

#[rstest]
#[case::front(-1.0, 0)]
#[case::back(5.0, 3)]
#[case::between(3.0, 2)]
#[case::tie_goes_after(2.0, 2)]
fn test_insert_sorted_position(#[case] x: f64, #[case] expected_index: usize) {
    let mut array = DataArray2::new();
    for x in [0.0, 2.0, 4.0] {
        array.push_xy(x, 0.0);
    }
    array.insert_sorted(x, 1.0);

    assert_eq!(array.len(), 4);
    assert_eq!(array[expected_index], Vector2::new(x, 1.0));
}

#[test]
fn test_insert_sorted_equal_keys_keep_insertion_order() {
    let mut array = DataArray2::new();
    array.insert_sorted(1.0, 1.0);
    array.insert_sorted(1.0, 2.0);
    array.insert_sorted(1.0, 3.0);
    let ys: Vec<f64> = array.iter().map(|sample| sample.y).collect();
    assert_eq!(ys, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_insert_sorted_grows_past_threshold() {
    let mut array = DataArray2::new();
    for i in (0..INLINE_CAPACITY + 10).rev() {
        array.insert_sorted(i as f64, 0.0);
    }
    assert_eq!(array.storage(), Storage::Owned);
    assert_eq!(array.capacity(), 2 * INLINE_CAPACITY);
    let expected: Vec<f64> = (0..INLINE_CAPACITY + 10).map(|i| i as f64).collect();
    assert_eq!(xs(&array), expected);
}

#[test]
fn test_columns_2d() {
    let mut array = DataArray2::new();
    array.push_xy(0.0, 2.0);
    array.push_xy(1.5, -1.0);
    array.push_xy(3.0, 0.25);
    assert_eq!(
        array.columns(&["x", "y"]).to_string(),
        "x = [0, 1.5, 3]\ny = [2, -1, 0.25]\n"
    );
}

#[test]
fn test_columns_empty_and_unnamed() {
    let array = DataArray3::new();
    assert_eq!(array.columns(&["a"]).to_string(), "a = []\nx1 = []\nx2 = []\n");
}

#[test]
fn test_write_columns_to_sink() {
    let array: DataArray1 = [1.0, 1e-7].into_iter().collect();
    let mut out = Vec::new();
    array.write_columns(&["v"], &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "v = [1, 1e-7]\n");
}

#[rstest]
#[case::zero(0.0, "0")]
#[case::plain(0.25, "0.25")]
#[case::small_plain(1e-5, "0.00001")]
#[case::small(-2.5e-9, "-2.5e-9")]
#[case::large_plain(123456789.0, "123456789")]
#[case::large(1e20, "1e20")]
#[case::infinite(f64::INFINITY, "inf")]
fn test_columns_value_format(#[case] value: f64, #[case] expected: &str) {
    let array: DataArray1 = [value].into_iter().collect();
    assert_eq!(array.columns(&["v"]).to_string(), format!("v = [{expected}]\n"));
}

#[test]
fn test_array_n_rejects_zero_arity() {
    assert_eq!(DataArrayN::new(0).unwrap_err(), DataToolError::ZeroArity);
}

#[test]
fn test_array_n_push() {
    let mut array = DataArrayN::new(4).unwrap();
    array.push(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let (a, b, c, d) = (5.0, 6.0, 7.0, 8.0);
    array.push_from_refs(&[&a, &b, &c, &d]).unwrap();

    assert_eq!(array.arity(), 4);
    assert_eq!(array.len(), 2);
    assert_eq!(array.get(0), Some(&[1.0, 2.0, 3.0, 4.0][..]));
    assert_eq!(array.get(1), Some(&[5.0, 6.0, 7.0, 8.0][..]));
    assert_eq!(array.get(2), None);
}

#[test]
fn test_array_n_arity_mismatch_leaves_array_untouched() {
    let mut array = DataArrayN::new(2).unwrap();
    array.push(&[1.0, 2.0]).unwrap();
    assert_eq!(
        array.push(&[1.0, 2.0, 3.0]),
        Err(DataToolError::ArityMismatch { expected: 2, actual: 3 })
    );
    let x = 1.0;
    assert_eq!(
        array.push_from_refs(&[&x]),
        Err(DataToolError::ArityMismatch { expected: 2, actual: 1 })
    );
    assert_eq!(array.len(), 1);
}

#[test]
fn test_array_n_growth_and_clear() {
    let mut array = DataArrayN::new(3).unwrap();
    for i in 0..=INLINE_CAPACITY {
        let v = i as f64;
        array.push(&[v, v * 2.0, v * 3.0]).unwrap();
    }
    assert_eq!(array.storage(), Storage::Owned);
    assert_eq!(array.capacity(), 2 * INLINE_CAPACITY);
    assert_eq!(array.iter().last(), Some(&[128.0, 256.0, 384.0][..]));

    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.storage(), Storage::Owned);
}

#[test]
fn test_array_n_columns() {
    let mut array = DataArrayN::new(3).unwrap();
    array.push(&[1.0, 2.0, 3.0]).unwrap();
    array.push(&[4.0, 5.0, 6.0]).unwrap();
    assert_eq!(
        array.columns(&["t", "u"]).to_string(),
        "t = [1, 4]\nu = [2, 5]\nx2 = [3, 6]\n"
    );
}
