use graykit::{Counters, GrayKitError, PixelAccessor, PixelBuffer, Region};

#[test]
fn new_buffer_is_black() {
    let img = PixelBuffer::new(4, 3, 100).unwrap();
    assert_eq!((img.width(), img.height(), img.maxval()), (4, 3, 100));
    assert_eq!(img.len(), 12);
    assert!(img.as_slice().iter().all(|&v| v == 0));
}

#[test]
fn zero_sized_buffers_are_allowed() {
    let img = PixelBuffer::new(0, 5, 255).unwrap();
    assert!(img.is_empty());
    assert!(!img.valid_pos(0, 0));
    assert!(img.valid_rect(0, 0, 0, 5));
}

#[test]
fn rejects_invalid_maxval() {
    let err = PixelBuffer::new(1, 1, 0).unwrap_err();
    assert!(matches!(err, GrayKitError::InvalidMaxval { maxval: 0 }));
}

#[test]
fn from_vec_checks_length_and_levels() {
    let err = PixelBuffer::from_vec(vec![0; 5], 2, 3, 255).unwrap_err();
    assert!(matches!(err, GrayKitError::BufferLength { needed: 6, got: 5 }));

    let err = PixelBuffer::from_vec(vec![1, 2, 9, 3], 2, 2, 8).unwrap_err();
    assert!(matches!(
        err,
        GrayKitError::LevelAboveMaxval {
            index: 2,
            level: 9,
            maxval: 8
        }
    ));

    let img = PixelBuffer::from_vec(vec![1, 2, 8, 3], 2, 2, 8).unwrap();
    assert_eq!(img.into_raw(), vec![1, 2, 8, 3]);
}

#[test]
fn overflowing_dimensions_are_rejected() {
    let err = PixelBuffer::new(usize::MAX, 2, 255).unwrap_err();
    assert!(matches!(
        err,
        GrayKitError::InvalidDimensions {
            width: usize::MAX,
            height: 2
        }
    ));
}

#[test]
fn unallocatable_buffer_reports_allocation_failure() {
    let side = 1usize << 31;
    let err = PixelBuffer::new(side, side, 255).unwrap_err();
    assert!(matches!(err, GrayKitError::Allocation { .. }));
    assert!(err.to_string().contains("failed to allocate"));
}

#[test]
fn valid_pos_and_rect_follow_bounds() {
    let img = PixelBuffer::new(5, 4, 255).unwrap();
    assert!(img.valid_pos(4, 3));
    assert!(!img.valid_pos(5, 0));
    assert!(!img.valid_pos(0, 4));

    assert!(img.valid_rect(0, 0, 5, 4));
    assert!(img.valid_rect(3, 2, 2, 2));
    assert!(!img.valid_rect(3, 2, 3, 2));
    assert!(!img.valid_rect(3, 3, 2, 2));
    assert!(Region::new(1, 1, 4, 3).fits_in(&img));
}

#[test]
fn accessor_counts_every_touch() {
    let counters = Counters::new();
    let px = PixelAccessor::new(&counters);
    let mut img = PixelBuffer::new(2, 2, 255).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            px.set(&mut img, x, y, (x + 2 * y) as u8);
        }
    }
    let total: u32 = (0..2)
        .flat_map(|y| (0..2).map(move |x| (x, y)))
        .map(|(x, y)| u32::from(px.get(&img, x, y)))
        .sum();
    assert_eq!(total, 6);
    assert_eq!(counters.pixel_accesses(), 8);
}

#[test]
#[should_panic(expected = "outside 2x2 image")]
fn accessor_panics_outside_image() {
    let counters = Counters::new();
    let img = PixelBuffer::new(2, 2, 255).unwrap();
    PixelAccessor::new(&counters).get(&img, 0, 2);
}
