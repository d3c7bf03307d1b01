#![no_main]

use libfuzzer_sys::fuzz_target;

use lazyseq_combinators::{collect_vec, range, slice_until};

fn word(bytes: &[u8]) -> i64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    i64::from_le_bytes(buf)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }
    let start = word(&data[0..8]);
    let end = word(&data[8..16]);
    let step = word(&data[16..24]);

    let Ok(seq) = range(start, end, step) else {
        assert_eq!(step, 0);
        return;
    };

    // Only the first few hundred values are materialised.
    let head = collect_vec(&slice_until(seq, 256, 1).unwrap());
    let expected_len = seq.len().min(256);
    assert_eq!(head.len() as u64, expected_len);

    for (k, v) in head.iter().enumerate() {
        let wide = i128::from(start) + i128::from(step) * k as i128;
        assert_eq!(i128::from(*v), wide);
        if step > 0 {
            assert!(wide < i128::from(end));
        } else {
            assert!(wide > i128::from(end));
        }
    }

    // The value after the last one would have crossed `end`.
    if seq.len() <= 256 {
        let next = i128::from(start) + i128::from(step) * i128::from(seq.len());
        if step > 0 {
            assert!(next >= i128::from(end));
        } else {
            assert!(next <= i128::from(end));
        }
    }
});
