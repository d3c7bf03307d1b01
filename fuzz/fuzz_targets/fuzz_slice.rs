#![no_main]

use libfuzzer_sys::fuzz_target;

use lazyseq_combinators::{collect_vec, slice, source};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Small windows keep each run cheap.
    let start = usize::from(data[0] % 64);
    let end = usize::from(data[1] % 64);
    let step = usize::from(data[2] % 8);
    let input: Vec<u8> = data[3..].to_vec();

    let Ok(seq) = slice(source::iter(input.clone()), start, end, step) else {
        assert_eq!(step, 0);
        return;
    };

    let expected: Vec<u8> = input
        .iter()
        .copied()
        .skip(start)
        .take(end.saturating_sub(start))
        .step_by(step)
        .collect();
    assert_eq!(collect_vec(&seq), expected);
});
