#![no_main]
use libfuzzer_sys::fuzz_target;
use overrun_target::{Classifier, Mode};

fuzz_target!(|data: &[u8]| {
    let mut source = data;
    let _ = Classifier::new(Mode::Unchecked).classify(&mut source, &mut std::io::sink());
});
