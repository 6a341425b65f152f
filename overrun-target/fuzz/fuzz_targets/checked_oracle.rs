#![no_main]
use libfuzzer_sys::fuzz_target;
use overrun_target::{predict, Classifier, HarnessError};

fuzz_target!(|data: &[u8]| {
    let verdict = predict(data);
    let mut source = data;

    match Classifier::checked().classify(&mut source, &mut std::io::sink()) {
        Ok(status) => assert_eq!(status, verdict.status),
        Err(HarnessError::InputTooLong { .. }) => assert!(verdict.overruns),
        Err(err) => panic!("unexpected error: {err}"),
    }
});
