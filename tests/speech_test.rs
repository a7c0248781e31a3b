//! Integration tests for the native speech backend
//!
//! These exercise the real host synthesizer where one exists. They are
//! tolerant of headless environments: initialization failure prints a
//! warning instead of panicking, since CI rarely has a speech service.

use polysay::speech::{create_synth, SpeechRequest};

#[test]
fn test_create_native_synth() {
    let result = create_synth();

    match result {
        Ok(synth) => {
            println!("✓ Successfully created native TTS backend");
            drop(synth);
        }
        Err(e) => {
            // This may fail in CI or environments without speech-dispatcher
            println!("⚠ TTS creation failed (may be expected): {}", e);
        }
    }
}

#[test]
fn test_voice_catalog_fetch() {
    if let Ok(synth) = create_synth() {
        match synth.voices() {
            Ok(voices) => {
                println!("✓ Host reported {} voices", voices.len());
                for voice in voices.iter().take(5) {
                    // Every snapshot entry carries a name and a locale tag
                    assert!(!voice.name.is_empty());
                    assert!(!voice.language.is_empty());
                }
            }
            Err(e) => println!("⚠ Voice fetch failed (may be expected): {}", e),
        }
    } else {
        println!("⚠ Skipping catalog test (TTS not available)");
    }
}

#[test]
fn test_speak_baseline_request() {
    if let Ok(mut synth) = create_synth() {
        // Baseline request without an explicit voice: platform default
        let request = SpeechRequest::new("Integration test", "en-US");
        match synth.speak(&request) {
            Ok(()) => println!("✓ Baseline speak accepted"),
            Err(e) => println!("⚠ Speak failed (may be expected): {}", e),
        }
    } else {
        println!("⚠ Skipping speak test (TTS not available)");
    }
}

#[test]
fn test_callback_registration_roundtrip() {
    if let Ok(mut synth) = create_synth() {
        assert!(
            synth
                .set_voices_changed_callback(Some(Box::new(|| {})))
                .is_ok(),
            "Should accept a voices-changed subscription"
        );
        assert!(
            synth.set_voices_changed_callback(None).is_ok(),
            "Should accept unsubscription"
        );

        // Utterance callbacks are diagnostic; unsupported platforms accept
        // and ignore the registration
        assert!(synth
            .set_utterance_end_callback(Some(Box::new(|| {})))
            .is_ok());
        assert!(synth.set_utterance_end_callback(None).is_ok());

        println!("✓ Callback registration tests passed");
    } else {
        println!("⚠ Skipping callback tests (TTS not available)");
    }
}

#[test]
fn test_speak_unicode() {
    if let Ok(mut synth) = create_synth() {
        for text in ["Hello 世界", "café naïve", "안녕하세요"] {
            let request = SpeechRequest::new(text, "en-US");
            if let Err(e) = synth.speak(&request) {
                println!("⚠ Unicode speak failed (may be expected): {}", e);
            }
        }
        println!("✓ Unicode speech tests passed");
    } else {
        println!("⚠ Skipping Unicode tests (TTS not available)");
    }
}
