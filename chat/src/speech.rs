//! Speech capability seam.
//!
//! Speech-to-text and text-to-speech are platform services with their own
//! internal state; the frontend owns the concrete implementations. This
//! module pins down the small surface the conversation needs, so nothing
//! here depends on a concrete platform API and tests can script one.

use crate::models::ConversationState;

/// The one locale the recognizer is configured for.
pub const SPEECH_LOCALE: &str = "en-US";

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    /// A transcript of what was heard so far.
    Transcript(String),
    Error(String),
    /// Recognition stopped, either on silence or on a stop intent.
    Ended,
}

/// Microphone capture. Implementations stop themselves on silence or error
/// and report both through `Ended`/`Error` events.
pub trait SpeechRecognizer: Send {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_listening(&self) -> bool;
    /// Events observed since the last drain, in order.
    fn drain_events(&mut self) -> Vec<SpeechEvent>;
}

/// Read-aloud playback. At most one utterance is active: `speak` replaces
/// whatever is currently playing, `cancel` silences it (also called on
/// teardown).
pub trait SpeechSynthesizer: Send {
    fn speak(&mut self, text: &str);
    fn cancel(&mut self);
    fn is_speaking(&self) -> bool;
}

/// Begin dictation. The draft input is cleared first so the transcript
/// replaces rather than appends.
pub fn start_listening(state: &mut ConversationState, recognizer: &mut dyn SpeechRecognizer) {
    state.set_input("");
    recognizer.start();
}

/// Route recognizer events into the conversation: transcripts land in the
/// input field, errors are logged, and `Ended` needs no state change here.
pub fn apply_speech_events(state: &mut ConversationState, recognizer: &mut dyn SpeechRecognizer) {
    for event in recognizer.drain_events() {
        match event {
            SpeechEvent::Transcript(text) => state.set_input(&text),
            SpeechEvent::Error(reason) => log::warn!("Speech recognition error: {}", reason),
            SpeechEvent::Ended => {}
        }
    }
}

/// The read-aloud toggle on an AI turn: silence it if it is playing,
/// otherwise start it (replacing any other active utterance).
pub fn toggle_read_aloud(synthesizer: &mut dyn SpeechSynthesizer, text: &str) {
    if synthesizer.is_speaking() {
        synthesizer.cancel();
    } else {
        synthesizer.speak(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed event script, going quiet after `Ended` or `Error`.
    struct ScriptedRecognizer {
        listening: bool,
        script: Vec<SpeechEvent>,
    }

    impl ScriptedRecognizer {
        fn new(script: Vec<SpeechEvent>) -> Self {
            Self {
                listening: false,
                script,
            }
        }
    }

    impl SpeechRecognizer for ScriptedRecognizer {
        fn start(&mut self) {
            self.listening = true;
        }

        fn stop(&mut self) {
            self.listening = false;
        }

        fn is_listening(&self) -> bool {
            self.listening
        }

        fn drain_events(&mut self) -> Vec<SpeechEvent> {
            let events = std::mem::take(&mut self.script);
            if events
                .iter()
                .any(|e| matches!(e, SpeechEvent::Ended | SpeechEvent::Error(_)))
            {
                self.listening = false;
            }
            events
        }
    }

    #[derive(Default)]
    struct RecordingSynthesizer {
        current: Option<String>,
        cancelled: usize,
    }

    impl SpeechSynthesizer for RecordingSynthesizer {
        fn speak(&mut self, text: &str) {
            if self.current.is_some() {
                self.cancel();
            }
            self.current = Some(text.to_string());
        }

        fn cancel(&mut self) {
            if self.current.take().is_some() {
                self.cancelled += 1;
            }
        }

        fn is_speaking(&self) -> bool {
            self.current.is_some()
        }
    }

    #[test]
    fn test_start_listening_clears_draft_input() {
        let mut state = ConversationState::default();
        state.set_input("half-typed question");
        let mut recognizer = ScriptedRecognizer::new(vec![]);

        start_listening(&mut state, &mut recognizer);

        assert!(state.input.is_empty());
        assert!(recognizer.is_listening());
    }

    #[test]
    fn test_transcripts_land_in_input() {
        let mut state = ConversationState::default();
        let mut recognizer = ScriptedRecognizer::new(vec![
            SpeechEvent::Transcript("what is".to_string()),
            SpeechEvent::Transcript("what is the grading policy".to_string()),
        ]);

        start_listening(&mut state, &mut recognizer);
        apply_speech_events(&mut state, &mut recognizer);

        assert_eq!(state.input, "what is the grading policy");
        assert!(recognizer.is_listening());
    }

    #[test]
    fn test_recognition_ends_on_silence() {
        let mut state = ConversationState::default();
        let mut recognizer = ScriptedRecognizer::new(vec![
            SpeechEvent::Transcript("hello".to_string()),
            SpeechEvent::Ended,
        ]);

        start_listening(&mut state, &mut recognizer);
        apply_speech_events(&mut state, &mut recognizer);

        assert_eq!(state.input, "hello");
        assert!(!recognizer.is_listening());
    }

    #[test]
    fn test_recognition_error_stops_listening_and_keeps_input() {
        let mut state = ConversationState::default();
        let mut recognizer =
            ScriptedRecognizer::new(vec![SpeechEvent::Error("no-speech".to_string())]);

        start_listening(&mut state, &mut recognizer);
        apply_speech_events(&mut state, &mut recognizer);

        assert!(state.input.is_empty());
        assert!(!recognizer.is_listening());
    }

    #[test]
    fn test_toggle_starts_and_stops_one_utterance() {
        let mut synthesizer = RecordingSynthesizer::default();

        toggle_read_aloud(&mut synthesizer, "Grading is 50% exams, 50% assignments.");
        assert!(synthesizer.is_speaking());

        toggle_read_aloud(&mut synthesizer, "Grading is 50% exams, 50% assignments.");
        assert!(!synthesizer.is_speaking());
        assert_eq!(synthesizer.cancelled, 1);
    }

    #[test]
    fn test_speak_replaces_active_utterance() {
        let mut synthesizer = RecordingSynthesizer::default();

        synthesizer.speak("first answer");
        synthesizer.speak("second answer");

        assert_eq!(synthesizer.current.as_deref(), Some("second answer"));
        assert_eq!(synthesizer.cancelled, 1);
    }
}
