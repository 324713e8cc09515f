//! Bell to MIDI note mapping.

use chimes_chime::Bell;

/// MIDI note for each bell (index 0 unused, index 1 = bell 1, ...).
///
/// G5 F5 E5 D5 C5 Bb4 A4 G4 F4 C4.
const BELL_NOTES: [u8; 11] = [0, 67, 65, 64, 62, 60, 58, 57, 55, 53, 48];

/// Returns the MIDI note number struck for `bell`.
///
/// # Examples
///
/// ```
/// use chimes_chime::Bell;
/// use chimes_midi::midi_note;
///
/// assert_eq!(midi_note(Bell::new(1).unwrap()), 67);
/// assert_eq!(midi_note(Bell::new(10).unwrap()), 48);
/// ```
pub fn midi_note(bell: Bell) -> u8 {
    BELL_NOTES[usize::from(bell.get())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_table() {
        let notes: Vec<u8> = Bell::all().map(midi_note).collect();
        assert_eq!(notes, vec![67, 65, 64, 62, 60, 58, 57, 55, 53, 48]);
    }

    #[test]
    fn bells_descend_in_pitch() {
        let notes: Vec<u8> = Bell::all().map(midi_note).collect();
        assert!(notes.windows(2).all(|w| w[0] > w[1]));
    }
}
