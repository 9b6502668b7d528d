//! Spinner widget frames.

/// Braille spinner frames cycled while a request is outstanding.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return the spinner frame for the given index.
///
pub fn frame(index: usize) -> &'static str {
    FRAMES[index % FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_wraps_around() {
        assert_eq!(frame(0), FRAMES[0]);
        assert_eq!(frame(FRAMES.len()), FRAMES[0]);
        assert_eq!(frame(FRAMES.len() + 3), FRAMES[3]);
    }
}
