//! Provisional screening adapter that returns content unchanged.

use crate::domain::ports::ScreeningService;

/// Echo implementation of [`ScreeningService`].
///
/// Holds no state, so a single value may be shared freely across workers.
///
/// # Examples
/// ```
/// use screening_backend::domain::ports::ScreeningService;
/// use screening_backend::outbound::screening::EchoScreeningService;
///
/// let service = EchoScreeningService;
/// assert_eq!(service.screen("求人".to_owned()), "求人");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoScreeningService;

impl ScreeningService for EchoScreeningService {
    fn screen(&self, content: String) -> String {
        content
    }
}

#[cfg(test)]
mod tests {
    //! Identity coverage for the echo adapter.
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[case::empty("")]
    #[case::ascii("hello")]
    #[case::multi_line("line one\nline two\r\nline three")]
    #[case::mixed_script("この求人は素晴らしい機会です。 Great role! Отлично")]
    #[case::control_characters("tab\tbell\u{7}nul\u{0}esc\u{1b}")]
    #[case::emoji("🚀👩‍💻🎉")]
    #[case::surrounding_whitespace("   padded   ")]
    fn screen_returns_input_unchanged(#[case] input: &str) {
        assert_eq!(EchoScreeningService.screen(input.to_owned()), input);
    }

    #[rstest]
    fn screen_handles_large_input() {
        let input = "x".repeat(4 * 1024 * 1024);
        assert_eq!(EchoScreeningService.screen(input.clone()), input);
    }

    #[rstest]
    fn screen_is_idempotent() {
        let once = EchoScreeningService.screen("repeat".to_owned());
        let twice = EchoScreeningService.screen(once.clone());
        assert_eq!(once, twice);
    }

    #[rstest]
    fn screen_is_consistent_across_threads() {
        let service = Arc::new(EchoScreeningService);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || service.screen("shared".to_owned()))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("worker thread"), "shared");
        }
    }
}
