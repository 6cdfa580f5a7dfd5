//! Success and error notifications for batch runs

/// Receives the user-facing outcome of a batch run
///
/// A desktop shell would show these as dialogs; the command line prints them.
pub trait Notifier {
    /// Report that the batch finished
    fn success(&mut self, title: &str, message: &str);

    /// Report a problem that stopped the batch before processing
    fn error(&mut self, title: &str, message: &str);
}

/// Prints successes to stdout and errors to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    // Allow print for the terminal notification
    #[allow(clippy::print_stdout)]
    fn success(&mut self, title: &str, message: &str) {
        println!("{title}: {message}");
    }

    // Allow print for user-facing errors
    #[allow(clippy::print_stderr)]
    fn error(&mut self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn success(&mut self, title: &str, message: &str) {
        (**self).success(title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        (**self).error(title, message);
    }
}
