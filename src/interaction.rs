//! Interaction Port
//!
//! Blocking user prompts, injectable so handlers can run without a browser.

/// Yes/no confirmation and acknowledgement prompts
pub trait InteractionPort {
    /// Ask the user to confirm a destructive action
    fn confirm(&self, prompt: &str) -> bool;

    /// Show a message the user has to acknowledge
    fn notify(&self, message: &str);
}

impl<P: InteractionPort + ?Sized> InteractionPort for &P {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }

    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}
