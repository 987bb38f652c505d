//! Confirmation Port
//!
//! Obtains a yes/no decision for re-promoting an already archived release.
//! Implementations can be interactive (prompting the operator) or fixed.

use crate::domain::value_objects::Decision;

/// Trait for deciding what happens to one version group.
///
/// Implementations must always return a decision: closed input, read
/// failures and unrecognized answers resolve to `Decision::Skip`.
pub trait ConfirmationPort {
    /// Ask whether `<component>-<version>` may be overwritten.
    fn confirm(&mut self, component: &str, version: &str) -> Decision;
}

impl<T: ConfirmationPort + ?Sized> ConfirmationPort for &mut T {
    fn confirm(&mut self, component: &str, version: &str) -> Decision {
        (**self).confirm(component, version)
    }
}

impl<T: ConfirmationPort + ?Sized> ConfirmationPort for Box<T> {
    fn confirm(&mut self, component: &str, version: &str) -> Decision {
        (**self).confirm(component, version)
    }
}

/// Port that approves every overwrite.
pub struct AlwaysOverwrite;

impl ConfirmationPort for AlwaysOverwrite {
    fn confirm(&mut self, _component: &str, _version: &str) -> Decision {
        Decision::Overwrite
    }
}

/// Port that keeps every archived release untouched.
pub struct AlwaysSkip;

impl ConfirmationPort for AlwaysSkip {
    fn confirm(&mut self, _component: &str, _version: &str) -> Decision {
        Decision::Skip
    }
}
