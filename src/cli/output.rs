use crate::apply::Action;

/// Message printed to stdout when an action succeeds
pub fn success_message(action: Action) -> &'static str {
    match action {
        Action::Validate => "No errors found! 🎉",
        Action::Apply => "Schema applied! 🚀",
    }
}
