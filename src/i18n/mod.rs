//! Translation lookup for label text.
//!
//! The surrounding form system supplies the actual translations; the core
//! only ever asks for strings and never branches on them.

/// Resolves a translation key to display text.
pub trait Translate {
    fn t(&self, key: &str) -> String;
}

/// Returns every key unchanged. Useful as a default and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl Translate for Passthrough {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Adapts a plain closure to the lookup trait.
pub struct TranslateFn<F>(pub F);

impl<F> Translate for TranslateFn<F>
where
    F: Fn(&str) -> String,
{
    fn t(&self, key: &str) -> String {
        (self.0)(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_returns_the_key() {
        assert_eq!(Passthrough.t("list.add"), "list.add");
    }

    #[test]
    fn test_closures_translate() {
        let upper = TranslateFn(|key: &str| key.to_uppercase());
        assert_eq!(upper.t("add"), "ADD");
    }
}
