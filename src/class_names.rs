use indexmap::IndexSet;

/// Joins class fragments into the final class attribute.
///
/// Fragments arrive in precedence order (base, dynamic, variant, explicit
/// override). Implementations must drop empty fragments and keep the relative
/// order of the rest; any conflict resolution between utility classes is up
/// to the implementation.
pub trait ClassMerge: Send + Sync {
    fn merge(&self, fragments: &[&str]) -> String;
}

/// Conditional class joining: empty and whitespace-only fragments are dropped,
/// the others are trimmed and joined with a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinClasses;

impl ClassMerge for JoinClasses {
    fn merge(&self, fragments: &[&str]) -> String {
        join_classes(fragments.iter().copied())
    }
}

/// Like [`JoinClasses`], but an exact duplicate token is kept only at its last
/// position, so a later fragment repeating a class moves it to the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct DedupClasses;

impl ClassMerge for DedupClasses {
    fn merge(&self, fragments: &[&str]) -> String {
        let mut tokens: IndexSet<&str> = IndexSet::new();
        for token in fragments.iter().flat_map(|f| f.split_whitespace()) {
            tokens.shift_remove(token);
            tokens.insert(token);
        }
        tokens.into_iter().collect::<Vec<_>>().join(" ")
    }
}

/// Join class fragments, skipping empty ones
pub fn join_classes<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for fragment in fragments.into_iter().map(str::trim).filter(|f| !f.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(fragment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_drops_empty_fragments() {
        assert_eq!(join_classes(["p-4", "", "   ", "m-2"]), "p-4 m-2");
    }

    #[test]
    fn test_join_trims_fragments() {
        assert_eq!(join_classes(["  p-4 ", "\tm-2\n"]), "p-4 m-2");
    }

    #[test]
    fn test_join_keeps_inner_spacing_and_duplicates() {
        // only fragment edges are normalized
        assert_eq!(join_classes(["p-4 p-4", "p-4"]), "p-4 p-4 p-4");
    }

    #[test]
    fn test_join_nothing() {
        assert_eq!(join_classes(Vec::<&str>::new()), "");
        assert_eq!(JoinClasses.merge(&["", ""]), "");
    }

    #[test]
    fn test_dedup_keeps_last_occurrence() {
        let merged = DedupClasses.merge(&["p-4 text-sm", "font-bold", "p-4"]);
        assert_eq!(merged, "text-sm font-bold p-4");
    }

    #[test]
    fn test_dedup_normalizes_whitespace() {
        assert_eq!(DedupClasses.merge(&["a    b", "", " c "]), "a b c");
    }
}
