//! The headline template compiler.
//!
//! A raw template string mixes literal text with substitution escapes:
//!
//! - `%%` renders a literal percent sign.
//! - `%N` (one or more digits) is a substitution slot for the category
//!   with numeric code `N`.
//! - `%N+M+...` is a combined slot: the categories behind all listed codes
//!   are candidates, and one is chosen at generation time.
//!
//! Compilation is deliberately infallible. An escape with an unrecognized
//! code, or one mixing item and flavor categories, degrades to a literal
//! token reproducing the escape text verbatim, so malformed template
//! authoring shows up as visible text instead of a crash or a dropped
//! headline. A bare `%` not followed by `%` or a digit is ordinary text.
//!
//! Templates are compiled once when the store loads and walked on every
//! instantiation, the same compile-once pattern as the precomputed season
//! weight tables in the simulation's weather system.

use std::collections::{BTreeMap, BTreeSet};

use gazette_types::{Category, FlavorCategory, ItemCategory};

// ---------------------------------------------------------------------------
// CodeTable
// ---------------------------------------------------------------------------

/// The numeric code table the parser resolves escapes against.
///
/// Production use always wants [`CodeTable::full`], which recognizes the
/// complete fixed mapping from [`Category::from_code`]. Partial tables can
/// be built with [`CodeTable::from_entries`] to exercise the
/// unrecognized-code fallback.
#[derive(Debug, Clone)]
pub struct CodeTable {
    recognized: BTreeMap<u32, Category>,
}

impl CodeTable {
    /// The complete code table (codes 0 through 9).
    pub fn full() -> Self {
        Self {
            recognized: (0..10)
                .filter_map(|code| Category::from_code(code).map(|cat| (code, cat)))
                .collect(),
        }
    }

    /// Build a table recognizing only the given `(code, category)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, Category)>) -> Self {
        Self {
            recognized: entries.into_iter().collect(),
        }
    }

    /// Look up the category for a code, if this table recognizes it.
    pub fn category(&self, code: u32) -> Option<Category> {
        self.recognized.get(&code).copied()
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::full()
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One element of a compiled headline template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Verbatim text, appended to the headline as-is.
    Literal(String),

    /// An item substitution slot. One candidate category is chosen at
    /// generation time, then resolved to a concrete catalog item.
    ItemSlot(BTreeSet<ItemCategory>),

    /// A flavor substitution slot. Resolves to display text only.
    FlavorSlot(BTreeSet<FlavorCategory>),
}

// ---------------------------------------------------------------------------
// HeadlineTemplate
// ---------------------------------------------------------------------------

/// A compiled headline template: an ordered token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineTemplate {
    tokens: Vec<Token>,
}

impl HeadlineTemplate {
    /// Compile a raw template string against the full code table.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_table(raw, &CodeTable::full())
    }

    /// Compile a raw template string against a specific code table.
    ///
    /// Never fails; see the module documentation for the degradation
    /// rules applied to malformed escapes.
    pub fn parse_with_table(raw: &str, table: &CodeTable) -> Self {
        let mut tokens: Vec<Token> = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                literal.push(ch);
                continue;
            }
            match chars.peek() {
                // `%%` is a literal percent sign.
                Some(&'%') => {
                    chars.next();
                    literal.push('%');
                }
                // `%digit...` starts a numeric slot escape.
                Some(&next) if next.is_ascii_digit() => {
                    let (escape, codes) = scan_escape(&mut chars);
                    match resolve_codes(&codes, table) {
                        Some(token) => {
                            flush_literal(&mut tokens, &mut literal);
                            tokens.push(token);
                        }
                        // Unrecognized or mixed codes: reproduce the
                        // escape text verbatim.
                        None => literal.push_str(&escape),
                    }
                }
                // A bare `%` is ordinary text.
                _ => literal.push('%'),
            }
        }
        flush_literal(&mut tokens, &mut literal);
        Self { tokens }
    }

    /// The compiled token sequence, in template order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether any token is an item slot (i.e. instantiating this template
    /// can bind an affected item).
    pub fn has_item_slot(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, Token::ItemSlot(_)))
    }
}

/// Push the pending literal as a token, if non-empty.
fn flush_literal(tokens: &mut Vec<Token>, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

/// Consume a numeric slot escape from the character stream.
///
/// The leading `%` has already been consumed and the next character is
/// known to be a digit. Reads digits, then any number of `+digits` groups;
/// a `+` not followed by a digit ends the escape and stays in the stream.
///
/// Returns the full escape text (including the `%`) and the parsed codes.
/// A digit run too large for `u32` yields `None` in the code list, which
/// the caller treats as unrecognized.
fn scan_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> (String, Vec<Option<u32>>) {
    let mut escape = String::from("%");
    let mut codes = Vec::new();

    loop {
        let mut digits = String::new();
        while let Some(&ch) = chars.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                escape.push(ch);
                chars.next();
            } else {
                break;
            }
        }
        codes.push(digits.parse::<u32>().ok());

        // Continue only for a `+` immediately followed by a digit.
        let mut ahead = chars.clone();
        match (ahead.next(), ahead.next()) {
            (Some('+'), Some(d)) if d.is_ascii_digit() => {
                escape.push('+');
                chars.next();
            }
            _ => break,
        }
    }
    (escape, codes)
}

/// Resolve an escape's codes to a slot token.
///
/// Returns `None` if any code is unrecognized by the table or the codes
/// do not all share one supertype; candidates are deduplicated.
fn resolve_codes(codes: &[Option<u32>], table: &CodeTable) -> Option<Token> {
    let mut items: BTreeSet<ItemCategory> = BTreeSet::new();
    let mut flavors: BTreeSet<FlavorCategory> = BTreeSet::new();

    for code in codes {
        match (*code).and_then(|c| table.category(c)) {
            Some(Category::Item(category)) => {
                items.insert(category);
            }
            Some(Category::Flavor(category)) => {
                flavors.insert(category);
            }
            None => return None,
        }
    }
    match (items.is_empty(), flavors.is_empty()) {
        (false, true) => Some(Token::ItemSlot(items)),
        (true, false) => Some(Token::FlavorSlot(flavors)),
        // Mixed supertypes (or an empty escape, which cannot happen given
        // the scanner's digit requirement) degrade to literal text.
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn item_slot(categories: &[ItemCategory]) -> Token {
        Token::ItemSlot(categories.iter().copied().collect())
    }

    fn flavor_slot(categories: &[FlavorCategory]) -> Token {
        Token::FlavorSlot(categories.iter().copied().collect())
    }

    // -----------------------------------------------------------------------
    // Literal handling
    // -----------------------------------------------------------------------

    #[test]
    fn plain_text_is_one_literal() {
        let template = HeadlineTemplate::parse("Nothing to report.");
        assert_eq!(
            template.tokens(),
            &[Token::Literal("Nothing to report.".to_owned())]
        );
    }

    #[test]
    fn double_percent_renders_a_literal_percent() {
        let template = HeadlineTemplate::parse("100%% off %2");
        assert_eq!(
            template.tokens(),
            &[
                Token::Literal("100% off ".to_owned()),
                item_slot(&[ItemCategory::Crop]),
            ]
        );
    }

    #[test]
    fn bare_percent_is_ordinary_text() {
        let template = HeadlineTemplate::parse("50% of readers agree");
        assert_eq!(
            template.tokens(),
            &[Token::Literal("50% of readers agree".to_owned())]
        );
    }

    #[test]
    fn trailing_percent_does_not_lose_text() {
        let template = HeadlineTemplate::parse("discount: %");
        assert_eq!(
            template.tokens(),
            &[Token::Literal("discount: %".to_owned())]
        );
    }

    #[test]
    fn adjacent_escapes_produce_no_empty_literals() {
        let template = HeadlineTemplate::parse("%2%6");
        assert_eq!(
            template.tokens(),
            &[
                item_slot(&[ItemCategory::Crop]),
                item_slot(&[ItemCategory::RiverFish]),
            ]
        );
    }

    // -----------------------------------------------------------------------
    // Slot escapes
    // -----------------------------------------------------------------------

    #[test]
    fn single_code_item_slot() {
        let template = HeadlineTemplate::parse("%3 prices surge");
        assert_eq!(
            template.tokens(),
            &[
                item_slot(&[ItemCategory::Mineral]),
                Token::Literal(" prices surge".to_owned()),
            ]
        );
    }

    #[test]
    fn single_code_flavor_slot() {
        let template = HeadlineTemplate::parse("Earthquake of magnitude %0 hits %1");
        assert_eq!(
            template.tokens(),
            &[
                Token::Literal("Earthquake of magnitude ".to_owned()),
                flavor_slot(&[FlavorCategory::Earthquake]),
                Token::Literal(" hits ".to_owned()),
                flavor_slot(&[FlavorCategory::Location]),
            ]
        );
    }

    #[test]
    fn combined_codes_of_one_supertype_merge_into_one_slot() {
        let template = HeadlineTemplate::parse("%6+7 shortage");
        assert_eq!(
            template.tokens(),
            &[
                item_slot(&[ItemCategory::RiverFish, ItemCategory::OceanFish]),
                Token::Literal(" shortage".to_owned()),
            ]
        );
    }

    #[test]
    fn duplicate_codes_deduplicate() {
        let template = HeadlineTemplate::parse("%2+2+2");
        assert_eq!(template.tokens(), &[item_slot(&[ItemCategory::Crop])]);
    }

    #[test]
    fn mixed_supertypes_degrade_to_literal() {
        // Code 1 is a flavor (Location), code 2 an item (Crop).
        let template = HeadlineTemplate::parse("%1+2 news");
        assert_eq!(
            template.tokens(),
            &[Token::Literal("%1+2 news".to_owned())]
        );
    }

    #[test]
    fn unknown_code_degrades_the_whole_escape_to_literal() {
        let template = HeadlineTemplate::parse("%2+99");
        assert_eq!(template.tokens(), &[Token::Literal("%2+99".to_owned())]);
    }

    #[test]
    fn incomplete_table_degrades_recognized_codes_too() {
        // Same shape as production code 9 missing from the table: the
        // escape must come back as one verbatim literal.
        let table = CodeTable::from_entries([
            (3, Category::Item(ItemCategory::Mineral)),
            (5, Category::Item(ItemCategory::Foraged)),
        ]);
        let template = HeadlineTemplate::parse_with_table("%3+5+9", &table);
        assert_eq!(template.tokens(), &[Token::Literal("%3+5+9".to_owned())]);
    }

    #[test]
    fn plus_without_following_digit_ends_the_escape() {
        let template = HeadlineTemplate::parse("%2+ bonus");
        assert_eq!(
            template.tokens(),
            &[
                item_slot(&[ItemCategory::Crop]),
                Token::Literal("+ bonus".to_owned()),
            ]
        );
    }

    #[test]
    fn oversized_digit_run_degrades_to_literal() {
        let raw = "%99999999999999999999";
        let template = HeadlineTemplate::parse(raw);
        assert_eq!(template.tokens(), &[Token::Literal(raw.to_owned())]);
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    #[test]
    fn has_item_slot_reflects_compiled_tokens() {
        assert!(HeadlineTemplate::parse("%2 costs gold").has_item_slot());
        assert!(!HeadlineTemplate::parse("quiet day in %1").has_item_slot());
        assert!(!HeadlineTemplate::parse("Nothing to report.").has_item_slot());
    }
}
