//! Unicode category tags for a single code point.
//!
//! The tags mirror the general category of the code point and are reported in
//! diagnostics. Segmentation only relies on [`is_letter`] and [`is_space`].

use std::fmt;

use unicode_general_category::{GeneralCategory, get_general_category};

/// One category tag. Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RuneCategory {
    Control,
    Digit,
    Graphic,
    Letter,
    Lowercase,
    Mark,
    Number,
    Printable,
    NotPrintable,
    Punctuation,
    Space,
    Symbol,
    Titlecase,
    Uppercase,
}

impl RuneCategory {
    pub const ALL: [RuneCategory; 14] = [
        RuneCategory::Control,
        RuneCategory::Digit,
        RuneCategory::Graphic,
        RuneCategory::Letter,
        RuneCategory::Lowercase,
        RuneCategory::Mark,
        RuneCategory::Number,
        RuneCategory::Printable,
        RuneCategory::NotPrintable,
        RuneCategory::Punctuation,
        RuneCategory::Space,
        RuneCategory::Symbol,
        RuneCategory::Titlecase,
        RuneCategory::Uppercase,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RuneCategory::Control => "control",
            RuneCategory::Digit => "digit",
            RuneCategory::Graphic => "graphic",
            RuneCategory::Letter => "letter",
            RuneCategory::Lowercase => "lower case",
            RuneCategory::Mark => "mark",
            RuneCategory::Number => "number",
            RuneCategory::Printable => "printable",
            RuneCategory::NotPrintable => "not printable",
            RuneCategory::Punctuation => "punct",
            RuneCategory::Space => "space",
            RuneCategory::Symbol => "symbol",
            RuneCategory::Titlecase => "title case",
            RuneCategory::Uppercase => "upper case",
        }
    }

    #[inline]
    fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

impl fmt::Display for RuneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of [`RuneCategory`] tags stored as a bitset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RuneCategories(u16);

impl RuneCategories {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, category: RuneCategory) {
        self.0 |= category.bit();
    }

    pub fn contains(self, category: RuneCategory) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Tags present in the set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = RuneCategory> {
        RuneCategory::ALL
            .into_iter()
            .filter(move |category| self.contains(*category))
    }
}

impl FromIterator<RuneCategory> for RuneCategories {
    fn from_iter<I: IntoIterator<Item = RuneCategory>>(iter: I) -> Self {
        let mut set = RuneCategories::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl fmt::Display for RuneCategories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, category) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(category.label())?;
        }
        Ok(())
    }
}

/// Classify a code point. Total: `Printable` or `NotPrintable` is always set.
pub fn classify(c: char) -> RuneCategories {
    let gc = get_general_category(c);
    let mut set = RuneCategories::empty();

    if matches!(gc, GeneralCategory::Control) {
        set.insert(RuneCategory::Control);
    }
    if matches!(gc, GeneralCategory::DecimalNumber) {
        set.insert(RuneCategory::Digit);
    }
    if is_graphic_category(gc) {
        set.insert(RuneCategory::Graphic);
    }
    if is_letter_category(gc) {
        set.insert(RuneCategory::Letter);
    }
    if matches!(gc, GeneralCategory::LowercaseLetter) {
        set.insert(RuneCategory::Lowercase);
    }
    if is_mark_category(gc) {
        set.insert(RuneCategory::Mark);
    }
    if is_number_category(gc) {
        set.insert(RuneCategory::Number);
    }
    if is_printable(c, gc) {
        set.insert(RuneCategory::Printable);
    } else {
        set.insert(RuneCategory::NotPrintable);
    }
    if is_punctuation_category(gc) {
        set.insert(RuneCategory::Punctuation);
    }
    if c.is_whitespace() {
        set.insert(RuneCategory::Space);
    }
    if is_symbol_category(gc) {
        set.insert(RuneCategory::Symbol);
    }
    if matches!(gc, GeneralCategory::TitlecaseLetter) {
        set.insert(RuneCategory::Titlecase);
    }
    if matches!(gc, GeneralCategory::UppercaseLetter) {
        set.insert(RuneCategory::Uppercase);
    }
    set
}

/// Letter in the general-category sense (L*), not `char::is_alphabetic`.
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    is_letter_category(get_general_category(c))
}

/// Unicode `White_Space`, `\n` included.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Non-spacing combining mark (Mn), the marks dropped when stripping accents.
#[inline]
pub fn is_nonspacing_mark(c: char) -> bool {
    !c.is_ascii() && matches!(get_general_category(c), GeneralCategory::NonspacingMark)
}

fn is_letter_category(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_mark_category(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark | GeneralCategory::EnclosingMark
    )
}

fn is_number_category(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber | GeneralCategory::OtherNumber
    )
}

fn is_punctuation_category(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

fn is_symbol_category(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

fn is_visible_category(gc: GeneralCategory) -> bool {
    is_letter_category(gc)
        || is_mark_category(gc)
        || is_number_category(gc)
        || is_punctuation_category(gc)
        || is_symbol_category(gc)
}

fn is_graphic_category(gc: GeneralCategory) -> bool {
    is_visible_category(gc) || matches!(gc, GeneralCategory::SpaceSeparator)
}

// Only the ASCII space counts as printable among the separators.
fn is_printable(c: char, gc: GeneralCategory) -> bool {
    c == ' ' || is_visible_category(gc)
}
